//! Enum-backed string values.
//!
//! Fields declared `enum_str` store a plain `String`. The companion
//! enum documents the closed value set and converts to its wire string,
//! so a single fluent mutator accepts either the enum or a raw string.
//! Raw strings outside the set are stored verbatim: the service may
//! know values this library does not yet name, and round-tripping them
//! must not lose information.

/// Implemented by the enums generated through
/// [`string_enum!`](crate::string_enum!).
pub trait WireEnum: Copy + Sized {
    /// Every wire value the enum names, in declared order.
    const VALUES: &'static [&'static str];

    /// The wire string for this variant.
    fn as_str(&self) -> &'static str;

    /// Resolves a wire string back to a variant, if the set names it.
    fn from_value(value: &str) -> Option<Self>;
}

/// Declares an enum-backed string value set.
///
/// ```
/// courier_model::string_enum! {
///     pub enum Frequency {
///         Once => "ONCE",
///         Daily => "DAILY",
///     }
/// }
///
/// use courier_model::WireEnum;
/// assert_eq!(Frequency::Daily.as_str(), "DAILY");
/// assert_eq!(Frequency::from_value("ONCE"), Some(Frequency::Once));
/// assert_eq!(String::from(Frequency::Daily), "DAILY");
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::WireEnum for $name {
            const VALUES: &'static [&'static str] = &[ $( $wire ),+ ];

            fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }

            fn from_value(value: &str) -> ::std::option::Option<Self> {
                match value {
                    $( $wire => ::std::option::Option::Some($name::$variant), )+
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::WireEnum::as_str(self))
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                $crate::WireEnum::as_str(&value).to_owned()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::WireEnum;

    crate::string_enum! {
        pub enum Sample {
            Alpha => "ALPHA",
            BravoCharlie => "BRAVO_CHARLIE",
        }
    }

    #[test]
    fn values_follow_declaration_order() {
        assert_eq!(Sample::VALUES, &["ALPHA", "BRAVO_CHARLIE"]);
    }

    #[test]
    fn round_trips_between_variant_and_wire_string() {
        assert_eq!(Sample::Alpha.as_str(), "ALPHA");
        assert_eq!(Sample::from_value("BRAVO_CHARLIE"), Some(Sample::BravoCharlie));
        assert_eq!(Sample::from_value("DELTA"), None);
    }

    #[test]
    fn converts_into_the_stored_string_form() {
        assert_eq!(String::from(Sample::Alpha), "ALPHA");
        assert_eq!(Sample::BravoCharlie.to_string(), "BRAVO_CHARLIE");
    }
}
