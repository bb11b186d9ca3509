//! The `shape!` macro: declares one model type and derives its entire
//! accessor surface from the field list.
//!
//! Grammar, one field per line: `"WireName" accessor: kind [NestedType]`
//! where kind is `string`, `boolean`, `integer`, `timestamp`,
//! `enum_str E`, `str_map`, `str_list_map`, `record T`, or
//! `record_list T`. Doc comments on a field are attached to its getter.
//!
//! The expansion produces:
//!
//! - the struct itself: private `Option` fields, serde derives with the
//!   wire name as the JSON key and unset fields omitted from output;
//! - per-field accessors: getter, `set_*` (accepts `None` to unset),
//!   fluent `with_*`, plus `*_mut` live handles for container and
//!   nested-record fields and the guarded `add_*_entry` /
//!   `clear_*_entries` pair for map fields;
//! - `Display` (braced debug rendering), `StructuralHash` and `Hash`,
//!   and the static [`Shape`](crate::Shape) descriptor via
//!   [`Shaped`](crate::Shaped).
//!
//! Equality comes from derived `PartialEq`/`Eq` on the `Option` fields,
//! which is exactly the null-aware field-by-field comparison the record
//! contract calls for.

/// Declares a Courier model type from its field list. The field
/// grammar is described above; the [crate root](crate) carries a
/// worked example.
#[macro_export]
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $wire:literal $field:ident : $kind:ident $($nested:ty)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                #[serde(rename = $wire, skip_serializing_if = "Option::is_none")]
                $field: $crate::shape!(@storage $kind $($nested)?),
            )+
        }

        impl $name {
            /// Creates the shape with every field unset.
            pub fn new() -> Self {
                <$name as ::std::default::Default>::default()
            }

            $(
                $crate::shape!(@accessors $(#[$fmeta])* $wire $field : $kind $($nested)?);
            )+
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut w = $crate::render::FieldWriter::new(f)?;
                $( w.field($wire, &self.$field)?; )+
                w.finish()
            }
        }

        impl $crate::render::RenderValue for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl $crate::hash::StructuralHash for $name {
            fn structural_hash(&self) -> u64 {
                let mut h = $crate::hash::FieldHasher::new();
                $( h.field(self.$field.as_ref()); )+
                h.finish()
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::hash::StructuralHash::structural_hash(self));
            }
        }

        impl $crate::shape::Shaped for $name {
            fn shape() -> &'static $crate::shape::Shape {
                static SHAPE: $crate::shape::Shape = $crate::shape::Shape {
                    name: stringify!($name),
                    fields: &[
                        $( $crate::shape!(@spec $wire $field : $kind $($nested)?) ),+
                    ],
                };
                &SHAPE
            }
        }
    };

    // ── Storage types ────────────────────────────────────────────────

    (@storage string) => { ::std::option::Option<::std::string::String> };
    (@storage boolean) => { ::std::option::Option<bool> };
    (@storage integer) => { ::std::option::Option<i64> };
    (@storage timestamp) => { ::std::option::Option<::std::string::String> };
    (@storage enum_str $t:ty) => { ::std::option::Option<::std::string::String> };
    (@storage str_map) => {
        ::std::option::Option<
            ::std::collections::BTreeMap<::std::string::String, ::std::string::String>,
        >
    };
    (@storage str_list_map) => {
        ::std::option::Option<
            ::std::collections::BTreeMap<
                ::std::string::String,
                ::std::vec::Vec<::std::string::String>,
            >,
        >
    };
    (@storage record $t:ty) => { ::std::option::Option<$t> };
    (@storage record_list $t:ty) => { ::std::option::Option<::std::vec::Vec<$t>> };

    // ── Accessors ────────────────────────────────────────────────────

    (@accessors $(#[$fmeta:meta])* $wire:literal $field:ident : string) => {
        $crate::paste::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<&str> {
                self.$field.as_deref()
            }

            /// Overwrites the stored value; `None` resets the field to
            /// unset.
            pub fn [<set_ $field>](
                &mut self,
                value: ::std::option::Option<::std::string::String>,
            ) {
                self.$field = value;
            }

            /// Sets the field and returns the shape for chaining.
            pub fn [<with_ $field>](
                mut self,
                value: impl ::std::convert::Into<::std::string::String>,
            ) -> Self {
                self.$field = ::std::option::Option::Some(value.into());
                self
            }
        }
    };
    (@accessors $(#[$fmeta:meta])* $wire:literal $field:ident : timestamp) => {
        $crate::shape!(@accessors $(#[$fmeta])* $wire $field : string);
    };
    (@accessors $(#[$fmeta:meta])* $wire:literal $field:ident : enum_str $t:ty) => {
        $crate::shape!(@accessors $(#[$fmeta])* $wire $field : string);
    };
    (@accessors $(#[$fmeta:meta])* $wire:literal $field:ident : boolean) => {
        $crate::paste::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<bool> {
                self.$field
            }

            /// Overwrites the stored value; `None` resets the field to
            /// unset.
            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<bool>) {
                self.$field = value;
            }

            /// Sets the field and returns the shape for chaining.
            pub fn [<with_ $field>](mut self, value: bool) -> Self {
                self.$field = ::std::option::Option::Some(value);
                self
            }
        }
    };
    (@accessors $(#[$fmeta:meta])* $wire:literal $field:ident : integer) => {
        $crate::paste::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<i64> {
                self.$field
            }

            /// Overwrites the stored value; `None` resets the field to
            /// unset.
            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<i64>) {
                self.$field = value;
            }

            /// Sets the field and returns the shape for chaining.
            pub fn [<with_ $field>](mut self, value: i64) -> Self {
                self.$field = ::std::option::Option::Some(value);
                self
            }
        }
    };
    (@accessors $(#[$fmeta:meta])* $wire:literal $field:ident : str_map) => {
        $crate::paste::paste! {
            $(#[$fmeta])*
            pub fn $field(
                &self,
            ) -> ::std::option::Option<
                &::std::collections::BTreeMap<::std::string::String, ::std::string::String>,
            > {
                self.$field.as_ref()
            }

            /// Live handle to the stored map; mutations through it apply
            /// to the shape.
            pub fn [<$field _mut>](
                &mut self,
            ) -> ::std::option::Option<
                &mut ::std::collections::BTreeMap<::std::string::String, ::std::string::String>,
            > {
                self.$field.as_mut()
            }

            /// Overwrites the whole map; `None` resets the field to
            /// unset.
            pub fn [<set_ $field>](
                &mut self,
                value: ::std::option::Option<
                    ::std::collections::BTreeMap<::std::string::String, ::std::string::String>,
                >,
            ) {
                self.$field = value;
            }

            /// Sets the whole map and returns the shape for chaining.
            pub fn [<with_ $field>](
                mut self,
                value: ::std::collections::BTreeMap<::std::string::String, ::std::string::String>,
            ) -> Self {
                self.$field = ::std::option::Option::Some(value);
                self
            }

            /// Inserts one entry, initializing the map when unset.
            ///
            /// A key that is already present is rejected with a
            /// duplicate-key error and the stored entry is kept.
            pub fn [<add_ $field _entry>](
                &mut self,
                key: impl ::std::convert::Into<::std::string::String>,
                value: impl ::std::convert::Into<::std::string::String>,
            ) -> ::std::result::Result<&mut Self, $crate::ModelError> {
                $crate::map::insert_unique(&mut self.$field, $wire, key.into(), value.into())?;
                ::std::result::Result::Ok(self)
            }

            /// Discards every entry by resetting the field to unset.
            pub fn [<clear_ $field _entries>](&mut self) -> &mut Self {
                self.$field = ::std::option::Option::None;
                self
            }
        }
    };
    (@accessors $(#[$fmeta:meta])* $wire:literal $field:ident : str_list_map) => {
        $crate::paste::paste! {
            $(#[$fmeta])*
            pub fn $field(
                &self,
            ) -> ::std::option::Option<
                &::std::collections::BTreeMap<
                    ::std::string::String,
                    ::std::vec::Vec<::std::string::String>,
                >,
            > {
                self.$field.as_ref()
            }

            /// Live handle to the stored map; mutations through it apply
            /// to the shape.
            pub fn [<$field _mut>](
                &mut self,
            ) -> ::std::option::Option<
                &mut ::std::collections::BTreeMap<
                    ::std::string::String,
                    ::std::vec::Vec<::std::string::String>,
                >,
            > {
                self.$field.as_mut()
            }

            /// Overwrites the whole map; `None` resets the field to
            /// unset.
            pub fn [<set_ $field>](
                &mut self,
                value: ::std::option::Option<
                    ::std::collections::BTreeMap<
                        ::std::string::String,
                        ::std::vec::Vec<::std::string::String>,
                    >,
                >,
            ) {
                self.$field = value;
            }

            /// Sets the whole map and returns the shape for chaining.
            pub fn [<with_ $field>](
                mut self,
                value: ::std::collections::BTreeMap<
                    ::std::string::String,
                    ::std::vec::Vec<::std::string::String>,
                >,
            ) -> Self {
                self.$field = ::std::option::Option::Some(value);
                self
            }

            /// Inserts one entry, initializing the map when unset.
            ///
            /// A key that is already present is rejected with a
            /// duplicate-key error and the stored entry is kept.
            pub fn [<add_ $field _entry>](
                &mut self,
                key: impl ::std::convert::Into<::std::string::String>,
                value: ::std::vec::Vec<::std::string::String>,
            ) -> ::std::result::Result<&mut Self, $crate::ModelError> {
                $crate::map::insert_unique(&mut self.$field, $wire, key.into(), value)?;
                ::std::result::Result::Ok(self)
            }

            /// Discards every entry by resetting the field to unset.
            pub fn [<clear_ $field _entries>](&mut self) -> &mut Self {
                self.$field = ::std::option::Option::None;
                self
            }
        }
    };
    (@accessors $(#[$fmeta:meta])* $wire:literal $field:ident : record $t:ty) => {
        $crate::paste::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<&$t> {
                self.$field.as_ref()
            }

            /// Live handle to the nested shape; mutations through it
            /// apply to this shape.
            pub fn [<$field _mut>](&mut self) -> ::std::option::Option<&mut $t> {
                self.$field.as_mut()
            }

            /// Overwrites the stored value; `None` resets the field to
            /// unset.
            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<$t>) {
                self.$field = value;
            }

            /// Sets the field and returns the shape for chaining.
            pub fn [<with_ $field>](mut self, value: $t) -> Self {
                self.$field = ::std::option::Option::Some(value);
                self
            }
        }
    };
    (@accessors $(#[$fmeta:meta])* $wire:literal $field:ident : record_list $t:ty) => {
        $crate::paste::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<&[$t]> {
                self.$field.as_deref()
            }

            /// Live handle to the stored list; mutations through it
            /// apply to the shape.
            pub fn [<$field _mut>](
                &mut self,
            ) -> ::std::option::Option<&mut ::std::vec::Vec<$t>> {
                self.$field.as_mut()
            }

            /// Overwrites the whole list; `None` resets the field to
            /// unset.
            pub fn [<set_ $field>](
                &mut self,
                value: ::std::option::Option<::std::vec::Vec<$t>>,
            ) {
                self.$field = value;
            }

            /// Sets the whole list and returns the shape for chaining.
            pub fn [<with_ $field>](
                mut self,
                value: impl ::std::iter::IntoIterator<Item = $t>,
            ) -> Self {
                self.$field = ::std::option::Option::Some(value.into_iter().collect());
                self
            }
        }
    };

    // ── Field descriptors ────────────────────────────────────────────

    (@spec $wire:literal $field:ident : string) => {
        $crate::shape::FieldSpec {
            accessor: stringify!($field),
            wire: $wire,
            kind: $crate::shape::FieldKind::Str,
        }
    };
    (@spec $wire:literal $field:ident : boolean) => {
        $crate::shape::FieldSpec {
            accessor: stringify!($field),
            wire: $wire,
            kind: $crate::shape::FieldKind::Bool,
        }
    };
    (@spec $wire:literal $field:ident : integer) => {
        $crate::shape::FieldSpec {
            accessor: stringify!($field),
            wire: $wire,
            kind: $crate::shape::FieldKind::Int,
        }
    };
    (@spec $wire:literal $field:ident : timestamp) => {
        $crate::shape::FieldSpec {
            accessor: stringify!($field),
            wire: $wire,
            kind: $crate::shape::FieldKind::Timestamp,
        }
    };
    (@spec $wire:literal $field:ident : enum_str $t:ty) => {
        $crate::shape::FieldSpec {
            accessor: stringify!($field),
            wire: $wire,
            kind: $crate::shape::FieldKind::EnumStr {
                values: <$t as $crate::WireEnum>::VALUES,
            },
        }
    };
    (@spec $wire:literal $field:ident : str_map) => {
        $crate::shape::FieldSpec {
            accessor: stringify!($field),
            wire: $wire,
            kind: $crate::shape::FieldKind::StrMap,
        }
    };
    (@spec $wire:literal $field:ident : str_list_map) => {
        $crate::shape::FieldSpec {
            accessor: stringify!($field),
            wire: $wire,
            kind: $crate::shape::FieldKind::StrListMap,
        }
    };
    (@spec $wire:literal $field:ident : record $t:ty) => {
        $crate::shape::FieldSpec {
            accessor: stringify!($field),
            wire: $wire,
            kind: $crate::shape::FieldKind::Record {
                shape: <$t as $crate::shape::Shaped>::shape,
            },
        }
    };
    (@spec $wire:literal $field:ident : record_list $t:ty) => {
        $crate::shape::FieldSpec {
            accessor: stringify!($field),
            wire: $wire,
            kind: $crate::shape::FieldKind::RecordList {
                shape: <$t as $crate::shape::Shaped>::shape,
            },
        }
    };
}
