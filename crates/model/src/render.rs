//! Debug rendering shared by every shape.
//!
//! A shape renders as `{WireName: value,WireName: value}`: only set
//! fields appear, in declared order, separated by bare commas with no
//! trailing comma. Inside a field, maps render as `{key: value, key:
//! value}`, lists as `[a, b]`, and nested shapes through their own
//! braced rendering. This output is for logs and assertions, never for
//! the wire.

use std::collections::BTreeMap;
use std::fmt;

/// Writes the braced field list for a shape's `Display` impl.
pub struct FieldWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl<'a, 'b> FieldWriter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(FieldWriter { f, first: true })
    }

    /// Renders one field if it is set.
    pub fn field<T: RenderValue>(&mut self, wire: &str, value: &Option<T>) -> fmt::Result {
        if let Some(v) = value {
            if !self.first {
                self.f.write_str(",")?;
            }
            self.first = false;
            write!(self.f, "{}: ", wire)?;
            v.render(self.f)?;
        }
        Ok(())
    }

    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

/// How a stored value prints inside a shape rendering.
pub trait RenderValue {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl RenderValue for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl RenderValue for bool {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl RenderValue for i64 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T: RenderValue> RenderValue for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<V: RenderValue> RenderValue for BTreeMap<String, V> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: ", key)?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        a: Option<String>,
        b: Option<bool>,
        c: Option<i64>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut w = FieldWriter::new(f)?;
            w.field("A", &self.a)?;
            w.field("B", &self.b)?;
            w.field("C", &self.c)?;
            w.finish()
        }
    }

    #[test]
    fn renders_only_set_fields_without_trailing_comma() {
        let s = Sample {
            a: Some("x".to_string()),
            b: None,
            c: Some(7),
        };
        assert_eq!(s.to_string(), "{A: x,C: 7}");
    }

    #[test]
    fn renders_empty_braces_when_nothing_is_set() {
        let s = Sample {
            a: None,
            b: None,
            c: None,
        };
        assert_eq!(s.to_string(), "{}");
    }

    #[test]
    fn unset_trailing_field_leaves_no_comma() {
        let s = Sample {
            a: Some("x".to_string()),
            b: Some(true),
            c: None,
        };
        assert_eq!(s.to_string(), "{A: x,B: true}");
    }

    #[test]
    fn map_and_list_values_render_inline() {
        let mut map = BTreeMap::new();
        map.insert("k1".to_string(), vec!["a".to_string(), "b".to_string()]);
        map.insert("k2".to_string(), vec!["c".to_string()]);

        struct M(Option<BTreeMap<String, Vec<String>>>);
        impl fmt::Display for M {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut w = FieldWriter::new(f)?;
                w.field("Subs", &self.0)?;
                w.finish()
            }
        }

        assert_eq!(M(Some(map)).to_string(), "{Subs: {k1: [a, b], k2: [c]}}");
    }
}
