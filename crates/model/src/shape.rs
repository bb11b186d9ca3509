//! Static shape metadata exposed by every generated model type.
//!
//! Each `shape!` declaration produces one [`Shape`] describing the
//! type's fields in declared order: accessor name, wire name, and kind.
//! Consumers are the wire-contract tests and schema tooling; the
//! accessor surface itself is statically typed and does not go through
//! this metadata.

/// Handle to a nested shape's descriptor.
///
/// Stored as a function pointer so descriptors can reference each other
/// from `static` context without initialization order concerns.
pub type ShapeFn = fn() -> &'static Shape;

/// The kind of a single field, restricted to the closed set the wire
/// format supports.
#[derive(Clone, Copy)]
pub enum FieldKind {
    Str,
    Bool,
    Int,
    /// RFC 3339 timestamp carried as a string.
    Timestamp,
    /// Plain string storage with a closed set of documented values.
    EnumStr { values: &'static [&'static str] },
    /// Map from string to string.
    StrMap,
    /// Map from string to list of string.
    StrListMap,
    Record { shape: ShapeFn },
    RecordList { shape: ShapeFn },
}

impl FieldKind {
    /// Stable kind name for diagnostics and schema tooling.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Str => "string",
            FieldKind::Bool => "boolean",
            FieldKind::Int => "integer",
            FieldKind::Timestamp => "timestamp",
            FieldKind::EnumStr { .. } => "enum-string",
            FieldKind::StrMap => "string-map",
            FieldKind::StrListMap => "string-list-map",
            FieldKind::Record { .. } => "record",
            FieldKind::RecordList { .. } => "record-list",
        }
    }
}

/// One field of a shape.
pub struct FieldSpec {
    /// In-memory accessor name (snake_case).
    pub accessor: &'static str,
    /// JSON object key (wire name).
    pub wire: &'static str,
    pub kind: FieldKind,
}

/// Descriptor for one model type. Field order is declaration order,
/// which is also rendering and hashing order.
pub struct Shape {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Shape {
    /// Looks up a field by accessor name.
    pub fn field(&self, accessor: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.accessor == accessor)
    }

    /// Looks up a field by wire name.
    pub fn field_by_wire(&self, wire: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.wire == wire)
    }
}

/// Implemented by every type declared through [`shape!`](crate::shape!).
pub trait Shaped {
    fn shape() -> &'static Shape;
}
