/// Errors raised by shape accessors.
///
/// Guarded map-entry insertion is the only fallible accessor; every
/// other operation on a shape is total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A key passed to an `add_*_entry` accessor is already present in
    /// the map. The entry stored first is left untouched.
    #[error("duplicate key ({key}) for field {field}")]
    DuplicateMapKey {
        /// Wire name of the map field.
        field: &'static str,
        /// The rejected key.
        key: String,
    },
}
