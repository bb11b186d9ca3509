//! Guarded map-entry insertion shared by the generated `add_*_entry`
//! accessors.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::error::ModelError;

/// Inserts `key` into a lazily initialized map field.
///
/// The map is created on first insert; a key that is already present is
/// rejected with [`ModelError::DuplicateMapKey`] and the stored entry is
/// left unchanged. Replacing a whole map goes through the field's plain
/// setter, which overwrites silently.
pub fn insert_unique<V>(
    slot: &mut Option<BTreeMap<String, V>>,
    field: &'static str,
    key: String,
    value: V,
) -> Result<(), ModelError> {
    let map = slot.get_or_insert_with(BTreeMap::new);
    match map.entry(key) {
        Entry::Occupied(occupied) => Err(ModelError::DuplicateMapKey {
            field,
            key: occupied.key().clone(),
        }),
        Entry::Vacant(vacant) => {
            vacant.insert(value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_the_map_on_first_insert() {
        let mut slot: Option<BTreeMap<String, String>> = None;
        insert_unique(&mut slot, "Data", "k".to_string(), "v".to_string()).unwrap();
        assert_eq!(slot.unwrap().get("k").map(String::as_str), Some("v"));
    }

    #[test]
    fn rejects_a_duplicate_key_and_keeps_the_first_value() {
        let mut slot: Option<BTreeMap<String, String>> = None;
        insert_unique(&mut slot, "Data", "k".to_string(), "first".to_string()).unwrap();
        let err = insert_unique(&mut slot, "Data", "k".to_string(), "second".to_string())
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateMapKey {
                field: "Data",
                key: "k".to_string(),
            }
        );
        assert_eq!(err.to_string(), "duplicate key (k) for field Data");
        assert_eq!(
            slot.unwrap().get("k").map(String::as_str),
            Some("first"),
        );
    }
}
