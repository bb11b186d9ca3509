//! Deterministic structural hashing for shapes.
//!
//! Per-field hashes (0 for unset fields) are folded in declared order
//! into a 31-multiplier accumulator seeded at 1. Leaf values use the
//! same multiplier, so the whole computation is a pure function of the
//! stored data: two independently constructed equal shapes agree on
//! their hash across processes and platforms.

use std::collections::BTreeMap;

const MULTIPLIER: u64 = 31;

/// Folds per-field hashes for a shape's [`StructuralHash`] impl.
pub struct FieldHasher {
    acc: u64,
}

impl FieldHasher {
    pub fn new() -> Self {
        FieldHasher { acc: 1 }
    }

    /// Folds one field in; unset fields contribute 0.
    pub fn field<T: StructuralHash>(&mut self, value: Option<&T>) {
        let h = value.map_or(0, StructuralHash::structural_hash);
        self.acc = self.acc.wrapping_mul(MULTIPLIER).wrapping_add(h);
    }

    pub fn finish(self) -> u64 {
        self.acc
    }
}

impl Default for FieldHasher {
    fn default() -> Self {
        FieldHasher::new()
    }
}

/// Value-level hash entering the per-field fold.
pub trait StructuralHash {
    fn structural_hash(&self) -> u64;
}

impl StructuralHash for String {
    fn structural_hash(&self) -> u64 {
        self.bytes().fold(0u64, |acc, b| {
            acc.wrapping_mul(MULTIPLIER).wrapping_add(u64::from(b))
        })
    }
}

impl StructuralHash for bool {
    fn structural_hash(&self) -> u64 {
        u64::from(*self)
    }
}

impl StructuralHash for i64 {
    fn structural_hash(&self) -> u64 {
        *self as u64
    }
}

impl<T: StructuralHash> StructuralHash for Vec<T> {
    fn structural_hash(&self) -> u64 {
        self.iter().fold(1u64, |acc, item| {
            acc.wrapping_mul(MULTIPLIER)
                .wrapping_add(item.structural_hash())
        })
    }
}

impl<V: StructuralHash> StructuralHash for BTreeMap<String, V> {
    fn structural_hash(&self) -> u64 {
        self.iter().fold(1u64, |acc, (key, value)| {
            acc.wrapping_mul(MULTIPLIER)
                .wrapping_add(key.structural_hash())
                .wrapping_mul(MULTIPLIER)
                .wrapping_add(value.structural_hash())
        })
    }
}
