//! The allocation ledger: which loans are live, and at what order.

use alloc::collections::BTreeMap;

/// Maps the offset of every live loan to the order it was handed out at.
///
/// Offsets from the region base are used as keys rather than raw addresses,
/// so lookups never depend on pointer identity.
#[derive(Debug, Default)]
pub(crate) struct AllocTable {
    entries: BTreeMap<usize, u32>,
}

impl AllocTable {
    pub fn new() -> AllocTable {
        AllocTable {
            entries: BTreeMap::new(),
        }
    }

    /// Records a loan at `offset`. The offset must not already be live.
    pub fn insert(&mut self, offset: usize, order: u32) {
        let prev = self.entries.insert(offset, order);
        debug_assert!(prev.is_none(), "duplicate live offset in ledger");
    }

    /// Removes the loan at `offset` and returns its order.
    pub fn take(&mut self, offset: usize) -> Option<u32> {
        self.entries.remove(&offset)
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.entries.contains_key(&offset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over `(offset, order)` pairs in ascending offset order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.entries.iter().map(|(&offset, &order)| (offset, order))
    }
}
