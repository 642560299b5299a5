use std::fmt;

use crate::error::StoreError;

/// Named column of a [`Store`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ColumnId(&'static str);

impl ColumnId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One value staged for `key` in `column`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StagedWrite {
    pub column: ColumnId,
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

/// Writes applied together by [`Store::write_batch`], in insertion order.
///
/// Ledger state is append-or-overwrite only: records, ledger entries and
/// scalars are never removed, so a batch carries no deletions.
#[derive(Debug, Default, Clone)]
pub struct WriteBatch {
    writes: Vec<StagedWrite>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, column: ColumnId, key: Vec<u8>, value: Vec<u8>) {
        self.writes.push(StagedWrite { column, key, value });
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }
}

impl IntoIterator for WriteBatch {
    type Item = StagedWrite;
    type IntoIter = std::vec::IntoIter<StagedWrite>;

    fn into_iter(self) -> Self::IntoIter {
        self.writes.into_iter()
    }
}

/// Backing storage for ledger state.
pub trait Store: Send + Sync {
    fn get(&self, column: ColumnId, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Applies every write of `batch` or none of them.
    fn write_batch(&self, batch: WriteBatch) -> Result<(), StoreError>;
}
