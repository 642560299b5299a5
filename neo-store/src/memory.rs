use dashmap::DashMap;
use parking_lot::Mutex;

use crate::error::StoreError;
use crate::traits::{ColumnId, Store, WriteBatch};

/// Column store kept entirely in memory.
///
/// Batches are applied under a single writer lock so a reader never
/// observes half of a committed batch.
#[derive(Default)]
pub struct MemoryStore {
    columns: DashMap<ColumnId, DashMap<Vec<u8>, Vec<u8>>>,
    writer: Mutex<()>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(columns: &[ColumnId]) -> Self {
        let store = Self::new();
        for column in columns {
            store.columns.entry(*column).or_default();
        }
        store
    }

    /// Number of keys held in `column`.
    pub fn len(&self, column: ColumnId) -> usize {
        self.columns.get(&column).map_or(0, |col| col.len())
    }
}

impl Store for MemoryStore {
    fn get(&self, column: ColumnId, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .columns
            .get(&column)
            .and_then(|col| col.value().get(key).map(|value| value.value().clone())))
    }

    fn write_batch(&self, batch: WriteBatch) -> Result<(), StoreError> {
        let _writer = self.writer.lock();
        for write in batch {
            self.columns
                .entry(write.column)
                .or_default()
                .insert(write.key, write.value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COL: ColumnId = ColumnId::new("test");

    #[test]
    fn test_missing_key_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get(COL, b"k").unwrap(), None);
        assert_eq!(store.len(COL), 0);
    }

    #[test]
    fn test_write_batch_applies_in_order() {
        let store = MemoryStore::with_columns(&[COL]);
        let mut batch = WriteBatch::new();
        batch.put(COL, b"a".to_vec(), b"1".to_vec());
        batch.put(COL, b"a".to_vec(), b"2".to_vec());
        batch.put(COL, b"b".to_vec(), b"3".to_vec());
        store.write_batch(batch).unwrap();

        assert_eq!(store.get(COL, b"a").unwrap(), Some(b"2".to_vec()));
        assert_eq!(store.get(COL, b"b").unwrap(), Some(b"3".to_vec()));
        assert_eq!(store.len(COL), 2);
    }
}
