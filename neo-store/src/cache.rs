use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::codec::{decode, encode};
use crate::error::StoreResult;
use crate::traits::{ColumnId, Store, WriteBatch};

/// Write overlay over a [`Store`].
///
/// Reads see staged changes first and fall through to the backing store.
/// Writes stay in the overlay until [`StoreCache::commit`].
pub struct StoreCache<'a> {
    inner: &'a dyn Store,
    changes: BTreeMap<(ColumnId, Vec<u8>), Vec<u8>>,
}

impl<'a> StoreCache<'a> {
    pub fn new(inner: &'a dyn Store) -> Self {
        Self {
            inner,
            changes: BTreeMap::new(),
        }
    }

    pub fn get(&self, column: ColumnId, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        match self.changes.get(&(column, key.to_vec())) {
            Some(staged) => Ok(Some(staged.clone())),
            None => self.inner.get(column, key),
        }
    }

    pub fn put(&mut self, column: ColumnId, key: Vec<u8>, value: Vec<u8>) {
        self.changes.insert((column, key), value);
    }

    pub fn get_typed<T: DeserializeOwned>(
        &self,
        column: ColumnId,
        key: &[u8],
    ) -> StoreResult<Option<T>> {
        match self.get(column, key)? {
            Some(bytes) => decode(column, &bytes).map(Some),
            None => Ok(None),
        }
    }

    pub fn put_typed<T: Serialize>(
        &mut self,
        column: ColumnId,
        key: Vec<u8>,
        value: &T,
    ) -> StoreResult<()> {
        let bytes = encode(column, value)?;
        self.put(column, key, bytes);
        Ok(())
    }

    /// Whether any write has been staged.
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Converts the staged changes into a batch without applying them.
    pub fn into_batch(self) -> WriteBatch {
        let mut batch = WriteBatch::new();
        for ((column, key), value) in self.changes {
            batch.put(column, key, value);
        }
        batch
    }

    /// Flushes every staged change to the backing store in one batch.
    pub fn commit(self) -> StoreResult<()> {
        let inner = self.inner;
        let batch = self.into_batch();
        if batch.is_empty() {
            return Ok(());
        }
        debug!(operations = batch.len(), "committing store cache");
        inner.write_batch(batch)
    }
}
