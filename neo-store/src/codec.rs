//! Value encoding shared by every typed column.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::traits::ColumnId;

/// Encodes `value` for storage in `column`.
pub fn encode<T: Serialize>(column: ColumnId, value: &T) -> StoreResult<Vec<u8>> {
    bincode::serialize(value).map_err(|e| StoreError::codec(column.name(), e.to_string()))
}

/// Decodes a value previously written with [`encode`].
pub fn decode<T: DeserializeOwned>(column: ColumnId, bytes: &[u8]) -> StoreResult<T> {
    bincode::deserialize(bytes).map_err(|e| StoreError::codec(column.name(), e.to_string()))
}
