//! Storage abstractions backing the rental ledger.
//!
//! The crate exposes an in-memory [`MemoryStore`] used by tests and
//! deterministic simulations, and a [`StoreCache`] overlay that stages writes
//! for a single contract operation. Nothing reaches the backing [`Store`]
//! until [`StoreCache::commit`] flushes the staged changes as one
//! [`WriteBatch`]; dropping the cache discards them.

mod cache;
mod codec;
mod error;
mod memory;
mod traits;

pub use cache::StoreCache;
pub use codec::{decode, encode};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{ColumnId, StagedWrite, Store, WriteBatch};
