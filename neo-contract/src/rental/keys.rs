//! Storage layout of the rental contract.

use neo_primitives::UInt256;
use neo_store::ColumnId;

/// Name records keyed by label hash.
pub const RECORDS: ColumnId = ColumnId::new("rental.records");
/// Ledger entries keyed by big-endian index.
pub const LEDGER: ColumnId = ColumnId::new("rental.ledger");
/// Contract-wide scalars.
pub const STATE: ColumnId = ColumnId::new("rental.state");

pub const ALL_COLUMNS: [ColumnId; 3] = [RECORDS, LEDGER, STATE];

pub const SETTINGS: &[u8] = b"settings";
pub const OWNER: &[u8] = b"owner";
pub const PAUSED: &[u8] = b"paused";
pub const BALANCE: &[u8] = b"balance";
pub const LEDGER_LEN: &[u8] = b"ledger_len";
pub const INITIALIZED: &[u8] = b"initialized";
pub const INIT_FINISHED: &[u8] = b"init_finished";

pub fn record_key(name: &str) -> Vec<u8> {
    UInt256::label_hash(name).to_bytes()
}

pub fn entry_key(index: u64) -> Vec<u8> {
    index.to_be_bytes().to_vec()
}
