use neo_primitives::UInt160;
use serde::{Deserialize, Serialize};

use crate::error::{ContractError, ContractResult};

/// Rejects empty names and names longer than `max_length` characters.
pub fn validate_name(name: &str, max_length: usize) -> ContractResult<()> {
    if name.is_empty() {
        return Err(ContractError::validation("name must not be empty"));
    }
    let length = name.chars().count();
    if length > max_length {
        return Err(ContractError::validation(format!(
            "name is {length} characters long, limit is {max_length}"
        )));
    }
    Ok(())
}

/// Rental state of one name.
///
/// `renter` is zero until the name is first claimed through this ledger.
/// `entry` is the ledger index of the most recent time the name was appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub renter: UInt160,
    pub last_price: u64,
    pub rent_time: u64,
    pub expiration_time: u64,
    pub entry: Option<u64>,
}

impl NameRecord {
    pub fn is_rented(&self) -> bool {
        !self.renter.is_zero()
    }

    /// Whether renewal is still accepted at `now`.
    pub fn within_grace(&self, now: u64, grace_period: u64) -> bool {
        now <= self.expiration_time.saturating_add(grace_period)
    }
}

/// One position in the rental history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub name: String,
    pub prev: Option<u64>,
    pub next: Option<u64>,
}

/// A record supplied to the one-time bulk load.
///
/// `prev` and `next` name the neighbouring history entries; when absent they
/// are derived from the position of the record in the load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialRecord {
    pub renter: UInt160,
    pub last_price: u64,
    pub rent_time: u64,
    pub expiration_time: u64,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_counts_characters() {
        assert!(validate_name("alice", 5).is_ok());
        assert!(validate_name("alices", 5).is_err());
        // Five characters, ten bytes.
        assert!(validate_name("ééééé", 5).is_ok());
        assert!(validate_name(&"a".repeat(128), 128).is_ok());
        assert!(validate_name(&"a".repeat(129), 128).is_err());
        assert!(validate_name("", 128).is_err());
    }

    #[test]
    fn test_default_record_is_unrented() {
        let record = NameRecord::default();
        assert!(!record.is_rented());
        assert_eq!(record.entry, None);
    }

    #[test]
    fn test_grace_window_is_inclusive() {
        let record = NameRecord {
            expiration_time: 1_000,
            ..NameRecord::default()
        };
        assert!(record.within_grace(1_100, 100));
        assert!(!record.within_grace(1_101, 100));
        assert!(record.within_grace(u64::MAX, u64::MAX));
    }
}
