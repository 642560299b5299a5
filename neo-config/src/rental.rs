//! Rental ledger settings
//!
//! These parameters are supplied when the ledger is deployed and can later be
//! changed by the ledger owner through the contract's setters. All amounts are
//! integers in the smallest unit of the payment asset; all times are UNIX
//! seconds.

use neo_primitives::{namehash, UInt160, UInt256};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Seconds in one day.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Longest accepted name, counted in Unicode scalar values.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 128;

/// Rental ledger parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalSettings {
    /// Flat fee charged on top of the registrar's quote
    #[serde(default = "default_base_rental_price")]
    pub base_rental_price: u64,

    /// Length of one rental term in seconds
    #[serde(default = "default_duration")]
    pub duration: u64,

    /// Seconds after expiration during which renewal is still accepted
    #[serde(default = "default_grace_period")]
    pub grace_period: u64,

    /// Longest accepted name
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,

    /// Account receiving withdrawn custody funds
    #[serde(default)]
    pub revenue_account: UInt160,

    /// Expiry handed to the name wrapper on registration
    #[serde(default)]
    pub wrapper_expiry: u64,

    /// Fuse bits burned on registration
    #[serde(default)]
    pub fuses: u32,

    /// Resolver configured for newly registered names
    #[serde(default)]
    pub resolver: UInt160,

    /// Whether registration also sets the reverse record
    #[serde(default)]
    pub reverse_record: bool,

    /// Parent domain under which names are registered
    #[serde(default = "default_tld")]
    pub tld: String,

    /// Hash of the registrar controller contract
    #[serde(default)]
    pub registrar_controller: UInt160,

    /// Hash of the base registrar (registry of record for expirations)
    #[serde(default)]
    pub base_registrar: UInt160,

    /// Hash of the name wrapper (ownership data service)
    #[serde(default)]
    pub tld_name_wrapper: UInt160,
}

// Default value functions
fn default_base_rental_price() -> u64 {
    1_0000_0000 // 1.0 in 8-decimal units
}

fn default_duration() -> u64 {
    365 * SECONDS_PER_DAY
}

fn default_grace_period() -> u64 {
    90 * SECONDS_PER_DAY
}

fn default_max_name_length() -> usize {
    DEFAULT_MAX_NAME_LENGTH
}

fn default_tld() -> String {
    "eth".to_string()
}

impl Default for RentalSettings {
    fn default() -> Self {
        Self {
            base_rental_price: default_base_rental_price(),
            duration: default_duration(),
            grace_period: default_grace_period(),
            max_name_length: default_max_name_length(),
            revenue_account: UInt160::zero(),
            wrapper_expiry: 0,
            fuses: 0,
            resolver: UInt160::zero(),
            reverse_record: false,
            tld: default_tld(),
            registrar_controller: UInt160::zero(),
            base_registrar: UInt160::zero(),
            tld_name_wrapper: UInt160::zero(),
        }
    }
}

impl RentalSettings {
    /// Checks the invariants the ledger arithmetic relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.duration == 0 {
            return Err(ConfigError::invalid("duration must be greater than zero"));
        }
        if self.max_name_length == 0 {
            return Err(ConfigError::invalid(
                "max_name_length must be greater than zero",
            ));
        }
        if self.tld.is_empty() || self.tld.starts_with('.') || self.tld.ends_with('.') {
            return Err(ConfigError::invalid(format!(
                "tld '{}' is not a valid domain",
                self.tld
            )));
        }
        Ok(())
    }

    /// Node hash of the parent domain.
    pub fn tld_node(&self) -> UInt256 {
        namehash(&self.tld)
    }

    /// Node hash of `label` under the parent domain.
    pub fn name_node(&self, label: &str) -> UInt256 {
        self.tld_node().child(&UInt256::label_hash(label))
    }
}
