//! Notifications recorded by committed ledger operations.

use neo_primitives::UInt160;
use serde::{Deserialize, Serialize};

/// Notifications emitted by committed operations, in commit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentalEvent {
    Registered {
        name: String,
        renter: UInt160,
        price: u64,
        expiration_time: u64,
    },
    Renewed {
        name: String,
        price: u64,
        expiration_time: u64,
    },
    Reinstated {
        name: String,
        renter: UInt160,
        previous_renter: UInt160,
        charge: u64,
        expiration_time: u64,
    },
    Withdrawn {
        to: UInt160,
        amount: u64,
    },
    ConfigChanged {
        field: String,
    },
    Paused {
        by: UInt160,
    },
    Unpaused {
        by: UInt160,
    },
    Initialized {
        count: u64,
    },
    InitializationFinished,
    OwnershipTransferred {
        previous_owner: UInt160,
        new_owner: UInt160,
    },
}

impl RentalEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RentalEvent::Registered { .. } => "Registered",
            RentalEvent::Renewed { .. } => "Renewed",
            RentalEvent::Reinstated { .. } => "Reinstated",
            RentalEvent::Withdrawn { .. } => "Withdrawn",
            RentalEvent::ConfigChanged { .. } => "ConfigChanged",
            RentalEvent::Paused { .. } => "Paused",
            RentalEvent::Unpaused { .. } => "Unpaused",
            RentalEvent::Initialized { .. } => "Initialized",
            RentalEvent::InitializationFinished => "InitializationFinished",
            RentalEvent::OwnershipTransferred { .. } => "OwnershipTransferred",
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
