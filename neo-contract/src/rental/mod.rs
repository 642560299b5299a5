//! The rental ledger.
//!
//! A [`RentalContract`] tracks leases on names held at an external registrar.
//! It prices each term as the registrar's quote plus a flat fee, forwards the
//! registrar's share when registering or renewing, keeps a chronological
//! history of claims, and reinstates records that fell behind the registrar.

mod abi;
mod contract;
mod custody;
mod events;
mod external;
mod keys;
mod ledger;
mod pricing;
mod reconcile;
mod record;
mod register;
mod reinstate;
mod state;

pub use contract::{RentalContract, CONTRACT_NAME};
pub use events::RentalEvent;
pub use external::{
    BaseRegistrar, Collaborators, ContractDirectory, ExternalError, ExternalResult,
    FundsTransfer, ManagementNotifier, NameWrapper, RegistrarController, RegistrationRequest,
    RentQuote, WrappedData,
};
pub use keys::ALL_COLUMNS;
pub use ledger::{History, RecordStore, RentalLedger};
pub use pricing::{ensure_exact_payment, PriceQuote, PricingEngine};
pub use reconcile::{
    chargeable_duration, prorated_charge, reconcile, reinstate_cost, GroundTruth, Reconciliation,
};
pub use record::{validate_name, InitialRecord, LedgerEntry, NameRecord};
