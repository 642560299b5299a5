//! Interfaces of the external contracts the ledger calls.
//!
//! The registrar controller, base registrar and name wrapper are addressed by
//! the hashes held in the settings and resolved through a
//! [`ContractDirectory`] at call time, so changing a hash with a setter
//! redirects later calls.

use std::sync::Arc;

use dashmap::DashMap;
use neo_primitives::{UInt160, UInt256};
use thiserror::Error;

use super::record::NameRecord;
use crate::error::{ContractError, ContractResult};

/// Failure reported by an external contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ExternalError {
    pub message: String,
}

impl ExternalError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ExternalError> for ContractError {
    fn from(err: ExternalError) -> Self {
        ContractError::ExternalCall {
            message: err.message,
        }
    }
}

pub type ExternalResult<T> = Result<T, ExternalError>;

/// Registrar quote, split like the registrar reports it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RentQuote {
    pub base: u64,
    pub premium: u64,
}

/// Arguments of a registrar registration (and of its commitment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub name: String,
    pub owner: UInt160,
    pub duration: u64,
    pub secret: UInt256,
    pub resolver: UInt160,
    /// Resolver records written at registration.
    pub records: Vec<Vec<u8>>,
    pub reverse_record: bool,
    pub fuses: u32,
    pub wrapper_expiry: u64,
}

/// Ownership data held by the name wrapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WrappedData {
    pub owner: UInt160,
    pub fuses: u32,
    pub expiry: u64,
}

pub trait RegistrarController: Send + Sync {
    fn available(&self, name: &str) -> ExternalResult<bool>;
    fn make_commitment(&self, request: &RegistrationRequest) -> ExternalResult<UInt256>;
    fn commit(&self, commitment: &UInt256) -> ExternalResult<()>;
    fn rent_price(&self, name: &str, duration: u64) -> ExternalResult<RentQuote>;
    /// Registers the name; `value` is the payment forwarded with the call.
    fn register(&self, request: &RegistrationRequest, value: u64) -> ExternalResult<()>;
    fn renew(&self, name: &str, duration: u64, value: u64) -> ExternalResult<()>;
}

/// Registry of record for expirations, keyed by label hash.
pub trait BaseRegistrar: Send + Sync {
    fn name_expires(&self, label: &UInt256) -> ExternalResult<u64>;
}

/// Ownership data service, keyed by node hash.
pub trait NameWrapper: Send + Sync {
    fn get_data(&self, node: &UInt256) -> ExternalResult<WrappedData>;
}

/// Receives a notification after each committed registration or
/// reinstatement. Failures are logged and otherwise ignored.
pub trait ManagementNotifier: Send + Sync {
    fn on_register(&self, name: &str, new_owner: &UInt160, record: &NameRecord) -> ExternalResult<()>;
}

/// Moves custody funds out of the contract.
pub trait FundsTransfer: Send + Sync {
    fn transfer(&self, to: &UInt160, amount: u64) -> ExternalResult<()>;
}

/// Contracts deployed on the host, by hash.
#[derive(Default)]
pub struct ContractDirectory {
    controllers: DashMap<UInt160, Arc<dyn RegistrarController>>,
    registrars: DashMap<UInt160, Arc<dyn BaseRegistrar>>,
    wrappers: DashMap<UInt160, Arc<dyn NameWrapper>>,
}

impl ContractDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deploy_controller(&self, hash: UInt160, contract: Arc<dyn RegistrarController>) {
        self.controllers.insert(hash, contract);
    }

    pub fn deploy_base_registrar(&self, hash: UInt160, contract: Arc<dyn BaseRegistrar>) {
        self.registrars.insert(hash, contract);
    }

    pub fn deploy_name_wrapper(&self, hash: UInt160, contract: Arc<dyn NameWrapper>) {
        self.wrappers.insert(hash, contract);
    }

    pub fn controller(&self, hash: &UInt160) -> ContractResult<Arc<dyn RegistrarController>> {
        self.controllers
            .get(hash)
            .map(|c| Arc::clone(&c))
            .ok_or_else(|| ContractError::external_call(format!("no registrar controller at {hash}")))
    }

    pub fn base_registrar(&self, hash: &UInt160) -> ContractResult<Arc<dyn BaseRegistrar>> {
        self.registrars
            .get(hash)
            .map(|c| Arc::clone(&c))
            .ok_or_else(|| ContractError::external_call(format!("no base registrar at {hash}")))
    }

    pub fn name_wrapper(&self, hash: &UInt160) -> ContractResult<Arc<dyn NameWrapper>> {
        self.wrappers
            .get(hash)
            .map(|c| Arc::clone(&c))
            .ok_or_else(|| ContractError::external_call(format!("no name wrapper at {hash}")))
    }
}

/// Everything the ledger calls out to.
#[derive(Clone)]
pub struct Collaborators {
    pub directory: Arc<ContractDirectory>,
    pub notifier: Arc<dyn ManagementNotifier>,
    pub funds: Arc<dyn FundsTransfer>,
}
