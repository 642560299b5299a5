//! # Neo Rental
//!
//! Rental ledger in front of an external name registrar.
//!
//! The ledger tracks leases on names, prices each term as the registrar's
//! quote plus a flat fee, keeps a chronological history of claims and
//! reinstates records that fell behind the registrar.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use neo_rental::prelude::*;
//!
//! fn start(collaborators: Collaborators, owner: UInt160) -> neo_rental::Result<()> {
//!     let config = RentalConfig::load("rental.toml")?;
//!     let store = Arc::new(MemoryStore::with_columns(&ALL_COLUMNS));
//!     let service = RentalService::new(config, store, collaborators, owner)?;
//!     service.init_logging()?;
//!
//!     println!("price of alice: {}", service.contract().get_price("alice")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`primitives`] - hashes, accounts and name hashing
//! - [`store`] - column store and the per-operation write overlay
//! - [`config`] - ledger settings and the TOML configuration file
//! - [`telemetry`] - logging setup
//! - [`contract`] - the rental ledger contract and its native surface

#![warn(missing_docs)]

use std::path::Path;
use std::sync::Arc;

use neo_config::{ConfigError, RentalConfig};
use neo_contract::rental::{Collaborators, RentalContract, CONTRACT_NAME};
use neo_contract::{ContractError, InvocationContext, InvocationResult, NativeRegistry, Value};
use neo_primitives::UInt160;
use neo_store::Store;
use neo_telemetry::TelemetryError;
use thiserror::Error;
use tracing::info;

pub use neo_config as config;
pub use neo_contract as contract;
pub use neo_primitives as primitives;
pub use neo_store as store;
pub use neo_telemetry as telemetry;

/// Common imports for rental ledger hosts
pub mod prelude {
    pub use crate::RentalService;
    pub use neo_config::{LogSettings, RentalConfig, RentalSettings};
    pub use neo_contract::rental::{
        BaseRegistrar, Collaborators, ContractDirectory, FundsTransfer, ManagementNotifier,
        NameWrapper, RegistrarController, ALL_COLUMNS,
    };
    pub use neo_contract::{
        ContractError, InvocationContext, NameRecord, RentalContract, RentalEvent, Value,
    };
    pub use neo_primitives::{UInt160, UInt256};
    pub use neo_store::{MemoryStore, Store};
}

/// Errors raised while assembling or driving a rental service
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging could not be installed
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    /// A contract operation failed
    #[error(transparent)]
    Contract(#[from] ContractError),
}

/// Result type for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// A deployed rental ledger together with the registry that dispatches
/// `Value`-encoded calls to it.
pub struct RentalService {
    config: RentalConfig,
    contract: Arc<RentalContract>,
    registry: NativeRegistry,
}

impl RentalService {
    /// Deploys the ledger into `store`, or reopens it when `store` already
    /// holds one. On reopen the stored settings win over `config.rental`.
    pub fn new(
        config: RentalConfig,
        store: Arc<dyn Store>,
        collaborators: Collaborators,
        owner: UInt160,
    ) -> Result<Self> {
        let contract = if RentalContract::is_deployed(store.as_ref())? {
            RentalContract::open(store, collaborators)?
        } else {
            RentalContract::deploy(store, collaborators, owner, config.rental.clone())?
        };
        let contract = Arc::new(contract);

        let registry = NativeRegistry::new();
        registry.register(contract.clone());
        info!(contract = CONTRACT_NAME, "rental service ready");

        Ok(Self {
            config,
            contract,
            registry,
        })
    }

    /// Loads the configuration at `path` and builds the service from it.
    pub fn from_config_file(
        path: impl AsRef<Path>,
        store: Arc<dyn Store>,
        collaborators: Collaborators,
        owner: UInt160,
    ) -> Result<Self> {
        let config = RentalConfig::load(path)?;
        Self::new(config, store, collaborators, owner)
    }

    /// Installs the global subscriber described by the `[logging]` section.
    pub fn init_logging(&self) -> Result<()> {
        neo_telemetry::init_logging(&self.config.logging)?;
        Ok(())
    }

    /// Configuration the service was built from
    pub fn config(&self) -> &RentalConfig {
        &self.config
    }

    /// The ledger contract
    pub fn contract(&self) -> &Arc<RentalContract> {
        &self.contract
    }

    /// Calls `method` on the ledger through the native registry.
    pub fn invoke(
        &self,
        method: &str,
        ctx: &InvocationContext,
        params: &[Value],
    ) -> Result<InvocationResult> {
        Ok(self.registry.invoke(CONTRACT_NAME, method, ctx, params)?)
    }
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
