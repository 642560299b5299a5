//! # Neo Contract
//!
//! Rental ledger contract in front of an external name registrar.
//!
//! ## Components
//!
//! - **Rental ledger** ([`rental`]): records, the claim history, pricing,
//!   registration and renewal, reinstatement, custody and configuration
//! - **Guards** ([`guard`]): composable access rules and the reentrancy guard
//!   wrapped around every mutating entry point
//! - **Native surface** ([`native`], [`manifest`], [`runtime`]): method
//!   manifest and `Value`-based dispatch through a [`NativeRegistry`]
//!
//! ## Example
//!
//! ```rust
//! use neo_contract::{Access, InvocationContext};
//! use neo_primitives::UInt160;
//!
//! let ctx = InvocationContext::new(UInt160::zero(), 1_700_000_000).with_value(1000);
//! assert_eq!(ctx.value, 1000);
//!
//! let access = Access::anyone().non_reentrant().when_not_paused().payable();
//! assert!(access.is_non_reentrant());
//! ```

pub mod error;
pub mod guard;
pub mod manifest;
pub mod native;
pub mod rental;
pub mod runtime;

pub use error::{ContractError, ContractResult};
pub use guard::{Access, ReentrancyGuard, Role};
pub use manifest::{ContractManifest, ContractMethod, ContractParameter, ParameterKind};
pub use native::{NativeContract, NativeRegistry};
pub use rental::{
    Collaborators, ContractDirectory, InitialRecord, LedgerEntry, NameRecord, RentalContract,
    RentalEvent,
};
pub use runtime::{InvocationContext, InvocationResult, Value};
