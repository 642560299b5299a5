//! Error types for contract operations.

use neo_primitives::{PrimitiveError, UInt160};
use neo_store::StoreError;
use thiserror::Error;

/// Errors that can occur while executing a ledger operation.
///
/// Any error aborts the whole operation: staged writes are discarded and no
/// funds are retained.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// Malformed input or an operation that is not allowed in the current state.
    #[error("Validation failed: {message}")]
    Validation {
        /// Error message.
        message: String,
    },

    /// Attached value differs from the required amount.
    #[error("Payment mismatch: required {required}, supplied {supplied}")]
    PaymentMismatch {
        /// Exact amount the operation costs.
        required: u64,
        /// Amount attached to the call.
        supplied: u64,
    },

    /// The name is not in the state the operation expects.
    #[error("Name '{name}' unavailable: {reason}")]
    Unavailable {
        /// The name.
        name: String,
        /// Why the operation cannot proceed.
        reason: String,
    },

    /// Caller lacks the required role.
    #[error("Unauthorized caller {caller}")]
    Unauthorized {
        /// The rejected caller.
        caller: UInt160,
    },

    /// Outbound fund transfer failed.
    #[error("Transfer failed: {message}")]
    TransferFailed {
        /// Error message.
        message: String,
    },

    /// An external collaborator rejected the call.
    #[error("External call failed: {message}")]
    ExternalCall {
        /// Error message.
        message: String,
    },

    /// The ledger is paused.
    #[error("Contract is paused")]
    Paused,

    /// A guarded entry point was invoked while another one is running.
    #[error("Reentrant call rejected")]
    Reentrancy,

    /// Checked arithmetic overflowed.
    #[error("Arithmetic overflow in {context}")]
    Overflow {
        /// Computation that overflowed.
        context: &'static str,
    },

    /// Method not present in the contract manifest.
    #[error("Method not found: {method}")]
    MethodNotFound {
        /// Method name.
        method: String,
    },

    /// Arguments do not match the method signature.
    #[error("Invalid parameters for {method}: {message}")]
    InvalidParameters {
        /// Method name.
        method: String,
        /// Error message.
        message: String,
    },

    /// No native contract registered under the name.
    #[error("Native contract not found: {0}")]
    NativeNotFound(String),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Primitive conversion error.
    #[error("Primitive error: {0}")]
    Primitive(#[from] PrimitiveError),
}

impl ContractError {
    /// Create a validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an unavailable-name error.
    pub fn unavailable<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self::Unavailable {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an external call error.
    pub fn external_call<S: Into<String>>(message: S) -> Self {
        Self::ExternalCall {
            message: message.into(),
        }
    }

    /// Create a transfer failure.
    pub fn transfer_failed<S: Into<String>>(message: S) -> Self {
        Self::TransferFailed {
            message: message.into(),
        }
    }

    /// Create an overflow error.
    pub const fn overflow(context: &'static str) -> Self {
        Self::Overflow { context }
    }

    /// Create an invalid parameters error.
    pub fn invalid_parameters<M: Into<String>, S: Into<String>>(method: M, message: S) -> Self {
        Self::InvalidParameters {
            method: method.into(),
            message: message.into(),
        }
    }
}

/// Result type for contract operations.
pub type ContractResult<T> = std::result::Result<T, ContractError>;
