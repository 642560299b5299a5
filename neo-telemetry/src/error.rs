//! Telemetry error types

use thiserror::Error;

/// Telemetry-related errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive could not be parsed
    #[error("Invalid log filter '{directive}': {message}")]
    InvalidFilter {
        /// The rejected directive
        directive: String,
        /// Parser message
        message: String,
    },

    /// Failed to initialize logging
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),
}

/// Result type for telemetry operations
pub type TelemetryResult<T> = Result<T, TelemetryError>;
