//! # Neo Telemetry
//!
//! Observability setup for processes hosting the rental ledger.
//!
//! The library crates only emit `tracing` events; installing a subscriber is
//! left to the host, which calls [`init_logging`] once at startup with the
//! `[logging]` section of its configuration file.

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{build_filter, init_logging};
