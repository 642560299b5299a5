//! # Neo Config
//!
//! Configuration for the rental ledger.
//!
//! - [`RentalSettings`]: the construction-time parameters of the ledger
//!   (fees, duration, grace period, registrar wiring, wrapper options)
//! - [`LogSettings`]: output options consumed by `neo-telemetry`
//! - [`RentalConfig`]: the on-disk TOML file combining both
//!
//! ## Example
//!
//! ```rust
//! use neo_config::RentalConfig;
//!
//! let config = RentalConfig::from_toml_str(
//!     r#"
//!     [rental]
//!     base_rental_price = 100
//!     duration = 31536000
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.rental.base_rental_price, 100);
//! ```

mod config;
mod error;
mod logging;
mod rental;

pub use config::RentalConfig;
pub use error::{ConfigError, ConfigResult};
pub use logging::{LogFormat, LogSettings};
pub use rental::{RentalSettings, DEFAULT_MAX_NAME_LENGTH, SECONDS_PER_DAY};
