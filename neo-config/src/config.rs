//! On-disk configuration file

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigResult;
use crate::logging::LogSettings;
use crate::rental::RentalSettings;

/// Complete rental ledger configuration file.
///
/// ```toml
/// [rental]
/// base_rental_price = 100
/// grace_period = 2592000
///
/// [logging]
/// level = "debug"
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalConfig {
    /// Ledger parameters
    #[serde(default)]
    pub rental: RentalSettings,

    /// Logging output
    #[serde(default)]
    pub logging: LogSettings,
}

impl RentalConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.rental.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads and validates the configuration at `path`.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded rental configuration");
        Ok(config)
    }

    /// Writes the configuration to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
