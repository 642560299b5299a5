//! Logging initialization and configuration

use crate::{TelemetryError, TelemetryResult};
use neo_config::{LogFormat, LogSettings};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter for `settings`, letting `RUST_LOG` take precedence.
pub fn build_filter(settings: &LogSettings) -> TelemetryResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&settings.level).map_err(|e| TelemetryError::InvalidFilter {
        directive: settings.level.clone(),
        message: e.to_string(),
    })
}

/// Initialize the logging system
pub fn init_logging(settings: &LogSettings) -> TelemetryResult<()> {
    let filter = build_filter(settings)?;

    match settings.format {
        LogFormat::Text => {
            let layer = fmt::layer()
                .with_ansi(settings.color)
                .with_target(settings.include_target)
                .with_file(settings.include_location)
                .with_line_number(settings.include_location);

            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_ansi(settings.color)
                .with_target(settings.include_target);

            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_target(settings.include_target)
                .with_file(settings.include_location)
                .with_line_number(settings.include_location);

            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
        }
    }

    tracing::info!("Logging initialized with level: {}", settings.level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_builds() {
        let settings = LogSettings::default();
        assert!(build_filter(&settings).is_ok());
    }

    #[test]
    fn test_module_directive_accepted() {
        let settings = LogSettings {
            level: "neo_contract=debug,warn".into(),
            ..LogSettings::default()
        };
        assert!(build_filter(&settings).is_ok());
    }

    #[test]
    fn test_second_init_reports_error() {
        let settings = LogSettings {
            format: LogFormat::Compact,
            ..LogSettings::default()
        };
        let first = init_logging(&settings);
        let second = init_logging(&settings);
        // Only one global subscriber can be installed per process.
        assert!(first.is_err() || second.is_err());
    }
}
