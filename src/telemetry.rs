//! Telemetry and Observability
//!
//! Structured logging setup driven by the resolved log level.

use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingSettings;
use crate::shared::SettingsError;

const FALLBACK_DIRECTIVE: &str = "info";

impl LoggingSettings {
    /// Filter from `RUST_LOG` if set, else the configured level.
    ///
    /// An invalid level falls back to `info`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE))
    }
}

/// Initialize tracing subscriber
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), SettingsError> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(settings.env_filter())
        .with(fmt_layer)
        .try_init()
        .map_err(|e| SettingsError::Telemetry(e.to_string()))?;

    tracing::info!(level = %settings.level, "Tracing initialized");
    Ok(())
}

/// Initialize a JSON tracing subscriber, for log shipping in production.
pub fn init_json_tracing(settings: &LoggingSettings) -> Result<(), SettingsError> {
    tracing_subscriber::registry()
        .with(settings.env_filter())
        .with(fmt::layer().json().with_current_span(false))
        .try_init()
        .map_err(|e| SettingsError::Telemetry(e.to_string()))?;

    tracing::info!(level = %settings.level, "Tracing initialized");
    Ok(())
}
