//! Settings Error Types
//!
//! Errors raised by the typed views over resolved settings. Resolution
//! itself never fails.

use std::net::AddrParseError;

/// Settings error type
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid port: {0}")]
    InvalidPort(i64),

    #[error("Invalid host address: {0}")]
    InvalidHost(#[from] AddrParseError),

    #[error("Invalid token algorithm: {0}")]
    InvalidAlgorithm(String),

    #[error("Invalid token lifetime: {0}")]
    InvalidDuration(String),

    #[error("Settings already installed")]
    AlreadyInstalled,

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}
