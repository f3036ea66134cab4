//! Shared Utilities
//!
//! Common types used across modules.

pub mod error;

pub use error::SettingsError;
