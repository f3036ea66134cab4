//! # Service Env
//!
//! Typed settings for the chat backend, resolved from environment variables:
//! - Runtime mode detection (development, test, production)
//! - Typed lookups with defaults over prioritized sources (process, `.env`)
//! - One immutable [`config::Settings`] snapshot, built at startup
//! - CORS layer and token settings derived from the snapshot
//!
//! ## Module Structure
//!
//! ```text
//! service_env/
//! +-- config/     Providers, resolver, defaults and the settings snapshot
//! +-- shared/     Common types (errors)
//! +-- telemetry   Tracing subscriber setup
//! ```

// Configuration module
pub mod config;

// Shared utilities
pub mod shared;

// Telemetry and observability
pub mod telemetry;

pub use config::{get_env, Resolver, RuntimeMode, Settings};
pub use shared::SettingsError;
