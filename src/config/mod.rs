//! # Configuration Module
//!
//! This module resolves the service's settings from flat environment
//! variables. Values are looked up, in priority order, in:
//! - The process environment
//! - A `.env` file in the working directory or one of its ancestors (via dotenvy)
//!
//! Unset, empty or unreadable keys resolve to defaults, some of which depend
//! on the [`RuntimeMode`] read from `RUN_ENV`, `NODE_ENV` or `MODE`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use service_env::config::Settings;
//!
//! let settings = Settings::load();
//! println!("Server will listen on {}", settings.server.bind_addr());
//! ```

mod cors;
pub mod defaults;
mod jwt;
mod mode;
mod provider;
mod resolver;
mod settings;

pub use mode::{RuntimeMode, UnknownMode, MODE_KEYS};
pub use provider::{DotenvFile, EnvProvider, ProcessEnv, ProviderError, StaticEnv};
pub use resolver::Resolver;
pub use settings::*;
