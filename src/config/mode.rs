//! Runtime mode detection.
//!
//! The mode is read from the first non-empty key in [`MODE_KEYS`]:
//! `RUN_ENV`, then `NODE_ENV` (so deployments configured for the Node
//! service keep their mode), then `MODE` as exported by front-end build
//! tooling.
//!
//! Values are matched case-insensitively after trimming. Besides the
//! canonical names, the short forms `dev`, `testing` and `prod` are
//! accepted. Anything else resolves to [`RuntimeMode::Development`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Mode indicator keys, highest priority first.
pub const MODE_KEYS: [&str; 3] = ["RUN_ENV", "NODE_ENV", "MODE"];

/// Deployment environment controlling which defaults apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    #[default]
    Development,
    Test,
    Production,
}

/// Returned when a mode string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown runtime mode: {0}")]
pub struct UnknownMode(pub String);

impl RuntimeMode {
    /// All modes, in table order.
    pub const ALL: [RuntimeMode; 3] = [
        RuntimeMode::Development,
        RuntimeMode::Test,
        RuntimeMode::Production,
    ];

    /// Parse a mode indicator, falling back to development for anything unknown,
    /// including values like `staging`.
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }

    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub const fn is_test(&self) -> bool {
        matches!(self, Self::Test)
    }

    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for RuntimeMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "test" | "testing" => Ok(Self::Test),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
