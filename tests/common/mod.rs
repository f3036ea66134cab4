//! Common Test Utilities
//!
//! Shared helpers for tests that touch the process environment. Every such
//! test must be marked `#[serial]`.

use std::env;
use std::io::Write;

use tempfile::NamedTempFile;

/// Every key the settings snapshot reads.
pub const SETTINGS_KEYS: &[&str] = &[
    "RUN_ENV",
    "NODE_ENV",
    "MODE",
    "PORT",
    "HOST",
    "API_BASE_PATH",
    "FRONTEND_URL",
    "CORS_ORIGINS",
    "CORS_METHODS",
    "CORS_HEADERS",
    "CORS_EXPOSE_HEADERS",
    "CORS_CREDENTIALS",
    "CORS_MAX_AGE",
    "AUTH0_DOMAIN",
    "AUTH0_CLIENT_ID",
    "AUTH0_CLIENT_SECRET",
    "AUTH0_REDIRECT_URI",
    "JWT_SECRET",
    "JWT_EXPIRES_IN",
    "JWT_ALGORITHM",
    "LOG_LEVEL",
];

/// Clears the settings keys on creation and restores their previous values
/// on drop.
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn clean() -> Self {
        let saved = SETTINGS_KEYS
            .iter()
            .map(|key| (key.to_string(), env::var(key).ok()))
            .collect();
        for key in SETTINGS_KEYS {
            env::remove_var(key);
        }
        Self { saved }
    }

    pub fn set(&self, key: &str, value: &str) -> &Self {
        env::set_var(key, value);
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
}

/// Write a `.env` file with the given lines.
pub fn dotenv_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp .env");
    for line in lines {
        writeln!(file, "{line}").expect("write temp .env");
    }
    file.flush().expect("flush temp .env");
    file
}
