//! Default values applied when a key is unset.

use super::mode::RuntimeMode;

/// Defaults that vary by runtime mode.
#[derive(Debug, Clone, Copy)]
pub struct ModeDefaults {
    pub mode: RuntimeMode,
    pub frontend_url: &'static str,
    pub cors_origins: &'static [&'static str],
    pub log_level: &'static str,
}

/// Mode-dependent defaults, one row per mode.
pub const MODE_DEFAULTS: &[ModeDefaults] = &[
    ModeDefaults {
        mode: RuntimeMode::Development,
        frontend_url: "http://192.168.31.177:8080",
        cors_origins: &[
            "http://localhost:3000",
            "http://localhost:5173",
            "http://127.0.0.1:5173",
            "http://127.0.0.1:3000",
            "http://192.168.31.177:8080",
        ],
        log_level: "debug",
    },
    ModeDefaults {
        mode: RuntimeMode::Test,
        frontend_url: "http://test-domain.com",
        cors_origins: &["*"],
        log_level: "debug",
    },
    ModeDefaults {
        mode: RuntimeMode::Production,
        frontend_url: "https://your-production-domain.com",
        cors_origins: &["https://your-production-domain.com"],
        log_level: "info",
    },
];

/// Returns the defaults row for `mode`, or the first row if none matches.
pub fn for_mode(mode: RuntimeMode) -> &'static ModeDefaults {
    MODE_DEFAULTS
        .iter()
        .find(|row| row.mode == mode)
        .unwrap_or(&MODE_DEFAULTS[0])
}

pub const PORT: i64 = 3000;
pub const HOST: &str = "0.0.0.0";
pub const API_BASE_PATH: &str = "/api";

pub const CORS_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "OPTIONS", "PATCH"];
pub const CORS_HEADERS: &[&str] = &[
    "Origin",
    "Content-Type",
    "Accept",
    "Authorization",
    "X-Requested-With",
];
pub const CORS_EXPOSE_HEADERS: &[&str] = &["Content-Length", "X-Kuma-Revision"];
pub const CORS_CREDENTIALS: bool = true;
pub const CORS_MAX_AGE: i64 = 86400;

pub const AUTH0_DOMAIN: &str = "your-auth0-domain.auth0.com";
pub const AUTH0_CLIENT_ID: &str = "your-client-id";
pub const AUTH0_CLIENT_SECRET: &str = "your-client-secret";
pub const AUTH0_REDIRECT_URI: &str = "http://localhost:3000/api/auth/callback";

pub const JWT_SECRET: &str = "your-secret-key-change-in-production";
pub const JWT_EXPIRES_IN: &str = "24h";
pub const JWT_ALGORITHM: &str = "HS256";
