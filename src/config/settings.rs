//! Application settings and configuration structures.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::defaults;
use super::mode::RuntimeMode;
use super::resolver::Resolver;
use crate::shared::SettingsError;

const REDACTED: &str = "[redacted]";

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Current environment (development, test, production)
    pub mode: RuntimeMode,

    /// Server binding configuration
    pub server: ServerSettings,

    /// Base URL of the front-end application
    pub frontend_url: String,

    /// Cross-origin policy
    pub cors: CorsSettings,

    /// Identity provider credentials
    pub auth: AuthSettings,

    /// Token signing parameters
    pub jwt: JwtSettings,

    /// Log verbosity
    pub logging: LoggingSettings,
}

/// Server binding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Port number to listen on (unvalidated until [`ServerSettings::socket_addr`])
    pub port: i64,

    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Prefix for API routes
    pub api_base_path: String,
}

/// CORS configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env, `*` for any)
    pub origins: Vec<String>,

    pub methods: Vec<String>,

    /// Allowed request headers
    pub headers: Vec<String>,

    /// Response headers exposed to scripts
    pub expose_headers: Vec<String>,

    pub credentials: bool,

    /// Preflight cache lifetime in seconds
    pub max_age: i64,
}

/// Identity provider (Auth0) credentials.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSettings {
    pub domain: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// JWT signing configuration.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing tokens
    pub secret: String,

    /// Token lifetime, e.g. "24h" or "3600"
    pub expires_in: String,

    /// Signing algorithm name, e.g. "HS256"
    pub algorithm: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Level or filter directive, e.g. "info" or "debug"
    pub level: String,
}

impl Settings {
    /// Load settings from the process environment and `.env`.
    ///
    /// Never fails: every unset or unreadable key resolves to its default.
    pub fn load() -> Self {
        let settings = Self::from_resolver(&Resolver::standard());
        tracing::info!(
            mode = %settings.mode,
            host = %settings.server.host,
            port = settings.server.port,
            "Settings resolved"
        );
        tracing::debug!(settings = %settings.redacted(), "Resolved settings snapshot");
        settings
    }

    /// Build the snapshot from an explicit resolver.
    pub fn from_resolver(env: &Resolver) -> Self {
        let mode = env.mode();
        let mode_defaults = defaults::for_mode(mode);

        Self {
            mode,
            server: ServerSettings {
                port: env.get_number("PORT", defaults::PORT),
                host: env.get_string("HOST", defaults::HOST),
                api_base_path: env.get_string("API_BASE_PATH", defaults::API_BASE_PATH),
            },
            frontend_url: env.get_string("FRONTEND_URL", mode_defaults.frontend_url),
            cors: CorsSettings {
                origins: env.get_array("CORS_ORIGINS", mode_defaults.cors_origins),
                methods: env.get_array("CORS_METHODS", defaults::CORS_METHODS),
                headers: env.get_array("CORS_HEADERS", defaults::CORS_HEADERS),
                expose_headers: env
                    .get_array("CORS_EXPOSE_HEADERS", defaults::CORS_EXPOSE_HEADERS),
                credentials: env.get_boolean("CORS_CREDENTIALS", defaults::CORS_CREDENTIALS),
                max_age: env.get_number("CORS_MAX_AGE", defaults::CORS_MAX_AGE),
            },
            auth: AuthSettings {
                domain: env.get_string("AUTH0_DOMAIN", defaults::AUTH0_DOMAIN),
                client_id: env.get_string("AUTH0_CLIENT_ID", defaults::AUTH0_CLIENT_ID),
                client_secret: env
                    .get_string("AUTH0_CLIENT_SECRET", defaults::AUTH0_CLIENT_SECRET),
                redirect_uri: env.get_string("AUTH0_REDIRECT_URI", defaults::AUTH0_REDIRECT_URI),
            },
            jwt: JwtSettings {
                secret: env.get_string("JWT_SECRET", defaults::JWT_SECRET),
                expires_in: env.get_string("JWT_EXPIRES_IN", defaults::JWT_EXPIRES_IN),
                algorithm: env.get_string("JWT_ALGORITHM", defaults::JWT_ALGORITHM),
            },
            logging: LoggingSettings {
                level: env.get_string("LOG_LEVEL", mode_defaults.log_level),
            },
        }
    }

    pub fn is_development(&self) -> bool {
        self.mode.is_development()
    }

    pub fn is_test(&self) -> bool {
        self.mode.is_test()
    }

    pub fn is_production(&self) -> bool {
        self.mode.is_production()
    }

    /// JSON view of the snapshot with secrets masked, safe to log.
    pub fn redacted(&self) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        for pointer in ["/auth/client_secret", "/jwt/secret"] {
            if let Some(secret) = value.pointer_mut(pointer) {
                *secret = Value::String(REDACTED.to_string());
            }
        }
        value
    }
}

impl ServerSettings {
    /// Get the socket address for binding.
    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        let port = u16::try_from(self.port).map_err(|_| SettingsError::InvalidPort(self.port))?;
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, port))
    }

    /// Get the full server address as a string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("domain", &self.domain)
            .field("client_id", &self.client_id)
            .field("client_secret", &REDACTED)
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &REDACTED)
            .field("expires_in", &self.expires_in)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

static STANDARD_RESOLVER: Lazy<Resolver> = Lazy::new(Resolver::standard);
static INSTALLED: OnceCell<Settings> = OnceCell::new();

/// Raw string lookup over the standard sources, kept for older call sites.
///
/// Behaves exactly like [`Resolver::get_string`].
pub fn get_env(key: &str, default: &str) -> String {
    STANDARD_RESOLVER.get_string(key, default)
}

/// Install the process-wide snapshot. Only the first call succeeds.
pub fn install(settings: Settings) -> Result<&'static Settings, SettingsError> {
    INSTALLED
        .try_insert(settings)
        .map_err(|_| SettingsError::AlreadyInstalled)
}

/// The installed snapshot, if any.
pub fn current() -> Option<&'static Settings> {
    INSTALLED.get()
}

/// The installed snapshot, loading the standard one on first access.
pub fn global() -> &'static Settings {
    INSTALLED.get_or_init(Settings::load)
}
