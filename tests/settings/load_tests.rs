//! Settings loading from the process environment.

use pretty_assertions::assert_eq;
use serial_test::serial;
use service_env::config::{self, Resolver, RuntimeMode, Settings};
use service_env::{get_env, SettingsError};

use crate::common::EnvGuard;

#[test]
#[serial]
fn test_load_with_empty_environment_uses_defaults() {
    let _env = EnvGuard::clean();

    let settings = Settings::load();
    assert_eq!(settings.mode, RuntimeMode::Development);
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.cors.max_age, 86400);
    assert_eq!(settings.jwt.secret, "your-secret-key-change-in-production");
    assert_eq!(settings.logging.level, "debug");
}

#[test]
#[serial]
fn test_load_in_production() {
    let env = EnvGuard::clean();
    env.set("RUN_ENV", "production");

    let settings = Settings::load();
    assert!(settings.is_production());
    assert!(!settings.is_development());
    assert!(!settings.is_test());
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.frontend_url, "https://your-production-domain.com");
}

#[test]
#[serial]
fn test_load_reads_fallback_mode_key() {
    let env = EnvGuard::clean();
    env.set("MODE", "test");

    let settings = Settings::load();
    assert!(settings.is_test());
    assert_eq!(settings.cors.origins, vec!["*"]);
}

#[test]
#[serial]
fn test_load_reads_node_env() {
    let env = EnvGuard::clean();
    env.set("NODE_ENV", "production");

    let settings = Settings::load();
    assert!(settings.is_production());
    assert_eq!(settings.logging.level, "info");
}

#[test]
#[serial]
fn test_load_coerces_process_values() -> anyhow::Result<()> {
    let env = EnvGuard::clean();
    env.set("PORT", "8443")
        .set("CORS_METHODS", "GET, POST")
        .set("CORS_CREDENTIALS", "True")
        .set("CORS_MAX_AGE", "not-a-number")
        .set("JWT_EXPIRES_IN", "15m");

    let settings = Settings::load();
    assert_eq!(settings.server.port, 8443);
    assert_eq!(settings.cors.methods, vec!["GET", "POST"]);
    assert!(settings.cors.credentials);
    assert_eq!(settings.cors.max_age, 86400);
    assert_eq!(settings.jwt.expires_in_secs()?, 900);
    Ok(())
}

#[test]
#[serial]
fn test_empty_process_value_resolves_to_default() {
    let env = EnvGuard::clean();
    env.set("HOST", "").set("LOG_LEVEL", "");

    let settings = Settings::load();
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.logging.level, "debug");
}

#[test]
#[serial]
fn test_get_env_matches_get_string() {
    let env = EnvGuard::clean();
    env.set("API_BASE_PATH", "/v2");

    let resolver = Resolver::standard();
    for (key, default) in [("API_BASE_PATH", "/api"), ("FRONTEND_URL", "http://x.test")] {
        assert_eq!(get_env(key, default), resolver.get_string(key, default));
    }
    assert_eq!(get_env("API_BASE_PATH", "/api"), "/v2");
    assert_eq!(get_env("FRONTEND_URL", ""), "");
}

#[test]
#[serial]
fn test_install_is_once_only() -> anyhow::Result<()> {
    let env = EnvGuard::clean();
    env.set("PORT", "4100");

    let first = config::install(Settings::load())?;
    assert_eq!(first.server.port, 4100);

    assert!(matches!(
        config::install(Settings::load()),
        Err(SettingsError::AlreadyInstalled)
    ));
    assert!(std::ptr::eq(config::current().unwrap(), first));
    assert!(std::ptr::eq(config::global(), first));
    Ok(())
}
