//! Provider priority across the process environment and `.env` files.

use pretty_assertions::assert_eq;
use serial_test::serial;
use service_env::config::{
    DotenvFile, EnvProvider, ProcessEnv, ProviderError, Resolver, RuntimeMode, Settings,
    StaticEnv,
};

use crate::common::{dotenv_file, EnvGuard};

struct Unavailable;

impl EnvProvider for Unavailable {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn lookup(&self, _key: &str) -> Result<Option<String>, ProviderError> {
        Err(ProviderError::Unavailable("no build-tool environment".into()))
    }
}

#[test]
#[serial]
fn test_process_environment_outranks_dotenv() -> anyhow::Result<()> {
    let env = EnvGuard::clean();
    env.set("PORT", "5000");
    let file = dotenv_file(&["PORT=4000", "HOST=10.1.2.3", "RUN_ENV=production"]);

    let resolver = Resolver::new(vec![
        Box::new(ProcessEnv::new()),
        Box::new(DotenvFile::from_path(file.path())?),
    ]);
    let settings = Settings::from_resolver(&resolver);

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.server.host, "10.1.2.3");
    assert_eq!(settings.mode, RuntimeMode::Production);
    assert_eq!(settings.logging.level, "info");
    Ok(())
}

#[test]
#[serial]
fn test_dotenv_does_not_touch_process_environment() -> anyhow::Result<()> {
    let _env = EnvGuard::clean();
    let file = dotenv_file(&["FRONTEND_URL=http://from-dotenv.test"]);

    let provider = DotenvFile::from_path(file.path())?;
    assert_eq!(provider.len(), 1);
    assert!(std::env::var("FRONTEND_URL").is_err());
    Ok(())
}

#[test]
#[serial]
fn test_snapshot_survives_unavailable_sources() {
    let _env = EnvGuard::clean();

    let resolver = Resolver::new(vec![Box::new(Unavailable), Box::new(ProcessEnv::new())])
        .with_provider(Unavailable);
    let settings = Settings::from_resolver(&resolver);

    assert_eq!(settings.mode, RuntimeMode::Development);
    assert_eq!(settings.server.port, 3000);
    assert_eq!(
        resolver.provider_names(),
        vec!["unavailable", "process", "unavailable"]
    );
}

#[test]
fn test_static_sources_need_no_process_environment() {
    let resolver = Resolver::new(vec![Box::new(
        StaticEnv::new()
            .with("RUN_ENV", "test")
            .with("CORS_ORIGINS", "https://a.test,,https://b.test"),
    )]);
    let settings = Settings::from_resolver(&resolver);

    assert!(settings.is_test());
    assert_eq!(
        settings.cors.origins,
        vec!["https://a.test", "", "https://b.test"]
    );
    assert_eq!(settings.frontend_url, "http://test-domain.com");
}
