//! Typed lookups over an ordered list of providers.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::mode::{RuntimeMode, MODE_KEYS};
use super::provider::{DotenvFile, EnvProvider, ProcessEnv};

/// Resolves settings keys against providers in priority order.
///
/// Every accessor is infallible: a missing key, an empty value, or a
/// provider fault all resolve to the caller's default.
pub struct Resolver {
    providers: Vec<Box<dyn EnvProvider>>,
}

impl Resolver {
    /// Build a resolver from providers, highest priority first.
    pub fn new(providers: Vec<Box<dyn EnvProvider>>) -> Self {
        Self { providers }
    }

    /// Process environment first, then `.env`.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(ProcessEnv::new()),
            Box::new(DotenvFile::discover()),
        ])
    }

    /// Append a provider with the lowest priority.
    pub fn with_provider(mut self, provider: impl EnvProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// First non-empty value for `key`, if any provider has one.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.providers
            .iter()
            .find_map(|provider| probe(provider.as_ref(), key))
    }

    /// Detect the runtime mode from the first mode indicator that is set.
    pub fn mode(&self) -> RuntimeMode {
        MODE_KEYS
            .iter()
            .find_map(|key| self.lookup(key))
            .map(|value| RuntimeMode::from_str_or_default(&value))
            .unwrap_or_default()
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// Integer value; unparseable text resolves to `default`.
    pub fn get_number(&self, key: &str, default: i64) -> i64 {
        self.lookup(key)
            .and_then(|value| parse_int_prefix(&value))
            .unwrap_or(default)
    }

    /// True only for a case-insensitive `"true"`.
    pub fn get_boolean(&self, key: &str, default: bool) -> bool {
        self.lookup(key)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(default)
    }

    /// Comma-separated list, each element trimmed. Empty segments are kept.
    pub fn get_array(&self, key: &str, default: &[&str]) -> Vec<String> {
        match self.lookup(key) {
            Some(value) => split_list(&value),
            None => default.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("providers", &self.provider_names())
            .finish()
    }
}

/// Ask one provider, converting errors, panics and empty values to `None`.
fn probe(provider: &dyn EnvProvider, key: &str) -> Option<String> {
    panic::catch_unwind(AssertUnwindSafe(|| provider.lookup(key)))
        .ok()
        .and_then(Result::ok)
        .flatten()
        .filter(|value| !value.is_empty())
}

/// Lenient base-10 parse: skips leading whitespace, accepts a sign, then
/// reads digits up to the first non-digit. `"12px"` is 12, `"px"` is `None`.
pub(crate) fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let sign_len = usize::from(s.starts_with(&['-', '+'][..]));
    let end = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| sign_len + i);
    if end == sign_len {
        return None;
    }
    s[..end].parse().ok()
}

pub(crate) fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(|item| item.trim().to_string()).collect()
}
