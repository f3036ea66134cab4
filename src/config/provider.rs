//! Lookup providers.
//!
//! A provider is one source of flat key/value settings. The [`Resolver`]
//! queries providers in priority order and treats any provider fault as
//! "value absent".
//!
//! [`Resolver`]: super::Resolver

use std::collections::HashMap;
use std::env::{self, VarError};
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

/// Fault raised by a provider while looking up a key.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("value of {key} is not valid unicode")]
    NotUnicode { key: String },

    #[error("dotenv error: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// A source of environment values.
#[cfg_attr(test, automock)]
pub trait EnvProvider: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Look up a key. `Ok(None)` means the key is not set in this source.
    fn lookup(&self, key: &str) -> Result<Option<String>, ProviderError>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvProvider for ProcessEnv {
    fn name(&self) -> &'static str {
        "process"
    }

    fn lookup(&self, key: &str) -> Result<Option<String>, ProviderError> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ProviderError::NotUnicode {
                key: key.to_string(),
            }),
        }
    }
}

/// Values parsed from a `.env` file.
///
/// The file is read once at construction and never written back into the
/// process environment, so it always ranks below [`ProcessEnv`].
#[derive(Debug, Clone, Default)]
pub struct DotenvFile {
    path: Option<PathBuf>,
    vars: HashMap<String, String>,
}

impl DotenvFile {
    /// Search for `.env` in the working directory and its ancestors.
    ///
    /// A missing or unreadable file yields an empty provider.
    pub fn discover() -> Self {
        match dotenvy::dotenv_iter() {
            Ok(iter) => Self {
                path: None,
                vars: collect_pairs(iter),
            },
            Err(_) => Self::default(),
        }
    }

    /// Read a specific file. Malformed lines are skipped.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            vars: collect_pairs(iter),
        })
    }

    /// Path the values were read from, when constructed with [`DotenvFile::from_path`].
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

fn collect_pairs<I>(iter: I) -> HashMap<String, String>
where
    I: Iterator<Item = Result<(String, String), dotenvy::Error>>,
{
    iter.filter_map(Result::ok).collect()
}

impl EnvProvider for DotenvFile {
    fn name(&self) -> &'static str {
        "dotenv"
    }

    fn lookup(&self, key: &str) -> Result<Option<String>, ProviderError> {
        Ok(self.vars.get(key).cloned())
    }
}

/// Fixed in-memory values, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvProvider for StaticEnv {
    fn name(&self) -> &'static str {
        "static"
    }

    fn lookup(&self, key: &str) -> Result<Option<String>, ProviderError> {
        Ok(self.vars.get(key).cloned())
    }
}
