use anyhow::{Result, bail};

use super::KeyStore;

/// Reads secrets from process environment variables.
///
/// An optional prefix is joined with `_`, so prefix `STAGING` turns
/// `TFL_APP_ID` into `STAGING_TFL_APP_ID`.
#[derive(Debug, Clone, Default)]
pub struct EnvKeyStore {
    prefix: Option<String>,
}

impl EnvKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn var_name(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}_{name}"),
            None => name.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl KeyStore for EnvKeyStore {
    async fn get(&self, name: &str) -> Result<Option<String>> {
        let var = self.var_name(name);
        match std::env::var(&var) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => bail!("{var} is not valid UTF-8"),
        }
    }
}
