//! API credential resolution.
//!
//! [`KeyStore`] is the async trait for looking a secret up by name.
//! [`EnvKeyStore`] implements it over process environment variables.
//! [`Credentials::resolve`] pulls the TfL `app_id`/`app_key` pair from a store.

mod env;

pub use env::EnvKeyStore;

use anyhow::Result;
use tracing::{debug, info};

/// Name of the secret holding the TfL application id.
pub const APP_ID_KEY: &str = "TFL_APP_ID";
/// Name of the secret holding the TfL application key.
pub const APP_KEY_KEY: &str = "TFL_APP_KEY";

/// Resolves a secret by name.
///
/// `Ok(None)` means the secret is simply not configured.
#[async_trait::async_trait]
pub trait KeyStore: Send + Sync {
    async fn get(&self, name: &str) -> Result<Option<String>>;
}

/// TfL Unified API application credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub app_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Looks up both halves of the credential pair.
    ///
    /// Returns `None` unless both are present and non-empty; the API is then
    /// called unauthenticated.
    pub async fn resolve<S: KeyStore + ?Sized>(store: &S) -> Result<Option<Self>> {
        let app_id = store.get(APP_ID_KEY).await?.filter(|v| !v.is_empty());
        let app_key = store.get(APP_KEY_KEY).await?.filter(|v| !v.is_empty());

        match (app_id, app_key) {
            (Some(app_id), Some(app_key)) => {
                debug!(app_id = %app_id, "Using authenticated TfL requests");
                Ok(Some(Self { app_id, app_key }))
            }
            _ => {
                info!("TfL credentials not configured, requests will be unauthenticated");
                Ok(None)
            }
        }
    }
}
