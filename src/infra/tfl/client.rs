use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, instrument};

use crate::arrivals::ArrivalRecord;
use crate::config::SkillConfig;
use crate::error::FetchError;
use crate::fetch::auth::UrlParam;
use crate::fetch::{BasicClient, HttpClient, fetch_bytes};
use crate::infra::keys::Credentials;
use crate::parser::parse_arrivals;
use crate::services::arrivals_api::ArrivalsApi;

/// Arrivals lookup against the TfL `StopPoint/{id}/Arrivals` endpoint.
pub struct TflClient {
    http: Box<dyn HttpClient>,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for TflClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TflClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl TflClient {
    /// Wraps an existing transport.
    pub fn new(http: impl HttpClient + 'static, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: Box::new(http),
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Builds the real client, appending `app_id`/`app_key` to every request
    /// when credentials are given.
    pub fn from_config(config: &SkillConfig, credentials: Option<Credentials>) -> reqwest::Result<Self> {
        let transport = BasicClient::with_timeout(config.timeout())?;
        let base_url = config.base_url.clone();
        let timeout = config.timeout();

        Ok(match credentials {
            Some(Credentials { app_id, app_key }) => {
                let with_key = UrlParam::new(transport, "app_key", app_key);
                Self::new(UrlParam::new(with_key, "app_id", app_id), base_url, timeout)
            }
            None => Self::new(transport, base_url, timeout),
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `{base}/StopPoint/{stop_id}/Arrivals`, with the stop id escaped as a
    /// single path segment.
    pub fn arrivals_url(&self, stop_id: &str) -> Result<Url, FetchError> {
        let invalid = |message: String| FetchError::Request {
            status: None,
            message,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(format!("invalid base url: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| invalid(format!("base url cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["StopPoint", stop_id, "Arrivals"]);
        Ok(url)
    }
}

#[async_trait]
impl ArrivalsApi for TflClient {
    #[instrument(skip(self), fields(timeout_ms))]
    async fn get_arrivals(
        &self,
        stop_id: &str,
        timeout: Option<Duration>,
    ) -> Result<Vec<ArrivalRecord>, FetchError> {
        let timeout = timeout.unwrap_or(self.timeout);
        tracing::Span::current().record("timeout_ms", timeout.as_millis() as u64);

        let url = self.arrivals_url(stop_id)?;
        let bytes = fetch_bytes(self.http.as_ref(), url, timeout).await?;
        let arrivals = parse_arrivals(&bytes)?;

        debug!(count = arrivals.len(), "Arrivals parsed");
        Ok(arrivals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> TflClient {
        TflClient::new(BasicClient::default(), base_url, Duration::from_secs(5))
    }

    #[test]
    fn test_arrivals_url() {
        let url = client("https://api.tfl.gov.uk").arrivals_url("490000123ABC").unwrap();
        assert_eq!(url.as_str(), "https://api.tfl.gov.uk/StopPoint/490000123ABC/Arrivals");
    }

    #[test]
    fn test_arrivals_url_trailing_slash_and_prefix() {
        let url = client("http://localhost:8080/tfl/").arrivals_url("490000456DEF").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/tfl/StopPoint/490000456DEF/Arrivals");
    }

    #[test]
    fn test_arrivals_url_escapes_stop_id() {
        let url = client("https://api.tfl.gov.uk").arrivals_url("a/b c").unwrap();
        assert_eq!(url.as_str(), "https://api.tfl.gov.uk/StopPoint/a%2Fb%20c/Arrivals");
    }

    #[test]
    fn test_arrivals_url_invalid_base() {
        let err = client("not a url").arrivals_url("490000123ABC").unwrap_err();
        assert_eq!(err.status(), None);
        assert!(matches!(err, FetchError::Request { .. }));
    }

    #[test]
    fn test_from_config_uses_configured_timeout() {
        let config = SkillConfig {
            timeout_secs: 7,
            ..SkillConfig::default()
        };
        let client = TflClient::from_config(&config, None).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(7));
    }
}
