//! Error types for arrival fetching.

use std::time::Duration;

use thiserror::Error;

/// Failure modes of an arrivals lookup.
///
/// The three kinds are kept apart because each one is spoken back to the
/// user differently (see [`crate::skill::messages::apology_for`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The remote call exceeded its deadline.
    #[error("request timed out after {}ms", .timeout.as_millis())]
    Timeout { timeout: Duration },

    /// The transport reported a failure, including non-2xx responses.
    #[error("request failed: {message}")]
    Request {
        /// HTTP status, when the server answered at all.
        status: Option<u16>,
        message: String,
    },

    /// The body could not be read as a list of arrivals.
    #[error("unexpected response data: {0}")]
    UnexpectedData(String),
}

impl FetchError {
    /// Classifies a transport error.
    ///
    /// The URL is stripped from the message since it may carry credentials.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            return Self::Timeout { timeout };
        }
        let status = err.status().map(|s| s.as_u16());
        Self::Request {
            status,
            message: err.without_url().to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
