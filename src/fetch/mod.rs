//! HTTP transport for the arrivals lookup.
//!
//! [`HttpClient`] is the seam tests substitute; [`BasicClient`] is the real
//! transport and [`auth::UrlParam`] layers credentials on top of either.

mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use std::time::{Duration, Instant};

use reqwest::{Method, Request, Url};
use tracing::debug;

use crate::error::FetchError;

/// Issues a GET to `url` and returns the body of a 2xx response.
///
/// `timeout` bounds the whole exchange, body included.
///
/// # Errors
///
/// [`FetchError::Timeout`] when the deadline passes, [`FetchError::Request`]
/// for any other transport failure or a non-2xx status.
pub async fn fetch_bytes<C: HttpClient + ?Sized>(
    client: &C,
    url: Url,
    timeout: Duration,
) -> Result<Vec<u8>, FetchError> {
    let mut req = Request::new(Method::GET, url);
    *req.timeout_mut() = Some(timeout);

    let started = Instant::now();
    let resp = client
        .execute(req)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| FetchError::from_reqwest(e, timeout))?;

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| FetchError::from_reqwest(e, timeout))?;

    debug!(
        bytes = bytes.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Response body received"
    );
    Ok(bytes.to_vec())
}
