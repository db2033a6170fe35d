//! Transport for London Unified API.

mod client;

pub use client::TflClient;
