//! HTTP client module
//!
//! Provides the fetch client for the users endpoint.
//!
//! # Features
//!
//! - **Single attempt**: one request per call, no retry loop
//! - **Fixed deadline**: requests are abandoned after the configured timeout
//! - **Error classification**: connectivity, timeout, server, unknown
//! - **PageFetcher**: the trait the pagination controller depends on

mod client;
mod fetcher;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use fetcher::PageFetcher;
