//! The seam between the pagination controller and the network

use super::client::HttpClient;
use crate::error::Result;
use crate::types::PageResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Something that can fetch one page of users
///
/// Implementations perform a single attempt per call: no caching, no
/// retries, no shared state.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch page `page` (1-based)
    async fn fetch_page(&self, page: u32) -> Result<PageResult>;
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch_page(&self, page: u32) -> Result<PageResult> {
        HttpClient::fetch_page(self, page).await
    }
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch_page(&self, page: u32) -> Result<PageResult> {
        (**self).fetch_page(page).await
    }
}
