use super::api::ApiClient;
use super::{FeedData, FeedFetcher, VersionToken};
use crate::error::FetchError;
use async_trait::async_trait;

pub const VERSION_PATH: &str = "version";

/// Reads the server version as an opaque string. The body is never parsed.
pub struct VersionFetcher {
    api: ApiClient,
}

impl VersionFetcher {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FeedFetcher for VersionFetcher {
    async fn fetch(&self) -> Result<FeedData, FetchError> {
        let body = self.api.get_text(VERSION_PATH).await?;
        Ok(FeedData::Version(VersionToken(body.trim().to_string())))
    }
}
