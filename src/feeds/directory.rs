use super::api::ApiClient;
use super::{FeedData, FeedFetcher, Volunteer};
use crate::error::FetchError;
use async_trait::async_trait;
use serde::Deserialize;

pub const DIRECTORY_PATH: &str = "directory/";

/// Older servers wrap the list in an object, newer ones send it bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DirectoryPayload {
    Wrapped { volunteers: Vec<Volunteer> },
    Bare(Vec<Volunteer>),
}

impl DirectoryPayload {
    fn into_volunteers(self) -> Vec<Volunteer> {
        let mut volunteers = match self {
            DirectoryPayload::Wrapped { volunteers } => volunteers,
            DirectoryPayload::Bare(volunteers) => volunteers,
        };
        volunteers.sort_by_key(|v| v.id);
        volunteers
    }
}

pub struct DirectoryFetcher {
    api: ApiClient,
}

impl DirectoryFetcher {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FeedFetcher for DirectoryFetcher {
    async fn fetch(&self) -> Result<FeedData, FetchError> {
        let payload: DirectoryPayload = self.api.get_json(DIRECTORY_PATH).await?;
        let volunteers = payload.into_volunteers();
        tracing::debug!(count = volunteers.len(), "directory loaded");
        Ok(FeedData::Directory(volunteers))
    }

    fn loading_message(&self) -> Option<String> {
        Some("Loading volunteer list...".to_string())
    }
}
