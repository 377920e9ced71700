use super::api::ApiClient;
use super::{FeedData, FeedFetcher, Shift};
use crate::error::FetchError;
use async_trait::async_trait;

pub const SHIFTS_PATH: &str = "shifts";

pub struct ShiftsFetcher {
    api: ApiClient,
}

impl ShiftsFetcher {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FeedFetcher for ShiftsFetcher {
    async fn fetch(&self) -> Result<FeedData, FetchError> {
        let shifts: Vec<Shift> = self.api.get_json(SHIFTS_PATH).await?;
        Ok(FeedData::Shifts(shifts))
    }
}
