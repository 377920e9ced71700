use super::{FeedData, FeedFetcher};
use crate::error::FetchError;
use async_trait::async_trait;

/// A job with nothing to fetch. It only marks the passage of an interval,
/// for the news ticker and the slideshow.
pub struct TickFetcher;

#[async_trait]
impl FeedFetcher for TickFetcher {
    async fn fetch(&self) -> Result<FeedData, FetchError> {
        Ok(FeedData::Tick)
    }
}
