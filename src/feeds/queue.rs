use super::api::ApiClient;
use super::{FeedData, FeedFetcher, QueueStat};
use crate::error::FetchError;
use async_trait::async_trait;

pub const EMAIL_PATH: &str = "email/";
pub const SMS_PATH: &str = "sms/";

/// Unanswered-message statistics for one queue (email or SMS).
pub struct QueueFetcher {
    api: ApiClient,
    path: &'static str,
}

impl QueueFetcher {
    pub fn email(api: ApiClient) -> Self {
        Self {
            api,
            path: EMAIL_PATH,
        }
    }

    pub fn sms(api: ApiClient) -> Self {
        Self {
            api,
            path: SMS_PATH,
        }
    }
}

#[async_trait]
impl FeedFetcher for QueueFetcher {
    async fn fetch(&self) -> Result<FeedData, FetchError> {
        let stat: QueueStat = self.api.get_json(self.path).await?;
        Ok(FeedData::Queue(stat))
    }
}
