use super::api::ApiClient;
use super::{FeedData, FeedFetcher};
use crate::error::FetchError;
use async_trait::async_trait;

pub const AUTHENTICATED_PATH: &str = "authenticated/";
pub const LOGIN_PATH: &str = "login/";

/// Asks the server whether it currently holds working credentials.
pub struct AuthGateFetcher {
    api: ApiClient,
}

impl AuthGateFetcher {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FeedFetcher for AuthGateFetcher {
    async fn fetch(&self) -> Result<FeedData, FetchError> {
        let authenticated: bool = self.api.get_json(AUTHENTICATED_PATH).await?;
        Ok(FeedData::Authenticated(authenticated))
    }
}

/// One login attempt, run once through the scheduler so its outcome
/// arrives on the same channel as every other job.
pub struct LoginFetcher {
    api: ApiClient,
    username: String,
    password: String,
}

impl LoginFetcher {
    pub fn new(api: ApiClient, username: String, password: String) -> Self {
        Self {
            api,
            username,
            password,
        }
    }
}

#[async_trait]
impl FeedFetcher for LoginFetcher {
    async fn fetch(&self) -> Result<FeedData, FetchError> {
        self.api
            .post_form(
                LOGIN_PATH,
                &[
                    ("username", self.username.as_str()),
                    ("password", self.password.as_str()),
                ],
            )
            .await?;
        tracing::info!(username = %self.username, "login accepted");
        Ok(FeedData::LoggedIn)
    }

    fn loading_message(&self) -> Option<String> {
        Some("Logging in...".to_string())
    }
}

/// Status line for a rejected or failed login.
pub fn login_error_message(error: &FetchError) -> &'static str {
    if error.is_unauthorized() {
        "Login failed. Check the username and password."
    } else {
        "Unable to reach the server."
    }
}
