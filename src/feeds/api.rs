use crate::config::ServerConfig;
use crate::error::FetchError;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Shared HTTP access to the board server. Cheap to clone; every fetcher
/// holds one. Cookies are kept so a successful login authenticates the
/// requests that follow it.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl ApiClient {
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&config.base_url).into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get(&self, path: &str) -> Result<(String, reqwest::Response), FetchError> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url,
                status: response.status(),
            });
        }

        Ok((url, response))
    }

    pub async fn get_text(&self, path: &str) -> Result<String, FetchError> {
        let (url, response) = self.get(path).await?;
        response
            .text()
            .await
            .map_err(|source| FetchError::Transport { url, source })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let (url, response) = self.get(path).await?;
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;
        decode(&url, &body)
    }

    pub async fn get_bytes(&self, path: &str) -> Result<(String, Vec<u8>), FetchError> {
        let (url, response) = self.get(path).await?;
        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;
        Ok((url, body.to_vec()))
    }

    /// POST `fields` as `application/x-www-form-urlencoded`.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<(), FetchError> {
        let url = self.url(path);
        let response = self
            .client
            .post(&url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(encode_form(fields))
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url,
                status: response.status(),
            });
        }
        Ok(())
    }
}

pub fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::directory::DirectoryFetcher;
    use crate::feeds::FeedFetcher;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers every connection with the same response.
    async fn serve(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}/", addr)
    }

    /// A local address with nothing listening on it.
    async fn closed_port() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/", addr)
    }

    /// Direct connections only, so proxy settings in the environment do not
    /// interfere with local servers.
    fn local_client(base_url: &str) -> ApiClient {
        ApiClient {
            client: reqwest::Client::builder()
                .no_proxy()
                .cookie_store(true)
                .build()
                .unwrap(),
            base_url: normalize_base_url(base_url).into(),
        }
    }

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ServerConfig {
            base_url: base_url.to_string(),
            ..ServerConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        assert_eq!(client("http://board:7267").base_url(), "http://board:7267/");
        assert_eq!(client("http://board:7267/").base_url(), "http://board:7267/");
    }

    #[test]
    fn test_bad_user_agent_fails_client_build() {
        let result = ApiClient::new(&ServerConfig {
            user_agent: "wall\nboard".to_string(),
            ..ServerConfig::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_url_joins_paths() {
        let api = client("http://board:7267");
        assert_eq!(api.url("version"), "http://board:7267/version");
        assert_eq!(api.url("/directory/"), "http://board:7267/directory/");
        assert_eq!(api.url("thumb/12"), "http://board:7267/thumb/12");
    }

    #[test]
    fn test_encode_form() {
        assert_eq!(
            encode_form(&[("username", "sam 12"), ("password", "a&b=c")]),
            "username=sam%2012&password=a%26b%3Dc"
        );
    }

    #[test]
    fn test_decode_error_keeps_url() {
        let err = decode::<Vec<u32>>("http://board/news", "{oops").unwrap_err();
        assert!(matches!(err, FetchError::Decode { ref url, .. } if url == "http://board/news"));
    }

    #[test]
    fn test_decode_wrong_shape_is_decode_error() {
        let err = decode::<bool>("http://board/authenticated/", "[1, 2]").unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_get_json_over_http() {
        let api = local_client(&serve("200 OK", "[1, 2, 3]").await);
        let values: Vec<u32> = api.get_json("news").await.unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_server_error_is_status_failure() {
        let api = local_client(&serve("500 Internal Server Error", "oops").await);
        let err = api.get_json::<Vec<u32>>("shifts").await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Status { status, .. } if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert!(!err.is_unreachable());
        assert!(err.url().ends_with("/shifts"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_failure() {
        let api = local_client(&serve("200 OK", "{\"unanswered\": ").await);
        let err = api.get_json::<Vec<u32>>("email/").await.unwrap_err();
        assert!(err.is_decode());
        assert!(!err.is_unreachable());
    }

    #[tokio::test]
    async fn test_post_form_over_http() {
        let api = local_client(&serve("200 OK", "").await);
        api.post_form("login/", &[("username", "sam"), ("password", "pw")])
            .await
            .unwrap();

        let api = local_client(&serve("403 Forbidden", "").await);
        let err = api
            .post_form("login/", &[("username", "sam"), ("password", "bad")])
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_closed_port_is_unreachable() {
        let api = local_client(&closed_port().await);
        let err = DirectoryFetcher::new(api).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
        assert!(err.is_unreachable());
    }
}
