use thiserror::Error;

/// Failure of a single fetch. Transport, status and decode failures are
/// all reported to the board the same way: one status line per job and a
/// retry on the next tick.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not decode image from {url}: {source}")]
    Image {
        url: String,
        #[source]
        source: image::ImageError,
    },
}

impl FetchError {
    /// True when the server could not be reached at all, as opposed to
    /// answering with something we did not like.
    pub fn is_unreachable(&self) -> bool {
        match self {
            FetchError::Transport { source, .. } => source.is_connect() || source.is_timeout(),
            _ => false,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. }
            | FetchError::Image { url, .. } => url,
        }
    }

    /// The server answered, but refused the credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            FetchError::Status { status, .. }
                if *status == reqwest::StatusCode::UNAUTHORIZED
                    || *status == reqwest::StatusCode::FORBIDDEN
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FetchError::Status { status, .. } if *status == reqwest::StatusCode::NOT_FOUND
        )
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode { .. } | FetchError::Image { .. })
    }
}

/// Well-formed data that breaks the contract the board relies on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("shift \"{shift}\" has unknown category \"{category}\"")]
    InvalidCategory { shift: String, category: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid support pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
