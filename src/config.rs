use crate::board::layout::SupportPolicy;
use crate::board::severity::TierStyles;
use crate::error::ConfigError;
use ratatui::style::Color;
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_SUPPORT_PATTERN: &str = r"[^- ]+[- ]S[0-9]+";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub server: ServerConfig,
    pub intervals: IntervalConfig,
    pub volunteers: VolunteerConfig,
    pub tiers: TierConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Wall Board".to_string(),
            server: ServerConfig::default(),
            intervals: IntervalConfig::default(),
            volunteers: VolunteerConfig::default(),
            tiers: TierConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Ask `authenticated/` before starting the board. Servers without that
    /// route can turn this off.
    pub auth_gate: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:7267/".to_string(),
            request_timeout_secs: 30,
            user_agent: concat!("wallboard/", env!("CARGO_PKG_VERSION")).to_string(),
            auth_gate: true,
        }
    }
}

/// Poll intervals, all in milliseconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IntervalConfig {
    pub version: u64,
    pub directory: u64,
    pub email: u64,
    pub sms: u64,
    pub shifts: u64,
    pub news_refresh: u64,
    pub news_ticker: u64,
    pub slideshow: u64,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            version: 20_000,
            directory: 3_600_000,
            email: 60_000,
            sms: 60_000,
            shifts: 60_000,
            news_refresh: 60_000,
            news_ticker: 15_000,
            slideshow: 30_000,
        }
    }
}

impl IntervalConfig {
    fn named(&self) -> [(&'static str, u64); 8] {
        [
            ("version", self.version),
            ("directory", self.directory),
            ("email", self.email),
            ("sms", self.sms),
            ("shifts", self.shifts),
            ("news_refresh", self.news_refresh),
            ("news_ticker", self.news_ticker),
            ("slideshow", self.slideshow),
        ]
    }
}

pub fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VolunteerConfig {
    pub columns: usize,
    pub ignored: Vec<String>,
    pub support: SupportConfig,
    /// Link opened for the selected volunteer. `{id}` is replaced with the
    /// volunteer id.
    pub directory_link: String,
}

impl Default for VolunteerConfig {
    fn default() -> Self {
        Self {
            columns: 12,
            ignored: vec!["Sam 123".to_string(), "Rotaonly".to_string()],
            support: SupportConfig::default(),
            directory_link: "https://www.3r.org.uk/directory/{id}".to_string(),
        }
    }
}

impl VolunteerConfig {
    pub fn link_for(&self, id: u64) -> String {
        self.directory_link.replace("{id}", &id.to_string())
    }
}

/// Where the board learns whether a volunteer is support staff. Exactly one
/// source is used; there is no fallback between them.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SupportConfig {
    NamePattern { pattern: String },
    ServerFlag,
}

impl Default for SupportConfig {
    fn default() -> Self {
        SupportConfig::NamePattern {
            pattern: DEFAULT_SUPPORT_PATTERN.to_string(),
        }
    }
}

/// Background colours for the four severity tiers, least severe first.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TierConfig {
    pub colors: [String; 4],
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            colors: [
                "green".to_string(),
                "#ffa500".to_string(),
                "red".to_string(),
                "black".to_string(),
            ],
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wallboard").join("config.toml"))
    }

    /// Load from an explicit path, or from the default location when `path`
    /// is `None`. A missing default file yields the built-in defaults; a
    /// missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, ms) in self.intervals.named() {
            if ms == 0 {
                return Err(ConfigError::Invalid(format!(
                    "interval \"{}\" must be greater than zero",
                    name
                )));
            }
        }
        if self.volunteers.columns == 0 {
            return Err(ConfigError::Invalid(
                "volunteers.columns must be at least 1".to_string(),
            ));
        }
        if self.server.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("server.base_url is empty".to_string()));
        }
        self.support_policy()?;
        self.tier_styles()?;
        Ok(())
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.server.base_url = url;
        }
        self
    }

    pub fn support_policy(&self) -> Result<SupportPolicy, ConfigError> {
        match &self.volunteers.support {
            SupportConfig::NamePattern { pattern } => {
                Ok(SupportPolicy::NamePattern(Regex::new(pattern)?))
            }
            SupportConfig::ServerFlag => Ok(SupportPolicy::ServerFlag),
        }
    }

    pub fn tier_styles(&self) -> Result<TierStyles, ConfigError> {
        let mut colors = [Color::Reset; 4];
        for (slot, name) in colors.iter_mut().zip(self.tiers.colors.iter()) {
            *slot = Color::from_str(name)
                .map_err(|_| ConfigError::Invalid(format!("unknown tier colour \"{}\"", name)))?;
        }
        Ok(TierStyles::new(colors))
    }
}
