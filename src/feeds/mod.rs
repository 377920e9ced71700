pub mod api;
pub mod auth;
pub mod directory;
pub mod news;
pub mod queue;
pub mod shifts;
pub mod thumb;
pub mod tick;
pub mod version;

use crate::error::FetchError;
use async_trait::async_trait;
use serde::Deserialize;

/// Which job produced a message. Also decides the status line shown when
/// that job fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    Authentication,
    Login,
    Version,
    Directory,
    Email,
    Sms,
    Shifts,
    News,
    NewsTicker,
    Slideshow,
    Thumbnail,
}

impl JobKind {
    pub fn failure_message(self) -> Option<&'static str> {
        match self {
            JobKind::Authentication => Some("Unable to reach the server."),
            JobKind::Directory => Some("Could not get volunteer list."),
            JobKind::Email => Some("Unable to retrieve email statistics"),
            JobKind::Sms => Some("Unable to retrieve SMS statistics"),
            JobKind::Shifts => Some("Unable to load shifts."),
            JobKind::News => Some("Unable to load news."),
            // Reported where they happen, or not at all.
            JobKind::Login
            | JobKind::Version
            | JobKind::NewsTicker
            | JobKind::Slideshow
            | JobKind::Thumbnail => None,
        }
    }
}

#[derive(Debug)]
pub struct FeedMessage {
    pub job: JobKind,
    pub result: Result<FeedData, FetchError>,
}

#[derive(Debug, Clone)]
pub enum FeedData {
    Loading(String),
    Authenticated(bool),
    LoggedIn,
    Version(VersionToken),
    Directory(Vec<Volunteer>),
    Shifts(Vec<Shift>),
    Queue(QueueStat),
    News(Vec<NewsItem>),
    Tick,
    Thumbnail {
        volunteer_id: u64,
        image: thumb::PixelData,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Detail {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Volunteer {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub on_leave: bool,
    /// Only sent by some server versions.
    #[serde(default)]
    pub is_support_person: Option<bool>,
    #[serde(default)]
    pub details: Vec<Detail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Shift {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub time: String,
    /// Checked when the shifts are bucketed, not when they are decoded.
    #[serde(rename = "type", alias = "category")]
    pub category: String,
    #[serde(default)]
    pub volunteers: Vec<Volunteer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Creator {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub creator: Creator,
    #[serde(default)]
    pub created_at: Option<jiff::Timestamp>,
    #[serde(default)]
    pub sticky: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueueStat {
    pub unanswered: u64,
    pub oldest: String,
}

/// Opaque server version. Only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionToken(pub String);

#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self) -> Result<FeedData, FetchError>;

    /// Status line to show while a fetch is running, if any.
    fn loading_message(&self) -> Option<String> {
        None
    }
}
