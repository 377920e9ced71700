use crate::board::sentinel::{SentinelAction, VersionSentinel};
use crate::board::ticker::Cursor;
use crate::error::FetchError;
use crate::feeds::{JobKind, VersionToken};

/// What the main area shows: a placeholder until the first successful
/// fetch, an error while the server cannot be reached, otherwise content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Loading,
    Unreachable,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Volunteers,
    Shifts,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Volunteers, Screen::Shifts];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Volunteers => "Volunteers",
            Screen::Shifts => "Shifts",
        }
    }
}

/// Board-wide state shared by all jobs. Only the app loop writes to it,
/// one feed message at a time; jobs never see it.
#[derive(Debug, Clone)]
pub struct DisplayState {
    status: String,
    visibility: Visibility,
    sentinel: VersionSentinel,
    slideshow: Cursor,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            status: String::new(),
            visibility: Visibility::Loading,
            sentinel: VersionSentinel::new(),
            slideshow: Cursor::new(),
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Last writer wins.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn record_success(&mut self) {
        if self.visibility != Visibility::Content {
            tracing::info!("server reachable");
        }
        self.visibility = Visibility::Content;
    }

    /// Put the job's message on the status line. Panels keep whatever they
    /// last showed.
    pub fn record_failure(&mut self, job: JobKind, error: &FetchError) {
        if error.is_unreachable() {
            if self.visibility != Visibility::Unreachable {
                tracing::warn!(error = %error, "server unreachable");
            }
            self.visibility = Visibility::Unreachable;
        }
        if let Some(message) = job.failure_message() {
            self.set_status(message);
        }
    }

    pub fn observe_version(&mut self, token: VersionToken) -> SentinelAction {
        self.sentinel.observe(token)
    }

    pub fn screen(&self) -> Screen {
        let index = self.slideshow.current(Screen::ALL.len()).unwrap_or(0);
        Screen::ALL[index]
    }

    pub fn next_screen(&mut self) -> Screen {
        let index = self.slideshow.advance(Screen::ALL.len()).unwrap_or(0);
        Screen::ALL[index]
    }

    /// Manual skip. Always leaves the screen currently shown, even before
    /// the slideshow's first tick.
    pub fn skip_screen(&mut self) -> Screen {
        if self.slideshow.position().is_none() {
            self.slideshow.advance(Screen::ALL.len());
        }
        self.next_screen()
    }
}
