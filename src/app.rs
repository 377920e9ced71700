use crate::board::layout::Role;
use crate::board::sentinel::SentinelAction;
use crate::config::{millis, Config};
use crate::error::{ConfigError, FetchError};
use crate::feeds::api::ApiClient;
use crate::feeds::auth::{login_error_message, AuthGateFetcher, LoginFetcher};
use crate::feeds::directory::DirectoryFetcher;
use crate::feeds::news::NewsFetcher;
use crate::feeds::queue::QueueFetcher;
use crate::feeds::shifts::ShiftsFetcher;
use crate::feeds::thumb::{thumb_path, ThumbFetcher};
use crate::feeds::tick::TickFetcher;
use crate::feeds::version::VersionFetcher;
use crate::feeds::{FeedData, FeedMessage, JobKind};
use crate::poller::{Job, ScheduleError, Scheduler};
use crate::state::{DisplayState, Screen};
use crate::ui;
use crate::ui::widgets::login::LoginForm;
use crate::ui::widgets::news::NewsWidget;
use crate::ui::widgets::popup::VolunteerPopup;
use crate::ui::widgets::queue::QueueWidget;
use crate::ui::widgets::shifts::ShiftsWidget;
use crate::ui::widgets::volunteers::VolunteersWidget;
use crate::ui::widgets::BoardWidget;
use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Thumbnail width in pixels; the popup leaves a column this wide for it.
const THUMB_SIZE: u32 = 24;

/// Why the event loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    /// Rebuild the board from a fresh config load.
    Reload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Waiting for the server to say whether it is logged in.
    Checking,
    Login,
    Board,
}

pub struct App {
    config: Config,
    api: ApiClient,
    rx: UnboundedReceiver<FeedMessage>,
    scheduler: Scheduler,
    state: DisplayState,
    mode: Mode,
    pub volunteers: VolunteersWidget,
    pub shifts: ShiftsWidget,
    pub email: QueueWidget,
    pub sms: QueueWidget,
    pub news: NewsWidget,
    pub popup: Option<VolunteerPopup>,
    pub login: Option<LoginForm>,
}

impl App {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let policy = config.support_policy()?;
        let styles = config.tier_styles()?;
        let api = ApiClient::new(&config.server)?;
        let (tx, rx) = mpsc::unbounded_channel();

        let volunteers = VolunteersWidget::new(
            config.volunteers.columns,
            config.volunteers.ignored.clone(),
            policy,
        );

        Ok(Self {
            api,
            rx,
            scheduler: Scheduler::new(tx),
            state: DisplayState::new(),
            mode: Mode::Checking,
            volunteers,
            shifts: ShiftsWidget::new(),
            email: QueueWidget::new("Email", styles.clone()),
            sms: QueueWidget::new("SMS", styles),
            news: NewsWidget::new(),
            popup: None,
            login: None,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scheduled_jobs(&self) -> usize {
        self.scheduler.len()
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<Exit> {
        self.start()?;
        let mut events = EventStream::new();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let exit = tokio::select! {
                message = self.rx.recv() => match message {
                    Some(message) => self.handle_message(message),
                    // The scheduler holds the sender for as long as the app lives.
                    None => Some(Exit::Quit),
                },
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key)
                    }
                    Some(Ok(_)) => None,
                    Some(Err(e)) => return Err(e.into()),
                    None => Some(Exit::Quit),
                },
            };
            if let Some(exit) = exit {
                return Ok(exit);
            }
        }
    }

    /// Poll the auth gate until the server answers. The board jobs start
    /// once it says yes, or straight away when the gate is turned off.
    pub fn start(&mut self) -> Result<(), ScheduleError> {
        if !self.config.server.auth_gate {
            return self.start_board();
        }
        self.scheduler.cancel_all();
        self.mode = Mode::Checking;
        self.scheduler.schedule(Job::new(
            JobKind::Authentication,
            millis(self.config.intervals.version),
            AuthGateFetcher::new(self.api.clone()),
        ))?;
        Ok(())
    }

    fn start_board(&mut self) -> Result<(), ScheduleError> {
        self.scheduler.cancel_all();
        self.mode = Mode::Board;
        self.login = None;

        let intervals = self.config.intervals.clone();
        let api = &self.api;
        let jobs = [
            Job::new(
                JobKind::Version,
                millis(intervals.version),
                VersionFetcher::new(api.clone()),
            ),
            Job::new(
                JobKind::Directory,
                millis(intervals.directory),
                DirectoryFetcher::new(api.clone()),
            ),
            Job::new(
                JobKind::Email,
                millis(intervals.email),
                QueueFetcher::email(api.clone()),
            ),
            Job::new(
                JobKind::Sms,
                millis(intervals.sms),
                QueueFetcher::sms(api.clone()),
            ),
            Job::new(
                JobKind::Shifts,
                millis(intervals.shifts),
                ShiftsFetcher::new(api.clone()),
            ),
            Job::new(
                JobKind::News,
                millis(intervals.news_refresh),
                NewsFetcher::new(api.clone()),
            ),
            Job::new(
                JobKind::NewsTicker,
                millis(intervals.news_ticker),
                TickFetcher,
            ),
            Job::new(
                JobKind::Slideshow,
                millis(intervals.slideshow),
                TickFetcher,
            ),
        ];

        for job in jobs {
            self.scheduler.schedule(job)?;
        }
        tracing::info!(jobs = self.scheduler.len(), "board started");
        Ok(())
    }

    fn begin_board(&mut self) {
        if let Err(e) = self.start_board() {
            tracing::error!(error = %e, "could not start board jobs");
            self.state.set_status(format!("Unable to start the board: {}", e));
        }
    }

    fn show_login(&mut self) {
        self.scheduler.cancel_all();
        self.mode = Mode::Login;
        if self.login.is_none() {
            self.login = Some(LoginForm::new());
        }
    }

    pub fn handle_message(&mut self, message: FeedMessage) -> Option<Exit> {
        let FeedMessage { job, result } = message;
        match result {
            Err(error) => {
                self.handle_failure(job, &error);
                None
            }
            Ok(FeedData::Loading(status)) => {
                self.state.set_status(status);
                None
            }
            Ok(data) => {
                if !matches!(job, JobKind::NewsTicker | JobKind::Slideshow) {
                    self.state.record_success();
                }
                self.apply(job, data)
            }
        }
    }

    fn handle_failure(&mut self, job: JobKind, error: &FetchError) {
        if job == JobKind::Authentication && error.is_not_found() {
            if self.mode == Mode::Checking {
                tracing::info!("server has no auth gate, starting board");
                self.begin_board();
            }
            return;
        }

        self.state.record_failure(job, error);
        match job {
            JobKind::Version
            | JobKind::Directory
            | JobKind::Email
            | JobKind::Sms
            | JobKind::Shifts
            | JobKind::News
                if error.is_unauthorized() && self.mode == Mode::Board =>
            {
                tracing::warn!(job = ?job, "session rejected by server");
                self.show_login();
            }
            JobKind::Login => {
                let message = login_error_message(error);
                if let Some(form) = self.login.as_mut() {
                    form.rejected(message);
                }
            }
            JobKind::Thumbnail => {
                if let Some(popup) = self.popup.as_mut() {
                    if error.url().ends_with(&thumb_path(popup.volunteer_id())) {
                        popup.thumbnail_failed(error.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    fn apply(&mut self, job: JobKind, data: FeedData) -> Option<Exit> {
        match data {
            FeedData::Authenticated(true) => {
                if self.mode != Mode::Board {
                    self.begin_board();
                }
            }
            // Only the gate's answer while checking counts. A late answer
            // from a gate that was already cancelled is ignored.
            FeedData::Authenticated(false) => {
                if self.mode == Mode::Checking {
                    tracing::info!("server is not logged in");
                    self.show_login();
                }
            }
            // The server only marks itself authenticated once a data request
            // has gone through with the new credentials, so asking the gate
            // again here would still get `false`.
            FeedData::LoggedIn => self.begin_board(),
            FeedData::Version(token) => {
                if self.state.observe_version(token) == SentinelAction::Reload {
                    tracing::info!("server version changed, reloading");
                    return Some(Exit::Reload);
                }
            }
            data @ FeedData::Directory(_) => {
                update_widget(&mut self.volunteers, &mut self.state, data);
                let now = jiff::Zoned::now().strftime("%H:%M:%S");
                self.state
                    .set_status(format!("Volunteers last loaded {}.", now));
            }
            data @ FeedData::Shifts(_) => {
                update_widget(&mut self.shifts, &mut self.state, data);
            }
            data @ FeedData::Queue(_) => {
                let widget = match job {
                    JobKind::Sms => &mut self.sms,
                    _ => &mut self.email,
                };
                update_widget(widget, &mut self.state, data);
            }
            data @ FeedData::News(_) => {
                update_widget(&mut self.news, &mut self.state, data);
            }
            FeedData::Tick => match job {
                JobKind::Slideshow => {
                    self.state.next_screen();
                }
                _ => update_widget(&mut self.news, &mut self.state, FeedData::Tick),
            },
            FeedData::Thumbnail {
                volunteer_id,
                image,
            } => {
                if let Some(popup) = self.popup.as_mut() {
                    popup.set_thumbnail(volunteer_id, image);
                }
            }
            FeedData::Loading(_) => {}
        }
        None
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Exit> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Exit::Quit);
        }

        if self.mode == Mode::Login {
            return self.handle_login_key(key);
        }

        if self.popup.is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.popup = None,
                KeyCode::Char('o') => {
                    let link = self.popup.as_ref().map(|p| p.link().to_string());
                    if let Some(link) = link {
                        self.open_link(&link);
                    }
                }
                KeyCode::Char('q') => return Some(Exit::Quit),
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(Exit::Quit),
            KeyCode::Char('r') => return Some(Exit::Reload),
            KeyCode::Tab => {
                self.state.skip_screen();
            }
            _ if self.state.screen() != Screen::Volunteers => {}
            KeyCode::Left => self.volunteers.select_previous(),
            KeyCode::Right => self.volunteers.select_next(),
            KeyCode::Up => self.volunteers.select_up(),
            KeyCode::Down => self.volunteers.select_down(),
            KeyCode::Enter => self.open_popup(),
            KeyCode::Char('o') => {
                if let Some(cell) = self.volunteers.selected_cell() {
                    let link = self.config.volunteers.link_for(cell.volunteer.id);
                    self.open_link(&link);
                }
            }
            _ => {}
        }
        None
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> Option<Exit> {
        let Some(form) = self.login.as_mut() else {
            return None;
        };
        match key.code {
            KeyCode::Esc => return Some(Exit::Quit),
            KeyCode::Tab | KeyCode::BackTab => form.toggle_focus(),
            KeyCode::Backspace => form.delete_char(),
            KeyCode::Char(c) => form.add_char(c),
            KeyCode::Enter => {
                if let Some((username, password)) = form.submit() {
                    self.scheduler.spawn_once(
                        JobKind::Login,
                        LoginFetcher::new(self.api.clone(), username, password),
                    );
                }
            }
            _ => {}
        }
        None
    }

    fn open_popup(&mut self) {
        let Some(cell) = self.volunteers.selected_cell() else {
            return;
        };
        let link = self.config.volunteers.link_for(cell.volunteer.id);
        let popup = VolunteerPopup::new(cell, link);
        let id = popup.volunteer_id();
        tracing::debug!(volunteer = id, support = cell.role == Role::Support, "opening volunteer");
        self.popup = Some(popup);
        self.scheduler.spawn_once(
            JobKind::Thumbnail,
            ThumbFetcher::new(self.api.clone(), id, THUMB_SIZE),
        );
    }

    fn open_link(&mut self, link: &str) {
        if let Err(e) = open::that(link) {
            tracing::warn!(link, error = %e, "could not open browser");
            self.state.set_status(format!("Could not open {}", link));
        }
    }
}

/// A rejected update leaves the panel as it was and says why on the status
/// line.
fn update_widget(widget: &mut dyn BoardWidget, state: &mut DisplayState, data: FeedData) {
    if let Err(e) = widget.update_data(data) {
        tracing::error!(widget = widget.title(), error = %e, "rejected update");
        state.set_status(format!(
            "Unable to display {}: {}",
            widget.title().to_lowercase(),
            e
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::{Shift, Volunteer, VersionToken};
    use crate::state::Visibility;

    fn app() -> App {
        let mut config = Config::default();
        // Nothing listens here; background fetches just fail.
        config.server.base_url = "http://127.0.0.1:9/".to_string();
        App::new(config).unwrap()
    }

    fn ok(job: JobKind, data: FeedData) -> FeedMessage {
        FeedMessage {
            job,
            result: Ok(data),
        }
    }

    fn decode_failure(job: JobKind) -> FeedMessage {
        FeedMessage {
            job,
            result: Err(FetchError::Decode {
                url: "http://127.0.0.1:9/x".to_string(),
                source: serde_json::from_str::<bool>("x").unwrap_err(),
            }),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn volunteer(id: u64, name: &str) -> Volunteer {
        Volunteer {
            id,
            name: name.to_string(),
            on_leave: false,
            is_support_person: None,
            details: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_start_polls_auth_gate() {
        let mut app = app();
        app.start().unwrap();
        assert_eq!(app.mode(), Mode::Checking);
        assert_eq!(app.scheduled_jobs(), 1);
    }

    #[tokio::test]
    async fn test_authenticated_starts_board_jobs() {
        let mut app = app();
        app.start().unwrap();
        app.handle_message(ok(JobKind::Authentication, FeedData::Authenticated(true)));
        assert_eq!(app.mode(), Mode::Board);
        assert_eq!(app.scheduled_jobs(), 8);
        assert_eq!(app.state().visibility(), Visibility::Content);

        // A late gate answer does not start a second set.
        app.handle_message(ok(JobKind::Authentication, FeedData::Authenticated(true)));
        assert_eq!(app.scheduled_jobs(), 8);
    }

    #[tokio::test]
    async fn test_unauthenticated_shows_login() {
        let mut app = app();
        app.start().unwrap();
        app.handle_message(ok(JobKind::Authentication, FeedData::Authenticated(false)));
        assert_eq!(app.mode(), Mode::Login);
        assert_eq!(app.scheduled_jobs(), 0);
        assert!(app.login.is_some());

        for c in "sam".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert!(app.login.as_ref().unwrap().is_submitting());

        app.handle_message(ok(JobKind::Login, FeedData::LoggedIn));
        assert_eq!(app.mode(), Mode::Board);
        assert_eq!(app.scheduled_jobs(), 8);
        assert!(app.login.is_none());
    }

    #[tokio::test]
    async fn test_login_starts_board_even_if_gate_still_says_no() {
        let mut app = app();
        app.start().unwrap();
        app.handle_message(ok(JobKind::Authentication, FeedData::Authenticated(false)));
        for c in "sam".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "pw".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        app.handle_message(ok(JobKind::Login, FeedData::LoggedIn));

        // A gate request already in flight answers with the old state.
        app.handle_message(ok(JobKind::Authentication, FeedData::Authenticated(false)));
        assert_eq!(app.mode(), Mode::Board);
        assert_eq!(app.scheduled_jobs(), 8);
        assert!(app.login.is_none());
    }

    #[tokio::test]
    async fn test_rejected_session_returns_to_login() {
        let mut app = app();
        app.handle_message(ok(JobKind::Login, FeedData::LoggedIn));
        assert_eq!(app.mode(), Mode::Board);

        app.handle_message(FeedMessage {
            job: JobKind::Directory,
            result: Err(FetchError::Status {
                url: "http://127.0.0.1:9/directory/".to_string(),
                status: reqwest::StatusCode::FORBIDDEN,
            }),
        });
        assert_eq!(app.mode(), Mode::Login);
        assert_eq!(app.scheduled_jobs(), 0);
        assert!(app.login.is_some());
    }

    #[tokio::test]
    async fn test_missing_gate_route_starts_board() {
        let mut app = app();
        app.start().unwrap();
        for _ in 0..3 {
            app.handle_message(FeedMessage {
                job: JobKind::Authentication,
                result: Err(FetchError::Status {
                    url: "http://127.0.0.1:9/authenticated/".to_string(),
                    status: reqwest::StatusCode::NOT_FOUND,
                }),
            });
        }
        assert_eq!(app.mode(), Mode::Board);
        assert_eq!(app.scheduled_jobs(), 8);
        assert_ne!(app.state().status(), "Unable to reach the server.");
    }

    #[test]
    fn test_client_build_error_is_reported() {
        let mut config = Config::default();
        config.server.user_agent = "wall\nboard".to_string();
        assert!(matches!(App::new(config), Err(ConfigError::Client(_))));
    }

    #[tokio::test]
    async fn test_disabled_gate_starts_board_directly() {
        let mut config = Config::default();
        config.server.base_url = "http://127.0.0.1:9/".to_string();
        config.server.auth_gate = false;
        let mut app = App::new(config).unwrap();
        app.start().unwrap();
        assert_eq!(app.mode(), Mode::Board);
        assert_eq!(app.scheduled_jobs(), 8);
    }

    #[tokio::test]
    async fn test_rejected_login_keeps_form_open() {
        let mut app = app();
        app.handle_message(ok(JobKind::Authentication, FeedData::Authenticated(false)));
        app.handle_key(key(KeyCode::Char('s')));
        app.handle_key(key(KeyCode::Enter));

        app.handle_message(FeedMessage {
            job: JobKind::Login,
            result: Err(FetchError::Status {
                url: "http://127.0.0.1:9/login/".to_string(),
                status: reqwest::StatusCode::UNAUTHORIZED,
            }),
        });
        let form = app.login.as_ref().unwrap();
        assert!(!form.is_submitting());
        assert_eq!(
            form.error(),
            Some("Login failed. Check the username and password.")
        );
        assert_eq!(app.mode(), Mode::Login);
    }

    #[tokio::test]
    async fn test_login_escape_quits() {
        let mut app = app();
        app.handle_message(ok(JobKind::Authentication, FeedData::Authenticated(false)));
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), None);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Some(Exit::Quit));
    }

    #[tokio::test]
    async fn test_version_change_reloads_once() {
        let mut app = app();
        let v = |s: &str| ok(JobKind::Version, FeedData::Version(VersionToken(s.to_string())));
        assert_eq!(app.handle_message(v("1.0")), None);
        assert_eq!(app.handle_message(v("1.0")), None);
        assert_eq!(app.handle_message(v("1.1")), Some(Exit::Reload));
        assert_eq!(app.handle_message(v("1.2")), None);
    }

    #[tokio::test]
    async fn test_directory_updates_status() {
        let mut app = app();
        app.handle_message(ok(
            JobKind::Directory,
            FeedData::Loading("Loading volunteer list...".to_string()),
        ));
        assert_eq!(app.state().status(), "Loading volunteer list...");
        app.handle_message(ok(
            JobKind::Directory,
            FeedData::Directory(vec![volunteer(1, "A"), volunteer(2, "B S1")]),
        ));
        assert!(app.state().status().starts_with("Volunteers last loaded "));
        assert_eq!(app.volunteers.grids().len(), 2);
    }

    #[tokio::test]
    async fn test_failures_set_status_and_keep_panels() {
        let mut app = app();
        app.handle_message(ok(
            JobKind::Directory,
            FeedData::Directory(vec![volunteer(1, "A")]),
        ));
        app.handle_message(decode_failure(JobKind::Directory));
        assert_eq!(app.state().status(), "Could not get volunteer list.");
        assert_eq!(app.volunteers.grids().len(), 1);
    }

    #[tokio::test]
    async fn test_bad_shift_category_reported() {
        let mut app = app();
        app.handle_message(ok(
            JobKind::Shifts,
            FeedData::Shifts(vec![Shift {
                id: None,
                name: "Evening".to_string(),
                time: String::new(),
                category: "soon".to_string(),
                volunteers: Vec::new(),
            }]),
        ));
        assert_eq!(
            app.state().status(),
            "Unable to display shifts: shift \"Evening\" has unknown category \"soon\""
        );
    }

    #[tokio::test]
    async fn test_ticks_do_not_mark_server_reachable() {
        let mut app = app();
        app.handle_message(ok(JobKind::NewsTicker, FeedData::Tick));
        assert_eq!(app.state().visibility(), Visibility::Loading);
        app.handle_message(ok(JobKind::Slideshow, FeedData::Tick));
        assert_eq!(app.state().screen(), Screen::Volunteers);
        app.handle_message(ok(JobKind::Slideshow, FeedData::Tick));
        assert_eq!(app.state().screen(), Screen::Shifts);
    }

    #[tokio::test]
    async fn test_queue_updates_matching_widget() {
        let mut app = app();
        app.handle_message(ok(
            JobKind::Sms,
            FeedData::Queue(crate::feeds::QueueStat {
                unanswered: 4,
                oldest: "1:10".to_string(),
            }),
        ));
        assert!(app.email.stat().is_none());
        assert_eq!(app.sms.stat().unwrap().unanswered, 4);
    }

    #[tokio::test]
    async fn test_board_keys() {
        let mut app = app();
        app.handle_message(ok(
            JobKind::Directory,
            FeedData::Directory(vec![volunteer(1, "A"), volunteer(2, "B")]),
        ));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.popup.as_ref().unwrap().volunteer_id(), 2);

        // Esc closes the popup before it quits.
        assert_eq!(app.handle_key(key(KeyCode::Esc)), None);
        assert!(app.popup.is_none());

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().screen(), Screen::Shifts);
        assert_eq!(app.handle_key(key(KeyCode::Char('r'))), Some(Exit::Reload));
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Some(Exit::Quit));
    }

    #[tokio::test]
    async fn test_stale_thumbnail_failure_ignored() {
        let mut app = app();
        app.handle_message(ok(
            JobKind::Directory,
            FeedData::Directory(vec![volunteer(1, "A"), volunteer(2, "B")]),
        ));
        app.handle_key(key(KeyCode::Enter));
        app.handle_message(FeedMessage {
            job: JobKind::Thumbnail,
            result: Err(FetchError::Status {
                url: "http://127.0.0.1:9/thumb/2".to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            }),
        });
        assert_eq!(
            app.popup.as_ref().unwrap().thumbnail(),
            &crate::ui::widgets::popup::Thumbnail::Loading
        );
    }

    struct RejectingWidget;

    impl BoardWidget for RejectingWidget {
        fn title(&self) -> &str {
            "Roster"
        }

        fn render(&self, _frame: &mut ratatui::Frame, _area: ratatui::layout::Rect, _selected: bool) {}

        fn update_data(&mut self, _data: FeedData) -> Result<(), crate::error::BoardError> {
            Err(crate::error::BoardError::InvalidCategory {
                shift: "Late".to_string(),
                category: "never".to_string(),
            })
        }
    }

    #[test]
    fn test_widget_errors_reach_status_line() {
        let mut state = DisplayState::new();
        update_widget(&mut RejectingWidget, &mut state, FeedData::Tick);
        assert_eq!(
            state.status(),
            "Unable to display roster: shift \"Late\" has unknown category \"never\""
        );
    }
}
