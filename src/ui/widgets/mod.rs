pub mod login;
pub mod news;
pub mod popup;
pub mod queue;
pub mod shifts;
pub mod volunteers;

use crate::error::BoardError;
use crate::feeds::FeedData;
use ratatui::{layout::Rect, Frame};

/// A panel that draws one feed. `update_data` replaces what the panel shows;
/// when it fails the panel keeps its previous contents.
pub trait BoardWidget {
    fn title(&self) -> &str;

    fn render(&self, frame: &mut Frame, area: Rect, selected: bool);

    fn update_data(&mut self, data: FeedData) -> Result<(), BoardError>;
}
