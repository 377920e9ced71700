use crate::board::severity::{Severity, TierStyles};
use crate::error::BoardError;
use crate::feeds::{FeedData, QueueStat};
use crate::ui::widgets::BoardWidget;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Unanswered count and oldest age for one queue, coloured by how long the
/// oldest message has waited.
pub struct QueueWidget {
    title: String,
    stat: Option<QueueStat>,
    styles: TierStyles,
}

impl QueueWidget {
    pub fn new(title: impl Into<String>, styles: TierStyles) -> Self {
        Self {
            title: title.into(),
            stat: None,
            styles,
        }
    }

    pub fn stat(&self) -> Option<&QueueStat> {
        self.stat.as_ref()
    }

    pub fn severity(&self) -> Option<Severity> {
        self.stat.as_ref().map(|s| Severity::from_oldest(&s.oldest))
    }
}

impl BoardWidget for QueueWidget {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, frame: &mut Frame, area: Rect, _selected: bool) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL);

        let line = match (&self.stat, self.severity()) {
            (Some(stat), Some(severity)) => {
                let style = self.styles.style(severity);
                Line::from(vec![
                    Span::styled("Unanswered ", Style::default().fg(Color::Gray)),
                    Span::styled(format!(" {} ", stat.unanswered), style),
                    Span::styled("   Oldest ", Style::default().fg(Color::Gray)),
                    Span::styled(format!(" {} ", stat.oldest), style),
                ])
            }
            _ => Line::from(Span::styled("Loading...", Style::default().fg(Color::DarkGray))),
        };

        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn update_data(&mut self, data: FeedData) -> Result<(), BoardError> {
        if let FeedData::Queue(stat) = data {
            self.stat = Some(stat);
        }
        Ok(())
    }
}
