use crate::board::ticker::Cursor;
use crate::error::BoardError;
use crate::feeds::{FeedData, NewsItem};
use crate::ui::widgets::BoardWidget;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shows one news item at a time, moving on each ticker interval. The list
/// itself is refreshed by a separate job.
pub struct NewsWidget {
    title: String,
    items: Vec<NewsItem>,
    cursor: Cursor,
    loaded: bool,
}

impl Default for NewsWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsWidget {
    pub fn new() -> Self {
        Self {
            title: "News".to_string(),
            items: Vec::new(),
            cursor: Cursor::new(),
            loaded: false,
        }
    }

    pub fn advance(&mut self) -> Option<usize> {
        self.cursor.advance(self.items.len())
    }

    pub fn current_item(&self) -> Option<&NewsItem> {
        self.cursor
            .current(self.items.len())
            .and_then(|i| self.items.get(i))
    }

    fn body_lines(item: &NewsItem, width: u16) -> Vec<Line<'static>> {
        let width = (width as usize).max(10);
        item.body_text()
            .lines()
            .flat_map(|paragraph| {
                textwrap::wrap(paragraph, width)
                    .into_iter()
                    .map(|l| Line::from(l.into_owned()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl BoardWidget for NewsWidget {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, frame: &mut Frame, area: Rect, _selected: bool) {
        let position = match self.cursor.current(self.items.len()) {
            Some(i) => format!(" {} ({}/{}) ", self.title, i + 1, self.items.len()),
            None => format!(" {} ", self.title),
        };
        let mut block = Block::default().title(position).borders(Borders::ALL);

        let Some(item) = self.current_item() else {
            let message = if self.loaded { "No news" } else { "Loading news..." };
            frame.render_widget(Paragraph::new(message).block(block), area);
            return;
        };

        if item.sticky {
            block = block.style(Style::default().bg(Color::Yellow).fg(Color::Black));
        }

        let inner_width = area.width.saturating_sub(2);
        let mut lines = vec![
            Line::from(Span::styled(
                item.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                item.byline(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
        ];
        lines.extend(Self::body_lines(item, inner_width));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn update_data(&mut self, data: FeedData) -> Result<(), BoardError> {
        match data {
            FeedData::News(items) => {
                self.items = items;
                self.loaded = true;
                if self.cursor.position().is_none() {
                    self.advance();
                }
            }
            FeedData::Tick => {
                self.advance();
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::Creator;

    fn item(title: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            body: format!("<p>{} body</p>", title),
            creator: Creator {
                name: "Jo".to_string(),
            },
            created_at: None,
            sticky: false,
        }
    }

    fn titles(n: usize) -> FeedData {
        FeedData::News((0..n).map(|i| item(&format!("item {}", i))).collect())
    }

    #[test]
    fn test_first_list_shows_first_item() {
        let mut w = NewsWidget::new();
        assert!(w.current_item().is_none());
        w.update_data(titles(3)).unwrap();
        assert_eq!(w.current_item().unwrap().title, "item 0");
    }

    #[test]
    fn test_ticks_rotate_through_items() {
        let mut w = NewsWidget::new();
        w.update_data(titles(3)).unwrap();
        let mut seen = vec![w.current_item().unwrap().title.clone()];
        for _ in 0..5 {
            w.update_data(FeedData::Tick).unwrap();
            seen.push(w.current_item().unwrap().title.clone());
        }
        assert_eq!(
            seen,
            vec!["item 0", "item 1", "item 2", "item 0", "item 1", "item 2"]
        );
    }

    #[test]
    fn test_refresh_does_not_reset_cursor() {
        let mut w = NewsWidget::new();
        w.update_data(titles(3)).unwrap();
        w.update_data(FeedData::Tick).unwrap();
        w.update_data(titles(3)).unwrap();
        assert_eq!(w.current_item().unwrap().title, "item 1");
    }

    #[test]
    fn test_shrinking_list_still_shows_an_item() {
        let mut w = NewsWidget::new();
        w.update_data(titles(3)).unwrap();
        w.update_data(FeedData::Tick).unwrap();
        w.update_data(FeedData::Tick).unwrap();
        assert_eq!(w.current_item().unwrap().title, "item 2");
        w.update_data(titles(2)).unwrap();
        assert_eq!(w.current_item().unwrap().title, "item 0");
        w.update_data(FeedData::Tick).unwrap();
        assert_eq!(w.current_item().unwrap().title, "item 0");
        w.update_data(FeedData::Tick).unwrap();
        assert_eq!(w.current_item().unwrap().title, "item 1");

        w.update_data(titles(0)).unwrap();
        w.update_data(FeedData::Tick).unwrap();
        assert!(w.current_item().is_none());
    }

    #[test]
    fn test_body_is_wrapped() {
        let mut long = item("long");
        long.body = "<p>one two three four five six seven eight nine ten</p>".to_string();
        let lines = NewsWidget::body_lines(&long, 12);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.width() <= 12));
    }
}
