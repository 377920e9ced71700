use crate::board::layout::{Cell, Role};
use crate::feeds::thumb::PixelData;
use crate::feeds::Volunteer;
use crate::ui::center_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    Loading,
    Loaded(PixelData),
    Failed(String),
}

/// Details for one volunteer, opened from the volunteer grid.
#[derive(Debug, Clone)]
pub struct VolunteerPopup {
    volunteer: Volunteer,
    role: Role,
    link: String,
    thumbnail: Thumbnail,
}

impl VolunteerPopup {
    pub fn new(cell: &Cell, link: String) -> Self {
        Self {
            volunteer: cell.volunteer.clone(),
            role: cell.role,
            link,
            thumbnail: Thumbnail::Loading,
        }
    }

    pub fn volunteer_id(&self) -> u64 {
        self.volunteer.id
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }

    /// Thumbnails for a volunteer that is no longer shown are dropped.
    pub fn set_thumbnail(&mut self, volunteer_id: u64, image: PixelData) -> bool {
        if volunteer_id != self.volunteer.id {
            return false;
        }
        self.thumbnail = Thumbnail::Loaded(image);
        true
    }

    pub fn thumbnail_failed(&mut self, reason: impl Into<String>) {
        if self.thumbnail == Thumbnail::Loading {
            self.thumbnail = Thumbnail::Failed(reason.into());
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let modal_area = center_rect(70, 70, area);
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.volunteer.name));

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(10)])
            .split(inner);

        self.render_thumbnail(frame, chunks[0]);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Role: ", Style::default().fg(Color::Gray)),
                Span::raw(self.role.label()),
            ]),
        ];
        if self.volunteer.on_leave {
            lines.push(Line::from(Span::styled(
                "On leave",
                Style::default().fg(Color::Yellow),
            )));
        }
        lines.push(Line::from(""));
        for detail in &self.volunteer.details {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", detail.name), Style::default().fg(Color::Gray)),
                Span::raw(detail.value.clone()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            self.link.clone(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )));
        lines.push(Line::from(Span::styled(
            "o to open in browser | Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[1]);
    }

    fn render_thumbnail(&self, frame: &mut Frame, area: Rect) {
        let message = match &self.thumbnail {
            Thumbnail::Loaded(data) => {
                frame.render_widget(Paragraph::new(half_block_lines(data, area.height)), area);
                return;
            }
            Thumbnail::Loading => "Loading photo...",
            Thumbnail::Failed(_) => "No photo",
        };
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

/// Two pixel rows per terminal line: the upper pixel is the foreground of
/// `▀`, the lower one its background.
pub fn half_block_lines(data: &PixelData, max_lines: u16) -> Vec<Line<'static>> {
    data.pixels
        .chunks(2)
        .take(max_lines as usize)
        .map(|pair| {
            let top = &pair[0];
            let bottom = pair.get(1);
            let spans: Vec<Span> = top
                .iter()
                .enumerate()
                .map(|(x, upper)| {
                    let mut style = Style::default().fg(upper.to_ratatui_color());
                    if let Some(lower) = bottom.and_then(|row| row.get(x)) {
                        style = style.bg(lower.to_ratatui_color());
                    }
                    Span::styled("▀", style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
