use crate::board::buckets::{bucket_shifts, ShiftBuckets, ShiftCategory};
use crate::error::BoardError;
use crate::feeds::{FeedData, Shift};
use crate::ui::widgets::BoardWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub struct ShiftsWidget {
    title: String,
    buckets: ShiftBuckets,
    loaded: bool,
}

impl Default for ShiftsWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftsWidget {
    pub fn new() -> Self {
        Self {
            title: "Shifts".to_string(),
            buckets: ShiftBuckets::default(),
            loaded: false,
        }
    }

    pub fn buckets(&self) -> &ShiftBuckets {
        &self.buckets
    }

    fn category_colour(category: ShiftCategory) -> Color {
        match category {
            ShiftCategory::Special => Color::Magenta,
            ShiftCategory::Past => Color::DarkGray,
            ShiftCategory::Present => Color::Green,
            ShiftCategory::Future => Color::Cyan,
        }
    }

    /// Lines a shift needs: borders, volunteer names, then the longest
    /// list of contact details.
    fn shift_height(shift: &Shift) -> u16 {
        let details = shift
            .volunteers
            .iter()
            .map(|v| v.details.len())
            .max()
            .unwrap_or(0);
        (2 + 1 + details) as u16
    }

    fn render_shift(frame: &mut Frame, area: Rect, category: ShiftCategory, shift: &Shift) {
        let colour = Self::category_colour(category);
        let title = if shift.time.is_empty() {
            format!(" {}: {} ", category.label(), shift.name.trim())
        } else {
            format!(" {}: {} ({}) ", category.label(), shift.name.trim(), shift.time)
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colour));

        if shift.volunteers.is_empty() {
            frame.render_widget(
                Paragraph::new("Nobody signed up")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                area,
            );
            return;
        }

        let cols = shift.volunteers.len();
        let header = Row::new(shift.volunteers.iter().map(|v| Cell::from(v.name.clone()))).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        let depth = shift
            .volunteers
            .iter()
            .map(|v| v.details.len())
            .max()
            .unwrap_or(0);
        let rows: Vec<Row> = (0..depth)
            .map(|row| {
                Row::new(shift.volunteers.iter().map(|v| {
                    v.details
                        .get(row)
                        .map(|d| Cell::from(format!("{}: {}", d.name, d.value)))
                        .unwrap_or_else(|| Cell::from(" "))
                }))
            })
            .collect();

        let widths = vec![Constraint::Ratio(1, cols as u32); cols];
        let table = Table::new(rows, widths).header(header).block(block);
        frame.render_widget(table, area);
    }
}

impl BoardWidget for ShiftsWidget {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, frame: &mut Frame, area: Rect, _selected: bool) {
        if !self.loaded || self.buckets.is_empty() {
            let message = if self.loaded {
                "No shifts"
            } else {
                "Loading shifts..."
            };
            let block = Block::default()
                .title(format!(" {} ", self.title))
                .borders(Borders::ALL);
            frame.render_widget(Paragraph::new(message).block(block), area);
            return;
        }

        let shifts: Vec<(ShiftCategory, &Shift)> = ShiftCategory::ALL
            .iter()
            .flat_map(|category| {
                self.buckets
                    .get(*category)
                    .iter()
                    .map(move |shift| (*category, shift))
            })
            .collect();

        let mut constraints: Vec<Constraint> = shifts
            .iter()
            .map(|(_, shift)| Constraint::Length(Self::shift_height(shift)))
            .collect();
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for ((category, shift), chunk) in shifts.iter().zip(chunks.iter()) {
            if chunk.height < 3 {
                break;
            }
            Self::render_shift(frame, *chunk, *category, shift);
        }
    }

    /// A roster with an unknown category is rejected whole and the last
    /// good one stays on screen.
    fn update_data(&mut self, data: FeedData) -> Result<(), BoardError> {
        if let FeedData::Shifts(shifts) = data {
            self.buckets = bucket_shifts(shifts)?;
            self.loaded = true;
        }
        Ok(())
    }
}
