use crate::board::layout::{layout_volunteers, Cell, Grid, Role, SupportPolicy, VolunteerGrids};
use crate::error::BoardError;
use crate::feeds::FeedData;
use crate::ui::widgets::BoardWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

pub struct VolunteersWidget {
    title: String,
    columns: usize,
    ignored: Vec<String>,
    policy: SupportPolicy,
    grids: VolunteerGrids,
    loaded: bool,
    selected: usize,
}

impl VolunteersWidget {
    pub fn new(columns: usize, ignored: Vec<String>, policy: SupportPolicy) -> Self {
        Self {
            title: "Volunteers".to_string(),
            columns: columns.max(1),
            ignored,
            policy,
            grids: VolunteerGrids::default(),
            loaded: false,
            selected: 0,
        }
    }

    pub fn grids(&self) -> &VolunteerGrids {
        &self.grids
    }

    pub fn selected_cell(&self) -> Option<&Cell> {
        self.grids.cell(self.selected)
    }

    pub fn select_next(&mut self) {
        self.move_by(1);
    }

    pub fn select_previous(&mut self) {
        self.move_by(-1);
    }

    pub fn select_down(&mut self) {
        self.move_by(self.columns as isize);
    }

    pub fn select_up(&mut self) {
        self.move_by(-(self.columns as isize));
    }

    fn move_by(&mut self, delta: isize) {
        let len = self.grids.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
    }

    fn render_grid(
        &self,
        frame: &mut Frame,
        area: Rect,
        grid: &Grid,
        role: Role,
        offset: usize,
        focused: bool,
    ) {
        let (title, colour) = match role {
            Role::Listening => (" Listening volunteers ", Color::White),
            Role::Support => (" Support volunteers ", Color::Cyan),
        };
        let block = Block::default()
            .title(format!("{}({}) ", title, grid.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colour));

        let rows: Vec<Row> = grid
            .rows
            .iter()
            .enumerate()
            .map(|(r, cells)| {
                Row::new(cells.iter().enumerate().map(|(c, cell)| {
                    let index = offset + r * self.columns + c;
                    let mut style = Style::default().fg(colour);
                    let mut text = cell.volunteer.name.clone();
                    if cell.on_leave() {
                        style = style.fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
                        text.push_str(" (leave)");
                    }
                    if focused && index == self.selected {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }
                    ratatui::widgets::Cell::from(text).style(style)
                }))
            })
            .collect();

        let widths = vec![Constraint::Ratio(1, self.columns as u32); self.columns];
        let table = Table::new(rows, widths).block(block).column_spacing(1);
        frame.render_widget(table, area);
    }
}

impl BoardWidget for VolunteersWidget {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, frame: &mut Frame, area: Rect, selected: bool) {
        if !self.loaded {
            let block = Block::default()
                .title(format!(" {} ", self.title))
                .borders(Borders::ALL);
            frame.render_widget(Paragraph::new("Loading volunteer list...").block(block), area);
            return;
        }

        if self.grids.is_empty() {
            let block = Block::default()
                .title(format!(" {} ", self.title))
                .borders(Borders::ALL);
            frame.render_widget(Paragraph::new("No volunteers").block(block), area);
            return;
        }

        let listening_height = self.grids.listening.rows.len() as u16 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(listening_height), Constraint::Min(3)])
            .split(area);

        self.render_grid(
            frame,
            chunks[0],
            &self.grids.listening,
            Role::Listening,
            0,
            selected,
        );
        self.render_grid(
            frame,
            chunks[1],
            &self.grids.support,
            Role::Support,
            self.grids.listening.len(),
            selected,
        );
    }

    fn update_data(&mut self, data: FeedData) -> Result<(), BoardError> {
        if let FeedData::Directory(volunteers) = data {
            self.grids = layout_volunteers(&volunteers, self.columns, &self.ignored, &self.policy);
            self.loaded = true;
            self.move_by(0);
        }
        Ok(())
    }
}
