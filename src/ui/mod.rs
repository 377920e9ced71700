pub mod widgets;

use crate::app::{App, Mode};
use crate::state::{Screen, Visibility};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use widgets::BoardWidget;

const NEWS_HEIGHT: u16 = 9;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(NEWS_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    let queues = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    app.email.render(frame, queues[0], false);
    app.sms.render(frame, queues[1], false);

    draw_main(frame, chunks[2], app);
    app.news.render(frame, chunks[3], false);
    draw_status(frame, chunks[4], app);

    if let Some(popup) = &app.popup {
        popup.render(frame, frame.area());
    }
    if app.mode() == Mode::Login {
        if let Some(form) = &app.login {
            form.render(frame, frame.area());
        }
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!("{} - {}", app.config().title, app.state().screen().title());
    let header = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_main(frame: &mut Frame, area: Rect, app: &App) {
    let placeholder = |text: String, style: Style| {
        Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    };

    match app.state().visibility() {
        Visibility::Loading => {
            frame.render_widget(
                placeholder("Loading...".to_string(), Style::default().fg(Color::Gray)),
                area,
            );
        }
        Visibility::Unreachable => {
            frame.render_widget(
                placeholder(
                    format!("Cannot reach server at {}", app.api().base_url()),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                area,
            );
        }
        Visibility::Content => match app.state().screen() {
            Screen::Volunteers => app.volunteers.render(frame, area, app.popup.is_none()),
            Screen::Shifts => app.shifts.render(frame, area, false),
        },
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(44)])
        .split(area);

    frame.render_widget(
        Paragraph::new(app.state().status()).style(Style::default().fg(Color::Yellow)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new("Tab screen | Enter details | r reload | q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

/// A rectangle `percent_x` by `percent_y` of `r`, centred in it.
pub fn center_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
