use crate::ui::center_rect;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

/// Credentials form shown while the server has no working login.
#[derive(Debug, Clone)]
pub struct LoginForm {
    username: String,
    password: String,
    focus: Field,
    error: Option<String>,
    submitting: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focus: Field::Username,
            error: None,
            submitting: false,
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Username => Field::Password,
            Field::Password => Field::Username,
        };
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }

    pub fn add_char(&mut self, c: char) {
        if !self.submitting {
            self.field_mut().push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if !self.submitting {
            self.field_mut().pop();
        }
    }

    /// Hands back the credentials to send, or `None` while a submission is
    /// still outstanding or the username is blank.
    pub fn submit(&mut self) -> Option<(String, String)> {
        if self.submitting {
            return None;
        }
        if self.username.trim().is_empty() {
            self.error = Some("Enter a username.".to_string());
            self.focus = Field::Username;
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some((self.username.trim().to_string(), self.password.clone()))
    }

    /// The password is cleared so a retry starts from a blank field.
    pub fn rejected(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.password.clear();
        self.focus = Field::Password;
        self.error = Some(message.into());
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let modal_area = center_rect(50, 40, area);
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Log in ");

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let field_style = |field: Field| {
            if self.focus == field {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            }
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Username: ", field_style(Field::Username)),
                Span::raw(self.username.clone()),
            ]),
            Line::from(vec![
                Span::styled("Password: ", field_style(Field::Password)),
                Span::raw("*".repeat(self.password.chars().count())),
            ]),
            Line::from(""),
        ];
        if self.submitting {
            lines.push(Line::from(Span::styled(
                "Logging in...",
                Style::default().fg(Color::Gray),
            )));
        } else if let Some(error) = &self.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(Span::styled(
            "Tab to switch field | Enter to log in | Esc to quit",
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
