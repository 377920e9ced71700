use ratatui::style::{Color, Modifier, Style};

/// How urgent a queue looks, from the age of its oldest unanswered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Tier1,
    Tier2,
    Tier3,
    Tier4,
}

impl Severity {
    /// `oldest` is `H:MM`; only the hours count. An hour value that does not
    /// parse is treated as the most severe tier.
    pub fn from_oldest(oldest: &str) -> Self {
        let hours = oldest
            .split(':')
            .next()
            .and_then(|h| h.trim().parse::<i64>().ok());

        match hours {
            Some(h) if h < 2 => Severity::Tier1,
            Some(h) if h < 3 => Severity::Tier2,
            Some(h) if h < 4 => Severity::Tier3,
            _ => Severity::Tier4,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Severity::Tier1 => 0,
            Severity::Tier2 => 1,
            Severity::Tier3 => 2,
            Severity::Tier4 => 3,
        }
    }
}

/// Background colour per tier, paired with increasingly heavy text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierStyles {
    colors: [Color; 4],
}

impl TierStyles {
    pub fn new(colors: [Color; 4]) -> Self {
        Self { colors }
    }

    pub fn style(&self, severity: Severity) -> Style {
        let weight = match severity {
            Severity::Tier1 => Modifier::empty(),
            Severity::Tier2 => Modifier::BOLD,
            Severity::Tier3 => Modifier::BOLD | Modifier::UNDERLINED,
            Severity::Tier4 => Modifier::BOLD | Modifier::UNDERLINED | Modifier::SLOW_BLINK,
        };
        Style::default()
            .fg(Color::White)
            .bg(self.colors[severity.index()])
            .add_modifier(weight)
    }
}
