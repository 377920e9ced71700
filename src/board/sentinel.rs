use crate::feeds::VersionToken;

#[derive(Debug, Clone, PartialEq, Eq)]
enum SentinelState {
    Unarmed,
    Armed(VersionToken),
    Fired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelAction {
    None,
    Reload,
}

/// Watches the server version and asks for a reload once it changes.
///
/// The first version seen becomes the baseline and is never compared.
/// After a reload has been requested the sentinel stays quiet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSentinel {
    state: SentinelState,
}

impl Default for VersionSentinel {
    fn default() -> Self {
        Self {
            state: SentinelState::Unarmed,
        }
    }
}

impl VersionSentinel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, SentinelState::Armed(_))
    }

    pub fn baseline(&self) -> Option<&VersionToken> {
        match &self.state {
            SentinelState::Armed(token) => Some(token),
            _ => None,
        }
    }

    pub fn observe(&mut self, token: VersionToken) -> SentinelAction {
        match &self.state {
            SentinelState::Unarmed => {
                tracing::info!(version = %token.0, "version baseline recorded");
                self.state = SentinelState::Armed(token);
                SentinelAction::None
            }
            SentinelState::Armed(baseline) if *baseline == token => SentinelAction::None,
            SentinelState::Armed(baseline) => {
                tracing::info!(from = %baseline.0, to = %token.0, "server version changed");
                self.state = SentinelState::Fired;
                SentinelAction::Reload
            }
            SentinelState::Fired => SentinelAction::None,
        }
    }
}
