/// A position in a list that rotates by one per tick and wraps at the end.
///
/// The list can be replaced between ticks, so the next index is always
/// checked against the length passed in, never against a length seen
/// earlier. An index may then point at a different item than before.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// `None` until the first tick.
    position: Option<usize>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Step forward in a list of `len` items. With an empty list nothing
    /// moves and `None` comes back.
    pub fn advance(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let next = self.position.map_or(0, |p| p + 1);
        let next = if next >= len { 0 } else { next };
        self.position = Some(next);
        Some(next)
    }

    /// Index to show in a list of `len` items. A position left past the end
    /// by a shrinking list shows the first item until the next tick.
    pub fn current(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        self.position.map(|p| if p < len { p } else { 0 })
    }
}
