use crate::error::BoardError;
use crate::feeds::Shift;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftCategory {
    Special,
    Past,
    Present,
    Future,
}

impl ShiftCategory {
    /// Display order, top to bottom.
    pub const ALL: [ShiftCategory; 4] = [
        ShiftCategory::Special,
        ShiftCategory::Past,
        ShiftCategory::Present,
        ShiftCategory::Future,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "special" => Some(ShiftCategory::Special),
            "past" => Some(ShiftCategory::Past),
            "present" => Some(ShiftCategory::Present),
            "future" => Some(ShiftCategory::Future),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShiftCategory::Special => "On duty",
            ShiftCategory::Past => "Previous",
            ShiftCategory::Present => "Now",
            ShiftCategory::Future => "Next",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftBuckets {
    pub special: Vec<Shift>,
    pub past: Vec<Shift>,
    pub present: Vec<Shift>,
    pub future: Vec<Shift>,
}

impl ShiftBuckets {
    pub fn get(&self, category: ShiftCategory) -> &[Shift] {
        match category {
            ShiftCategory::Special => &self.special,
            ShiftCategory::Past => &self.past,
            ShiftCategory::Present => &self.present,
            ShiftCategory::Future => &self.future,
        }
    }

    fn get_mut(&mut self, category: ShiftCategory) -> &mut Vec<Shift> {
        match category {
            ShiftCategory::Special => &mut self.special,
            ShiftCategory::Past => &mut self.past,
            ShiftCategory::Present => &mut self.present,
            ShiftCategory::Future => &mut self.future,
        }
    }

    pub fn len(&self) -> usize {
        ShiftCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition shifts by category, each bucket sorted by name. Equal names
/// keep their input order. A single unknown category fails the whole call
/// so a half-sorted roster is never shown.
pub fn bucket_shifts(shifts: Vec<Shift>) -> Result<ShiftBuckets, BoardError> {
    let mut buckets = ShiftBuckets::default();

    for shift in shifts {
        let category =
            ShiftCategory::parse(&shift.category).ok_or_else(|| BoardError::InvalidCategory {
                shift: shift.name.clone(),
                category: shift.category.clone(),
            })?;
        buckets.get_mut(category).push(shift);
    }

    for category in ShiftCategory::ALL {
        buckets.get_mut(category).sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(buckets)
}
