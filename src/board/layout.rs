use crate::feeds::Volunteer;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Listening,
    Support,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Listening => "Listening volunteer",
            Role::Support => "Support volunteer",
        }
    }
}

/// How to tell support staff from listening volunteers. One policy is
/// chosen in config and used for every volunteer.
#[derive(Debug, Clone)]
pub enum SupportPolicy {
    /// Support when the name matches, e.g. "Jo S12".
    NamePattern(Regex),
    /// Support when the server sends `is_support_person: true`. A missing
    /// flag means listening.
    ServerFlag,
}

impl SupportPolicy {
    pub fn classify(&self, volunteer: &Volunteer) -> Role {
        let support = match self {
            SupportPolicy::NamePattern(pattern) => pattern.is_match(&volunteer.name),
            SupportPolicy::ServerFlag => volunteer.is_support_person == Some(true),
        };
        if support {
            Role::Support
        } else {
            Role::Listening
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub volunteer: Volunteer,
    pub role: Role,
}

impl Cell {
    pub fn on_leave(&self) -> bool {
        self.volunteer.on_leave
    }
}

/// Row-major cells, every row but the last exactly `columns` wide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    pub rows: Vec<Vec<Cell>>,
}

impl Grid {
    fn from_cells(cells: Vec<Cell>, columns: usize) -> Self {
        let rows = cells
            .chunks(columns.max(1))
            .map(|row| row.to_vec())
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolunteerGrids {
    pub listening: Grid,
    pub support: Grid,
}

impl VolunteerGrids {
    pub fn len(&self) -> usize {
        self.listening.len() + self.support.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listening.is_empty() && self.support.is_empty()
    }

    /// Cell `index` counting through the listening grid, then support.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.listening.cells().chain(self.support.cells()).nth(index)
    }
}

/// Lay volunteers out into one grid per role, in input order, skipping
/// anyone whose name is on the ignore list.
pub fn layout_volunteers(
    volunteers: &[Volunteer],
    columns: usize,
    ignored: &[String],
    policy: &SupportPolicy,
) -> VolunteerGrids {
    let (support, listening): (Vec<Cell>, Vec<Cell>) = volunteers
        .iter()
        .filter(|v| !ignored.iter().any(|name| name == &v.name))
        .map(|v| Cell {
            volunteer: v.clone(),
            role: policy.classify(v),
        })
        .partition(|cell| cell.role == Role::Support);

    VolunteerGrids {
        listening: Grid::from_cells(listening, columns),
        support: Grid::from_cells(support, columns),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SUPPORT_PATTERN;

    fn volunteer(id: u64, name: &str) -> Volunteer {
        Volunteer {
            id,
            name: name.to_string(),
            on_leave: false,
            is_support_person: None,
            details: Vec::new(),
        }
    }

    fn name_policy() -> SupportPolicy {
        SupportPolicy::NamePattern(Regex::new(DEFAULT_SUPPORT_PATTERN).unwrap())
    }

    fn ids(grid: &Grid) -> Vec<Vec<u64>> {
        grid.rows
            .iter()
            .map(|row| row.iter().map(|c| c.volunteer.id).collect())
            .collect()
    }

    #[test]
    fn test_directory_scenario() {
        let mut b = volunteer(2, "B S1");
        b.on_leave = true;
        let grids = layout_volunteers(&[volunteer(1, "A"), b], 12, &[], &name_policy());

        assert_eq!(grids.len(), 2);
        assert_eq!(ids(&grids.listening), vec![vec![1]]);
        assert_eq!(ids(&grids.support), vec![vec![2]]);

        let second = grids.cell(1).unwrap();
        assert_eq!(second.volunteer.name, "B S1");
        assert!(second.on_leave());
        assert_eq!(second.role, Role::Support);
        assert!(!grids.cell(0).unwrap().on_leave());
    }

    #[test]
    fn test_rows_are_ceil_n_over_w() {
        let policy = name_policy();
        for n in 0..40u64 {
            for width in 1..14usize {
                let list: Vec<Volunteer> = (0..n).map(|i| volunteer(i, "Listener")).collect();
                let grids = layout_volunteers(&list, width, &[], &policy);
                let rows = &grids.listening.rows;
                assert_eq!(rows.len(), (n as usize).div_ceil(width));
                assert!(rows.iter().all(|r| !r.is_empty() && r.len() <= width));
                if let Some((last, full)) = rows.split_last() {
                    assert!(full.iter().all(|r| r.len() == width));
                    assert!(last.len() <= width);
                }
                assert_eq!(grids.len(), n as usize);
            }
        }
    }

    #[test]
    fn test_fills_left_to_right() {
        let list: Vec<Volunteer> = (1..=5).map(|i| volunteer(i, "L")).collect();
        let grids = layout_volunteers(&list, 2, &[], &name_policy());
        assert_eq!(ids(&grids.listening), vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert!(grids.support.is_empty());
    }

    #[test]
    fn test_ignored_names_are_dropped_before_layout() {
        let list = vec![
            volunteer(1, "Sam 123"),
            volunteer(2, "Ann 2"),
            volunteer(3, "Rotaonly"),
            volunteer(4, "Bob 4"),
        ];
        let ignored = vec!["Sam 123".to_string(), "Rotaonly".to_string()];
        let grids = layout_volunteers(&list, 1, &ignored, &name_policy());
        assert_eq!(ids(&grids.listening), vec![vec![2], vec![4]]);
        assert_eq!(grids.len(), 2);
    }

    #[test]
    fn test_name_pattern_policy() {
        let policy = name_policy();
        assert_eq!(policy.classify(&volunteer(1, "Jo S12")), Role::Support);
        assert_eq!(policy.classify(&volunteer(1, "Jo-S3")), Role::Support);
        assert_eq!(policy.classify(&volunteer(1, "Jo 12")), Role::Listening);
        assert_eq!(policy.classify(&volunteer(1, "S12")), Role::Listening);
    }

    #[test]
    fn test_server_flag_policy_ignores_name() {
        let policy = SupportPolicy::ServerFlag;
        let mut flagged = volunteer(1, "Ann 2");
        flagged.is_support_person = Some(true);
        assert_eq!(policy.classify(&flagged), Role::Support);
        assert_eq!(policy.classify(&volunteer(2, "Jo S12")), Role::Listening);
        let mut unflagged = volunteer(3, "Jo S12");
        unflagged.is_support_person = Some(false);
        assert_eq!(policy.classify(&unflagged), Role::Listening);
    }

    #[test]
    fn test_cell_index_past_end() {
        let grids = layout_volunteers(&[volunteer(1, "A")], 12, &[], &name_policy());
        assert!(grids.cell(1).is_none());
    }
}
