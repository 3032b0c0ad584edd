//! Placement outcome and workload metrics.
//!
//! [`PlacementReport`] records, per subject, how many weekly occurrences
//! were requested and how many actually landed in the grid. A subject
//! with a shortfall is *starved*: its demand could not be met within the
//! attempt budget, and its partial placement stays in the grid.
//!
//! [`FacultyLoad`] counts placed sessions per teaching faculty.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{ColorTag, Priority, Slot, Timetable};

/// Placement result for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectPlacement {
    /// Subject code.
    pub code: String,
    /// Subject name.
    pub name: String,
    /// Faculty written into placed cells.
    pub faculty: String,
    /// Colour shared by all occurrences.
    pub color: ColorTag,
    pub priority: Priority,
    /// Weekly occurrences requested.
    pub requested: u32,
    /// Weekly occurrences placed.
    pub placed: u32,
    /// Random draws spent, accepted or not.
    pub attempts: u32,
    /// Accepted slots in the order they were placed. Overrides applied
    /// afterwards may have replaced some of them.
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl SubjectPlacement {
    /// Occurrences that could not be placed.
    #[inline]
    pub fn deficit(&self) -> u32 {
        self.requested.saturating_sub(self.placed)
    }

    /// Whether placement stopped short of the request.
    #[inline]
    pub fn is_starved(&self) -> bool {
        self.deficit() > 0
    }
}

/// Per-subject placement results, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub placements: Vec<SubjectPlacement>,
}

impl PlacementReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, placement: SubjectPlacement) {
        self.placements.push(placement);
    }

    /// Whether every subject was fully placed.
    pub fn is_complete(&self) -> bool {
        self.placements.iter().all(|p| !p.is_starved())
    }

    /// Subjects with a shortfall.
    pub fn starved(&self) -> impl Iterator<Item = &SubjectPlacement> {
        self.placements.iter().filter(|p| p.is_starved())
    }

    /// Finds the result for a subject code.
    pub fn placement_for(&self, code: &str) -> Option<&SubjectPlacement> {
        self.placements.iter().find(|p| p.code == code)
    }

    /// Sums saturate at `u32::MAX`.
    pub fn total_requested(&self) -> u32 {
        saturating_total(self.placements.iter().map(|p| p.requested))
    }

    pub fn total_placed(&self) -> u32 {
        saturating_total(self.placements.iter().map(|p| p.placed))
    }

    /// Sum of all shortfalls.
    pub fn total_deficit(&self) -> u32 {
        saturating_total(self.placements.iter().map(|p| p.deficit()))
    }
}

pub(crate) fn saturating_total(values: impl Iterator<Item = u32>) -> u32 {
    values.fold(0, u32::saturating_add)
}

/// Placed sessions per faculty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyLoad {
    pub sessions_by_faculty: BTreeMap<String, usize>,
}

impl FacultyLoad {
    /// Counts occupied cells per faculty. Special sessions carry no
    /// faculty and are not counted.
    pub fn from_timetable(timetable: &Timetable) -> Self {
        let mut sessions_by_faculty = BTreeMap::new();
        for (_, cell) in timetable.iter() {
            if let Some(faculty) = cell.faculty() {
                *sessions_by_faculty.entry(faculty.to_string()).or_insert(0) += 1;
            }
        }
        Self {
            sessions_by_faculty,
        }
    }

    /// Sessions taught by `faculty` (0 if unknown).
    pub fn sessions_for(&self, faculty: &str) -> usize {
        self.sessions_by_faculty.get(faculty).copied().unwrap_or(0)
    }

    /// Faculty with the most sessions. Ties resolve to the
    /// alphabetically first name.
    pub fn busiest(&self) -> Option<(&str, usize)> {
        self.sessions_by_faculty
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, &n)| (name.as_str(), n))
    }

    /// Share of the week's teaching slots a faculty occupies (0.0..=1.0).
    pub fn utilization(&self, faculty: &str) -> f64 {
        self.sessions_for(faculty) as f64 / crate::models::TEACHING_SLOTS as f64
    }
}
