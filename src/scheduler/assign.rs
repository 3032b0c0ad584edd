//! Randomized constrained placement.
//!
//! # Algorithm
//!
//! 1. Shuffle the subject order with the caller's random source.
//! 2. Give each subject the next palette colour in that order.
//! 3. For each subject, draw uniformly random teaching slots (period V
//!    excluded) and accept a draw when:
//!    - the slot is empty, and
//!    - the preceding period on the same day does not already hold this
//!      subject, unless the subject is high priority.
//! 4. Stop a subject once its weekly count is placed or its attempt
//!    budget runs out. Running out is starvation: the partial placement
//!    is kept and reported.
//!
//! The adjacency rule only looks backwards. A subject at period III
//! blocks a later draw at IV, but a draw at II is still accepted, so the
//! finished grid can hold a non-high subject at II and III. The rule is
//! checked against the grid as it stands when each draw is accepted;
//! [`SubjectPlacement::slots`] records that acceptance order.
//!
//! # Complexity
//! O(Σ budget) draws; each draw is O(1).

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use super::report::{PlacementReport, SubjectPlacement};
use crate::models::{Cell, ClassSession, ColorTag, Slot, Subject, Timetable};

/// Attempt cap for one subject.
///
/// The cap is `min(ceiling, per_free_slot × free slots)`, where free
/// slots are counted when the subject starts. A full grid therefore
/// starves immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptBudget {
    /// Draws allowed per free slot.
    pub per_free_slot: u32,
    /// Absolute draw limit per subject.
    pub ceiling: u32,
}

impl AttemptBudget {
    pub fn new(per_free_slot: u32, ceiling: u32) -> Self {
        Self {
            per_free_slot,
            ceiling,
        }
    }

    /// Draw limit given the current number of free slots.
    pub fn cap(&self, free_slots: usize) -> u32 {
        let scaled = u64::from(self.per_free_slot).saturating_mul(free_slots as u64);
        scaled.min(u64::from(self.ceiling)) as u32
    }
}

impl Default for AttemptBudget {
    fn default() -> Self {
        Self::new(200, 2000)
    }
}

/// Places subject occurrences into free teaching slots at random.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_timetable::models::{Subject, Timetable};
/// use u_timetable::scheduler::RandomAssigner;
///
/// let subjects = vec![Subject::new("M1", "Maths").with_classes_per_week(5)];
/// let mut grid = Timetable::new();
/// let mut rng = SmallRng::seed_from_u64(7);
///
/// let report = RandomAssigner::new().assign(&mut grid, &subjects, 1, &mut rng);
/// assert!(report.is_complete());
/// assert_eq!(grid.count_subject("M1"), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RandomAssigner {
    budget: AttemptBudget,
}

impl RandomAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-subject attempt budget.
    pub fn with_budget(mut self, budget: AttemptBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn budget(&self) -> AttemptBudget {
        self.budget
    }

    /// Places every subject's weekly occurrences into `grid`.
    ///
    /// Venues are `Room k` with `k` uniform in `1..=classroom_count`
    /// (a count of 0 is treated as 1). Only empty cells are written, so
    /// anything already in the grid is left alone.
    ///
    /// Returns one [`SubjectPlacement`] per subject, in input order.
    pub fn assign<R: Rng>(
        &self,
        grid: &mut Timetable,
        subjects: &[Subject],
        classroom_count: u32,
        rng: &mut R,
    ) -> PlacementReport {
        let teaching: Vec<Slot> = Slot::teaching().collect();
        let rooms = classroom_count.max(1);

        let mut order: Vec<usize> = (0..subjects.len()).collect();
        order.shuffle(rng);

        let mut results: Vec<Option<SubjectPlacement>> = vec![None; subjects.len()];
        for (generation_idx, &subject_idx) in order.iter().enumerate() {
            let subject = &subjects[subject_idx];
            let color = ColorTag::for_subject(generation_idx);
            results[subject_idx] =
                Some(self.place_subject(grid, subject, color, rooms, &teaching, rng));
        }

        PlacementReport {
            placements: results.into_iter().flatten().collect(),
        }
    }

    fn place_subject<R: Rng>(
        &self,
        grid: &mut Timetable,
        subject: &Subject,
        color: ColorTag,
        rooms: u32,
        teaching: &[Slot],
        rng: &mut R,
    ) -> SubjectPlacement {
        let cap = self.budget.cap(grid.free_slot_count());
        let faculty = subject.primary_faculty().to_string();
        let mut placed = 0;
        let mut attempts = 0;
        let mut slots = Vec::new();

        while placed < subject.classes_per_week && attempts < cap {
            attempts += 1;
            let slot = teaching[rng.random_range(0..teaching.len())];

            if !grid.is_free(slot) {
                continue;
            }
            if !subject.priority.allows_consecutive() && follows_same_subject(grid, slot, &subject.code)
            {
                continue;
            }

            let venue = format!("Room {}", rng.random_range(1..=rooms));
            grid.place(
                slot,
                Cell::Occupied(ClassSession {
                    subject_code: subject.code.clone(),
                    subject_name: subject.name.clone(),
                    faculty: faculty.clone(),
                    venue,
                    color,
                }),
            );
            slots.push(slot);
            placed += 1;
        }

        if placed < subject.classes_per_week {
            warn!(
                code = %subject.code,
                requested = subject.classes_per_week,
                placed,
                attempts,
                "subject starved: weekly demand not met"
            );
        } else {
            debug!(code = %subject.code, placed, attempts, "subject placed");
        }

        SubjectPlacement {
            code: subject.code.clone(),
            name: subject.name.clone(),
            faculty,
            color,
            priority: subject.priority,
            requested: subject.classes_per_week,
            placed,
            attempts,
            slots,
        }
    }
}

/// Whether the preceding period on the same day holds `code`.
fn follows_same_subject(grid: &Timetable, slot: Slot, code: &str) -> bool {
    slot.previous()
        .is_some_and(|prev| grid.get(prev).subject_code() == Some(code))
}
