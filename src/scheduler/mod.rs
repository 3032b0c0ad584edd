//! Timetable generation.
//!
//! Random constrained placement of subjects, fixed special-session
//! overrides, and placement reporting.
//!
//! # Algorithm
//!
//! `RandomAssigner` performs undirected random search with a bounded
//! number of draws per subject. It does not minimize anything; when
//! demand exceeds what the grid can hold, the shortfall is reported as
//! starvation instead of retrying forever.
//!
//! # Report
//!
//! `PlacementReport` lists requested vs. placed occurrences per subject.
//! `FacultyLoad` counts sessions per teaching faculty.

mod assign;
mod generator;
mod overrides;
mod report;

pub use assign::{AttemptBudget, RandomAssigner};
pub use generator::{GeneratedTimetable, TimetableGenerator, TimetableRequest};
pub use overrides::apply_overrides;
pub use report::{FacultyLoad, PlacementReport, SubjectPlacement};
