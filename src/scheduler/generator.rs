//! End-to-end timetable generation.
//!
//! # Pipeline
//!
//! 1. Start from a fresh grid (lunch at period V, everything else empty).
//! 2. Random constrained placement of every subject ([`RandomAssigner`]).
//! 3. Stamp special classes over the result ([`apply_overrides`]).
//!
//! The finished [`GeneratedTimetable`] is handed to the caller only after
//! all three steps complete.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::assign::RandomAssigner;
use super::overrides::apply_overrides;
use super::report::{saturating_total, FacultyLoad, PlacementReport};
use crate::models::{SlotClock, SpecialClass, Subject, Timetable};

const DEFAULT_CLASSROOMS: u32 = 5;
const DEFAULT_CLASS_DURATION_MINUTES: u32 = 50;

fn default_classrooms() -> u32 {
    DEFAULT_CLASSROOMS
}

fn default_class_duration() -> u32 {
    DEFAULT_CLASS_DURATION_MINUTES
}

/// Everything the form collector supplies for one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRequest {
    /// Subjects to place.
    pub subjects: Vec<Subject>,
    /// Fixed sessions stamped over the generated grid.
    #[serde(default)]
    pub special_classes: Vec<SpecialClass>,
    /// Number of classrooms venues are drawn from.
    #[serde(default = "default_classrooms")]
    pub classrooms: u32,
    /// Class period length. Only affects time-slot labels.
    #[serde(default = "default_class_duration")]
    pub class_duration_minutes: u32,
}

impl TimetableRequest {
    /// Creates a request with default classroom count and class length.
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self {
            subjects,
            special_classes: Vec::new(),
            classrooms: DEFAULT_CLASSROOMS,
            class_duration_minutes: DEFAULT_CLASS_DURATION_MINUTES,
        }
    }

    pub fn with_special_class(mut self, special: SpecialClass) -> Self {
        self.special_classes.push(special);
        self
    }

    pub fn with_classrooms(mut self, classrooms: u32) -> Self {
        self.classrooms = classrooms;
        self
    }

    pub fn with_class_duration(mut self, minutes: u32) -> Self {
        self.class_duration_minutes = minutes;
        self
    }

    /// Total weekly occurrences requested across subjects, saturating at
    /// `u32::MAX`.
    pub fn total_demand(&self) -> u32 {
        saturating_total(self.subjects.iter().map(|s| s.classes_per_week))
    }

    /// Clock used to label periods.
    pub fn clock(&self) -> SlotClock {
        SlotClock::new(self.class_duration_minutes)
    }
}

/// A finished generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTimetable {
    /// The completed grid.
    pub timetable: Timetable,
    /// Requested vs. placed occurrences per subject.
    pub report: PlacementReport,
    /// Special classes that landed in the grid.
    pub overrides_applied: usize,
    /// Wall-clock label for each period I..VIII.
    pub time_slots: Vec<String>,
}

impl GeneratedTimetable {
    /// Whether every subject got all its weekly occurrences.
    pub fn is_complete(&self) -> bool {
        self.report.is_complete()
    }

    /// Projection of the grid for one faculty member.
    pub fn faculty_view(&self, faculty: &str) -> Timetable {
        self.timetable.faculty_view(faculty)
    }

    /// Sessions per faculty in the final grid.
    pub fn faculty_load(&self) -> FacultyLoad {
        FacultyLoad::from_timetable(&self.timetable)
    }
}

/// Runs placement and overrides for a [`TimetableRequest`].
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_timetable::models::{Priority, SpecialClass, Subject};
/// use u_timetable::scheduler::{TimetableGenerator, TimetableRequest};
///
/// let request = TimetableRequest::new(vec![
///     Subject::new("CS101", "Programming")
///         .with_priority(Priority::High)
///         .with_classes_per_week(4)
///         .with_faculty("Dr. Menon"),
/// ])
/// .with_special_class(SpecialClass::new("Lab", "Thursday", "Period 7", "Lab 1"))
/// .with_classrooms(3);
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let generated = TimetableGenerator::new().generate(&request, &mut rng);
/// assert_eq!(generated.overrides_applied, 1);
/// assert!(generated.timetable.lunch_intact());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    assigner: RandomAssigner,
}

impl TimetableGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the assignment engine configuration.
    pub fn with_assigner(mut self, assigner: RandomAssigner) -> Self {
        self.assigner = assigner;
        self
    }

    /// Generates a fresh timetable.
    pub fn generate<R: Rng>(&self, request: &TimetableRequest, rng: &mut R) -> GeneratedTimetable {
        let mut timetable = Timetable::new();
        let report = self
            .assigner
            .assign(&mut timetable, &request.subjects, request.classrooms, rng);
        let overrides_applied = apply_overrides(&mut timetable, &request.special_classes);

        debug!(
            subjects = request.subjects.len(),
            requested = report.total_requested(),
            placed = report.total_placed(),
            overrides_applied,
            free = timetable.free_slot_count(),
            "timetable generated"
        );

        GeneratedTimetable {
            timetable,
            report,
            overrides_applied,
            time_slots: request.clock().labels(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Period, Priority, Slot};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_request() -> TimetableRequest {
        TimetableRequest::new(vec![
            Subject::new("MATH101", "Mathematics")
                .with_priority(Priority::High)
                .with_classes_per_week(5)
                .with_faculty("Dr. Rao"),
            Subject::new("PHY101", "Physics")
                .with_classes_per_week(4)
                .with_faculty("Dr. Iyer"),
            Subject::new("ENG101", "English")
                .with_priority(Priority::Low)
                .with_classes_per_week(3)
                .with_faculty("Ms. Das")
                .with_faculty("Mr. Roy"),
        ])
        .with_classrooms(3)
    }

    #[test]
    fn test_generate_places_all() {
        let request = sample_request();
        let mut rng = SmallRng::seed_from_u64(42);
        let g = TimetableGenerator::new().generate(&request, &mut rng);

        assert!(g.is_complete());
        assert!(g.timetable.lunch_intact());
        assert_eq!(g.timetable.count_subject("MATH101"), 5);
        assert_eq!(g.timetable.count_subject("PHY101"), 4);
        assert_eq!(g.timetable.count_subject("ENG101"), 3);
        assert_eq!(g.report.total_requested(), request.total_demand());
        assert_eq!(g.time_slots.len(), 8);
        assert_eq!(g.time_slots[0], "09:00-09:50");
    }

    #[test]
    fn test_generate_with_overrides() {
        let request = sample_request()
            .with_special_class(SpecialClass::new("Seminar", "monday", "Period 2", "Hall"))
            .with_special_class(SpecialClass::new("Broken", "Someday", "2", "Hall"));
        let mut rng = SmallRng::seed_from_u64(3);
        let g = TimetableGenerator::new().generate(&request, &mut rng);

        assert_eq!(g.overrides_applied, 1);
        assert!(g.timetable[Slot::new(Day::Monday, Period::II)].is_special());
    }

    #[test]
    fn test_faculty_view_and_load() {
        let request = sample_request();
        let mut rng = SmallRng::seed_from_u64(8);
        let g = TimetableGenerator::new().generate(&request, &mut rng);

        let view = g.faculty_view("Dr. Iyer");
        assert_eq!(view.count_subject("PHY101"), 4);
        assert_eq!(view.count_subject("MATH101"), 0);
        assert!(view.lunch_intact());

        let load = g.faculty_load();
        assert_eq!(load.sessions_for("Dr. Rao"), 5);
        assert_eq!(load.sessions_for("Ms. Das"), 3);
        // Only the first faculty teaches
        assert_eq!(load.sessions_for("Mr. Roy"), 0);
    }

    #[test]
    fn test_fresh_grid_per_generation() {
        let request = sample_request();
        let generator = TimetableGenerator::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let first = generator.generate(&request, &mut rng);
        let second = generator.generate(&request, &mut rng);
        assert_eq!(second.timetable.count_subject("MATH101"), 5);
        assert_eq!(first.timetable.count_subject("MATH101"), 5);
    }

    #[test]
    fn test_request_deserialize_defaults() {
        let json = r#"{
            "subjects": [
                { "code": "M1", "name": "Maths", "priority": "medium",
                  "classesPerWeek": 5, "faculties": ["A"] }
            ]
        }"#;
        let request: TimetableRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.classrooms, 5);
        assert_eq!(request.class_duration_minutes, 50);
        assert!(request.special_classes.is_empty());
        assert_eq!(request.total_demand(), 5);
    }

    #[test]
    fn test_request_deserialize_full() {
        let json = r#"{
            "subjects": [],
            "specialClasses": [
                { "name": "Lab", "day": "friday", "period": "Period 6", "venue": "Lab 1" }
            ],
            "classrooms": 2,
            "classDurationMinutes": 45
        }"#;
        let request: TimetableRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.classrooms, 2);
        assert_eq!(request.clock().label(Period::I), "09:00-09:45");
        assert_eq!(request.special_classes[0].resolve().unwrap().day, Day::Friday);
    }

    #[test]
    fn test_oversized_request_still_generates() {
        let request = TimetableRequest::new(vec![
            Subject::new("A", "A")
                .with_classes_per_week(u32::MAX)
                .with_faculty("X"),
            Subject::new("B", "B")
                .with_classes_per_week(u32::MAX)
                .with_faculty("Y"),
        ])
        .with_class_duration(u32::MAX / 2);
        assert_eq!(request.total_demand(), u32::MAX);

        let mut rng = SmallRng::seed_from_u64(6);
        let g = TimetableGenerator::new().generate(&request, &mut rng);
        assert!(!g.is_complete());
        assert_eq!(g.report.total_requested(), u32::MAX);
        assert_eq!(g.time_slots.len(), 8);
        assert!(g.timetable.lunch_intact());
    }

    #[test]
    fn test_generated_serializes() {
        let mut rng = SmallRng::seed_from_u64(2);
        let g = TimetableGenerator::new().generate(&sample_request(), &mut rng);
        let json = serde_json::to_string(&g).unwrap();
        let back: GeneratedTimetable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
