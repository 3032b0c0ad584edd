//! Input records: subjects and fixed special classes.
//!
//! These arrive from the form collector. Special-class day and period
//! are kept as the free text the user typed and only resolved when
//! applied to a grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::week::{parse_period_text, Day, ParseError, Slot};

/// Faculty name used when a subject has no usable first faculty.
pub const UNASSIGNED_FACULTY: &str = "TBA";

/// Subject priority.
///
/// Only `High` subjects may occupy back-to-back periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Whether consecutive periods of the same subject are allowed.
    #[inline]
    pub fn allows_consecutive(self) -> bool {
        self == Priority::High
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParseError::UnknownPriority(s.to_string())),
        }
    }
}

/// A subject to be placed `classes_per_week` times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Short code, e.g. "MATH101". Identifies occurrences in the grid.
    pub code: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub priority: Priority,
    /// Weekly occurrences requested.
    pub classes_per_week: u32,
    /// Faculty names. Only the first one teaches the placed sessions.
    #[serde(default)]
    pub faculties: Vec<String>,
}

impl Subject {
    /// Creates a medium-priority subject with one class per week.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            priority: Priority::Medium,
            classes_per_week: 1,
            faculties: Vec::new(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_classes_per_week(mut self, classes: u32) -> Self {
        self.classes_per_week = classes;
        self
    }

    /// Appends a faculty name.
    pub fn with_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculties.push(faculty.into());
        self
    }

    /// Faculty assigned to placed sessions.
    ///
    /// The first entry, or [`UNASSIGNED_FACULTY`] when the list is empty
    /// or its first entry is blank.
    pub fn primary_faculty(&self) -> &str {
        match self.faculties.first() {
            Some(f) if !f.trim().is_empty() => f.as_str(),
            _ => UNASSIGNED_FACULTY,
        }
    }
}

/// A fixed session at a user-specified day and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialClass {
    pub name: String,
    /// Day name, any case.
    pub day: String,
    /// Text containing a 1-based period number.
    pub period: String,
    pub venue: String,
}

impl SpecialClass {
    pub fn new(
        name: impl Into<String>,
        day: impl Into<String>,
        period: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            day: day.into(),
            period: period.into(),
            venue: venue.into(),
        }
    }

    /// Resolves the free-text day and period into a teaching slot.
    ///
    /// Fails for unknown days, missing or out-of-range period numbers,
    /// and for the lunch period.
    pub fn resolve(&self) -> Result<Slot, ParseError> {
        let day: Day = self.day.parse()?;
        let period = parse_period_text(&self.period)?;
        if period.is_lunch() {
            return Err(ParseError::LunchPeriod);
        }
        Ok(Slot::new(day, period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Period;

    #[test]
    fn test_subject_builder() {
        let s = Subject::new("PHY101", "Physics")
            .with_priority(Priority::High)
            .with_classes_per_week(4)
            .with_faculty("Dr. Iyer")
            .with_faculty("Dr. Sen");

        assert_eq!(s.code, "PHY101");
        assert_eq!(s.priority, Priority::High);
        assert_eq!(s.classes_per_week, 4);
        assert_eq!(s.primary_faculty(), "Dr. Iyer");
    }

    #[test]
    fn test_primary_faculty_fallback() {
        let none = Subject::new("X", "X");
        assert_eq!(none.primary_faculty(), UNASSIGNED_FACULTY);

        // Blank first entry is not skipped over
        let blank = Subject::new("X", "X").with_faculty("  ").with_faculty("Dr. B");
        assert_eq!(blank.primary_faculty(), UNASSIGNED_FACULTY);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(" low ".parse::<Priority>(), Ok(Priority::Low));
        assert!("urgent".parse::<Priority>().is_err());
        assert!(Priority::High.allows_consecutive());
        assert!(!Priority::Medium.allows_consecutive());
        assert!(!Priority::Low.allows_consecutive());
    }

    #[test]
    fn test_special_class_resolve() {
        let sc = SpecialClass::new("Lab", "tuesday", "Period 3", "Lab 1");
        assert_eq!(sc.resolve(), Ok(Slot::new(Day::Tuesday, Period::III)));

        let lunch = SpecialClass::new("Talk", "Monday", "5", "Hall");
        assert_eq!(lunch.resolve(), Err(ParseError::LunchPeriod));

        let bad_day = SpecialClass::new("Lab", "Sunday", "2", "Lab 1");
        assert!(matches!(bad_day.resolve(), Err(ParseError::UnknownDay(_))));

        let bad_period = SpecialClass::new("Lab", "Monday", "ninth", "Lab 1");
        assert!(matches!(
            bad_period.resolve(),
            Err(ParseError::MissingPeriodNumber(_))
        ));
    }

    #[test]
    fn test_subject_deserialize_form_record() {
        let json = r#"{
            "code": "CS201",
            "name": "Data Structures",
            "priority": "high",
            "classesPerWeek": 3,
            "faculties": ["Prof. Nair"]
        }"#;
        let s: Subject = serde_json::from_str(json).unwrap();
        assert_eq!(s.priority, Priority::High);
        assert_eq!(s.classes_per_week, 3);
        assert_eq!(s.primary_faculty(), "Prof. Nair");
    }
}
