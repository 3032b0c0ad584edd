//! Input validation for timetable requests.
//!
//! Checks the records a form collector hands over before generation.
//! Detects:
//! - Blank subject names or codes
//! - Duplicate subject codes
//! - Missing or blank faculty names
//! - Zero weekly classes
//! - Zero classrooms and out-of-range class durations
//! - Special classes whose day/period cannot be resolved (or target lunch)
//! - Total weekly demand above the 35 teaching slots
//!
//! Generation does not require a clean report: unresolved special classes
//! are skipped and excess demand is reported as starvation. Validation
//! lets the caller surface those problems up front.

use std::collections::HashSet;

use crate::models::TEACHING_SLOTS;
use crate::scheduler::TimetableRequest;

/// Shortest accepted class period.
pub const MIN_CLASS_MINUTES: u32 = 30;
/// Longest accepted class period.
pub const MAX_CLASS_MINUTES: u32 = 180;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Subject name or code is blank.
    MissingSubjectField,
    /// Two subjects share a code.
    DuplicateSubjectCode,
    /// Faculty list is empty or contains a blank name.
    MissingFaculty,
    /// A subject asks for zero classes per week.
    InvalidClassCount,
    /// Classroom count is zero.
    NoClassrooms,
    /// Class duration outside the accepted range.
    InvalidClassDuration,
    /// A special class cannot be placed on the grid.
    UnresolvedSpecialClass,
    /// Weekly demand exceeds the teaching slots.
    DemandExceedsCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a timetable request.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &TimetableRequest) -> ValidationResult {
    let mut errors = Vec::new();

    let mut codes = HashSet::new();
    for (i, subject) in request.subjects.iter().enumerate() {
        let label = if subject.code.trim().is_empty() {
            format!("#{}", i + 1)
        } else {
            subject.code.clone()
        };

        if subject.code.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingSubjectField,
                format!("Subject {label} has no code"),
            ));
        } else if !codes.insert(subject.code.trim()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSubjectCode,
                format!("Duplicate subject code: {}", subject.code),
            ));
        }

        if subject.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingSubjectField,
                format!("Subject {label} has no name"),
            ));
        }

        if subject.faculties.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingFaculty,
                format!("Subject {label} has no faculty"),
            ));
        } else if subject.faculties.iter().any(|f| f.trim().is_empty()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingFaculty,
                format!("Subject {label} has a blank faculty name"),
            ));
        }

        if subject.classes_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidClassCount,
                format!("Subject {label} has zero classes per week"),
            ));
        }
    }

    if request.classrooms == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoClassrooms,
            "At least one classroom is required",
        ));
    }

    if !(MIN_CLASS_MINUTES..=MAX_CLASS_MINUTES).contains(&request.class_duration_minutes) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidClassDuration,
            format!(
                "Class duration {} min is outside {MIN_CLASS_MINUTES}..={MAX_CLASS_MINUTES}",
                request.class_duration_minutes
            ),
        ));
    }

    for special in &request.special_classes {
        if let Err(err) = special.resolve() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnresolvedSpecialClass,
                format!("Special class '{}': {err}", special.name),
            ));
        }
    }

    let demand = request.total_demand();
    if demand as usize > TEACHING_SLOTS {
        errors.push(ValidationError::new(
            ValidationErrorKind::DemandExceedsCapacity,
            format!("{demand} weekly classes requested but only {TEACHING_SLOTS} slots exist"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
