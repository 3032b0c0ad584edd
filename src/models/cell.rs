//! Grid cell contents.
//!
//! Each coordinate holds exactly one [`Cell`] variant, carrying only the
//! fields relevant to it.

use serde::{Deserialize, Serialize};

/// Display colour for a scheduled session.
///
/// Subjects draw from [`ColorTag::SUBJECT_PALETTE`] in generation order;
/// special sessions always use [`ColorTag::Accent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Accent,
}

impl ColorTag {
    /// Colours cycled across subjects.
    pub const SUBJECT_PALETTE: [ColorTag; 5] = [
        ColorTag::Blue,
        ColorTag::Green,
        ColorTag::Purple,
        ColorTag::Orange,
        ColorTag::Red,
    ];

    /// Palette colour for the `n`-th subject in generation order.
    pub fn for_subject(n: usize) -> Self {
        Self::SUBJECT_PALETTE[n % Self::SUBJECT_PALETTE.len()]
    }
}

/// A regularly scheduled subject occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    pub subject_code: String,
    pub subject_name: String,
    pub faculty: String,
    pub venue: String,
    pub color: ColorTag,
}

/// A fixed session stamped over the generated grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialSession {
    pub name: String,
    pub venue: String,
    pub color: ColorTag,
}

/// Contents of one (day, period) coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Cell {
    /// Free slot.
    #[default]
    Empty,
    /// Lunch break. Only ever found at period V.
    Lunch,
    /// Subject placed by the assignment engine.
    Occupied(ClassSession),
    /// Session placed by the override layer.
    Special(SpecialSession),
}

impl Cell {
    /// Label shown for lunch cells.
    pub const LUNCH_LABEL: &'static str = "LUNCH BREAK";

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn is_lunch(&self) -> bool {
        matches!(self, Cell::Lunch)
    }

    #[inline]
    pub fn is_special(&self) -> bool {
        matches!(self, Cell::Special(_))
    }

    /// The placed session, if this cell holds a subject.
    pub fn session(&self) -> Option<&ClassSession> {
        match self {
            Cell::Occupied(s) => Some(s),
            _ => None,
        }
    }

    /// Subject code of an occupied cell.
    pub fn subject_code(&self) -> Option<&str> {
        self.session().map(|s| s.subject_code.as_str())
    }

    /// Faculty teaching an occupied cell.
    pub fn faculty(&self) -> Option<&str> {
        self.session().map(|s| s.faculty.as_str())
    }

    /// Primary display text: subject name, special name, or lunch label.
    pub fn label(&self) -> Option<&str> {
        match self {
            Cell::Empty => None,
            Cell::Lunch => Some(Self::LUNCH_LABEL),
            Cell::Occupied(s) => Some(&s.subject_name),
            Cell::Special(s) => Some(&s.name),
        }
    }

    /// Venue for occupied or special cells.
    pub fn venue(&self) -> Option<&str> {
        match self {
            Cell::Occupied(s) => Some(&s.venue),
            Cell::Special(s) => Some(&s.venue),
            _ => None,
        }
    }

    pub fn color(&self) -> Option<ColorTag> {
        match self {
            Cell::Occupied(s) => Some(s.color),
            Cell::Special(s) => Some(s.color),
            _ => None,
        }
    }
}
