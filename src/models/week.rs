//! Week grid coordinates.
//!
//! A timetable week is 5 days × 8 periods. Period V is reserved for
//! lunch on every day, leaving 35 teaching slots.
//!
//! Free-text day and period references (as typed into special-class
//! forms) are resolved here into typed coordinates, or rejected with a
//! [`ParseError`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of days in the grid.
pub const DAYS_PER_WEEK: usize = 5;
/// Number of periods per day.
pub const PERIODS_PER_DAY: usize = 8;
/// Non-lunch slots per week.
pub const TEACHING_SLOTS: usize = DAYS_PER_WEEK * (PERIODS_PER_DAY - 1);

/// Failure to resolve a free-text day, period, or priority.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Text does not name a weekday in the grid.
    #[error("unknown day {0:?}")]
    UnknownDay(String),
    /// Text contains no digits.
    #[error("no period number in {0:?}")]
    MissingPeriodNumber(String),
    /// Period number outside 1..=8.
    #[error("period {0} is outside 1..=8")]
    PeriodOutOfRange(String),
    /// Period V cannot hold anything but lunch.
    #[error("period V is reserved for lunch")]
    LunchPeriod,
    /// Text does not name a priority level.
    #[error("unknown priority {0:?}")]
    UnknownPriority(String),
}

/// A teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; DAYS_PER_WEEK] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// 0-based position in the week.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// English name ("Monday").
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive, surrounding whitespace ignored.
impl FromStr for Day {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Day::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownDay(s.to_string()))
    }
}

/// A daily period, I through VIII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
}

impl Period {
    /// All periods in daily order.
    pub const ALL: [Period; PERIODS_PER_DAY] = [
        Period::I,
        Period::II,
        Period::III,
        Period::IV,
        Period::V,
        Period::VI,
        Period::VII,
        Period::VIII,
    ];

    /// The period permanently reserved for lunch.
    pub const LUNCH: Period = Period::V;

    /// 0-based position in the day.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// 1-based period number.
    #[inline]
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Period for a 1-based number.
    pub fn from_number(number: usize) -> Option<Period> {
        number
            .checked_sub(1)
            .and_then(|i| Period::ALL.get(i).copied())
    }

    /// The immediately preceding period on the same day.
    pub fn previous(self) -> Option<Period> {
        self.index().checked_sub(1).map(|i| Period::ALL[i])
    }

    /// Whether this is the lunch period.
    #[inline]
    pub fn is_lunch(self) -> bool {
        self == Period::LUNCH
    }

    /// Roman numeral label.
    pub fn roman(self) -> &'static str {
        match self {
            Period::I => "I",
            Period::II => "II",
            Period::III => "III",
            Period::IV => "IV",
            Period::V => "V",
            Period::VI => "VI",
            Period::VII => "VII",
            Period::VIII => "VIII",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.roman())
    }
}

/// Resolves a free-text period reference ("Period 3", "p.6").
///
/// The first run of ASCII digits is taken as a 1-based period number.
/// Lunch is accepted here; callers that must not target it check
/// [`Period::is_lunch`].
pub fn parse_period_text(text: &str) -> Result<Period, ParseError> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return Err(ParseError::MissingPeriodNumber(text.to_string()));
    }
    digits
        .parse::<usize>()
        .ok()
        .and_then(Period::from_number)
        .ok_or(ParseError::PeriodOutOfRange(digits))
}

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    pub period: Period,
}

impl Slot {
    /// Creates a coordinate.
    pub fn new(day: Day, period: Period) -> Self {
        Self { day, period }
    }

    /// Whether this is a lunch coordinate.
    #[inline]
    pub fn is_lunch(self) -> bool {
        self.period.is_lunch()
    }

    /// The preceding period on the same day, if any.
    pub fn previous(self) -> Option<Slot> {
        self.period.previous().map(|p| Slot::new(self.day, p))
    }

    /// All 40 coordinates, day-major.
    pub fn all() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|d| Period::ALL.into_iter().map(move |p| Slot::new(d, p)))
    }

    /// The 35 non-lunch coordinates, day-major.
    pub fn teaching() -> impl Iterator<Item = Slot> {
        Slot::all().filter(|s| !s.is_lunch())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.period)
    }
}
