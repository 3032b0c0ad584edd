//! Daily clock: wall-clock windows for each period.
//!
//! Periods run back to back from the start of the day. Every period
//! lasts the class duration except lunch (period V), which has its own
//! length. Placement never reads these times; they exist for display
//! and export.
//!
//! # Time Model
//! Times are minutes since midnight. Windows are half-open `[start, end)`.
//! Arithmetic saturates at `u32::MAX`, so oversized durations yield
//! clamped labels instead of overflowing.

use serde::{Deserialize, Serialize};

use super::week::Period;

/// Default start of the teaching day (09:00).
pub const DEFAULT_DAY_START_MIN: u32 = 9 * 60;
/// Default class length.
pub const DEFAULT_CLASS_MINUTES: u32 = 50;
/// Default lunch length.
pub const DEFAULT_LUNCH_MINUTES: u32 = 60;

/// A time interval [start, end) in minutes since midnight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start_min: u32,
    /// Interval end (exclusive).
    pub end_min: u32,
}

impl TimeWindow {
    pub fn new(start_min: u32, end_min: u32) -> Self {
        Self { start_min, end_min }
    }

    #[inline]
    pub fn duration_min(&self) -> u32 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether a minute-of-day falls within this window.
    #[inline]
    pub fn contains(&self, minute: u32) -> bool {
        minute >= self.start_min && minute < self.end_min
    }

    /// `"HH:MM-HH:MM"`.
    pub fn label(&self) -> String {
        format!("{}-{}", clock(self.start_min), clock(self.end_min))
    }
}

fn clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Period timing for one teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotClock {
    /// First period start, minutes since midnight.
    pub day_start_min: u32,
    /// Length of a class period.
    pub class_minutes: u32,
    /// Length of the lunch period.
    pub lunch_minutes: u32,
}

impl SlotClock {
    /// 09:00 start, 60-minute lunch, given class length.
    pub fn new(class_minutes: u32) -> Self {
        Self {
            day_start_min: DEFAULT_DAY_START_MIN,
            class_minutes,
            lunch_minutes: DEFAULT_LUNCH_MINUTES,
        }
    }

    pub fn with_day_start(mut self, hour: u32, minute: u32) -> Self {
        self.day_start_min = hour.saturating_mul(60).saturating_add(minute);
        self
    }

    pub fn with_lunch_minutes(mut self, minutes: u32) -> Self {
        self.lunch_minutes = minutes;
        self
    }

    fn length_of(&self, period: Period) -> u32 {
        if period.is_lunch() {
            self.lunch_minutes
        } else {
            self.class_minutes
        }
    }

    /// Wall-clock window of a period.
    pub fn window(&self, period: Period) -> TimeWindow {
        let start = Period::ALL[..period.index()]
            .iter()
            .map(|&p| self.length_of(p))
            .fold(self.day_start_min, u32::saturating_add);
        TimeWindow::new(start, start.saturating_add(self.length_of(period)))
    }

    /// Display label of a period, e.g. `"09:50-10:40"`.
    pub fn label(&self, period: Period) -> String {
        self.window(period).label()
    }

    /// Labels for all eight periods in order.
    pub fn labels(&self) -> Vec<String> {
        Period::ALL.iter().map(|&p| self.label(p)).collect()
    }

    /// Period running at a given minute-of-day, if any.
    pub fn period_at(&self, minute: u32) -> Option<Period> {
        Period::ALL
            .into_iter()
            .find(|&p| self.window(p).contains(minute))
    }
}

impl Default for SlotClock {
    fn default() -> Self {
        Self::new(DEFAULT_CLASS_MINUTES)
    }
}
