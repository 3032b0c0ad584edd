//! Weekly timetable grid.
//!
//! A [`Timetable`] is a total mapping day → period → [`Cell`] over the
//! fixed 5 × 8 week. The lunch cell at period V of every day is set on
//! construction and can never be replaced or moved: all mutation goes
//! through crate-internal methods that refuse lunch coordinates.
//!
//! # Serialization
//! Serialized as a nested map (`{"Monday": {"I": {...}, ...}, ...}`).
//! Deserialization re-checks that all 40 cells are present and that
//! lunch sits exactly at period V.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;
use thiserror::Error;

use super::cell::Cell;
use super::week::{Day, Period, Slot, DAYS_PER_WEEK, PERIODS_PER_DAY};

/// Structural defect in a deserialized grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate has no cell.
    #[error("no cell at {0}")]
    MissingCell(Slot),
    /// Lunch found away from period V.
    #[error("lunch placed at {0}")]
    LunchMisplaced(Slot),
    /// Period V of a day is not lunch.
    #[error("{0} has no lunch at period V")]
    LunchMissing(Day),
}

/// Nested-map wire form.
type TimetableRepr = BTreeMap<Day, BTreeMap<Period, Cell>>;

/// A complete weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TimetableRepr", try_from = "TimetableRepr")]
pub struct Timetable {
    cells: [[Cell; PERIODS_PER_DAY]; DAYS_PER_WEEK],
}

impl Timetable {
    /// Creates an empty grid with lunch at period V of every day.
    pub fn new() -> Self {
        let cells = std::array::from_fn(|_| {
            std::array::from_fn(|p| {
                if Period::ALL[p].is_lunch() {
                    Cell::Lunch
                } else {
                    Cell::Empty
                }
            })
        });
        Self { cells }
    }

    /// Cell at a coordinate.
    #[inline]
    pub fn get(&self, slot: Slot) -> &Cell {
        &self.cells[slot.day.index()][slot.period.index()]
    }

    /// All periods of one day, in order.
    pub fn day(&self, day: Day) -> &[Cell; PERIODS_PER_DAY] {
        &self.cells[day.index()]
    }

    /// Every coordinate with its cell, day-major.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Cell)> + '_ {
        Slot::all().map(move |s| (s, self.get(s)))
    }

    /// Whether a teaching slot is still free.
    pub fn is_free(&self, slot: Slot) -> bool {
        self.get(slot).is_empty()
    }

    /// Number of empty cells.
    pub fn free_slot_count(&self) -> usize {
        self.iter().filter(|(_, c)| c.is_empty()).count()
    }

    /// Number of occupied cells carrying `code`.
    pub fn count_subject(&self, code: &str) -> usize {
        self.iter()
            .filter(|(_, c)| c.subject_code() == Some(code))
            .count()
    }

    /// Coordinates of occupied cells carrying `code`.
    pub fn slots_of_subject(&self, code: &str) -> Vec<Slot> {
        self.iter()
            .filter(|(_, c)| c.subject_code() == Some(code))
            .map(|(s, _)| s)
            .collect()
    }

    /// Whether every day has lunch at period V and nowhere else.
    pub fn lunch_intact(&self) -> bool {
        self.iter().all(|(s, c)| s.is_lunch() == c.is_lunch())
    }

    /// Read-only projection for one faculty member.
    ///
    /// Keeps occupied cells taught by `faculty` plus the lunch cells;
    /// everything else is shown as empty.
    pub fn faculty_view(&self, faculty: &str) -> Timetable {
        let mut view = Timetable::new();
        for (slot, cell) in self.iter() {
            if cell.faculty() == Some(faculty) {
                view.cells[slot.day.index()][slot.period.index()] = cell.clone();
            }
        }
        view
    }

    /// Writes a non-lunch cell into a non-lunch slot.
    ///
    /// Returns `false` and leaves the grid untouched otherwise.
    pub(crate) fn place(&mut self, slot: Slot, cell: Cell) -> bool {
        if slot.is_lunch() || cell.is_lunch() {
            return false;
        }
        self.cells[slot.day.index()][slot.period.index()] = cell;
        true
    }

    /// Exchanges the contents of two non-lunch slots.
    ///
    /// Same-day exchanges happen within one row; cross-day exchanges
    /// touch the two rows independently.
    pub(crate) fn swap(&mut self, a: Slot, b: Slot) -> bool {
        if a.is_lunch() || b.is_lunch() {
            return false;
        }
        if a.day == b.day {
            self.cells[a.day.index()].swap(a.period.index(), b.period.index());
        } else {
            let taken = std::mem::take(&mut self.cells[a.day.index()][a.period.index()]);
            let displaced =
                std::mem::replace(&mut self.cells[b.day.index()][b.period.index()], taken);
            self.cells[a.day.index()][a.period.index()] = displaced;
        }
        true
    }
}

impl Default for Timetable {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Slot> for Timetable {
    type Output = Cell;

    fn index(&self, slot: Slot) -> &Cell {
        self.get(slot)
    }
}

impl From<Timetable> for TimetableRepr {
    fn from(t: Timetable) -> Self {
        let mut repr = TimetableRepr::new();
        for (day, row) in Day::ALL.into_iter().zip(t.cells) {
            repr.insert(day, Period::ALL.into_iter().zip(row).collect());
        }
        repr
    }
}

impl TryFrom<TimetableRepr> for Timetable {
    type Error = GridError;

    fn try_from(mut repr: TimetableRepr) -> Result<Self, Self::Error> {
        let mut grid = Timetable::new();
        for slot in Slot::all() {
            let cell = repr
                .get_mut(&slot.day)
                .and_then(|row| row.remove(&slot.period))
                .ok_or(GridError::MissingCell(slot))?;
            match (slot.is_lunch(), cell.is_lunch()) {
                (true, true) => {}
                (true, false) => return Err(GridError::LunchMissing(slot.day)),
                (false, true) => return Err(GridError::LunchMisplaced(slot)),
                (false, false) => {
                    grid.place(slot, cell);
                }
            }
        }
        Ok(grid)
    }
}
