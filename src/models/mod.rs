//! Timetable domain models.
//!
//! Provides the week grid coordinates, cell contents, input records,
//! and the timetable container itself.
//!
//! # Grid Layout
//!
//! | | I | II | III | IV | V | VI | VII | VIII |
//! |---|---|---|---|---|---|---|---|---|
//! | Monday..Friday | class | class | class | class | **lunch** | class | class | class |

mod calendar;
mod cell;
mod subject;
mod timetable;
mod week;

pub use calendar::{SlotClock, TimeWindow};
pub use cell::{Cell, ClassSession, ColorTag, SpecialSession};
pub use subject::{Priority, SpecialClass, Subject, UNASSIGNED_FACULTY};
pub use timetable::{GridError, Timetable};
pub use week::{
    parse_period_text, Day, ParseError, Period, Slot, DAYS_PER_WEEK, PERIODS_PER_DAY,
    TEACHING_SLOTS,
};
