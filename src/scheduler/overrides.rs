//! Special-session overrides.
//!
//! Fixed sessions (labs, seminars, guest lectures) are stamped onto the
//! grid after random placement. They replace whatever the assigner put
//! there. Records whose day or period cannot be resolved, or that point
//! at lunch, are skipped; generation never fails because of them.

use tracing::debug;

use crate::models::{Cell, ColorTag, SpecialClass, SpecialSession, Timetable};

/// Applies special classes to `grid` in order.
///
/// A later record aimed at the same slot replaces an earlier one.
/// Returns the number of records applied.
pub fn apply_overrides(grid: &mut Timetable, specials: &[SpecialClass]) -> usize {
    let mut applied = 0;
    for special in specials {
        match special.resolve() {
            Ok(slot) => {
                let replaced = grid.get(slot).subject_code().map(str::to_string);
                let cell = Cell::Special(SpecialSession {
                    name: special.name.clone(),
                    venue: special.venue.clone(),
                    color: ColorTag::Accent,
                });
                if grid.place(slot, cell) {
                    applied += 1;
                    debug!(name = %special.name, %slot, ?replaced, "special class applied");
                }
            }
            Err(err) => {
                debug!(
                    name = %special.name,
                    day = %special.day,
                    period = %special.period,
                    %err,
                    "special class skipped"
                );
            }
        }
    }
    applied
}
