//! Post-generation relocation of grid contents.
//!
//! A relocation exchanges the contents of two coordinates. Whatever was
//! at the destination (possibly nothing) ends up at the source, so no
//! session is ever lost and relocating back restores the original grid.
//!
//! Lunch cells can be neither moved nor overwritten. A rejected request
//! leaves the grid exactly as it was.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Slot, Timetable};

/// Which cells a relocation may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelocationPolicy {
    /// Anything except lunch.
    #[default]
    Free,
    /// Special sessions stay where the override layer put them.
    PinSpecial,
}

/// An accepted relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relocation {
    /// Contents of the two slots were exchanged.
    Swapped,
    /// Source and destination were the same slot.
    Unchanged,
}

/// A rejected relocation. The grid was not modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RelocationError {
    #[error("lunch at {0} cannot be moved")]
    LunchSource(Slot),
    #[error("lunch at {0} cannot be overwritten")]
    LunchDestination(Slot),
    #[error("special session at {0} is pinned")]
    PinnedSpecial(Slot),
}

/// Swaps the contents of `from` and `to` under [`RelocationPolicy::Free`].
pub fn relocate(
    grid: &mut Timetable,
    from: Slot,
    to: Slot,
) -> Result<Relocation, RelocationError> {
    relocate_with(grid, from, to, RelocationPolicy::Free)
}

/// Swaps the contents of `from` and `to` under the given policy.
pub fn relocate_with(
    grid: &mut Timetable,
    from: Slot,
    to: Slot,
    policy: RelocationPolicy,
) -> Result<Relocation, RelocationError> {
    if let Err(err) = check(grid, from, to, policy) {
        debug!(%from, %to, %err, "relocation rejected");
        return Err(err);
    }
    if from == to {
        return Ok(Relocation::Unchanged);
    }
    grid.swap(from, to);
    debug!(%from, %to, "relocated");
    Ok(Relocation::Swapped)
}

/// Non-mutating form: returns the updated grid and whether the move was
/// accepted. On rejection the returned grid equals `grid`.
pub fn relocated(grid: &Timetable, from: Slot, to: Slot) -> (Timetable, bool) {
    let mut next = grid.clone();
    let accepted = relocate(&mut next, from, to).is_ok();
    (next, accepted)
}

fn check(
    grid: &Timetable,
    from: Slot,
    to: Slot,
    policy: RelocationPolicy,
) -> Result<(), RelocationError> {
    if from.is_lunch() {
        return Err(RelocationError::LunchSource(from));
    }
    if to.is_lunch() {
        return Err(RelocationError::LunchDestination(to));
    }
    if policy == RelocationPolicy::PinSpecial {
        for slot in [from, to] {
            if grid.get(slot).is_special() {
                return Err(RelocationError::PinnedSpecial(slot));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, ClassSession, ColorTag, Day, Period, SpecialSession};

    fn occupied(code: &str) -> Cell {
        Cell::Occupied(ClassSession {
            subject_code: code.into(),
            subject_name: code.into(),
            faculty: "TBA".into(),
            venue: "Room 1".into(),
            color: ColorTag::Purple,
        })
    }

    fn special(name: &str) -> Cell {
        Cell::Special(SpecialSession {
            name: name.into(),
            venue: "Hall".into(),
            color: ColorTag::Accent,
        })
    }

    fn sample_grid() -> Timetable {
        let mut t = Timetable::new();
        t.place(Slot::new(Day::Monday, Period::I), occupied("A"));
        t.place(Slot::new(Day::Monday, Period::II), occupied("B"));
        t.place(Slot::new(Day::Thursday, Period::VII), occupied("C"));
        t.place(Slot::new(Day::Friday, Period::III), special("Lab"));
        t
    }

    #[test]
    fn test_swap_same_day() {
        let mut t = sample_grid();
        let a = Slot::new(Day::Monday, Period::I);
        let b = Slot::new(Day::Monday, Period::II);

        assert_eq!(relocate(&mut t, a, b), Ok(Relocation::Swapped));
        assert_eq!(t[a].subject_code(), Some("B"));
        assert_eq!(t[b].subject_code(), Some("A"));
    }

    #[test]
    fn test_swap_cross_day() {
        let mut t = sample_grid();
        let a = Slot::new(Day::Monday, Period::I);
        let b = Slot::new(Day::Thursday, Period::VII);

        assert_eq!(relocate(&mut t, a, b), Ok(Relocation::Swapped));
        assert_eq!(t[a].subject_code(), Some("C"));
        assert_eq!(t[b].subject_code(), Some("A"));
    }

    #[test]
    fn test_move_into_empty() {
        let mut t = sample_grid();
        let a = Slot::new(Day::Monday, Period::I);
        let empty = Slot::new(Day::Wednesday, Period::VIII);

        assert_eq!(relocate(&mut t, a, empty), Ok(Relocation::Swapped));
        assert!(t[a].is_empty());
        assert_eq!(t[empty].subject_code(), Some("A"));
        assert_eq!(t.count_subject("A"), 1);
    }

    #[test]
    fn test_same_slot_is_noop() {
        let mut t = sample_grid();
        let a = Slot::new(Day::Monday, Period::I);
        assert_eq!(relocate(&mut t, a, a), Ok(Relocation::Unchanged));
        assert_eq!(t, sample_grid());
    }

    #[test]
    fn test_lunch_rejected_both_ways() {
        let before = sample_grid();
        let lunch = Slot::new(Day::Monday, Period::V);
        let a = Slot::new(Day::Monday, Period::IV);

        let mut t = before.clone();
        assert_eq!(
            relocate(&mut t, a, lunch),
            Err(RelocationError::LunchDestination(lunch))
        );
        assert_eq!(
            relocate(&mut t, lunch, a),
            Err(RelocationError::LunchSource(lunch))
        );
        assert_eq!(
            relocate(&mut t, lunch, lunch),
            Err(RelocationError::LunchSource(lunch))
        );
        assert_eq!(t, before);
    }

    #[test]
    fn test_inverse_restores_grid() {
        let original = sample_grid();
        let coords: Vec<Slot> = Slot::teaching().collect();
        for &a in coords.iter().step_by(3) {
            for &b in coords.iter().step_by(4) {
                let mut t = original.clone();
                relocate(&mut t, a, b).unwrap();
                relocate(&mut t, b, a).unwrap();
                assert_eq!(t, original, "{a} <-> {b}");
            }
        }
    }

    #[test]
    fn test_special_moves_freely_by_default() {
        let mut t = sample_grid();
        let lab = Slot::new(Day::Friday, Period::III);
        let dest = Slot::new(Day::Friday, Period::IV);
        assert!(relocate(&mut t, lab, dest).is_ok());
        assert!(t[dest].is_special());
    }

    #[test]
    fn test_pin_special_policy() {
        let mut t = sample_grid();
        let lab = Slot::new(Day::Friday, Period::III);
        let a = Slot::new(Day::Monday, Period::I);
        let before = t.clone();

        assert_eq!(
            relocate_with(&mut t, lab, a, RelocationPolicy::PinSpecial),
            Err(RelocationError::PinnedSpecial(lab))
        );
        assert_eq!(
            relocate_with(&mut t, a, lab, RelocationPolicy::PinSpecial),
            Err(RelocationError::PinnedSpecial(lab))
        );
        assert_eq!(t, before);

        let b = Slot::new(Day::Monday, Period::II);
        assert_eq!(
            relocate_with(&mut t, a, b, RelocationPolicy::PinSpecial),
            Ok(Relocation::Swapped)
        );
    }

    #[test]
    fn test_relocated_pure() {
        let t = sample_grid();
        let a = Slot::new(Day::Monday, Period::I);
        let b = Slot::new(Day::Tuesday, Period::I);

        let (moved, accepted) = relocated(&t, a, b);
        assert!(accepted);
        assert_eq!(moved[b].subject_code(), Some("A"));
        assert_eq!(t[a].subject_code(), Some("A"));

        let (same, accepted) = relocated(&t, a, Slot::new(Day::Tuesday, Period::LUNCH));
        assert!(!accepted);
        assert_eq!(same, t);
    }

    #[test]
    fn test_lunch_survives_every_move() {
        let mut t = sample_grid();
        for day in Day::ALL {
            for period in Period::ALL {
                let to = Slot::new(day, period);
                let _ = relocate(&mut t, Slot::new(Day::Monday, Period::I), to);
            }
        }
        assert!(t.lunch_intact());
        assert_eq!(t.count_subject("A") + t.count_subject("B") + t.count_subject("C"), 3);
    }
}
