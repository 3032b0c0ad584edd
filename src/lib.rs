//! Weekly class timetable engine for the U-Engine ecosystem.
//!
//! Builds a 5-day × 8-period grid from subject demands, stamps fixed
//! special sessions over it, and supports swapping cells afterwards
//! without breaking the grid's invariants (lunch fixed at period V, one
//! session per cell).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Day`, `Period`, `Slot`, `Cell`,
//!   `Subject`, `SpecialClass`, `Timetable`, `SlotClock`
//! - **`scheduler`**: Random constrained placement, overrides, placement
//!   and workload reports
//! - **`relocation`**: Post-generation move/swap of two grid coordinates
//! - **`validation`**: Input checks (blank fields, duplicate codes,
//!   unresolvable special classes, excess demand)
//!
//! # Randomness
//!
//! Every random choice draws from a caller-supplied [`rand::Rng`], so a
//! seeded generator reproduces the same grid.
//!
//! # Logging
//!
//! Emits `tracing` events (starvation at `warn`, skipped overrides and
//! rejected relocations at `debug`). No subscriber is installed here.

pub mod models;
pub mod relocation;
pub mod scheduler;
pub mod validation;
