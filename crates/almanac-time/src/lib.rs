//! # almanac-time
//!
//! Weekday, month, week-rotation, and annual-calendar types.
//!
//! The [`Calendar`] engine computes, for every month of a year, the weekday
//! each day-of-month falls on — given the weekday of January 1 — and renders
//! the result as fixed-width text grids.  Everything is pure, deterministic
//! computation; the caller supplies the January 1 anchor from whatever date
//! facility it has.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Annual calendar engine and text rendering.
pub mod calendar;

/// `Month` — month of the year.
pub mod month;

/// Week-start rotation of the seven weekdays.
pub mod week;

/// `Weekday` — day of the week.
pub mod weekday;

/// Leap-year and month-length primitives.
pub mod year;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use month::Month;
pub use week::WeekOrder;
pub use weekday::Weekday;
pub use year::{days_in_month, is_leap_year, MAX_YEAR, MIN_YEAR};
