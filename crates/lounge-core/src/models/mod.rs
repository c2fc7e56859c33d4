//! Data models for the lounge kiosk.
//!
//! This module contains the domain models that the parsers produce and the
//! resolver and aggregator consume. Display implementations for the derived
//! views are located in [`crate::display`] to keep data structures separate
//! from presentation.
//!
//! Weekdays are numbered the same way everywhere in the crate: `0` is Sunday
//! and `6` is Saturday. School days are `1..=5`.
//!
//! # Examples
//!
//! ```rust
//! use lounge_core::models::{ClockTime, Interval, WeeklySchedule};
//!
//! let schedule = WeeklySchedule::default().with_day(
//!     1,
//!     vec![Interval::new(ClockTime::hm(11, 0), ClockTime::hm(13, 45))],
//! );
//! assert!(schedule.validate().is_ok());
//! assert_eq!(schedule.day(1).len(), 1);
//! assert!(schedule.day(2).is_empty());
//! ```

pub mod clock;
pub mod lunch;
pub mod menu;
pub mod schedule;
pub mod status;

#[cfg(test)]
mod tests;

pub use clock::ClockTime;
pub use lunch::{LunchDashboardState, LunchEvent, LunchSchedule};
pub use menu::MenuByDay;
pub use schedule::{Interval, WeeklySchedule};
pub use status::{ResolvedStatus, StatusLabel};

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Sunday-zero weekday numbers of the school days, Monday to Friday.
pub const SCHOOL_DAYS: std::ops::RangeInclusive<u8> = 1..=5;

/// Returns the sunday-zero weekday number of a civil weekday.
pub fn weekday_number(weekday: jiff::civil::Weekday) -> u8 {
    weekday.to_sunday_zero_offset() as u8
}

/// Returns the minute of day (`0..1440`) of a civil time.
pub fn minute_of_day(time: jiff::civil::Time) -> u16 {
    time.hour() as u16 * 60 + time.minute() as u16
}
