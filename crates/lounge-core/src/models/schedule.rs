//! Weekly recurring opening hours.

use serde::{Deserialize, Serialize};

use super::ClockTime;
use crate::error::{KioskError, Result};

/// Lowercase English day names indexed by sunday-zero weekday number.
pub const DAY_FIELDS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// A half-open opening interval `[open, close)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub open: ClockTime,
    pub close: ClockTime,
}

impl Interval {
    pub fn new(open: ClockTime, close: ClockTime) -> Self {
        Self { open, close }
    }

    /// Whether `minute` (minutes since midnight) falls inside the interval.
    pub fn contains(&self, minute: u16) -> bool {
        self.open.minutes() <= minute && minute < self.close.minutes()
    }
}

/// Fixed mapping from weekday to opening intervals, repeating every week.
///
/// An empty list means the lounge is closed all day. Intervals within a day
/// must be sorted and non-overlapping; [`WeeklySchedule::validate`] checks
/// this once at startup so the resolver can rely on scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sunday: Vec<Interval>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub monday: Vec<Interval>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tuesday: Vec<Interval>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wednesday: Vec<Interval>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thursday: Vec<Interval>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub friday: Vec<Interval>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub saturday: Vec<Interval>,
}

impl WeeklySchedule {
    /// Intervals for a sunday-zero weekday number (taken modulo 7).
    pub fn day(&self, weekday: u8) -> &[Interval] {
        match weekday % 7 {
            0 => &self.sunday,
            1 => &self.monday,
            2 => &self.tuesday,
            3 => &self.wednesday,
            4 => &self.thursday,
            5 => &self.friday,
            _ => &self.saturday,
        }
    }

    fn day_mut(&mut self, weekday: u8) -> &mut Vec<Interval> {
        match weekday % 7 {
            0 => &mut self.sunday,
            1 => &mut self.monday,
            2 => &mut self.tuesday,
            3 => &mut self.wednesday,
            4 => &mut self.thursday,
            5 => &mut self.friday,
            _ => &mut self.saturday,
        }
    }

    /// Replaces the intervals of one weekday.
    pub fn with_day(mut self, weekday: u8, intervals: Vec<Interval>) -> Self {
        *self.day_mut(weekday) = intervals;
        self
    }

    /// Whether no day has any opening interval.
    pub fn is_always_closed(&self) -> bool {
        (0..7).all(|day| self.day(day).is_empty())
    }

    /// Checks that every interval opens before it closes and that each day is sorted and
    /// non-overlapping.
    ///
    /// # Errors
    ///
    /// Returns `KioskError::InvalidInput` naming the offending day.
    pub fn validate(&self) -> Result<()> {
        for (day, name) in DAY_FIELDS.iter().enumerate() {
            let mut previous_close = ClockTime::MIDNIGHT;
            for (index, interval) in self.day(day as u8).iter().enumerate() {
                if interval.open >= interval.close {
                    return Err(KioskError::invalid_input(format!("schedule.{name}"))
                        .with_reason(format!(
                            "interval {} opens at {} but closes at {}",
                            index + 1,
                            interval.open,
                            interval.close
                        )));
                }
                if index > 0 && interval.open < previous_close {
                    return Err(KioskError::invalid_input(format!("schedule.{name}"))
                        .with_reason(format!(
                            "interval {} starts at {} before the previous one closes at {}",
                            index + 1,
                            interval.open,
                            previous_close
                        )));
                }
                previous_close = interval.close;
            }
        }
        Ok(())
    }
}
