//! Wall-clock time of day with minute precision.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MINUTES_PER_DAY;

/// A time of day expressed as minutes since local midnight.
///
/// Values range over `0..=1440`; `24:00` is accepted so that an interval can
/// close at the end of the day. Serialized as an `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight at the start of the day.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Midnight at the end of the day (`24:00`).
    pub const END_OF_DAY: ClockTime = ClockTime(MINUTES_PER_DAY);

    /// Creates a clock time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Creates a clock time from hours and minutes.
    ///
    /// # Panics
    ///
    /// Panics if the result lies outside `00:00..=24:00` or `minute >= 60`.
    pub fn hm(hour: u16, minute: u16) -> Self {
        assert!(minute < 60, "minute out of range: {minute}");
        Self::from_minutes(hour * 60 + minute).expect("clock time out of range")
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("Invalid clock time (expected HH:MM): {s}"))?;
        let hour: u16 = hour
            .parse()
            .map_err(|_| format!("Invalid hour in clock time: {s}"))?;
        let minute: u16 = minute
            .parse()
            .map_err(|_| format!("Invalid minute in clock time: {s}"))?;

        if minute >= 60 {
            return Err(format!("Invalid minute in clock time: {s}"));
        }
        hour.checked_mul(60)
            .and_then(|minutes| minutes.checked_add(minute))
            .and_then(ClockTime::from_minutes)
            .ok_or_else(|| format!("Clock time past 24:00: {s}"))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}
