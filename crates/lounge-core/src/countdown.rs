//! Countdown formatting.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// How a countdown is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownStyle {
    /// `HH:MM:SS`, or `MM:SS` under an hour
    #[default]
    Clock,
    /// `HHH:MMM:SSS` with unit letters, hours always shown
    Units,
}

/// Whole seconds from `now` to `target`, clamped at zero.
pub fn remaining_seconds(now: Timestamp, target: Timestamp) -> i64 {
    target.duration_since(now).as_secs().max(0)
}

/// Formats the time left until `target`.
///
/// A target in the past formats as zero.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use lounge_core::countdown::{format_countdown, CountdownStyle};
///
/// let now = Timestamp::from_second(0).unwrap();
/// let target = Timestamp::from_second(4500).unwrap();
/// assert_eq!(format_countdown(now, target, CountdownStyle::Clock), "01:15:00");
/// assert_eq!(format_countdown(target, now, CountdownStyle::Clock), "00:00");
/// ```
pub fn format_countdown(now: Timestamp, target: Timestamp, style: CountdownStyle) -> String {
    format_seconds(remaining_seconds(now, target), style)
}

/// Formats a non-negative number of seconds; negative input counts as zero.
pub fn format_seconds(total: i64, style: CountdownStyle) -> String {
    let total = total.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    match style {
        CountdownStyle::Clock if hours > 0 => {
            format!("{hours:02}:{minutes:02}:{seconds:02}")
        }
        CountdownStyle::Clock => format!("{minutes:02}:{seconds:02}"),
        CountdownStyle::Units => format!("{hours:02}H:{minutes:02}M:{seconds:02}S"),
    }
}

/// Minutes from `now_minute` until `start_minute`, zero if already started.
pub fn minutes_until(now_minute: u16, start_minute: u16) -> u16 {
    start_minute.saturating_sub(now_minute)
}
