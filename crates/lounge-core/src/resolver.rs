//! Open/closed resolution over a weekly recurring schedule.
//!
//! [`resolve`] answers two questions for a given instant: is the lounge open,
//! and when does that change next. While open, the target is the close time
//! of the current interval; while closed, it is the next opening, looking at
//! most seven days ahead.
//!
//! The schedule must have passed [`WeeklySchedule::validate`]: the first
//! matching interval in scan order is taken as the earliest one.

use jiff::{Timestamp, ToSpan, Zoned};

use crate::{
    error::Result,
    models::{
        minute_of_day, weekday_number, ResolvedStatus, WeeklySchedule, MINUTES_PER_DAY,
    },
};

/// Resolves the lounge status at `now`, in `now`'s time zone.
///
/// # Errors
///
/// Returns `KioskError::Time` if the target instant cannot be represented,
/// which only happens at the edges of the supported calendar range.
///
/// # Examples
///
/// ```rust
/// use jiff::{civil::date, tz::TimeZone};
/// use lounge_core::models::{ClockTime, Interval, StatusLabel, WeeklySchedule};
/// use lounge_core::resolver::resolve;
///
/// let schedule = WeeklySchedule::default().with_day(
///     1,
///     vec![Interval::new(ClockTime::hm(11, 0), ClockTime::hm(13, 45))],
/// );
/// // 2024-03-18 is a Monday
/// let now = date(2024, 3, 18).at(12, 30, 0, 0).to_zoned(TimeZone::UTC).unwrap();
/// let status = resolve(&schedule, &now).unwrap();
/// assert_eq!(status.label, StatusLabel::Open);
/// ```
pub fn resolve(schedule: &WeeklySchedule, now: &Zoned) -> Result<ResolvedStatus> {
    let today = weekday_number(now.weekday());
    let minute = minute_of_day(now.time());
    let intervals = schedule.day(today);

    if let Some(current) = intervals.iter().find(|interval| interval.contains(minute)) {
        let target = instant_at(now, 0, current.close.minutes())?;
        return Ok(ResolvedStatus::open_until(target));
    }

    if let Some(next) = intervals
        .iter()
        .find(|interval| interval.open.minutes() >= minute)
    {
        let target = instant_at(now, 0, next.open.minutes())?;
        return Ok(ResolvedStatus::closed_until(target));
    }

    // Day 7 is today again, one week later.
    for days_ahead in 1..=7u8 {
        if let Some(first) = schedule.day(today + days_ahead).first() {
            let target = instant_at(now, i64::from(days_ahead), first.open.minutes())?;
            return Ok(ResolvedStatus::closed_until(target));
        }
    }

    Ok(ResolvedStatus::closed_no_upcoming())
}

/// The instant at `minute` past midnight, `days_ahead` days after `now`'s
/// civil date, in `now`'s time zone. `24:00` rolls over to the next day.
fn instant_at(now: &Zoned, days_ahead: i64, minute: u16) -> Result<Timestamp> {
    let days = days_ahead + i64::from(minute / MINUTES_PER_DAY);
    let minute = minute % MINUTES_PER_DAY;
    let date = now.date().checked_add(days.days())?;
    let zoned = date
        .at((minute / 60) as i8, (minute % 60) as i8, 0, 0)
        .to_zoned(now.time_zone().clone())?;
    Ok(zoned.timestamp())
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone};

    use super::*;
    use crate::models::{ClockTime, Interval, StatusLabel};

    fn at(year: i16, month: i8, day: i8, hour: i8, minute: i8) -> Zoned {
        date(year, month, day)
            .at(hour, minute, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    fn interval(open: (u16, u16), close: (u16, u16)) -> Interval {
        Interval::new(ClockTime::hm(open.0, open.1), ClockTime::hm(close.0, close.1))
    }

    fn lunch_hours() -> WeeklySchedule {
        WeeklySchedule::default().with_day(1, vec![interval((11, 0), (13, 45))])
    }

    fn school_week() -> WeeklySchedule {
        let day = vec![interval((8, 0), (9, 30)), interval((11, 0), (13, 45))];
        (1..=5).fold(WeeklySchedule::default(), |schedule, weekday| {
            schedule.with_day(weekday, day.clone())
        })
    }

    #[test]
    fn test_open_targets_close_time() {
        // 2024-03-18 is a Monday
        let status = resolve(&lunch_hours(), &at(2024, 3, 18, 12, 30)).unwrap();
        assert!(status.is_open);
        assert_eq!(status.label, StatusLabel::Open);
        assert_eq!(status.target, Some(at(2024, 3, 18, 13, 45).timestamp()));
    }

    #[test]
    fn test_open_boundary_is_half_open() {
        let opening = resolve(&lunch_hours(), &at(2024, 3, 18, 11, 0)).unwrap();
        assert!(opening.is_open);

        let closing = resolve(&lunch_hours(), &at(2024, 3, 18, 13, 45)).unwrap();
        assert!(!closing.is_open);
        assert_eq!(closing.label, StatusLabel::Closed);
        // Next Monday
        assert_eq!(closing.target, Some(at(2024, 3, 25, 11, 0).timestamp()));
    }

    #[test]
    fn test_closed_before_same_day_opening() {
        let status = resolve(&lunch_hours(), &at(2024, 3, 18, 7, 15)).unwrap();
        assert!(!status.is_open);
        assert_eq!(status.target, Some(at(2024, 3, 18, 11, 0).timestamp()));
    }

    #[test]
    fn test_closed_between_intervals_targets_next_pair() {
        let status = resolve(&school_week(), &at(2024, 3, 19, 10, 0)).unwrap();
        assert_eq!(status.label, StatusLabel::Closed);
        assert_eq!(status.target, Some(at(2024, 3, 19, 11, 0).timestamp()));
    }

    #[test]
    fn test_friday_evening_wraps_to_monday() {
        // 2024-03-22 is a Friday
        let status = resolve(&school_week(), &at(2024, 3, 22, 18, 0)).unwrap();
        assert_eq!(status.label, StatusLabel::Closed);
        assert_eq!(status.target, Some(at(2024, 3, 25, 8, 0).timestamp()));
    }

    #[test]
    fn test_sunday_looks_ahead_to_monday() {
        let status = resolve(&school_week(), &at(2024, 3, 24, 23, 59)).unwrap();
        assert_eq!(status.target, Some(at(2024, 3, 25, 8, 0).timestamp()));
    }

    #[test]
    fn test_wraps_across_month_and_year() {
        // 2024-12-31 is a Tuesday; only Mondays are open
        let status = resolve(&lunch_hours(), &at(2024, 12, 31, 9, 0)).unwrap();
        assert_eq!(status.target, Some(at(2025, 1, 6, 11, 0).timestamp()));
    }

    #[test]
    fn test_no_upcoming_opening() {
        let status = resolve(&WeeklySchedule::default(), &at(2024, 3, 18, 12, 0)).unwrap();
        assert_eq!(status, ResolvedStatus::closed_no_upcoming());
        assert!(status.target.is_none());
    }

    #[test]
    fn test_close_at_end_of_day() {
        let schedule = WeeklySchedule::default()
            .with_day(6, vec![Interval::new(ClockTime::hm(20, 0), ClockTime::END_OF_DAY)]);
        // 2024-03-23 is a Saturday
        let status = resolve(&schedule, &at(2024, 3, 23, 23, 30)).unwrap();
        assert!(status.is_open);
        assert_eq!(status.target, Some(at(2024, 3, 24, 0, 0).timestamp()));
    }

    #[test]
    fn test_target_uses_local_wall_clock() {
        let tz = TimeZone::fixed(jiff::tz::offset(1));
        let now = date(2024, 3, 18).at(12, 30, 0, 0).to_zoned(tz.clone()).unwrap();
        let status = resolve(&lunch_hours(), &now).unwrap();
        let expected = date(2024, 3, 18).at(13, 45, 0, 0).to_zoned(tz).unwrap();
        assert_eq!(status.target, Some(expected.timestamp()));
    }

    #[test]
    fn test_is_open_matches_intervals_for_every_minute_of_a_week() {
        let schedule = school_week();
        let start = at(2024, 3, 17, 0, 0);
        for offset in (0..7 * 24 * 60).step_by(7) {
            let now = start.checked_add(offset.minutes()).unwrap();
            let weekday = weekday_number(now.weekday());
            let minute = minute_of_day(now.time());
            let expected = schedule.day(weekday).iter().any(|i| i.contains(minute));

            let status = resolve(&schedule, &now).unwrap();
            assert_eq!(status.is_open, expected, "mismatch at {now}");
            let target = status.target.expect("school week always has an upcoming event");
            assert!(target > now.timestamp(), "target not in the future at {now}");
        }
    }
}
