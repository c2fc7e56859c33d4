//! Lunch sittings derived from the timetable export.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ClockTime, SCHOOL_DAYS};

/// One group's lunch sitting on a given weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchEvent {
    /// Class or group name as written in the timetable
    pub group: String,
    /// Minutes since midnight, inclusive
    pub start_minute: u16,
    /// Minutes since midnight, exclusive
    pub end_minute: u16,
}

impl LunchEvent {
    pub fn new(group: impl Into<String>, start_minute: u16, end_minute: u16) -> Self {
        Self {
            group: group.into(),
            start_minute,
            end_minute,
        }
    }

    /// Whether the sitting is in progress at `minute`.
    pub fn is_active_at(&self, minute: u16) -> bool {
        self.start_minute <= minute && minute < self.end_minute
    }

    pub fn start(&self) -> Option<ClockTime> {
        ClockTime::from_minutes(self.start_minute)
    }

    pub fn end(&self) -> Option<ClockTime> {
        ClockTime::from_minutes(self.end_minute)
    }
}

/// Lunch sittings per school day (sunday-zero weekday numbers `1..=5`).
///
/// Every school day key is always present, possibly with an empty list, and
/// each day's events are sorted ascending by start minute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchSchedule {
    days: BTreeMap<u8, Vec<LunchEvent>>,
}

impl LunchSchedule {
    /// Creates a schedule with an empty list for every school day.
    pub fn new() -> Self {
        Self {
            days: SCHOOL_DAYS.map(|day| (day, Vec::new())).collect(),
        }
    }

    /// Events for a weekday; empty for weekends.
    pub fn events_on(&self, weekday: u8) -> &[LunchEvent] {
        self.days.get(&weekday).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Adds an event to a school day, keeping the day sorted by start.
    ///
    /// Returns `false` (and drops the event) for non-school days.
    pub fn insert(&mut self, weekday: u8, event: LunchEvent) -> bool {
        let Some(events) = self.days.get_mut(&weekday) else {
            return false;
        };
        let position = events.partition_point(|e| e.start_minute <= event.start_minute);
        events.insert(position, event);
        true
    }

    /// Iterates `(weekday, events)` pairs in weekday order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[LunchEvent])> {
        self.days.iter().map(|(day, events)| (*day, events.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LunchSchedule {
    fn default() -> Self {
        Self::new()
    }
}

/// Who is eating now and who eats next.
///
/// `now_groups` and `next_groups` are disjoint and keep timetable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchDashboardState {
    pub now_groups: Vec<String>,
    pub next_groups: Vec<String>,
    /// Start of the next sitting today, minutes since midnight
    pub next_start_minute: Option<u16>,
    /// Minutes from now until `next_start_minute`
    pub minutes_until_next: Option<u16>,
    pub visible: bool,
}

impl LunchDashboardState {
    /// A dashboard that is not shown.
    pub fn hidden() -> Self {
        Self::default()
    }
}
