//! "Eating now" and "eating next" derivation for the lunch dashboard.

use jiff::Zoned;

use crate::{
    countdown::minutes_until,
    models::{minute_of_day, weekday_number, LunchDashboardState, LunchEvent, LunchSchedule},
};

/// Default number of minutes before the next sitting at which the dashboard
/// appears even though nobody is eating.
pub const DEFAULT_LEAD_MINUTES: u16 = 5;

/// Derives the dashboard state for `now` from the lunch schedule.
///
/// The dashboard is visible while some group is eating, or when the next
/// sitting starts within `lead_minutes`. A group that is eating now never
/// appears among the next groups, even with a back-to-back second sitting.
pub fn aggregate(schedule: &LunchSchedule, now: &Zoned, lead_minutes: u16) -> LunchDashboardState {
    let events = schedule.events_on(weekday_number(now.weekday()));
    aggregate_events(events, minute_of_day(now.time()), lead_minutes)
}

/// Same as [`aggregate`] for one day's sorted events and a minute of day.
pub fn aggregate_events(events: &[LunchEvent], now_minute: u16, lead_minutes: u16) -> LunchDashboardState {
    if events.is_empty() {
        return LunchDashboardState::hidden();
    }

    let mut now_groups: Vec<String> = Vec::new();
    for event in events.iter().filter(|event| event.is_active_at(now_minute)) {
        push_unique(&mut now_groups, &event.group);
    }

    let next_start_minute = events
        .iter()
        .map(|event| event.start_minute)
        .filter(|start| *start > now_minute)
        .min();

    let mut next_groups: Vec<String> = Vec::new();
    if let Some(next_start) = next_start_minute {
        for event in events.iter().filter(|event| event.start_minute == next_start) {
            if !now_groups.contains(&event.group) {
                push_unique(&mut next_groups, &event.group);
            }
        }
    }

    let minutes_until_next = next_start_minute.map(|start| minutes_until(now_minute, start));
    let starts_soon = minutes_until_next.is_some_and(|minutes| minutes <= lead_minutes);

    LunchDashboardState {
        visible: !now_groups.is_empty() || starts_soon,
        now_groups,
        next_groups,
        next_start_minute,
        minutes_until_next,
    }
}

fn push_unique(groups: &mut Vec<String>, group: &str) {
    if !groups.iter().any(|existing| existing == group) {
        groups.push(group.to_string());
    }
}
