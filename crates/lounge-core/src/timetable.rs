//! Timetable export parsing.
//!
//! The export is tab-separated with one lesson per line. Only five columns
//! are read (0-indexed):
//!
//! | column | content |
//! |---|---|
//! | 1 | subject name |
//! | 2 | weekday abbreviation (`Mon`, `Tue`, `Wed`, `Thur`, `Fri`, `Sat`, `Sun`) |
//! | 3 | start time as an `HMM`/`HHMM` integer, `930` is 09:30 |
//! | 4 | duration in minutes |
//! | 6 | group or class name |
//!
//! Rows that cannot be read are skipped, never reported as errors.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{LunchEvent, LunchSchedule, MINUTES_PER_DAY, SCHOOL_DAYS};

const MIN_COLUMNS: usize = 7;

/// Which timetable rows count as lunch sittings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableFilter {
    /// Substring the subject must contain (case-sensitive)
    pub subject_keyword: String,
    /// Substrings that exclude a group (compared lowercase)
    pub excluded_groups: Vec<String>,
}

impl Default for TimetableFilter {
    fn default() -> Self {
        Self {
            subject_keyword: "Lunch".to_string(),
            excluded_groups: vec!["support".to_string(), "prao".to_string()],
        }
    }
}

impl TimetableFilter {
    /// Whether a subject and group pass the filter.
    pub fn accepts(&self, subject: &str, group: &str) -> bool {
        if !subject.contains(&self.subject_keyword) || group.is_empty() {
            return false;
        }
        let group = group.to_lowercase();
        !self
            .excluded_groups
            .iter()
            .any(|excluded| group.contains(&excluded.to_lowercase()))
    }
}

/// Parses a timetable export into lunch sittings per school day.
///
/// # Examples
///
/// ```rust
/// use lounge_core::timetable::{parse_timetable, TimetableFilter};
///
/// let text = "1\tLunch\tTue\t1100\t45\tx\t8B\n2\tMath\tMon\t930\t45\tx\t8A\n";
/// let schedule = parse_timetable(text, &TimetableFilter::default());
///
/// let tuesday = schedule.events_on(2);
/// assert_eq!(tuesday.len(), 1);
/// assert_eq!((tuesday[0].start_minute, tuesday[0].end_minute), (660, 705));
/// assert!(schedule.events_on(1).is_empty());
/// ```
pub fn parse_timetable(text: &str, filter: &TimetableFilter) -> LunchSchedule {
    let mut schedule = LunchSchedule::new();

    for (number, line) in text.lines().enumerate() {
        let Some(row) = TimetableRow::parse(line) else {
            if !line.trim().is_empty() {
                debug!("Skipping unreadable timetable line {}", number + 1);
            }
            continue;
        };

        if !filter.accepts(row.subject, row.group) {
            continue;
        }
        let Some(weekday) = row.weekday.filter(|day| SCHOOL_DAYS.contains(day)) else {
            continue;
        };

        schedule.insert(
            weekday,
            LunchEvent::new(row.group, row.start_minute, row.end_minute),
        );
    }

    schedule
}

/// The columns of one timetable line that the parser reads.
#[derive(Debug, PartialEq, Eq)]
struct TimetableRow<'a> {
    subject: &'a str,
    weekday: Option<u8>,
    start_minute: u16,
    end_minute: u16,
    group: &'a str,
}

impl<'a> TimetableRow<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let columns: Vec<&str> = line.split('\t').map(str::trim).collect();
        if columns.len() < MIN_COLUMNS {
            return None;
        }

        let start_minute = hmm_to_minutes(columns[3].parse().ok()?)?;
        let duration: u16 = columns[4].parse().ok()?;
        let end_minute = start_minute.checked_add(duration)?;
        if duration == 0 || end_minute > MINUTES_PER_DAY {
            return None;
        }

        Some(Self {
            subject: columns[1],
            weekday: weekday_from_abbreviation(columns[2]),
            start_minute,
            end_minute,
            group: columns[6],
        })
    }
}

/// Converts an `HMM`/`HHMM` integer to minutes since midnight.
pub fn hmm_to_minutes(hmm: u16) -> Option<u16> {
    let (hours, minutes) = (hmm / 100, hmm % 100);
    if minutes >= 60 {
        return None;
    }
    let total = hours * 60 + minutes;
    (total < MINUTES_PER_DAY).then_some(total)
}

/// Maps the export's weekday abbreviations to sunday-zero weekday numbers.
pub fn weekday_from_abbreviation(abbreviation: &str) -> Option<u8> {
    match abbreviation {
        "Sun" => Some(0),
        "Mon" => Some(1),
        "Tue" => Some(2),
        "Wed" => Some(3),
        "Thur" | "Thu" => Some(4),
        "Fri" => Some(5),
        "Sat" => Some(6),
        _ => None,
    }
}
