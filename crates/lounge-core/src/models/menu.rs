//! Weekly menu text keyed by school day.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SCHOOL_DAYS;

/// Menu text for Monday to Friday of one ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuByDay {
    /// ISO week number the text belongs to
    pub week: i8,
    days: BTreeMap<u8, String>,
}

impl MenuByDay {
    /// Creates an empty menu for `week` with every school day present.
    pub fn new(week: i8) -> Self {
        Self {
            week,
            days: SCHOOL_DAYS.map(|day| (day, String::new())).collect(),
        }
    }

    /// Appends one line (plus newline) to a school day's text.
    pub fn append_line(&mut self, weekday: u8, line: &str) {
        if let Some(text) = self.days.get_mut(&weekday) {
            text.push_str(line);
            text.push('\n');
        }
    }

    /// The text for a weekday, or `None` when nothing was written for it.
    pub fn text(&self, weekday: u8) -> Option<&str> {
        self.days
            .get(&weekday)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Whether no school day has any text.
    pub fn is_empty(&self) -> bool {
        self.days.values().all(String::is_empty)
    }
}
