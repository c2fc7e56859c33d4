//! Date display utilities.

use std::fmt;

use jiff::Zoned;

use crate::{labels::Labels, models::weekday_number};

/// Formats a zoned date as `<weekday> YYYY-MM-DD` with a localized weekday.
pub struct LocalDate<'a> {
    zoned: &'a Zoned,
    labels: &'a Labels,
}

impl<'a> LocalDate<'a> {
    pub fn new(zoned: &'a Zoned, labels: &'a Labels) -> Self {
        Self { zoned, labels }
    }
}

impl fmt::Display for LocalDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.labels.weekday(weekday_number(self.zoned.weekday())),
            self.zoned.date()
        )
    }
}
