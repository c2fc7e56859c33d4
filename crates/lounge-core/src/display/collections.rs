//! Collection display wrappers.

use std::fmt;

use crate::{labels::Labels, models::LunchEvent};

/// The day's lunch sittings as a markdown list.
pub struct Sittings<'a> {
    events: &'a [LunchEvent],
    labels: &'a Labels,
    /// Heading suffix, e.g. the weekday name
    title: Option<&'a str>,
}

impl<'a> Sittings<'a> {
    pub fn new(events: &'a [LunchEvent], labels: &'a Labels) -> Self {
        Self {
            events,
            labels,
            title: None,
        }
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

impl fmt::Display for Sittings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.title {
            Some(title) => writeln!(f, "## {} · {title}", self.labels.sittings_heading)?,
            None => writeln!(f, "## {}", self.labels.sittings_heading)?,
        }
        writeln!(f)?;

        if self.events.is_empty() {
            return writeln!(f, "{}", self.labels.no_lunches);
        }

        for event in self.events {
            match (event.start(), event.end()) {
                (Some(start), Some(end)) => writeln!(f, "- {start}–{end} **{}**", event.group)?,
                _ => writeln!(f, "- **{}**", event.group)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Locale;

    #[test]
    fn test_sittings_list() {
        let events = vec![LunchEvent::new("7A", 645, 675), LunchEvent::new("8B", 660, 705)];
        let output = Sittings::new(&events, Locale::English.labels())
            .with_title("Tuesday")
            .to_string();

        assert!(output.starts_with("## Today's lunches · Tuesday"));
        assert!(output.contains("- 10:45–11:15 **7A**"));
        assert!(output.contains("- 11:00–11:45 **8B**"));
    }

    #[test]
    fn test_empty_sittings() {
        let output = Sittings::new(&[], Locale::Swedish.labels()).to_string();
        assert!(output.contains("Inga luncher idag"));
    }
}
