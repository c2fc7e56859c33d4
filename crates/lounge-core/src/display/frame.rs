//! Display implementations for kiosk frames.

use std::fmt;

use super::collections::Sittings;
use crate::{
    kiosk::{Frame, LunchView, MenuAvailability, MenuView, Panel, StatusView},
    labels::Labels,
};

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels();

        writeln!(f, "# {}", self.clock.time)?;
        writeln!(f, "{} · {} {}", self.clock.date, labels.week, self.clock.week)?;
        writeln!(f)?;
        write!(f, "{}", self.status)?;

        let show_lunch = matches!(self.panel, Panel::All | Panel::Lunch);
        if let Some(lunch) = self.lunch.as_ref().filter(|_| show_lunch) {
            if lunch.is_visible() {
                writeln!(f)?;
                write!(f, "{}", LunchDashboard::new(lunch, labels))?;
            }
            if self.panel == Panel::Lunch {
                writeln!(f)?;
                write!(f, "{}", Sittings::new(&self.sittings, labels))?;
            }
        }

        if matches!(self.panel, Panel::All | Panel::Menu) {
            if let Some(menu) = &self.menu {
                writeln!(f)?;
                write!(f, "{}", MenuPage::new(menu, labels))?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.headline)?;
        writeln!(f)?;
        match &self.countdown {
            Some(countdown) => writeln!(f, "{} **{countdown}**", self.caption),
            None => writeln!(f, "{}", self.caption),
        }
    }
}

/// The "eating now / eating next" dashboard.
pub struct LunchDashboard<'a> {
    view: &'a LunchView,
    labels: &'a Labels,
}

impl<'a> LunchDashboard<'a> {
    pub fn new(view: &'a LunchView, labels: &'a Labels) -> Self {
        Self { view, labels }
    }
}

impl fmt::Display for LunchDashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.labels.lunch_heading)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **{}:** {}",
            self.labels.eating_now,
            self.view.now_display.join(", ")
        )?;

        if !self.view.state.next_groups.is_empty() {
            write!(
                f,
                "- **{}:** {}",
                self.labels.eating_next,
                self.view.state.next_groups.join(", ")
            )?;
            match (&self.view.next_start, &self.view.starts_in) {
                (Some(start), Some(starts_in)) => writeln!(f, " ({start}, {starts_in})")?,
                (Some(start), None) => writeln!(f, " ({start})")?,
                _ => writeln!(f)?,
            }
        }
        Ok(())
    }
}

/// The week's menu with today marked.
pub struct MenuPage<'a> {
    menu: &'a MenuView,
    labels: &'a Labels,
}

impl<'a> MenuPage<'a> {
    pub fn new(menu: &'a MenuView, labels: &'a Labels) -> Self {
        Self { menu, labels }
    }
}

impl fmt::Display for MenuPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} · {} {}",
            self.labels.menu_heading, self.labels.week, self.menu.week
        )?;
        writeln!(f)?;

        match &self.menu.availability {
            MenuAvailability::Loading => return writeln!(f, "*{}*", self.labels.menu_loading),
            MenuAvailability::Unavailable { .. } => {
                return writeln!(f, "**{}**", self.labels.menu_error)
            }
            MenuAvailability::Loaded => {}
        }

        for day in &self.menu.days {
            if day.is_today {
                writeln!(f, "### ▶ {}", day.name)?;
            } else {
                writeln!(f, "### {}", day.name)?;
            }
            match &day.text {
                Some(text) => write!(f, "{text}")?,
                None => writeln!(f, "*{}*", self.labels.no_menu)?,
            }
        }
        Ok(())
    }
}
