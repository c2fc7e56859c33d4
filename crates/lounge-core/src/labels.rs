//! Display strings for the two kiosk locales.

use serde::{Deserialize, Serialize};

/// Language of the kiosk's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Swedish,
    English,
}

/// Every user-facing string the kiosk renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub open: &'static str,
    pub closed: &'static str,
    pub closes_in: &'static str,
    pub opens_in: &'static str,
    pub no_upcoming: &'static str,
    pub lunch_heading: &'static str,
    pub eating_now: &'static str,
    pub eating_next: &'static str,
    pub preparing: &'static str,
    pub menu_heading: &'static str,
    pub week: &'static str,
    pub no_menu: &'static str,
    pub menu_loading: &'static str,
    pub menu_error: &'static str,
    pub no_lunches: &'static str,
    pub sittings_heading: &'static str,
    pub system_error: &'static str,
    /// Sunday-zero weekday names
    pub weekdays: [&'static str; 7],
    starts_in: (&'static str, &'static str),
}

const SWEDISH: Labels = Labels {
    open: "ÖPPET",
    closed: "STÄNGT",
    closes_in: "Stänger om",
    opens_in: "Öppnar om",
    no_upcoming: "Inga kommande öppettider",
    lunch_heading: "Lunch",
    eating_now: "Äter nu",
    eating_next: "Äter härnäst",
    preparing: "Förbereder…",
    menu_heading: "Veckans meny",
    week: "Vecka",
    no_menu: "Ingen meny",
    menu_loading: "Laddar menyn…",
    menu_error: "Kunde inte ladda menyn",
    no_lunches: "Inga luncher idag",
    sittings_heading: "Dagens luncher",
    system_error: "Systemfel",
    weekdays: ["Söndag", "Måndag", "Tisdag", "Onsdag", "Torsdag", "Fredag", "Lördag"],
    starts_in: ("börjar om", "min"),
};

const ENGLISH: Labels = Labels {
    open: "OPEN",
    closed: "CLOSED",
    closes_in: "Closes in",
    opens_in: "Opens in",
    no_upcoming: "No upcoming opening hours",
    lunch_heading: "Lunch",
    eating_now: "Eating now",
    eating_next: "Eating next",
    preparing: "Preparing…",
    menu_heading: "This week's menu",
    week: "Week",
    no_menu: "No menu",
    menu_loading: "Loading menu…",
    menu_error: "Could not load the menu",
    no_lunches: "No lunches today",
    sittings_heading: "Today's lunches",
    system_error: "System error",
    weekdays: ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
    starts_in: ("starts in", "min"),
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Swedish => &SWEDISH,
            Locale::English => &ENGLISH,
        }
    }
}

impl Labels {
    /// Localized name of a sunday-zero weekday number.
    pub fn weekday(&self, weekday: u8) -> &'static str {
        self.weekdays[usize::from(weekday % 7)]
    }

    /// "starts in N min"
    pub fn starts_in(&self, minutes: u16) -> String {
        format!("{} {minutes} {}", self.starts_in.0, self.starts_in.1)
    }
}
