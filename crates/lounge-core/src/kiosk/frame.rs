//! Per-tick view of the kiosk.
//!
//! A [`Frame`] is what the rendering side consumes: clock strings, the
//! resolved status with its countdown, the lunch dashboard and the week's
//! menu. Frames are serializable for machine consumers and implement
//! `Display` (see [`crate::display`]) for the terminal.

use jiff::{fmt::strtime, Zoned};
use serde::Serialize;

use crate::{
    countdown::{format_countdown, CountdownStyle},
    display::LocalDate,
    error::{KioskError, Result},
    labels::{Labels, Locale},
    menu::iso_week,
    models::{
        ClockTime, LunchDashboardState, LunchEvent, MenuByDay, ResolvedStatus, StatusLabel,
        SCHOOL_DAYS,
    },
};

/// Which content the frame shows below the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    /// Lunch dashboard and menu
    #[default]
    All,
    Menu,
    /// Lunch dashboard and today's sittings
    Lunch,
}

impl Panel {
    /// The panel shown after this one when rotating.
    pub fn next(self) -> Self {
        match self {
            Panel::Menu => Panel::Lunch,
            Panel::Lunch | Panel::All => Panel::Menu,
        }
    }
}

/// Everything shown on screen at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub locale: Locale,
    pub clock: ClockFace,
    pub status: StatusView,
    pub lunch: Option<LunchView>,
    /// Today's lunch sittings
    pub sittings: Vec<LunchEvent>,
    pub menu: Option<MenuView>,
    #[serde(skip)]
    pub panel: Panel,
}

impl Frame {
    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panel = panel;
        self
    }

    pub fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }
}

/// Clock and date strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockFace {
    pub time: String,
    pub date: String,
    pub week: i8,
}

impl ClockFace {
    /// Formats `now` with the configured strftime `format`.
    ///
    /// # Errors
    ///
    /// Returns `KioskError::InvalidInput` if the format cannot be rendered.
    pub fn new(now: &Zoned, format: &str, labels: &Labels) -> Result<Self> {
        let time = strtime::format(format, now)
            .map_err(|e| KioskError::invalid_input("clock_format").with_reason(e.to_string()))?;

        Ok(Self {
            time,
            date: LocalDate::new(now, labels).to_string(),
            week: iso_week(now.date()),
        })
    }
}

/// Open/closed headline plus countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    #[serde(flatten)]
    pub status: ResolvedStatus,
    pub headline: String,
    pub caption: String,
    pub countdown: Option<String>,
}

impl StatusView {
    pub fn new(status: ResolvedStatus, now: &Zoned, style: CountdownStyle, labels: &Labels) -> Self {
        let (headline, caption) = match status.label {
            StatusLabel::Open => (labels.open, labels.closes_in),
            StatusLabel::Closed => (labels.closed, labels.opens_in),
            StatusLabel::ClosedNoUpcoming => (labels.closed, labels.no_upcoming),
        };
        let countdown = status
            .target
            .map(|target| format_countdown(now.timestamp(), target, style));

        Self {
            status,
            headline: headline.to_string(),
            caption: caption.to_string(),
            countdown,
        }
    }
}

/// Lunch dashboard with display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LunchView {
    #[serde(flatten)]
    pub state: LunchDashboardState,
    /// Groups eating now, or the "preparing" placeholder
    pub now_display: Vec<String>,
    /// "starts in N min" for the next groups
    pub starts_in: Option<String>,
    /// Start of the next sitting as `HH:MM`
    pub next_start: Option<String>,
}

impl LunchView {
    pub fn new(state: LunchDashboardState, labels: &Labels) -> Self {
        let now_display = if state.now_groups.is_empty() {
            vec![labels.preparing.to_string()]
        } else {
            state.now_groups.clone()
        };
        let starts_in = state
            .minutes_until_next
            .filter(|_| !state.next_groups.is_empty())
            .map(|minutes| labels.starts_in(minutes));
        let next_start = state
            .next_start_minute
            .and_then(ClockTime::from_minutes)
            .map(|time| time.to_string());

        Self {
            state,
            now_display,
            starts_in,
            next_start,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }
}

/// Whether the menu file could be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MenuAvailability {
    Loaded,
    Loading,
    Unavailable { reason: String },
}

/// One school day of the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuDayView {
    pub weekday: u8,
    pub name: String,
    /// `None` renders as "no menu"
    pub text: Option<String>,
    pub is_today: bool,
}

/// The week's menu, or why it is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub week: i8,
    pub availability: MenuAvailability,
    pub days: Vec<MenuDayView>,
}

impl MenuView {
    pub fn loaded(menu: &MenuByDay, today: u8, labels: &Labels) -> Self {
        let days = SCHOOL_DAYS
            .map(|weekday| MenuDayView {
                weekday,
                name: labels.weekday(weekday).to_string(),
                text: menu.text(weekday).map(str::to_string),
                is_today: weekday == today,
            })
            .collect();

        Self {
            week: menu.week,
            availability: MenuAvailability::Loaded,
            days,
        }
    }

    pub fn pending(week: i8) -> Self {
        Self {
            week,
            availability: MenuAvailability::Loading,
            days: Vec::new(),
        }
    }

    pub fn unavailable(week: i8, reason: &str) -> Self {
        Self {
            week,
            availability: MenuAvailability::Unavailable {
                reason: reason.to_string(),
            },
            days: Vec::new(),
        }
    }

    /// Whether the file loaded but has nothing for this week.
    pub fn is_empty_week(&self) -> bool {
        self.availability == MenuAvailability::Loaded && self.days.iter().all(|d| d.text.is_none())
    }
}
