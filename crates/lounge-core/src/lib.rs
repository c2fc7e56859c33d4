//! Core library for the lounge kiosk.
//!
//! The kiosk is a single screen in a school lounge showing a clock, whether
//! the lounge is open (with a countdown to the next change), who is eating
//! lunch now and next, and the week's menu. This crate holds all of the
//! logic; the `lounge` binary only renders it.
//!
//! # Components
//!
//! - [`resolver`]: open/closed status over a weekly recurring schedule
//! - [`countdown`]: time-to-target formatting
//! - [`timetable`]: tab-separated timetable export → lunch sittings per day
//! - [`lunch`]: "eating now" / "eating next" with de-duplication
//! - [`menu`]: sectioned weekly menu text → text per school day, ISO weeks
//! - [`kiosk`]: owner of configuration and loaded data, builds a
//!   [`Frame`] per tick
//! - [`display`]: markdown formatting of frames
//!
//! Each component is a pure function of the current time and parsed data;
//! only [`Kiosk`] holds state.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::{civil::date, tz::TimeZone};
//! use lounge_core::{KioskBuilder, KioskConfig, Resource};
//!
//! let config = KioskConfig {
//!     time_zone: Some("UTC".to_string()),
//!     ..KioskConfig::default()
//! };
//! let mut kiosk = KioskBuilder::new().with_config(config).build()?;
//! kiosk.replace(Resource::Menu, "[WEEK 12]\n[MONDAY]\nSoup\n");
//!
//! // Monday of ISO week 12, inside the default 11:00-13:45 opening hours
//! let now = kiosk.at(date(2024, 3, 18).at(12, 30, 0, 0))?;
//! let frame = kiosk.frame(&now)?;
//! assert!(frame.status.status.is_open);
//! assert_eq!(frame.status.countdown.as_deref(), Some("01:15:00"));
//! println!("{frame}");
//! # Ok::<(), lounge_core::KioskError>(())
//! ```

pub mod config;
pub mod countdown;
pub mod display;
pub mod error;
pub mod kiosk;
pub mod labels;
pub mod lunch;
pub mod menu;
pub mod models;
pub mod resolver;
pub mod timetable;

// Re-export commonly used types
pub use config::KioskConfig;
pub use countdown::{format_countdown, CountdownStyle};
pub use display::{ErrorScreen, LunchDashboard, MenuPage, OperationStatus, Sittings};
pub use error::{KioskError, Result};
pub use kiosk::{Frame, Kiosk, KioskBuilder, Panel, Resource, SourceState};
pub use labels::{Labels, Locale};
pub use lunch::aggregate;
pub use menu::{iso_week, parse_menu};
pub use models::{
    ClockTime, Interval, LunchDashboardState, LunchEvent, LunchSchedule, MenuByDay,
    ResolvedStatus, StatusLabel, WeeklySchedule,
};
pub use resolver::resolve;
pub use timetable::{parse_timetable, TimetableFilter};
