//! The kiosk coordinator.
//!
//! [`Kiosk`] is the one owner of the configuration and of the data loaded
//! from the menu and timetable files. Everything it renders is recomputed
//! from those snapshots and the current time:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Source files   │    │    Snapshots    │    │     Frame       │
//! │ (menu, lessons) │───▶│ (SourceState)   │───▶│ (per tick view) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!       reload()          replaced whole            frame(now)
//! ```
//!
//! A reload replaces a snapshot only when the file was read successfully. A
//! failed reload keeps a previously loaded snapshot and only marks a source
//! that never loaded as failed, so readers always see a complete dataset.
//!
//! # Usage
//!
//! ```rust,no_run
//! use lounge_core::{KioskBuilder, KioskConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut kiosk = KioskBuilder::new()
//!     .with_config(KioskConfig::default())
//!     .build()?;
//! kiosk.reload_all().await;
//!
//! let frame = kiosk.frame(&kiosk.now())?;
//! println!("{frame}");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::PathBuf;

use jiff::{civil::DateTime, tz::TimeZone, Zoned};
use log::{info, warn};
use tokio::task;

pub mod builder;
pub mod frame;

pub use builder::KioskBuilder;
pub use frame::{ClockFace, Frame, LunchView, MenuAvailability, MenuDayView, MenuView, Panel, StatusView};

use crate::{
    config::KioskConfig,
    error::{FileResultExt, KioskError, Result},
    lunch::aggregate,
    menu::{iso_week, parse_menu},
    models::{weekday_number, LunchEvent, LunchSchedule},
    resolver::resolve,
    timetable::parse_timetable,
};

/// A data source the kiosk reads from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Menu,
    Timetable,
}

impl Resource {
    pub const ALL: [Resource; 2] = [Resource::Menu, Resource::Timetable];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Menu => "menu",
            Resource::Timetable => "timetable",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The latest complete snapshot of one data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceState<T> {
    /// No path configured
    Disabled,
    /// Configured but not loaded yet
    Pending,
    Ready(T),
    /// Never loaded successfully
    Failed { reason: String },
}

impl<T> SourceState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            SourceState::Ready(data) => Some(data),
            _ => None,
        }
    }

    fn initial(path: Option<&PathBuf>) -> Self {
        if path.is_some() {
            SourceState::Pending
        } else {
            SourceState::Disabled
        }
    }

    fn record_failure(&mut self, resource: Resource, error: &KioskError) {
        if let SourceState::Ready(_) = self {
            warn!("Reloading {resource} failed, keeping previous data: {error}");
        } else {
            warn!("Loading {resource} failed: {error}");
            *self = SourceState::Failed {
                reason: error.to_string(),
            };
        }
    }
}

/// Owns configuration and source snapshots; produces a [`Frame`] per tick.
pub struct Kiosk {
    config: KioskConfig,
    time_zone: TimeZone,
    menu: SourceState<String>,
    timetable: SourceState<LunchSchedule>,
}

impl Kiosk {
    /// Creates a kiosk from an already validated configuration.
    pub(crate) fn new(config: KioskConfig, time_zone: TimeZone) -> Self {
        Self {
            menu: SourceState::initial(config.menu_path.as_ref()),
            timetable: SourceState::initial(config.timetable_path.as_ref()),
            config,
            time_zone,
        }
    }

    pub fn config(&self) -> &KioskConfig {
        &self.config
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    pub fn menu_state(&self) -> &SourceState<String> {
        &self.menu
    }

    pub fn timetable_state(&self) -> &SourceState<LunchSchedule> {
        &self.timetable
    }

    /// The current instant in the kiosk's time zone.
    pub fn now(&self) -> Zoned {
        Zoned::now().with_time_zone(self.time_zone.clone())
    }

    /// A civil date and time interpreted in the kiosk's time zone.
    ///
    /// # Errors
    ///
    /// Returns `KioskError::Time` if the instant cannot be represented.
    pub fn at(&self, datetime: DateTime) -> Result<Zoned> {
        Ok(datetime.to_zoned(self.time_zone.clone())?)
    }

    /// Re-reads one source, replacing its snapshot only on success.
    ///
    /// Disabled sources are left alone.
    ///
    /// # Errors
    ///
    /// Returns the read error after recording it on the source.
    pub async fn reload(&mut self, resource: Resource) -> Result<()> {
        let path = match resource {
            Resource::Menu => self.config.menu_path.clone(),
            Resource::Timetable => self.config.timetable_path.clone(),
        };
        let Some(path) = path else {
            return Ok(());
        };

        match read_source(path.clone()).await {
            Ok(text) => {
                self.replace(resource, &text);
                info!("Loaded {resource} from {}", path.display());
                Ok(())
            }
            Err(error) => {
                match resource {
                    Resource::Menu => self.menu.record_failure(resource, &error),
                    Resource::Timetable => self.timetable.record_failure(resource, &error),
                }
                Err(error)
            }
        }
    }

    /// Reloads every configured source and returns how many failed.
    ///
    /// Failures are recorded on the sources and never stop the display.
    pub async fn reload_all(&mut self) -> usize {
        let mut failures = 0;
        for resource in Resource::ALL {
            if self.reload(resource).await.is_err() {
                failures += 1;
            }
        }
        failures
    }

    /// Replaces a source's snapshot with freshly read text.
    pub fn replace(&mut self, resource: Resource, text: &str) {
        match resource {
            Resource::Menu => self.menu = SourceState::Ready(text.to_string()),
            Resource::Timetable => {
                let schedule = parse_timetable(text, &self.config.lunch.filter);
                info!("Timetable has {} lunch sittings", schedule.len());
                self.timetable = SourceState::Ready(schedule);
            }
        }
    }

    /// Drops loaded timetable data so the lunch dashboard disappears.
    pub fn clear_timetable(&mut self) {
        if self.timetable != SourceState::Disabled {
            self.timetable = SourceState::Pending;
        }
    }

    /// Assembles everything the display shows at `now`.
    ///
    /// # Errors
    ///
    /// Returns `KioskError::Time` if the status target cannot be computed and
    /// `KioskError::InvalidInput` if the clock format fails to render.
    pub fn frame(&self, now: &Zoned) -> Result<Frame> {
        let labels = self.config.locale.labels();
        let status = resolve(&self.config.schedule, now)?;

        Ok(Frame {
            locale: self.config.locale,
            clock: ClockFace::new(now, &self.config.clock_format, labels)?,
            status: StatusView::new(status, now, self.config.countdown_style, labels),
            lunch: self.lunch_view(now),
            sittings: self.today_lunches(now),
            menu: self.menu_view(now),
            panel: Panel::All,
        })
    }

    /// The lunch dashboard at `now`, or `None` without timetable data.
    pub fn lunch_view(&self, now: &Zoned) -> Option<LunchView> {
        let schedule = self.timetable.ready()?;
        let state = aggregate(schedule, now, self.config.lunch.lead_minutes);
        Some(LunchView::new(state, self.config.locale.labels()))
    }

    /// Today's lunch sittings in start order.
    pub fn today_lunches(&self, now: &Zoned) -> Vec<LunchEvent> {
        self.timetable
            .ready()
            .map(|schedule| schedule.events_on(weekday_number(now.weekday())).to_vec())
            .unwrap_or_default()
    }

    /// The menu for `now`'s ISO week.
    pub fn menu_view(&self, now: &Zoned) -> Option<MenuView> {
        self.menu_view_for_week(iso_week(now.date()), weekday_number(now.weekday()))
    }

    /// The menu for an arbitrary ISO week, marking `today` (sunday-zero).
    pub fn menu_view_for_week(&self, week: i8, today: u8) -> Option<MenuView> {
        let labels = self.config.locale.labels();
        match &self.menu {
            SourceState::Disabled => None,
            SourceState::Pending => Some(MenuView::pending(week)),
            SourceState::Failed { reason } => Some(MenuView::unavailable(week, reason)),
            SourceState::Ready(text) => {
                Some(MenuView::loaded(&parse_menu(text, week), today, labels))
            }
        }
    }
}

async fn read_source(path: PathBuf) -> Result<String> {
    task::spawn_blocking(move || std::fs::read_to_string(&path).fs_context(&path))
        .await
        .map_err(|e| KioskError::Configuration {
            message: format!("Task join error: {e}"),
        })?
}
