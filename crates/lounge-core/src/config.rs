//! Kiosk configuration.
//!
//! Configuration is a JSON file. Without an explicit path the kiosk looks for
//! `$XDG_CONFIG_HOME/lounge/config.json` and falls back to built-in defaults
//! when none exists. Every field is optional:
//!
//! ```json
//! {
//!   "time_zone": "Europe/Stockholm",
//!   "locale": "english",
//!   "countdown_style": "clock",
//!   "clock_format": "%H:%M",
//!   "schedule": {
//!     "monday": [{ "open": "11:00", "close": "13:45" }]
//!   },
//!   "menu_path": "menu.txt",
//!   "timetable_path": "Lessons.txt",
//!   "lunch": { "subject_keyword": "Lunch", "excluded_groups": ["support", "prao"], "lead_minutes": 5 },
//!   "refresh": { "status_secs": 1, "lunch_secs": 5, "reload_secs": 600, "rotation_secs": 10 }
//! }
//! ```
//!
//! Relative source paths are resolved against the directory of the
//! configuration file.

use std::path::{Path, PathBuf};

use jiff::{civil::date, fmt::strtime, tz::TimeZone};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    countdown::CountdownStyle,
    error::{FileResultExt, KioskError, Result, ResultExt},
    labels::Locale,
    lunch::DEFAULT_LEAD_MINUTES,
    models::{ClockTime, Interval, WeeklySchedule},
    timetable::TimetableFilter,
};

/// Directory name under the XDG base directories.
pub const APP_NAME: &str = "lounge";

/// Configuration file name under the XDG config directory.
pub const CONFIG_FILE: &str = "config.json";

/// Complete kiosk configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    /// IANA time zone name; the system time zone when absent
    pub time_zone: Option<String>,
    pub locale: Locale,
    pub countdown_style: CountdownStyle,
    /// strftime format of the clock
    pub clock_format: String,
    pub schedule: WeeklySchedule,
    /// Weekly menu file; no menu panel when absent
    pub menu_path: Option<PathBuf>,
    /// Timetable export; no lunch dashboard when absent
    pub timetable_path: Option<PathBuf>,
    pub lunch: LunchConfig,
    pub refresh: RefreshConfig,
}

/// Lunch dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LunchConfig {
    #[serde(flatten)]
    pub filter: TimetableFilter,
    /// Show the dashboard this many minutes before the next sitting
    pub lead_minutes: u16,
}

/// Tick and reload cadence of the `watch` loop, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub status_secs: u64,
    pub lunch_secs: u64,
    /// Re-read menu and timetable; only at start when absent
    pub reload_secs: Option<u64>,
    /// Alternate menu and lunch panels; both shown when absent
    pub rotation_secs: Option<u64>,
}

impl Default for KioskConfig {
    fn default() -> Self {
        let lunch_hours = vec![Interval::new(ClockTime::hm(11, 0), ClockTime::hm(13, 45))];
        let schedule = (1..=5).fold(WeeklySchedule::default(), |schedule, weekday| {
            schedule.with_day(weekday, lunch_hours.clone())
        });

        Self {
            time_zone: None,
            locale: Locale::default(),
            countdown_style: CountdownStyle::default(),
            clock_format: "%H:%M".to_string(),
            schedule,
            menu_path: Some(PathBuf::from("menu.txt")),
            timetable_path: Some(PathBuf::from("Lessons.txt")),
            lunch: LunchConfig::default(),
            refresh: RefreshConfig::default(),
        }
    }
}

impl Default for LunchConfig {
    fn default() -> Self {
        Self {
            filter: TimetableFilter::default(),
            lead_minutes: DEFAULT_LEAD_MINUTES,
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            status_secs: 1,
            lunch_secs: 5,
            reload_secs: None,
            rotation_secs: None,
        }
    }
}

impl KioskConfig {
    /// Reads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `KioskError::FileSystem` if the file cannot be read,
    /// `KioskError::Serialization` if it is not valid configuration JSON and
    /// `KioskError::InvalidInput` if validation fails.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).fs_context(path)?;
        let mut config: KioskConfig = serde_json::from_str(&text)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads `path` when given, otherwise the XDG configuration file if one
    /// exists, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`KioskConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::find_default_file() {
            Some(path) => Self::load(&path),
            None => {
                debug!("No configuration file found, using defaults");
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// The XDG configuration file, if it exists.
    pub fn find_default_file() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_NAME).find_config_file(CONFIG_FILE)
    }

    /// Makes relative source paths relative to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.menu_path, &mut self.timetable_path]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Checks the whole configuration once, before any tick runs.
    ///
    /// # Errors
    ///
    /// Returns `KioskError::InvalidInput` for the first invalid field and
    /// `KioskError::Configuration` for an unknown time zone.
    pub fn validate(&self) -> Result<()> {
        self.schedule.validate()?;
        self.time_zone()?;

        if self.refresh.status_secs == 0 {
            return Err(KioskError::invalid_input("refresh.status_secs")
                .with_reason("must be at least one second"));
        }
        if self.refresh.lunch_secs == 0 {
            return Err(KioskError::invalid_input("refresh.lunch_secs")
                .with_reason("must be at least one second"));
        }
        if self.refresh.reload_secs == Some(0) || self.refresh.rotation_secs == Some(0) {
            return Err(KioskError::invalid_input("refresh")
                .with_reason("intervals must be at least one second"));
        }
        if self.lunch.filter.subject_keyword.is_empty() {
            return Err(KioskError::invalid_input("lunch.subject_keyword")
                .with_reason("must not be empty"));
        }
        // An empty entry would exclude every group.
        if let Some(index) = self
            .lunch
            .filter
            .excluded_groups
            .iter()
            .position(|group| group.trim().is_empty())
        {
            return Err(KioskError::invalid_input(format!("lunch.excluded_groups[{index}]"))
                .with_reason("must not be empty"));
        }

        let sample = date(2024, 1, 1).at(12, 0, 0, 0).to_zoned(TimeZone::UTC)?;
        strtime::format(&self.clock_format, &sample).map_err(|e| {
            KioskError::invalid_input("clock_format").with_reason(e.to_string())
        })?;

        Ok(())
    }

    /// The configured time zone, or the system time zone.
    ///
    /// # Errors
    ///
    /// Returns `KioskError::Configuration` if the name is not a known zone.
    pub fn time_zone(&self) -> Result<TimeZone> {
        match &self.time_zone {
            Some(name) => parse_time_zone(name),
            None => Ok(TimeZone::system()),
        }
    }
}

/// Looks up an IANA time zone by name; `UTC` works without a tz database.
///
/// # Errors
///
/// Returns `KioskError::Configuration` if the name is not a known zone.
pub fn parse_time_zone(name: &str) -> Result<TimeZone> {
    if name.eq_ignore_ascii_case("UTC") {
        return Ok(TimeZone::UTC);
    }
    TimeZone::get(name).with_context(format!("Unknown time zone '{name}'"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = KioskConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lunch.lead_minutes, 5);
        assert_eq!(config.lunch.filter.subject_keyword, "Lunch");
        assert_eq!(config.refresh.lunch_secs, 5);
        assert_eq!(config.schedule.day(3).len(), 1);
        assert!(config.schedule.day(0).is_empty());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: KioskConfig = serde_json::from_str(
            r#"{"locale": "english", "lunch": {"excluded_groups": ["staff"]}}"#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.lunch.filter.excluded_groups, vec!["staff"]);
        assert_eq!(config.lunch.filter.subject_keyword, "Lunch");
        assert_eq!(config.lunch.lead_minutes, 5);
        assert_eq!(config.clock_format, "%H:%M");
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"time_zone": "UTC", "menu_path": "menu.txt", "timetable_path": "/srv/Lessons.txt"}"#,
        )
        .unwrap();

        let config = KioskConfig::load(&path).unwrap();
        assert_eq!(config.menu_path, Some(temp_dir.path().join("menu.txt")));
        assert_eq!(config.timetable_path, Some(PathBuf::from("/srv/Lessons.txt")));
    }

    #[test]
    fn test_load_rejects_overlapping_schedule() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"time_zone": "UTC", "schedule": {"monday": [
                {"open": "08:00", "close": "10:00"},
                {"open": "09:00", "close": "11:00"}
            ]}}"#,
        )
        .unwrap();

        let err = KioskConfig::load(&path).unwrap_err();
        assert!(matches!(err, KioskError::InvalidInput { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = KioskConfig::load(Path::new("/nonexistent/lounge/config.json")).unwrap_err();
        assert!(matches!(err, KioskError::FileSystem { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = KioskConfig::load(&path).unwrap_err();
        assert!(matches!(err, KioskError::Serialization { .. }));
    }

    #[test]
    fn test_validate_refresh_intervals() {
        let mut config = KioskConfig::default();
        config.refresh.status_secs = 0;
        assert!(config.validate().is_err());

        let mut config = KioskConfig::default();
        config.refresh.rotation_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_exclusion() {
        let mut config = KioskConfig::default();
        config.lunch.filter.excluded_groups = vec!["support".to_string(), " ".to_string()];
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            KioskError::InvalidInput { ref field, .. } if field == "lunch.excluded_groups[1]"
        ));

        config.lunch.filter.excluded_groups.clear();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_time_zone_utc() {
        assert_eq!(parse_time_zone("utc").unwrap().iana_name(), Some("UTC"));
        assert!(parse_time_zone("Nowhere/Atlantis").is_err());
    }

    #[test]
    fn test_validate_unknown_time_zone() {
        let config = KioskConfig {
            time_zone: Some("Nowhere/Atlantis".to_string()),
            ..KioskConfig::default()
        };
        assert!(matches!(config.validate(), Err(KioskError::Configuration { .. })));
    }
}
