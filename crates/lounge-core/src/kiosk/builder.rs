//! Builder for creating and configuring Kiosk instances.

use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;

use super::Kiosk;
use crate::{config::KioskConfig, error::Result};

/// Builder for creating and configuring Kiosk instances.
#[derive(Debug, Clone, Default)]
pub struct KioskBuilder {
    config: Option<KioskConfig>,
    config_path: Option<PathBuf>,
    time_zone: Option<TimeZone>,
}

impl KioskBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an in-memory configuration instead of reading a file.
    pub fn with_config(mut self, config: KioskConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets a custom configuration file path.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/lounge/config.json` when it
    /// exists and the built-in defaults otherwise.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the configured time zone.
    pub fn with_time_zone(mut self, time_zone: Option<TimeZone>) -> Self {
        if let Some(time_zone) = time_zone {
            self.time_zone = Some(time_zone);
        }
        self
    }

    /// Builds the kiosk, validating the configuration first.
    ///
    /// Sources are not read yet; call [`Kiosk::reload_all`].
    ///
    /// # Errors
    ///
    /// Returns `KioskError::FileSystem` or `KioskError::Serialization` if the
    /// configuration file cannot be read, and `KioskError::InvalidInput` or
    /// `KioskError::Configuration` if it is invalid.
    pub fn build(self) -> Result<Kiosk> {
        let config = match self.config {
            Some(config) => {
                config.validate()?;
                config
            }
            None => KioskConfig::load_or_default(self.config_path.as_deref())?,
        };

        let time_zone = match self.time_zone {
            Some(time_zone) => time_zone,
            None => config.time_zone()?,
        };

        Ok(Kiosk::new(config, time_zone))
    }
}
