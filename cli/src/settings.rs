//! Effective runtime settings.
//!
//! Precedence: command-line flag, then config file, then built-in default.

use std::time::Duration;

use anyhow::{bail, Result};
use portwatch_core::{Config, SourceKind};

/// Settings for one run of the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Delay between two refreshes.
    pub interval: Duration,
    /// Status source to read sockets from.
    pub source: SourceKind,
}

impl Settings {
    /// Merge command-line overrides into the loaded config.
    ///
    /// The source is detected from the host OS when neither the flag nor
    /// the config names one.
    pub fn resolve(
        config: &Config,
        interval_flag: Option<u64>,
        source_flag: Option<SourceKind>,
    ) -> Result<Self> {
        let interval_secs = interval_flag.unwrap_or(config.refresh_interval);
        if interval_secs == 0 {
            bail!("refresh interval must be at least 1 second");
        }

        let source = match source_flag.or(config.source) {
            Some(kind) => kind,
            None => SourceKind::detect()?,
        };

        Ok(Self {
            interval: Duration::from_secs(interval_secs),
            source,
        })
    }
}
