//! Config for tournament runtime behaviors
//!
//! This module provides configuration options controlling how tournaments run:
//! the polling tick of competitor runners and whether the crate logs to a
//! file.
//!
//! Configuration can be created programmatically using [`Configuration::new()`]
//! or by reading environment variables using [`Configuration::from_env()`].
//!
//! # Environment Variables
//!
//! All values are optional; unset or unparsable values fall back to defaults.
//!
//! - `RACE_TICK_MS` — Runner polling period in milliseconds (default: `16`)
//! - `RACE_LOG` — Set to `"true"` to enable logging to a file (default: `false`)

use std::time::Duration;

/// Configuration for tournament runtime behaviors.
#[derive(Debug, Clone, Copy)]
pub struct Configuration {
    pub(crate) tick: Duration,
    pub(crate) log: bool,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - Runners poll their competitor roughly once per frame (16 ms).
    /// - Logging to file is disabled.
    pub fn new() -> Self {
        Self {
            tick: Duration::from_millis(16),
            log: false,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// - `RACE_TICK_MS`: runner polling period in milliseconds (default: `16`)
    /// - `RACE_LOG`: if set to `"true"` (case-insensitive), enables logging to
    ///   a file (default: `false`)
    pub fn from_env() -> Self {
        let tick = std::env::var("RACE_TICK_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .map(Duration::from_millis);

        let log = match std::env::var("RACE_LOG") {
            Ok(val) => val.eq_ignore_ascii_case("true"),
            Err(_) => false,
        };

        Self {
            tick: tick.unwrap_or(Duration::from_millis(16)),
            log,
        }
    }

    /// Set the period at which runners poll competitor progress.
    ///
    /// Tests typically shorten this to finish races quickly.
    pub fn with_tick(mut self, value: Duration) -> Self {
        self.tick = value;
        self
    }

    /// Enable or disable logging to file.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
