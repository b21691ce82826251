//! Process-wide rest policy applied after every finished leg.
//!
//! Every runner, once it has covered its distance and raised its done signal,
//! pauses for the configured cooldown before the competitor is marked available
//! for a new tournament. The value is read once per runner at completion time,
//! so changing it mid-race only affects legs that finish afterwards. Tests
//! inject [`Duration::ZERO`] to finish immediately.

use std::sync::RwLock;
use std::time::Duration;

static COOLDOWN: RwLock<Duration> = RwLock::new(Duration::from_millis(2000));

/// Read/write access to the process-wide post-race cooldown.
///
/// Defaults to two seconds.
pub struct RestConfig;

impl RestConfig {
    /// Current cooldown duration.
    pub fn cooldown() -> Duration {
        *COOLDOWN.read().expect("poisoned")
    }

    /// Replace the cooldown duration for all legs finishing from now on.
    pub fn set_cooldown(value: Duration) {
        *COOLDOWN.write().expect("poisoned") = value;
    }
}

#[cfg(test)]
mod rest_tests {
    use super::*;

    #[test]
    fn cooldown_is_writable() {
        let original = RestConfig::cooldown();
        RestConfig::set_cooldown(Duration::from_millis(5));
        assert_eq!(RestConfig::cooldown(), Duration::from_millis(5));
        RestConfig::set_cooldown(original);
    }
}
