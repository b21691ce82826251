//! Per-tournament results registry.
//!
//! Maps a result key (competitor name or group label) to the timestamp at
//! which the group finished. Referees insert, the coordinator blocks until the
//! registry has one entry per group, and the public handle snapshots at any
//! time. Entries are append-only: a second insert under the same key is
//! rejected, which gives the at-most-once guarantee per group.

use std::collections::HashMap;
use std::sync::{Condvar, Mutex};

use time::OffsetDateTime;

#[derive(Debug)]
pub(crate) struct ResultsRegistry {
    entries: Mutex<HashMap<String, OffsetDateTime>>,
    updated: Condvar,
}

impl ResultsRegistry {
    pub(crate) fn new() -> ResultsRegistry {
        ResultsRegistry {
            entries: Mutex::new(HashMap::new()),
            updated: Condvar::new(),
        }
    }

    /// Record `key` as finished now. Returns `false` if the key was already
    /// present; the registry is left untouched in that case.
    pub(crate) fn record(&self, key: String) -> bool {
        let mut entries = self.entries.lock().expect("poisoned");
        if entries.contains_key(&key) {
            return false;
        }
        entries.insert(key, OffsetDateTime::now_utc());
        self.updated.notify_all();
        true
    }

    /// Clone of the current entries. Possibly partial while the tournament is
    /// still running.
    pub(crate) fn snapshot(&self) -> HashMap<String, OffsetDateTime> {
        self.entries.lock().expect("poisoned").clone()
    }

    /// Block until at least `count` entries have been recorded.
    pub(crate) fn wait_for(&self, count: usize) {
        let mut entries = self.entries.lock().expect("poisoned");
        while entries.len() < count {
            entries = self.updated.wait(entries).expect("poisoned");
        }
    }
}
