//! One-shot signals: a boolean with waiters.
//!
//! Each signal has a single writer: the coordinator raises the start barrier
//! and the completion signal, a runner raises its own done signal (which doubles
//! as the next member's chain link in relay races). Once raised, a signal stays
//! raised.

use std::sync::{Condvar, Mutex};

#[derive(Debug)]
pub(crate) struct Signal {
    raised: Mutex<bool>,
    waiters: Condvar,
}

impl Signal {
    pub(crate) fn new() -> Signal {
        Signal {
            raised: Mutex::new(false),
            waiters: Condvar::new(),
        }
    }

    /// Raise the signal and wake every waiter. Idempotent.
    pub(crate) fn raise(&self) {
        let mut raised = self.raised.lock().expect("poisoned");
        *raised = true;
        self.waiters.notify_all();
    }

    /// Block until the signal has been raised.
    pub(crate) fn wait(&self) {
        let mut raised = self.raised.lock().expect("poisoned");
        while !*raised {
            raised = self.waiters.wait(raised).expect("poisoned");
        }
    }

    pub(crate) fn is_raised(&self) -> bool {
        *self.raised.lock().expect("poisoned")
    }
}

#[cfg(test)]
mod signal_tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn starts_lowered() {
        assert!(!Signal::new().is_raised());
    }

    #[test]
    fn raise_releases_waiters() {
        let signal = Arc::new(Signal::new());
        let waiter = {
            let signal = signal.clone();
            std::thread::spawn(move || signal.wait())
        };
        std::thread::sleep(Duration::from_millis(20));
        assert!(!waiter.is_finished());
        signal.raise();
        waiter.join().unwrap();
        assert!(signal.is_raised());
    }

    #[test]
    fn wait_after_raise_returns_immediately() {
        let signal = Signal::new();
        signal.raise();
        signal.wait();
    }
}
