//! Group completion watcher.
//!
//! One referee per group. It blocks on the group's terminal done signal (the
//! sole member's for a regular race, the last relay member's for a courier
//! race) and records the finish in the tournament's results registry, waking
//! the coordinator. A referee whose signal never fires never reports.

use std::sync::Arc;
use std::thread;

use tracing::{trace, warn};

use crate::registry::ResultsRegistry;
use crate::signal::Signal;

pub(crate) struct Referee {
    key: String,
    finish: Arc<Signal>,
    registry: Arc<ResultsRegistry>,
}

impl Referee {
    pub(crate) fn new(key: String, finish: Arc<Signal>, registry: Arc<ResultsRegistry>) -> Referee {
        Referee {
            key,
            finish,
            registry,
        }
    }

    pub(crate) fn spawn(self) -> thread::JoinHandle<()> {
        thread::spawn(move || self.run())
    }

    fn run(self) {
        self.finish.wait();
        if self.registry.record(self.key.clone()) {
            trace!(key = %self.key, "finish recorded");
        } else {
            warn!(key = %self.key, "finish already recorded, ignoring");
        }
    }
}

#[cfg(test)]
mod referee_tests {
    use super::*;

    #[test]
    fn records_after_signal() {
        let registry = Arc::new(ResultsRegistry::new());
        let finish = Arc::new(Signal::new());
        let handle = Referee::new("pack".to_owned(), finish.clone(), registry.clone()).spawn();

        assert_eq!(registry.snapshot().len(), 0);
        finish.raise();
        handle.join().unwrap();
        assert_eq!(registry.snapshot().len(), 1);
        assert!(registry.snapshot().contains_key("pack"));
    }

    #[test]
    fn duplicate_signal_records_once() {
        let registry = Arc::new(ResultsRegistry::new());
        let finish = Arc::new(Signal::new());
        finish.raise();
        Referee::new("pack".to_owned(), finish.clone(), registry.clone())
            .spawn()
            .join()
            .unwrap();
        Referee::new("pack".to_owned(), finish, registry.clone())
            .spawn()
            .join()
            .unwrap();
        assert_eq!(registry.snapshot().len(), 1);
    }
}
