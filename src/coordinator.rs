//! Tournament lifecycle thread.
//!
//! One coordinator per tournament, running the sequence: acquire the
//! tournament's route claim, open the start barrier (the single moment every
//! runner begins), block until the results registry holds one entry per
//! group, release the claim, raise the completion signal. The phases are
//! strictly sequential on the coordinator's own thread; concurrency with
//! other tournaments is mediated entirely by the route gate.

use std::sync::{Arc, Mutex};
use std::thread;

use time::OffsetDateTime;
use tracing::{debug, info, trace};

use crate::gate::{RouteClaim, RouteGate};
use crate::registry::ResultsRegistry;
use crate::signal::Signal;

/// Observable instants of one tournament run.
#[derive(Debug)]
pub(crate) struct Timeline {
    barrier_opened: Mutex<Option<OffsetDateTime>>,
    completed: Mutex<Option<OffsetDateTime>>,
}

impl Timeline {
    pub(crate) fn new() -> Timeline {
        Timeline {
            barrier_opened: Mutex::new(None),
            completed: Mutex::new(None),
        }
    }

    pub(crate) fn barrier_opened(&self) -> Option<OffsetDateTime> {
        *self.barrier_opened.lock().expect("poisoned")
    }

    pub(crate) fn completed(&self) -> Option<OffsetDateTime> {
        *self.completed.lock().expect("poisoned")
    }

    fn mark_barrier_opened(&self) {
        *self.barrier_opened.lock().expect("poisoned") = Some(OffsetDateTime::now_utc());
    }

    fn mark_completed(&self) {
        *self.completed.lock().expect("poisoned") = Some(OffsetDateTime::now_utc());
    }
}

pub(crate) struct Coordinator {
    gate: Arc<RouteGate>,
    claim: RouteClaim,
    barrier: Arc<Signal>,
    registry: Arc<ResultsRegistry>,
    group_count: usize,
    finished: Arc<Signal>,
    timeline: Arc<Timeline>,
}

impl Coordinator {
    pub(crate) fn new(
        gate: Arc<RouteGate>,
        claim: RouteClaim,
        barrier: Arc<Signal>,
        registry: Arc<ResultsRegistry>,
        group_count: usize,
        finished: Arc<Signal>,
        timeline: Arc<Timeline>,
    ) -> Coordinator {
        Coordinator {
            gate,
            claim,
            barrier,
            registry,
            group_count,
            finished,
            timeline,
        }
    }

    pub(crate) fn spawn(self) -> thread::JoinHandle<()> {
        thread::spawn(move || self.run())
    }

    fn run(self) {
        trace!(claim = ?self.claim, "awaiting routes");
        self.gate.acquire(&self.claim);

        self.timeline.mark_barrier_opened();
        self.barrier.raise();
        debug!(groups = self.group_count, "barrier opened");

        self.registry.wait_for(self.group_count);

        // Completion is stamped before the routes go back, so an overlapping
        // tournament can only open its barrier after this timestamp.
        self.timeline.mark_completed();
        self.gate.release(&self.claim);
        self.finished.raise();
        info!(groups = self.group_count, "tournament complete");
    }
}
