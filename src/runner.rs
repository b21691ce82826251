//! Per-competitor motion thread.
//!
//! A runner drives exactly one competitor through one leg: wait for its start
//! signal (the tournament barrier, or the preceding member's done signal in a
//! relay), command movement, poll progress at the configured tick, and raise
//! its own done signal once the leg distance is covered. Energy exhaustion is
//! not an error: the runner parks in a stalled sub-state and re-commands
//! movement as soon as external feeding has restored energy, picking up from
//! the current position.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use crate::competitor::Competitor;
use crate::rest::RestConfig;
use crate::route::RouteDomain;
use crate::signal::Signal;

pub(crate) struct CompetitorRunner {
    competitor: Arc<dyn Competitor>,
    needed_distance: f64,
    start: Arc<Signal>,
    done: Arc<Signal>,
    chained: bool,
    tick: Duration,
}

impl CompetitorRunner {
    pub(crate) fn new(
        competitor: Arc<dyn Competitor>,
        needed_distance: f64,
        start: Arc<Signal>,
        done: Arc<Signal>,
        chained: bool,
        tick: Duration,
    ) -> CompetitorRunner {
        CompetitorRunner {
            competitor,
            needed_distance,
            start,
            done,
            chained,
            tick,
        }
    }

    pub(crate) fn spawn(self) -> thread::JoinHandle<()> {
        thread::spawn(move || self.run())
    }

    fn run(self) {
        self.start.wait();

        let competitor = &self.competitor;
        let baseline = competitor.distance_traveled();
        let mut needed = self.needed_distance;
        trace!(name = %competitor.name(), needed, "leg started");
        competitor.begin_moving();

        let mut stalled = false;
        loop {
            thread::sleep(self.tick);
            let covered = competitor.distance_traveled() - baseline;

            // A relay leg on the closed ground circuit that wraps back to the
            // start point while distance is still owed converges its target to
            // what was actually covered instead of overshooting another lap.
            if self.chained
                && competitor.route().domain() == RouteDomain::Ground
                && covered > 0.0
                && covered < needed
                && competitor.at_circuit_start()
            {
                trace!(name = %competitor.name(), covered, "circuit wrapped, converging target");
                needed = covered;
            }

            if covered >= needed {
                break;
            }

            if competitor.remaining_energy() == 0 {
                if !stalled {
                    stalled = true;
                    competitor.stop_moving();
                    debug!(name = %competitor.name(), covered, "stalled, waiting to be fed");
                }
            } else if stalled {
                stalled = false;
                competitor.begin_moving();
                debug!(name = %competitor.name(), "fed, resuming");
            }
        }

        competitor.stop_moving();
        self.done.raise();
        trace!(name = %competitor.name(), "leg finished");

        // Cooldown before the competitor may enter a new tournament.
        thread::sleep(RestConfig::cooldown());
        competitor.set_available(true);
    }
}
