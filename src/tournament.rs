//! Tournament construction and the public handle.
//!
//! [`Tournament::start`] is the crate's entry point. It validates the
//! composition synchronously (invalid tournaments are rejected before any
//! thread exists), then spawns one runner per competitor, one referee per
//! group and one coordinator, and returns immediately with a [`Tournament`]
//! handle. The handle is a read-only window: results can be queried at any
//! time and reflect a live, possibly partial snapshot until the tournament
//! completes.
//!
//! # Validation
//!
//! `start` fails fast on: an empty tournament, an empty group, a member count
//! the strategy rejects, mixed routes within one group, a result key used by
//! two groups, and a competitor that is unavailable or entered twice.
//! Everything past construction blocks instead of erroring: a starved
//! competitor that is never fed stalls its group, its referee and its
//! coordinator indefinitely, and holds the claimed routes with them.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Once};

use anyhow::{bail, Context};
use time::OffsetDateTime;
use tracing::{info, instrument};

use crate::competitor::Competitor;
use crate::configuration::Configuration;
use crate::coordinator::{Coordinator, Timeline};
use crate::gate::{RouteClaim, RouteGate};
use crate::logger::init_logger;
use crate::referee::Referee;
use crate::registry::ResultsRegistry;
use crate::runner::CompetitorRunner;
use crate::signal::Signal;
use crate::strategy::RaceStrategy;

static LOGGER: Once = Once::new();

/// An ordered team of competitors racing as one entry.
///
/// All members must race the same route; relay formats hand off in member
/// order.
pub struct Group {
    label: String,
    members: Vec<Arc<dyn Competitor>>,
}

impl Group {
    /// Build a group from its label and ordered members.
    pub fn new(label: impl Into<String>, members: Vec<Arc<dyn Competitor>>) -> Group {
        Group {
            label: label.into(),
            members,
        }
    }

    /// The group's display label, used as the courier results key.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The ordered members.
    pub fn members(&self) -> &[Arc<dyn Competitor>] {
        &self.members
    }
}

/// A handle on a running (or finished) tournament.
#[derive(Debug)]
pub struct Tournament {
    registry: Arc<ResultsRegistry>,
    group_count: usize,
    finished: Arc<Signal>,
    timeline: Arc<Timeline>,
}

impl Tournament {
    /// Validate and launch a tournament on the process-wide route gate.
    ///
    /// Returns without blocking; the coordinator acquires routes and opens
    /// the start barrier on its own thread.
    ///
    /// # Errors
    /// Fails on invalid composition (see module documentation). No threads
    /// are spawned in that case.
    pub fn start<S: RaceStrategy>(
        groups: Vec<Group>,
        strategy: S,
        config: Configuration,
    ) -> anyhow::Result<Tournament> {
        Tournament::start_on(RouteGate::global(), groups, strategy, config)
    }

    /// Like [`Tournament::start`], but arbitrating routes through a caller
    /// supplied gate instead of the process-wide one.
    #[instrument(skip_all)]
    pub fn start_on<S: RaceStrategy>(
        gate: Arc<RouteGate>,
        groups: Vec<Group>,
        strategy: S,
        config: Configuration,
    ) -> anyhow::Result<Tournament> {
        if config.log {
            LOGGER.call_once(init_logger);
        }

        validate(&groups, &strategy)?;

        let claim: RouteClaim = groups
            .iter()
            .map(|group| group.members()[0].route())
            .collect();

        let registry = Arc::new(ResultsRegistry::new());
        let barrier = Arc::new(Signal::new());
        let finished = Arc::new(Signal::new());
        let timeline = Arc::new(Timeline::new());

        for group in &groups {
            let legs = strategy.plan_legs(group);
            let chained = strategy.chained();

            let mut start = barrier.clone();
            let mut terminal = barrier.clone();
            for (member, leg) in group.members().iter().zip(&legs) {
                member.set_available(false);
                if chained {
                    member.place_along_circuit(leg.start_offset);
                }

                let done = Arc::new(Signal::new());
                CompetitorRunner::new(
                    member.clone(),
                    leg.distance,
                    start.clone(),
                    done.clone(),
                    chained,
                    config.tick,
                )
                .spawn();

                if chained {
                    start = done.clone();
                }
                terminal = done;
            }

            Referee::new(strategy.result_key(group), terminal, registry.clone()).spawn();
        }

        Coordinator::new(
            gate,
            claim,
            barrier,
            registry.clone(),
            groups.len(),
            finished.clone(),
            timeline.clone(),
        )
        .spawn();

        info!(groups = groups.len(), "tournament launched");
        Ok(Tournament {
            registry,
            group_count: groups.len(),
            finished,
            timeline,
        })
    }

    /// Number of groups racing in this tournament.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Snapshot of the recorded finishes. Possibly partial while the
    /// tournament is running, complete once [`Tournament::is_finished`].
    pub fn results(&self) -> HashMap<String, OffsetDateTime> {
        self.registry.snapshot()
    }

    /// Whether every group has finished and the routes have been released.
    pub fn is_finished(&self) -> bool {
        self.finished.is_raised()
    }

    /// Block until the tournament completes.
    pub fn wait(&self) {
        self.finished.wait();
    }

    /// When the start barrier opened, once the coordinator has acquired its
    /// routes.
    pub fn barrier_opened_at(&self) -> Option<OffsetDateTime> {
        self.timeline.barrier_opened()
    }

    /// When the last group's finish was observed. Stamped before the routes
    /// are released, so overlapping tournaments order strictly after it.
    pub fn completed_at(&self) -> Option<OffsetDateTime> {
        self.timeline.completed()
    }
}

fn validate<S: RaceStrategy>(groups: &[Group], strategy: &S) -> anyhow::Result<()> {
    if groups.is_empty() {
        bail!("a tournament needs at least one group");
    }

    let mut keys = HashSet::new();
    let mut entered = HashSet::new();
    for group in groups {
        if group.members().is_empty() {
            bail!("group '{}' has no competitors", group.label());
        }
        strategy
            .validate_group(group)
            .with_context(|| format!("group '{}'", group.label()))?;

        let key = strategy.result_key(group);
        if !keys.insert(key.clone()) {
            bail!("result key '{key}' is used by more than one group");
        }

        let route = group.members()[0].route();
        for member in group.members() {
            if member.route() != route {
                bail!(
                    "group '{}' mixes routes: {} and {}",
                    group.label(),
                    route,
                    member.route()
                );
            }
            if !member.is_available() {
                bail!(
                    "competitor '{}' is already engaged in a tournament",
                    member.name()
                );
            }
            if !entered.insert(Arc::as_ptr(member).cast::<()>()) {
                bail!("competitor '{}' is entered more than once", member.name());
            }
        }
    }
    Ok(())
}
