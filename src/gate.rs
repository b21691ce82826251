//! Cross-tournament route arbitration.
//!
//! The only state shared between tournaments is the set of physical routes.
//! A [`RouteGate`] holds one free/occupied flag per (domain, lane) pair and
//! hands whole sets of them to one tournament at a time.
//!
//! # Acquisition contract
//!
//! A tournament claims every route its groups race on as one [`RouteClaim`]
//! and acquires the entire claim atomically: either all claimed entries are
//! free and flip to occupied in one step, or the claimant parks until another
//! tournament's release wakes it. Claims are kept in ascending (domain, lane)
//! order, so two tournaments contending for overlapping sets always observe
//! them in the same canonical order and partial-acquisition deadlock cannot
//! arise. There are no timeouts: a tournament that never releases its routes
//! stalls later claimants indefinitely.
//!
//! Tournaments share the [`RouteGate::global`] gate by default. Embedders and
//! tests that need contention in isolation can build their own gate and pass
//! it to [`Tournament::start_on`](crate::tournament::Tournament::start_on).

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Condvar, Mutex, OnceLock};

use tracing::trace;

use crate::route::{Route, RouteDomain, AIR_ROUTE_COUNT, WATER_ROUTE_COUNT};

/// The set of routes one tournament occupies while running.
///
/// Entries are deduplicated and iterate in ascending (domain, lane) order,
/// the canonical acquisition order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RouteClaim {
    entries: BTreeMap<RouteDomain, BTreeSet<u8>>,
}

impl RouteClaim {
    /// An empty claim.
    pub fn new() -> RouteClaim {
        RouteClaim::default()
    }

    /// Add a route to the claim. Duplicates collapse.
    pub fn insert(&mut self, route: Route) {
        self.entries
            .entry(route.domain())
            .or_default()
            .insert(route.id());
    }

    /// True when no routes are claimed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct claimed routes.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// Claimed (domain, lane) pairs in canonical ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteDomain, u8)> + '_ {
        self.entries
            .iter()
            .flat_map(|(domain, ids)| ids.iter().map(move |id| (*domain, *id)))
    }
}

impl FromIterator<Route> for RouteClaim {
    fn from_iter<I: IntoIterator<Item = Route>>(routes: I) -> RouteClaim {
        let mut claim = RouteClaim::new();
        for route in routes {
            claim.insert(route);
        }
        claim
    }
}

/// Mutual exclusion over physical routes, shared across tournaments.
pub struct RouteGate {
    free: Mutex<BTreeMap<(RouteDomain, u8), bool>>,
    freed: Condvar,
}

static GLOBAL_GATE: OnceLock<Arc<RouteGate>> = OnceLock::new();

impl RouteGate {
    /// A fresh gate with every route free.
    pub fn new() -> RouteGate {
        let mut free = BTreeMap::new();
        for id in 1..=AIR_ROUTE_COUNT {
            free.insert((RouteDomain::Air, id), true);
        }
        for id in 1..=WATER_ROUTE_COUNT {
            free.insert((RouteDomain::Water, id), true);
        }
        free.insert((RouteDomain::Ground, 0), true);
        RouteGate {
            free: Mutex::new(free),
            freed: Condvar::new(),
        }
    }

    /// The process-wide gate used by [`Tournament::start`]. Lives for the
    /// whole process; routes return to it whenever a tournament completes.
    ///
    /// [`Tournament::start`]: crate::tournament::Tournament::start
    pub fn global() -> Arc<RouteGate> {
        GLOBAL_GATE
            .get_or_init(|| Arc::new(RouteGate::new()))
            .clone()
    }

    /// Block until every entry in `claim` is free, then mark all of them
    /// occupied in one atomic step. An empty claim returns immediately.
    pub fn acquire(&self, claim: &RouteClaim) {
        let mut free = self.free.lock().expect("poisoned");
        loop {
            if claim.iter().all(|key| free[&key]) {
                for key in claim.iter() {
                    free.insert(key, false);
                }
                trace!(?claim, "routes acquired");
                return;
            }
            free = self.freed.wait(free).expect("poisoned");
        }
    }

    /// Mark every entry in `claim` free again and wake all waiters.
    pub fn release(&self, claim: &RouteClaim) {
        let mut free = self.free.lock().expect("poisoned");
        for key in claim.iter() {
            free.insert(key, true);
        }
        trace!(?claim, "routes released");
        self.freed.notify_all();
    }

    /// Whether `route` is currently unoccupied.
    pub fn is_free(&self, route: Route) -> bool {
        self.free.lock().expect("poisoned")[&route.key()]
    }
}

impl Default for RouteGate {
    fn default() -> RouteGate {
        RouteGate::new()
    }
}
