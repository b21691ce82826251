//! # Race Tournament
//!
//! A modular Rust crate for scheduling and synchronizing concurrent racing tournaments over shared physical routes.
//!
//! It provides:
//! - Fair simultaneous starts: one barrier per tournament, opened only once the
//!   tournament holds every route it races on
//! - Mutual exclusion over routes across overlapping tournaments (the
//!   [`RouteGate`](crate::gate::RouteGate))
//! - Relay hand-off ordering inside courier groups (chain signals between
//!   consecutive members)
//! - Deterministic completion detection feeding a thread-safe results registry,
//!   queryable at any time through the [`Tournament`](crate::tournament::Tournament) handle
//!
//! Every competitor races on its own OS thread, watched by one referee thread
//! per group and one coordinator thread per tournament. The crate never
//! simulates motion itself: competitors are external collaborators reached
//! through the [`Competitor`](crate::competitor::Competitor) trait, which exposes two counters (distance
//! traveled, remaining energy) and begin/stop commands.
//!
//! # Documentation Overview
//!
//! - For tournament construction, validation and the public handle, see the
//!   [`tournament`] module.
//! - For cross-tournament route arbitration and its acquisition contract, see
//!   the [`gate`] module.
//! - To understand race formats and leg planning, see the
//!   [`RaceStrategy`](crate::strategy::RaceStrategy) trait and its implementations.
//! - For the collaborator seam competitors implement, check out the
//!   [`Competitor`](crate::competitor::Competitor) trait.
//! - Runtime knobs (runner tick, file logging) live in
//!   [`Configuration`](crate::configuration::Configuration); the post-race cooldown in
//!   [`RestConfig`](crate::rest::RestConfig).
//!
//! # Usage Example
//!
//! Below is a minimal example racing one competitor over a regular (full
//! circuit) tournament:
//!
//! ```no_run
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! use race_tournament::prelude::*;
//!
//! struct Sprinter {
//!     name: String,
//!     route: Route,
//!     state: Mutex<SprinterState>,
//! }
//!
//! struct SprinterState {
//!     distance: f64,
//!     energy: u32,
//!     moving: bool,
//!     available: bool,
//! }
//!
//! impl Competitor for Sprinter {
//!     fn name(&self) -> String {
//!         self.name.clone()
//!     }
//!
//!     fn route(&self) -> Route {
//!         self.route
//!     }
//!
//!     fn circuit_length(&self) -> f64 {
//!         400.0
//!     }
//!
//!     fn distance_traveled(&self) -> f64 {
//!         // advance ten units per poll while moving and energized
//!         let mut state = self.state.lock().unwrap();
//!         if state.moving && state.energy > 0 {
//!             state.distance += 10.0;
//!             state.energy -= 10;
//!         }
//!         state.distance
//!     }
//!
//!     # fn remaining_energy(&self) -> u32 {
//!     #     self.state.lock().unwrap().energy
//!     # }
//!     # fn begin_moving(&self) {
//!     #     self.state.lock().unwrap().moving = true;
//!     # }
//!     # fn stop_moving(&self) {
//!     #     self.state.lock().unwrap().moving = false;
//!     # }
//!     # fn place_along_circuit(&self, _offset: f64) {}
//!     # fn at_circuit_start(&self) -> bool {
//!     #     false
//!     # }
//!     # fn is_available(&self) -> bool {
//!     #     self.state.lock().unwrap().available
//!     # }
//!     # fn set_available(&self, available: bool) {
//!     #     self.state.lock().unwrap().available = available;
//!     # }
//!     fn feed(&self, energy: u32) -> bool {
//!         if energy == 0 {
//!             return false;
//!         }
//!         self.state.lock().unwrap().energy += energy;
//!         true
//!     }
//!     // ...remaining accessors elided
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     RestConfig::set_cooldown(Duration::from_millis(500));
//!
//!     let sprinter: Arc<dyn Competitor> = Arc::new(Sprinter {
//!         name: "comet".to_owned(),
//!         route: Route::air(2)?,
//!         state: Mutex::new(SprinterState {
//!             distance: 0.0,
//!             energy: 400,
//!             moving: false,
//!             available: true,
//!         }),
//!     });
//!
//!     let groups = vec![Group::new("comet", vec![sprinter])];
//!     let handle = Tournament::start(groups, RegularRace, Configuration::new())?;
//!
//!     handle.wait();
//!     for (name, finished_at) in handle.results() {
//!         println!("{name}: {finished_at}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Liveness
//!
//! Past construction, nothing errors: a competitor that exhausts its energy
//! stalls until [`Competitor::feed`](crate::competitor::Competitor::feed) restores it, and a stalled group holds
//! its tournament, and the routes the tournament occupies, indefinitely.
//! Feeding is the only recovery mechanism.
#![warn(missing_docs)]

pub use anyhow;

pub mod competitor;
pub mod configuration;
mod coordinator;
pub mod gate;
mod logger;
mod referee;
mod registry;
pub mod rest;
pub mod route;
mod runner;
mod signal;
pub mod strategy;
pub mod tournament;

/// Commonly used types and traits for quick access.
///
/// Import this prelude to get started easily:
/// ```rust
/// use race_tournament::prelude::*;
/// ```
///
/// Includes:
/// - [`Configuration`](crate::configuration::Configuration)
/// - [`Competitor`](crate::competitor::Competitor)
/// - [`Group`](crate::tournament::Group) and [`Tournament`](crate::tournament::Tournament)
/// - routes and the [`RouteGate`](crate::gate::RouteGate)
/// - all built-in [`race strategies`](crate::strategy)
pub mod prelude {
    pub use crate::competitor::Competitor;
    pub use crate::configuration::Configuration;
    pub use crate::gate::{RouteClaim, RouteGate};
    pub use crate::rest::RestConfig;
    pub use crate::route::{Route, RouteDomain};
    pub use crate::strategy::*;
    pub use crate::tournament::{Group, Tournament};
}
