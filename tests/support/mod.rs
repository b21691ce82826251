//! Shared test support: a simulated competitor.
//!
//! Motion is poll-driven: each `distance_traveled` query advances the
//! competitor by one step while it is moving and has energy left, spending one
//! energy per distance unit. The runner's tick therefore paces the simulation,
//! and distance never advances at zero energy.

// not every test binary uses every helper
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use race_tournament::prelude::*;

pub struct SimulatedCompetitor {
    name: String,
    route: Route,
    circuit: f64,
    step: f64,
    state: Mutex<SimState>,
}

struct SimState {
    distance: f64,
    position: f64,
    energy: f64,
    max_energy: f64,
    moving: bool,
    available: bool,
    first_started: Option<Instant>,
}

impl SimulatedCompetitor {
    pub fn new(
        name: &str,
        route: Route,
        circuit: f64,
        step: f64,
        energy: f64,
    ) -> Arc<SimulatedCompetitor> {
        Arc::new(SimulatedCompetitor {
            name: name.to_owned(),
            route,
            circuit,
            step,
            state: Mutex::new(SimState {
                distance: 0.0,
                position: 0.0,
                energy,
                max_energy: energy.max(1_000_000.0),
                moving: false,
                available: true,
                first_started: None,
            }),
        })
    }

    /// Instant of the first `begin_moving` command, if any.
    pub fn first_started(&self) -> Option<Instant> {
        self.state.lock().unwrap().first_started
    }

    /// Current distance, without advancing the simulation.
    pub fn distance(&self) -> f64 {
        self.state.lock().unwrap().distance
    }
}

impl Competitor for SimulatedCompetitor {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn route(&self) -> Route {
        self.route
    }

    fn circuit_length(&self) -> f64 {
        self.circuit
    }

    fn distance_traveled(&self) -> f64 {
        let mut state = self.state.lock().unwrap();
        if state.moving && state.energy >= 1.0 {
            let step = self.step.min(state.energy);
            state.distance += step;
            state.position += step;
            if state.position >= self.circuit {
                state.position -= self.circuit;
            }
            state.energy -= step;
        }
        state.distance
    }

    fn remaining_energy(&self) -> u32 {
        self.state.lock().unwrap().energy as u32
    }

    fn begin_moving(&self) {
        let mut state = self.state.lock().unwrap();
        state.moving = true;
        if state.first_started.is_none() {
            state.first_started = Some(Instant::now());
        }
    }

    fn stop_moving(&self) {
        self.state.lock().unwrap().moving = false;
    }

    fn place_along_circuit(&self, offset: f64) {
        self.state.lock().unwrap().position = offset;
    }

    fn at_circuit_start(&self) -> bool {
        self.state.lock().unwrap().position.abs() < f64::EPSILON
    }

    fn is_available(&self) -> bool {
        self.state.lock().unwrap().available
    }

    fn set_available(&self, available: bool) {
        self.state.lock().unwrap().available = available;
    }

    fn feed(&self, energy: u32) -> bool {
        if energy == 0 {
            return false;
        }
        let mut state = self.state.lock().unwrap();
        if state.energy + energy as f64 > state.max_energy {
            return false;
        }
        state.energy += energy as f64;
        true
    }
}

/// Route `tracing` output to stdout when debugging a test run.
pub fn init_debug_logger() {
    let format = tracing_subscriber::fmt::format()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_target(false);
    let _ = tracing_subscriber::fmt()
        .event_format(format)
        .try_init();
}

/// Poll `predicate` until it holds or `timeout` elapses.
pub fn wait_until(timeout: Duration, predicate: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if predicate() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    predicate()
}

/// A configuration with a tick short enough for fast tests.
pub fn fast_config() -> Configuration {
    Configuration::new().with_tick(Duration::from_millis(1))
}
