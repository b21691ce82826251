use std::sync::Arc;
use std::time::Duration;

use race_tournament::gate::RouteGate;
use race_tournament::prelude::*;

use crate::support::{fast_config, wait_until, SimulatedCompetitor};

mod support;

fn solo_group(name: &str, route: Route, step: f64) -> Vec<Group> {
    vec![Group::new(
        name,
        vec![
            SimulatedCompetitor::new(name, route, 400.0, step, 400.0) as Arc<dyn Competitor>,
        ],
    )]
}

#[test]
fn overlapping_routes_serialize() {
    RestConfig::set_cooldown(Duration::ZERO);
    let gate = Arc::new(RouteGate::new());
    let route = Route::water(2).unwrap();

    let first = Tournament::start_on(
        gate.clone(),
        solo_group("first", route, 50.0),
        RegularRace,
        fast_config(),
    )
    .unwrap();
    let second = Tournament::start_on(
        gate,
        solo_group("second", route, 50.0),
        RegularRace,
        fast_config(),
    )
    .unwrap();

    assert!(wait_until(Duration::from_secs(10), || {
        first.is_finished() && second.is_finished()
    }));

    // whichever won the gate, its whole run precedes the other's barrier
    let (early, late) = if first.barrier_opened_at() < second.barrier_opened_at() {
        (first, second)
    } else {
        (second, first)
    };
    assert!(
        early.completed_at().unwrap() < late.barrier_opened_at().unwrap(),
        "running intervals overlapped on a shared route"
    );
}

#[test]
fn disjoint_routes_run_concurrently() {
    RestConfig::set_cooldown(Duration::ZERO);
    let gate = Arc::new(RouteGate::new());

    // slow enough that both runs are in flight together
    let first = Tournament::start_on(
        gate.clone(),
        solo_group("first", Route::water(1).unwrap(), 1.0),
        RegularRace,
        fast_config(),
    )
    .unwrap();
    let second = Tournament::start_on(
        gate,
        solo_group("second", Route::water(3).unwrap(), 1.0),
        RegularRace,
        fast_config(),
    )
    .unwrap();

    assert!(wait_until(Duration::from_secs(10), || {
        first.is_finished() && second.is_finished()
    }));

    let overlap = first.barrier_opened_at().unwrap() < second.completed_at().unwrap()
        && second.barrier_opened_at().unwrap() < first.completed_at().unwrap();
    assert!(overlap, "disjoint routes were serialized");
}
