//! The seam between the coordination core and competitor implementations.
//!
//! The core does not simulate motion. Rendering, attribute hierarchies and
//! per-frame position math live on the other side of the [`Competitor`] trait:
//! the core reads two counters (distance traveled, remaining energy), issues
//! begin/stop commands, and flips the availability flag around a race. Anything
//! that can answer those calls, from a GUI-driven sprite to a test double, can
//! race.
//!
//! # Contract notes
//!
//! - `distance_traveled` is monotonic for the lifetime of the competitor; the
//!   core works with deltas against a baseline taken when a leg starts.
//! - Distance must never advance while `remaining_energy` is zero. A competitor
//!   that runs out of energy stops itself; the core detects the stall and
//!   re-issues [`begin_moving`](Competitor::begin_moving) once feeding has
//!   restored energy.
//! - A competitor is referenced by at most one active runner at a time,
//!   enforced through the availability flag.

use crate::route::Route;

/// A racing participant, owned by an external collaborator and shared with the
/// core as `Arc<dyn Competitor>`.
pub trait Competitor: Send + Sync {
    /// Display name, also used as the results key in regular races.
    fn name(&self) -> String;

    /// The physical route this competitor races on.
    fn route(&self) -> Route;

    /// Full length of this competitor's circuit, in distance units.
    fn circuit_length(&self) -> f64;

    /// Total distance covered since lifecycle start. Monotonic.
    fn distance_traveled(&self) -> f64;

    /// Remaining energy. Zero means the competitor is stalled until fed.
    fn remaining_energy(&self) -> u32;

    /// Command the competitor to start moving toward its current destination.
    fn begin_moving(&self);

    /// Command the competitor to halt.
    fn stop_moving(&self);

    /// Reposition the competitor `offset` distance units along its circuit,
    /// facing the direction of travel. Used to pre-space relay members.
    fn place_along_circuit(&self, offset: f64);

    /// True when the competitor sits at the circuit start point with no travel
    /// in progress toward a further destination. Used by relay legs on the
    /// ground circuit to detect a full wrap.
    fn at_circuit_start(&self) -> bool;

    /// False while engaged in a tournament.
    fn is_available(&self) -> bool;

    /// Flip the engagement flag. The core sets this to `false` when a
    /// tournament claims the competitor and back to `true` after the
    /// post-race cooldown.
    fn set_available(&self, available: bool);

    /// Add energy. Returns `false` for a zero delta or when the delta would
    /// exceed the competitor's capacity. Feeding a stalled competitor is the
    /// only way its runner can make progress again.
    fn feed(&self, energy: u32) -> bool;
}

#[cfg(test)]
mod competitor_tests {
    use super::*;
    use crate::route::Route;

    struct Statue;

    impl Competitor for Statue {
        fn name(&self) -> String {
            "statue".to_owned()
        }

        fn route(&self) -> Route {
            Route::ground()
        }

        fn circuit_length(&self) -> f64 {
            100.0
        }

        fn distance_traveled(&self) -> f64 {
            0.0
        }

        fn remaining_energy(&self) -> u32 {
            0
        }

        fn begin_moving(&self) {}

        fn stop_moving(&self) {}

        fn place_along_circuit(&self, _offset: f64) {}

        fn at_circuit_start(&self) -> bool {
            true
        }

        fn is_available(&self) -> bool {
            true
        }

        fn set_available(&self, _available: bool) {}

        fn feed(&self, _energy: u32) -> bool {
            false
        }
    }

    fn borrow_competitor(_competitor: &dyn Competitor) {}

    #[test]
    fn trait_is_object_safe() {
        let statue = Statue;
        borrow_competitor(&statue);
        assert_eq!(statue.name(), "statue");
    }
}
