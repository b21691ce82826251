//! Race formats used to plan a group's legs.
//!
//! This module defines the [`RaceStrategy`] trait and the two built-in
//! formats used by [`Tournament::start`](crate::tournament::Tournament::start):
//!
//! - [`RegularRace`]: every group is a single competitor covering the full
//!   circuit on its own.
//! - [`CourierRace`]: group members relay, each covering an equal share of the
//!   circuit and handing off to the next member, pre-spaced along the route.
//!
//! The trait is public so embedders can define custom formats. A strategy only
//! plans legs (distances, starting offsets, hand-off style) and names the
//! registry key. Spawning threads and wiring signals stays with the
//! tournament.

use anyhow::bail;

use crate::tournament::Group;

/// One member's assignment within a group's race.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    /// Distance this member must cover.
    pub distance: f64,
    /// Starting offset along the circuit, in distance units.
    pub start_offset: f64,
}

/// How a group's members are validated, partitioned and keyed.
pub trait RaceStrategy: Send + Sync + 'static {
    /// Reject groups whose member count does not fit this format.
    fn validate_group(&self, group: &Group) -> anyhow::Result<()>;

    /// One [`Leg`] per member, in member order.
    fn plan_legs(&self, group: &Group) -> Vec<Leg>;

    /// Whether members hand off through chain signals (member `i` starts when
    /// member `i - 1` finishes) instead of all starting at the barrier.
    fn chained(&self) -> bool;

    /// The key under which this group's finish is recorded.
    fn result_key(&self, group: &Group) -> String;
}

/// Each group is one competitor racing the full circuit.
pub struct RegularRace;

impl RaceStrategy for RegularRace {
    fn validate_group(&self, group: &Group) -> anyhow::Result<()> {
        let members = group.members().len();
        if members != 1 {
            bail!("regular race groups hold exactly one competitor, got {members}");
        }
        Ok(())
    }

    fn plan_legs(&self, group: &Group) -> Vec<Leg> {
        vec![Leg {
            distance: group.members()[0].circuit_length(),
            start_offset: 0.0,
        }]
    }

    fn chained(&self) -> bool {
        false
    }

    fn result_key(&self, group: &Group) -> String {
        // the sole member races under its own name
        group.members()[0].name()
    }
}

/// Group members relay: the circuit is split into equal legs, one per member,
/// with the remainder of the partition absorbed by the last member.
pub struct CourierRace;

impl RaceStrategy for CourierRace {
    fn validate_group(&self, group: &Group) -> anyhow::Result<()> {
        let members = group.members().len();
        if members < 2 {
            bail!("courier race groups need at least two competitors, got {members}");
        }
        Ok(())
    }

    fn plan_legs(&self, group: &Group) -> Vec<Leg> {
        let members = group.members().len();
        let circuit = group.members()[0].circuit_length();
        let base = (circuit / members as f64).floor();

        (0..members)
            .map(|index| {
                let distance = if index == members - 1 {
                    circuit - base * (members - 1) as f64
                } else {
                    base
                };
                Leg {
                    distance,
                    start_offset: index as f64 * base,
                }
            })
            .collect()
    }

    fn chained(&self) -> bool {
        true
    }

    fn result_key(&self, group: &Group) -> String {
        group.label().to_owned()
    }
}
