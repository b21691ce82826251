//! Route identity: the three physical-route domains and their numbered lanes.
//!
//! Air and water races run on numbered lanes (five aerial corridors, four water
//! lanes). Ground races all share a single closed circuit, so the ground domain
//! carries no lane number. A [`Route`] is validated at construction: code
//! consuming a `Route` never has to deal with an out-of-range lane id.

use anyhow::bail;

/// Number of numbered aerial corridors.
pub const AIR_ROUTE_COUNT: u8 = 5;

/// Number of numbered water lanes.
pub const WATER_ROUTE_COUNT: u8 = 4;

/// The three mutually exclusive physical-route categories.
///
/// The derived ordering (`Air < Water < Ground`) is the canonical order in
/// which route claims are sorted before acquisition; see
/// [`RouteClaim`](crate::gate::RouteClaim).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RouteDomain {
    /// Numbered aerial corridors.
    Air,
    /// Numbered water lanes.
    Water,
    /// The single shared ground circuit.
    Ground,
}

impl std::fmt::Display for RouteDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteDomain::Air => write!(f, "air"),
            RouteDomain::Water => write!(f, "water"),
            RouteDomain::Ground => write!(f, "ground"),
        }
    }
}

/// A validated (domain, lane) pair identifying one physical route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    domain: RouteDomain,
    id: u8,
}

impl Route {
    /// An aerial corridor. `id` must be within `1..=AIR_ROUTE_COUNT`.
    pub fn air(id: u8) -> anyhow::Result<Route> {
        if id == 0 || id > AIR_ROUTE_COUNT {
            bail!("air lane id must be within 1..={AIR_ROUTE_COUNT}, got {id}");
        }
        Ok(Route {
            domain: RouteDomain::Air,
            id,
        })
    }

    /// A water lane. `id` must be within `1..=WATER_ROUTE_COUNT`.
    pub fn water(id: u8) -> anyhow::Result<Route> {
        if id == 0 || id > WATER_ROUTE_COUNT {
            bail!("water lane id must be within 1..={WATER_ROUTE_COUNT}, got {id}");
        }
        Ok(Route {
            domain: RouteDomain::Water,
            id,
        })
    }

    /// The shared ground circuit.
    pub fn ground() -> Route {
        Route {
            domain: RouteDomain::Ground,
            id: 0,
        }
    }

    /// The domain this route belongs to.
    pub fn domain(&self) -> RouteDomain {
        self.domain
    }

    /// Lane id, 1-based. Always `0` for the ground circuit.
    pub fn id(&self) -> u8 {
        self.id
    }

    pub(crate) fn key(&self) -> (RouteDomain, u8) {
        (self.domain, self.id)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.domain {
            RouteDomain::Ground => write!(f, "ground circuit"),
            domain => write!(f, "{domain} lane {}", self.id),
        }
    }
}
