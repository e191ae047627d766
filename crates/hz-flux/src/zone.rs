//! Habitable-zone result set and orbit placement.

use crate::boundary::Boundary;
use crate::distance::flux_at_distance;
use crate::error::{HzError, HzResult};
use hz_core::Real;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One labelled boundary distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryResult {
    pub boundary: Boundary,
    pub name: &'static str,
    pub distance_au: Real,
}

/// Orbital distances (AU) of the four habitable-zone boundaries.
///
/// The conservative zone spans runaway greenhouse to maximum greenhouse; the
/// optimistic zone spans early Venus to early Mars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitableZone {
    pub runaway_greenhouse_au: Real,
    pub maximum_greenhouse_au: Real,
    pub early_venus_au: Real,
    pub early_mars_au: Real,
}

impl HabitableZone {
    /// Build from distances in [`Boundary::ALL`] order.
    pub fn from_ordered(distances: [Real; 4]) -> Self {
        let [runaway_greenhouse_au, maximum_greenhouse_au, early_venus_au, early_mars_au] =
            distances;
        Self {
            runaway_greenhouse_au,
            maximum_greenhouse_au,
            early_venus_au,
            early_mars_au,
        }
    }

    pub fn distance_au(&self, boundary: Boundary) -> Real {
        match boundary {
            Boundary::RunawayGreenhouse => self.runaway_greenhouse_au,
            Boundary::MaximumGreenhouse => self.maximum_greenhouse_au,
            Boundary::EarlyVenus => self.early_venus_au,
            Boundary::EarlyMars => self.early_mars_au,
        }
    }

    /// Labelled results in canonical order.
    pub fn boundaries(&self) -> [BoundaryResult; 4] {
        Boundary::ALL.map(|boundary| BoundaryResult {
            boundary,
            name: boundary.name(),
            distance_au: self.distance_au(boundary),
        })
    }

    /// `(inner, outer)` of the conservative zone.
    pub fn conservative(&self) -> (Real, Real) {
        (self.runaway_greenhouse_au, self.maximum_greenhouse_au)
    }

    /// `(inner, outer)` of the optimistic zone.
    pub fn optimistic(&self) -> (Real, Real) {
        (self.early_venus_au, self.early_mars_au)
    }

    pub fn contains_conservative(&self, orbit_au: Real) -> bool {
        let (inner, outer) = self.conservative();
        (inner..=outer).contains(&orbit_au)
    }

    pub fn contains_optimistic(&self, orbit_au: Real) -> bool {
        let (inner, outer) = self.optimistic();
        (inner..=outer).contains(&orbit_au)
    }

    /// Where an orbit of `orbit_au` falls relative to the four boundaries.
    ///
    /// `None` for a non-finite or non-positive distance, which is no orbit.
    pub fn classify(&self, orbit_au: Real) -> Option<OrbitPlacement> {
        if !orbit_au.is_finite() || orbit_au <= 0.0 {
            return None;
        }
        let placement = if self.contains_conservative(orbit_au) {
            OrbitPlacement::Conservative
        } else if orbit_au < self.early_venus_au {
            OrbitPlacement::TooHot
        } else if orbit_au > self.early_mars_au {
            OrbitPlacement::TooCold
        } else if orbit_au < self.runaway_greenhouse_au {
            OrbitPlacement::OptimisticInner
        } else {
            OrbitPlacement::OptimisticOuter
        };
        Some(placement)
    }
}

/// Placement of a planet's orbit relative to the habitable zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitPlacement {
    /// Inside the early-Venus edge.
    TooHot,
    /// Between early Venus and runaway greenhouse.
    OptimisticInner,
    Conservative,
    /// Between maximum greenhouse and early Mars.
    OptimisticOuter,
    /// Beyond the early-Mars edge.
    TooCold,
}

impl OrbitPlacement {
    pub fn is_habitable(self) -> bool {
        !matches!(self, Self::TooHot | Self::TooCold)
    }
}

impl fmt::Display for OrbitPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooHot => write!(f, "inside the habitable zone inner edge (too hot)"),
            Self::OptimisticInner => write!(f, "optimistic habitable zone (inner)"),
            Self::Conservative => write!(f, "conservative habitable zone"),
            Self::OptimisticOuter => write!(f, "optimistic habitable zone (outer)"),
            Self::TooCold => write!(f, "beyond the habitable zone (too cold)"),
        }
    }
}

/// Placement of a planet together with the flux it receives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitAssessment {
    pub orbit_au: Real,
    pub insolation: Real,
    pub placement: OrbitPlacement,
}

impl OrbitAssessment {
    pub fn new(zone: &HabitableZone, luminosity_lsun: Real, orbit_au: Real) -> HzResult<Self> {
        let insolation = flux_at_distance(luminosity_lsun, orbit_au)?;
        let placement = zone.classify(orbit_au).ok_or(HzError::InvalidInput {
            what: "orbital distance",
            value: orbit_au,
        })?;
        Ok(Self {
            orbit_au,
            insolation,
            placement,
        })
    }
}
