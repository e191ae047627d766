//! The four habitable-zone boundary classes and their flux-fit coefficients.

use hz_core::Real;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which habitable-zone family a boundary belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Conservative,
    Optimistic,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conservative => write!(f, "Conservative"),
            Self::Optimistic => write!(f, "Optimistic"),
        }
    }
}

/// Star-facing or far side of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Inner,
    Outer,
}

/// A named flux threshold from the Kopparapu et al. climate models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    RunawayGreenhouse,
    MaximumGreenhouse,
    EarlyVenus,
    EarlyMars,
}

impl Boundary {
    /// Canonical order: conservative inner, conservative outer,
    /// optimistic inner, optimistic outer.
    pub const ALL: [Boundary; 4] = [
        Boundary::RunawayGreenhouse,
        Boundary::MaximumGreenhouse,
        Boundary::EarlyVenus,
        Boundary::EarlyMars,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::RunawayGreenhouse => "Runaway Greenhouse",
            Self::MaximumGreenhouse => "Maximum Greenhouse",
            Self::EarlyVenus => "Early Venus",
            Self::EarlyMars => "Early Mars",
        }
    }

    pub fn zone(self) -> Zone {
        match self {
            Self::RunawayGreenhouse | Self::MaximumGreenhouse => Zone::Conservative,
            Self::EarlyVenus | Self::EarlyMars => Zone::Optimistic,
        }
    }

    pub fn edge(self) -> Edge {
        match self {
            Self::RunawayGreenhouse | Self::EarlyVenus => Edge::Inner,
            Self::MaximumGreenhouse | Self::EarlyMars => Edge::Outer,
        }
    }

    /// Report label, e.g. `Conservative HZ (Runaway Greenhouse)`.
    pub fn label(self) -> String {
        format!("{} HZ ({})", self.zone(), self.name())
    }

    /// Position in [`Boundary::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::RunawayGreenhouse => 0,
            Self::MaximumGreenhouse => 1,
            Self::EarlyVenus => 2,
            Self::EarlyMars => 3,
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fourth-order fit `S_eff = seff_sun + a·T + b·T² + c·T³ + d·T⁴`,
/// with `T` the offset from 5780 K.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryCoefficients {
    pub seff_sun: Real,
    pub a: Real,
    pub b: Real,
    pub c: Real,
    pub d: Real,
}

impl BoundaryCoefficients {
    /// Evaluate the fit at temperature offset `t_offset_k`.
    #[inline]
    pub fn evaluate(&self, t_offset_k: Real) -> Real {
        let t = t_offset_k;
        self.seff_sun + t * (self.a + t * (self.b + t * (self.c + t * self.d)))
    }
}

/// Table 2 of Kopparapu et al. (2013), 1 Earth-mass planet.
/// Indexed in [`Boundary::ALL`] order.
pub static KOPPARAPU_2013: [BoundaryCoefficients; 4] = [
    // Runaway greenhouse
    BoundaryCoefficients {
        seff_sun: 1.107,
        a: 1.332e-4,
        b: 1.58e-8,
        c: -8.308e-12,
        d: -1.931e-15,
    },
    // Maximum greenhouse
    BoundaryCoefficients {
        seff_sun: 0.356,
        a: 6.171e-5,
        b: 1.698e-9,
        c: -3.198e-12,
        d: -5.575e-16,
    },
    // Early Venus
    BoundaryCoefficients {
        seff_sun: 1.776,
        a: 1.433e-4,
        b: 2.58e-9,
        c: -1.621e-12,
        d: -5.087e-17,
    },
    // Early Mars
    BoundaryCoefficients {
        seff_sun: 0.320,
        a: 5.547e-5,
        b: 1.526e-9,
        c: -2.874e-12,
        d: -5.011e-16,
    },
];
