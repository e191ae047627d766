//! Effective stellar flux thresholds.
//!
//! `S_eff` is the flux at the orbit, normalised to the solar constant at 1 AU.
//! Each boundary's threshold is a quartic in the temperature offset
//! `T = Teff - 5780 K`. The fits are only calibrated for roughly
//! 2600-7200 K; outside that range the quartic can turn negative, which
//! callers must treat as "no such boundary" (see [`crate::distance`]).

use crate::boundary::{Boundary, BoundaryCoefficients, KOPPARAPU_2013};
use hz_core::Real;
use serde::Serialize;

/// Flux model backed by a static coefficient table.
#[derive(Debug, Clone, Copy)]
pub struct FluxModel {
    table: &'static [BoundaryCoefficients; 4],
}

impl FluxModel {
    /// Kopparapu et al. (2013) coefficients for an Earth-mass planet.
    pub const fn kopparapu_2013() -> Self {
        Self {
            table: &KOPPARAPU_2013,
        }
    }

    pub fn coefficients(&self, boundary: Boundary) -> &'static BoundaryCoefficients {
        &self.table[boundary.index()]
    }

    /// `S_eff` for one boundary at temperature offset `t_offset_k`.
    pub fn effective_flux(&self, boundary: Boundary, t_offset_k: Real) -> Real {
        self.coefficients(boundary).evaluate(t_offset_k)
    }

    /// `S_eff` for all four boundaries at the same offset.
    pub fn effective_fluxes(&self, t_offset_k: Real) -> BoundaryFluxes {
        BoundaryFluxes {
            t_offset_k,
            values: Boundary::ALL.map(|b| self.effective_flux(b, t_offset_k)),
        }
    }
}

impl Default for FluxModel {
    fn default() -> Self {
        Self::kopparapu_2013()
    }
}

/// The four flux thresholds evaluated at one temperature offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryFluxes {
    pub t_offset_k: Real,
    values: [Real; 4],
}

impl BoundaryFluxes {
    pub fn get(&self, boundary: Boundary) -> Real {
        self.values[boundary.index()]
    }

    /// Pairs in canonical boundary order.
    pub fn iter(&self) -> impl Iterator<Item = (Boundary, Real)> + '_ {
        Boundary::ALL.into_iter().zip(self.values.iter().copied())
    }

    /// True when every threshold is positive.
    pub fn all_positive(&self) -> bool {
        self.values.iter().all(|&s| s > 0.0)
    }
}
