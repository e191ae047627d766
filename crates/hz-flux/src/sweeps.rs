//! Habitable-zone boundaries across a range of effective temperatures.
//!
//! Each point is computed independently; a point whose flux fit goes
//! non-positive records its error and the sweep carries on.

use crate::calculator::HabitableZoneCalculator;
use crate::error::{HzError, HzResult};
use crate::zone::HabitableZone;
use hz_core::{Real, Tolerances, nearly_equal};
use std::fmt;

/// Upper bound on the number of points in one sweep.
pub const MAX_SWEEP_POINTS: usize = 100_000;

/// Linearly spaced effective temperatures. Built only through
/// [`TemperatureSweep::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSweep {
    start_k: Real,
    end_k: Real,
    num_points: usize,
}

impl TemperatureSweep {
    pub fn new(start_k: Real, end_k: Real, num_points: usize) -> HzResult<Self> {
        if !start_k.is_finite() || !end_k.is_finite() {
            return Err(HzError::InvalidSweep {
                what: "temperature bounds must be finite",
            });
        }
        if start_k <= 0.0 || end_k <= 0.0 {
            return Err(HzError::InvalidSweep {
                what: "temperature bounds must be positive",
            });
        }
        if num_points < 2 {
            return Err(HzError::InvalidSweep {
                what: "sweep must have at least 2 points",
            });
        }
        if num_points > MAX_SWEEP_POINTS {
            return Err(HzError::InvalidSweep {
                what: "sweep has too many points (limit 100000)",
            });
        }
        if nearly_equal(start_k, end_k, Tolerances::default()) {
            return Err(HzError::InvalidSweep {
                what: "start and end temperatures must differ",
            });
        }
        Ok(Self {
            start_k,
            end_k,
            num_points,
        })
    }

    pub fn start_k(&self) -> Real {
        self.start_k
    }

    pub fn end_k(&self) -> Real {
        self.end_k
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn generate_points(&self) -> Vec<Real> {
        let n = self.num_points;
        if n <= 1 {
            return vec![self.start_k];
        }

        let delta = (self.end_k - self.start_k) / (n - 1) as Real;
        let mut points: Vec<Real> = (0..n).map(|i| self.start_k + i as Real * delta).collect();

        // Ensure exact endpoint
        points[n - 1] = self.end_k;
        points
    }
}

impl fmt::Display for TemperatureSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep Teff from {} K to {} K ({} points)",
            self.start_k, self.end_k, self.num_points
        )
    }
}

/// One temperature of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub teff_k: Real,
    pub result: HzResult<HabitableZone>,
}

/// Outcome of a sweep at fixed luminosity.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    pub luminosity_lsun: Real,
    pub rows: Vec<SweepRow>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl SweepReport {
    /// Temperatures with a valid result.
    pub fn successful_temperatures(&self) -> Vec<Real> {
        self.rows
            .iter()
            .filter(|row| row.result.is_ok())
            .map(|row| row.teff_k)
            .collect()
    }

    /// Successful zones, in sweep order.
    pub fn zones(&self) -> Vec<HabitableZone> {
        self.rows
            .iter()
            .filter_map(|row| row.result.as_ref().ok().copied())
            .collect()
    }
}

/// Compute every point of `sweep` at `luminosity_lsun`.
///
/// Luminosity is validated once up front; per-point failures are kept in
/// their rows.
pub fn run_sweep(
    calculator: &HabitableZoneCalculator,
    luminosity_lsun: Real,
    sweep: &TemperatureSweep,
) -> HzResult<SweepReport> {
    hz_core::ensure_positive(luminosity_lsun, "luminosity")?;

    let rows: Vec<SweepRow> = sweep
        .generate_points()
        .into_iter()
        .map(|teff_k| SweepRow {
            teff_k,
            result: calculator.compute(teff_k, luminosity_lsun),
        })
        .collect();

    let num_successful = rows.iter().filter(|r| r.result.is_ok()).count();
    let num_failed = rows.len() - num_successful;

    Ok(SweepReport {
        luminosity_lsun,
        rows,
        num_successful,
        num_failed,
    })
}
