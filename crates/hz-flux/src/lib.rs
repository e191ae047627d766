//! hz-flux: habitable-zone boundaries from stellar effective temperature and
//! luminosity.
//!
//! Provides:
//! - The four Kopparapu et al. (2013) boundary classes and their coefficients
//! - `FluxModel` for the effective-flux polynomials
//! - Inverse-square distance conversion
//! - `HabitableZoneCalculator` tying both together, with a calibration-range policy
//! - Orbit placement and temperature sweeps
//!
//! # Example
//!
//! ```
//! use hz_flux::compute_habitable_zone;
//!
//! let hz = compute_habitable_zone(5780.0, 1.0).unwrap();
//! assert!(hz.contains_conservative(1.0));
//! println!("Conservative HZ: {:.4}-{:.4} AU", hz.runaway_greenhouse_au, hz.maximum_greenhouse_au);
//! ```

pub mod boundary;
pub mod calculator;
pub mod distance;
pub mod error;
pub mod flux;
pub mod sweeps;
pub mod validity;
pub mod zone;

// Re-exports for ergonomics
pub use boundary::{Boundary, BoundaryCoefficients, Edge, KOPPARAPU_2013, Zone};
pub use calculator::{
    CalculatorConfig, HabitableZoneCalculator, StellarInput, compute_habitable_zone,
};
pub use distance::{boundary_distance_au, distance, distance_au, flux_at_distance};
pub use error::{HzError, HzResult};
pub use flux::{BoundaryFluxes, FluxModel};
pub use sweeps::{MAX_SWEEP_POINTS, SweepReport, SweepRow, TemperatureSweep, run_sweep};
pub use validity::{CalibrationRange, ValidityPolicy};
pub use zone::{BoundaryResult, HabitableZone, OrbitAssessment, OrbitPlacement};
