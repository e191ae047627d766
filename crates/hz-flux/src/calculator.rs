//! Habitable-zone boundaries for a single star.

use crate::boundary::Boundary;
use crate::distance::boundary_distance_au;
use crate::error::HzResult;
use crate::flux::{BoundaryFluxes, FluxModel};
use crate::validity::{CalibrationRange, ValidityPolicy};
use crate::zone::HabitableZone;
use hz_core::units::constants::solar_offset_k;
use hz_core::units::{Temperature, k};
use hz_core::{Real, ensure_positive};
use serde::{Deserialize, Serialize};

/// Validated stellar parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarInput {
    effective_temperature_k: Real,
    luminosity_lsun: Real,
}

impl StellarInput {
    /// Both values must be finite and strictly positive.
    pub fn new(effective_temperature_k: Real, luminosity_lsun: Real) -> HzResult<Self> {
        Ok(Self {
            effective_temperature_k: ensure_positive(
                effective_temperature_k,
                "effective temperature",
            )?,
            luminosity_lsun: ensure_positive(luminosity_lsun, "luminosity")?,
        })
    }

    pub fn effective_temperature_k(&self) -> Real {
        self.effective_temperature_k
    }

    pub fn effective_temperature(&self) -> Temperature {
        k(self.effective_temperature_k)
    }

    pub fn luminosity_lsun(&self) -> Real {
        self.luminosity_lsun
    }

    /// `Teff - 5780 K`, the argument of every flux polynomial.
    pub fn temperature_offset_k(&self) -> Real {
        solar_offset_k(self.effective_temperature())
    }
}

/// Calculator settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub validity: ValidityPolicy,
    pub calibration: CalibrationRange,
}

/// Evaluates the flux model and converts each threshold to a distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct HabitableZoneCalculator {
    model: FluxModel,
    config: CalculatorConfig,
}

impl HabitableZoneCalculator {
    pub fn new(model: FluxModel, config: CalculatorConfig) -> Self {
        Self { model, config }
    }

    pub fn with_policy(policy: ValidityPolicy) -> Self {
        Self::new(
            FluxModel::default(),
            CalculatorConfig {
                validity: policy,
                ..CalculatorConfig::default()
            },
        )
    }

    pub fn model(&self) -> &FluxModel {
        &self.model
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Flux thresholds for `input`, after the calibration check.
    pub fn fluxes(&self, input: &StellarInput) -> HzResult<BoundaryFluxes> {
        self.config
            .validity
            .check(self.config.calibration, input.effective_temperature_k())?;
        Ok(self.model.effective_fluxes(input.temperature_offset_k()))
    }

    /// All four boundary distances. The first failing boundary aborts the
    /// computation and its error is returned as-is.
    pub fn compute(
        &self,
        effective_temperature_k: Real,
        luminosity_lsun: Real,
    ) -> HzResult<HabitableZone> {
        let input = StellarInput::new(effective_temperature_k, luminosity_lsun)?;
        self.compute_input(&input)
    }

    pub fn compute_input(&self, input: &StellarInput) -> HzResult<HabitableZone> {
        let fluxes = self.fluxes(input)?;
        let mut distances = [0.0; 4];
        for (boundary, s_eff) in fluxes.iter() {
            let d = boundary_distance_au(boundary, input.luminosity_lsun(), s_eff)?;
            distances[boundary.index()] = d;
        }
        Ok(HabitableZone::from_ordered(distances))
    }

    /// Distance of one boundary.
    pub fn boundary_distance(&self, boundary: Boundary, input: &StellarInput) -> HzResult<Real> {
        let fluxes = self.fluxes(input)?;
        boundary_distance_au(boundary, input.luminosity_lsun(), fluxes.get(boundary))
    }
}

/// [`HabitableZoneCalculator::compute`] with default settings.
pub fn compute_habitable_zone(
    effective_temperature_k: Real,
    luminosity_lsun: Real,
) -> HzResult<HabitableZone> {
    HabitableZoneCalculator::default().compute(effective_temperature_k, luminosity_lsun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HzError;

    #[test]
    fn stellar_input_rejects_bad_values() {
        assert!(matches!(
            StellarInput::new(0.0, 1.0),
            Err(HzError::InvalidInput {
                what: "effective temperature",
                ..
            })
        ));
        assert!(matches!(
            StellarInput::new(5780.0, f64::NAN),
            Err(HzError::InvalidInput {
                what: "luminosity",
                ..
            })
        ));
        assert!(StellarInput::new(-10.0, 1.0).is_err());
    }

    #[test]
    fn temperature_offset_is_relative_to_sun() {
        let input = StellarInput::new(3500.0, 0.02).unwrap();
        assert_eq!(input.temperature_offset_k(), -2280.0);
    }

    #[test]
    fn sun_like_star() {
        let hz = compute_habitable_zone(5780.0, 1.0).unwrap();
        assert!((hz.runaway_greenhouse_au - 0.9504).abs() < 5e-5);
        assert!((hz.maximum_greenhouse_au - 1.6760).abs() < 5e-5);
        assert!((hz.early_venus_au - 0.7504).abs() < 5e-5);
        assert!((hz.early_mars_au - 1.7678).abs() < 5e-5);
    }

    #[test]
    fn boundary_distance_matches_full_compute() {
        let calc = HabitableZoneCalculator::default();
        let input = StellarInput::new(4200.0, 0.15).unwrap();
        let hz = calc.compute_input(&input).unwrap();
        for b in Boundary::ALL {
            assert_eq!(calc.boundary_distance(b, &input).unwrap(), hz.distance_au(b));
        }
    }

    #[test]
    fn strict_policy_rejects_hot_star() {
        let calc = HabitableZoneCalculator::with_policy(ValidityPolicy::Reject);
        assert!(matches!(
            calc.compute(9000.0, 10.0),
            Err(HzError::OutsideCalibration { .. })
        ));
        assert!(calc.compute(7000.0, 3.0).is_ok());
    }

    #[test]
    fn extreme_temperature_is_domain_error() {
        let err = compute_habitable_zone(20_000.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            HzError::Domain {
                boundary: "Runaway Greenhouse",
                s_eff: FluxModel::default()
                    .effective_flux(Boundary::RunawayGreenhouse, 14_220.0)
            }
        );
    }

    #[test]
    fn input_error_wins_over_calibration() {
        let calc = HabitableZoneCalculator::with_policy(ValidityPolicy::Reject);
        assert!(matches!(
            calc.compute(20_000.0, 0.0),
            Err(HzError::InvalidInput { .. })
        ));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: CalculatorConfig = serde_json::from_str(r#"{"validity":"reject"}"#).unwrap();
        assert_eq!(cfg.validity, ValidityPolicy::Reject);
        assert_eq!(cfg.calibration, CalibrationRange::default());
    }
}
