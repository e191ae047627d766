//! Calibration range of the flux fits and what to do outside it.

use crate::error::{HzError, HzResult};
use hz_core::Real;
use serde::{Deserialize, Serialize};

/// Effective-temperature range over which the flux polynomials were fitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationRange {
    pub min_k: Real,
    pub max_k: Real,
}

impl CalibrationRange {
    pub const KOPPARAPU_2013: CalibrationRange = CalibrationRange {
        min_k: 2600.0,
        max_k: 7200.0,
    };

    pub fn contains(&self, teff_k: Real) -> bool {
        (self.min_k..=self.max_k).contains(&teff_k)
    }
}

impl Default for CalibrationRange {
    fn default() -> Self {
        Self::KOPPARAPU_2013
    }
}

/// Handling of temperatures outside the calibration range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityPolicy {
    /// Evaluate the fit without comment.
    Extrapolate,
    /// Log a warning and evaluate anyway.
    #[default]
    Warn,
    /// Refuse with [`HzError::OutsideCalibration`].
    Reject,
}

impl ValidityPolicy {
    pub fn check(self, range: CalibrationRange, teff_k: Real) -> HzResult<()> {
        if range.contains(teff_k) {
            return Ok(());
        }
        match self {
            Self::Extrapolate => Ok(()),
            Self::Warn => {
                tracing::warn!(
                    teff_k,
                    min_k = range.min_k,
                    max_k = range.max_k,
                    "effective temperature outside flux-fit calibration range; extrapolating"
                );
                Ok(())
            }
            Self::Reject => Err(HzError::OutsideCalibration {
                teff_k,
                min_k: range.min_k,
                max_k: range.max_k,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive() {
        let r = CalibrationRange::default();
        assert!(r.contains(2600.0));
        assert!(r.contains(7200.0));
        assert!(!r.contains(2599.9));
        assert!(!r.contains(7200.1));
    }

    #[test]
    fn inside_range_passes_every_policy() {
        let r = CalibrationRange::default();
        for policy in [
            ValidityPolicy::Extrapolate,
            ValidityPolicy::Warn,
            ValidityPolicy::Reject,
        ] {
            assert!(policy.check(r, 5780.0).is_ok());
        }
    }

    #[test]
    fn outside_range_only_reject_fails() {
        let r = CalibrationRange::default();
        assert!(ValidityPolicy::Extrapolate.check(r, 9000.0).is_ok());
        assert!(ValidityPolicy::Warn.check(r, 9000.0).is_ok());
        assert_eq!(
            ValidityPolicy::Reject.check(r, 9000.0),
            Err(HzError::OutsideCalibration {
                teff_k: 9000.0,
                min_k: 2600.0,
                max_k: 7200.0
            })
        );
    }

    #[test]
    fn default_policy_warns() {
        assert_eq!(ValidityPolicy::default(), ValidityPolicy::Warn);
    }
}
