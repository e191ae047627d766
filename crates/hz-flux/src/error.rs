//! Habitable-zone calculation errors.

use hz_core::CoreError;
use thiserror::Error;

/// Result type for habitable-zone operations.
pub type HzResult<T> = Result<T, HzError>;

/// Errors that can occur while computing habitable-zone boundaries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HzError {
    /// Non-finite or non-positive stellar input.
    #[error("Invalid input: {what} must be finite and positive (got {value})")]
    InvalidInput { what: &'static str, value: f64 },

    /// Effective flux is not positive, so no real distance exists.
    #[error("Effective flux for {boundary} is non-positive ({s_eff}), cannot compute distance")]
    Domain { boundary: &'static str, s_eff: f64 },

    /// Temperature outside the fit's calibration range under a rejecting policy.
    #[error("Effective temperature {teff_k} K is outside the calibrated range {min_k}-{max_k} K")]
    OutsideCalibration { teff_k: f64, min_k: f64, max_k: f64 },

    /// Malformed sweep definition.
    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: &'static str },
}

impl From<CoreError> for HzError {
    fn from(err: CoreError) -> Self {
        HzError::InvalidInput {
            what: err.what(),
            value: err.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HzError::Domain {
            boundary: "Runaway Greenhouse",
            s_eff: -0.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("Runaway Greenhouse"));
        assert!(msg.contains("non-positive"));

        let err = HzError::InvalidInput {
            what: "luminosity",
            value: 0.0,
        };
        assert!(err.to_string().contains("luminosity"));
    }

    #[test]
    fn core_error_becomes_invalid_input() {
        let core = CoreError::NonPositive {
            what: "luminosity",
            value: -1.0,
        };
        let err: HzError = core.into();
        assert_eq!(
            err,
            HzError::InvalidInput {
                what: "luminosity",
                value: -1.0
            }
        );
    }
}
