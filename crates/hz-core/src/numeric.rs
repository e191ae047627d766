use crate::CoreError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Absolute and relative tolerance for comparing temperatures and fluxes.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within either tolerance.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::NonPositive { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_sweep_bounds_compare_equal() {
        let tol = Tolerances::default();
        // Same temperature reached by different arithmetic
        assert!(nearly_equal(5780.0, 5000.0 + 780.0, tol));
        assert!(nearly_equal(2600.0, 2600.0 * (1.0 + 1e-12), tol));
        assert!(!nearly_equal(2600.0, 2601.0, tol));
        assert!(!nearly_equal(0.356, 0.3561, tol));
    }

    #[test]
    fn ensure_finite_rejects_nan_temperature() {
        let err = ensure_finite(Real::NAN, "effective temperature").unwrap_err();
        assert!(matches!(
            err,
            CoreError::NonFinite {
                what: "effective temperature",
                ..
            }
        ));
        assert!(err.to_string().contains("effective temperature"));
        assert_eq!(ensure_finite(-2280.0, "temperature offset").unwrap(), -2280.0);
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(matches!(
            ensure_positive(0.0, "luminosity"),
            Err(CoreError::NonPositive { what: "luminosity", .. })
        ));
        assert!(matches!(
            ensure_positive(-3.0, "luminosity"),
            Err(CoreError::NonPositive { .. })
        ));
        assert_eq!(ensure_positive(2.5, "luminosity").unwrap(), 2.5);
    }

    #[test]
    fn ensure_positive_reports_infinity_as_non_finite() {
        let err = ensure_positive(Real::INFINITY, "temperature").unwrap_err();
        assert!(matches!(err, CoreError::NonFinite { .. }));
        assert_eq!(err.what(), "temperature");
        assert!(err.value().is_infinite());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn positive_finite_values_pass_through(v in 1e-300_f64..1e300_f64) {
            prop_assert_eq!(ensure_positive(v, "v").unwrap(), v);
        }

        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
