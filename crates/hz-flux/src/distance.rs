//! Inverse-square conversion between effective flux and orbital distance.

use crate::boundary::Boundary;
use crate::error::{HzError, HzResult};
use hz_core::units::{Length, au};
use hz_core::{Real, ensure_positive};

/// Orbital distance in AU at which a star of `luminosity_lsun` delivers
/// `s_eff` times the solar constant: `d = sqrt(L / S_eff)`.
///
/// Luminosity is checked first and must be finite and positive. A
/// non-positive or NaN flux yields [`HzError::Domain`]; no NaN or negative
/// distance is ever returned.
pub fn distance_au(luminosity_lsun: Real, s_eff: Real) -> HzResult<Real> {
    to_distance(luminosity_lsun, s_eff, "effective flux")
}

/// Same as [`distance_au`], naming `boundary` in a domain error.
pub fn boundary_distance_au(
    boundary: Boundary,
    luminosity_lsun: Real,
    s_eff: Real,
) -> HzResult<Real> {
    to_distance(luminosity_lsun, s_eff, boundary.name())
}

/// [`distance_au`] as a uom length.
pub fn distance(luminosity_lsun: Real, s_eff: Real) -> HzResult<Length> {
    distance_au(luminosity_lsun, s_eff).map(au)
}

/// Flux received at `distance_au`, relative to the solar constant: `S = L / d²`.
pub fn flux_at_distance(luminosity_lsun: Real, distance_au: Real) -> HzResult<Real> {
    let l = ensure_positive(luminosity_lsun, "luminosity")?;
    let d = ensure_positive(distance_au, "orbital distance")?;
    Ok(l / (d * d))
}

fn to_distance(luminosity_lsun: Real, s_eff: Real, boundary: &'static str) -> HzResult<Real> {
    let l = ensure_positive(luminosity_lsun, "luminosity")?;
    if !s_eff.is_finite() || s_eff <= 0.0 {
        return Err(HzError::Domain { boundary, s_eff });
    }
    Ok((l / s_eff).sqrt())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn distance_increases_with_luminosity(
            l in 1e-4_f64..1e4,
            factor in 1.001_f64..100.0,
            s in 0.05_f64..3.0,
        ) {
            let near = distance_au(l, s).unwrap();
            let far = distance_au(l * factor, s).unwrap();
            prop_assert!(far > near);
        }

        #[test]
        fn square_root_scaling(l in 1e-4_f64..1e4, s in 0.05_f64..3.0) {
            prop_assert_eq!(distance_au(4.0 * l, s).unwrap(), 2.0 * distance_au(l, s).unwrap());
        }
    }
}
