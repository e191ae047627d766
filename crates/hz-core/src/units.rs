// hz-core/src/units.rs

use uom::si::f64::{Length as UomLength, ThermodynamicTemperature as UomThermodynamicTemperature};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn au(v: f64) -> Length {
    use uom::si::length::astronomical_unit;
    Length::new::<astronomical_unit>(v)
}

#[inline]
pub fn kelvin_of(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn au_of(l: Length) -> f64 {
    use uom::si::length::astronomical_unit;
    l.get::<astronomical_unit>()
}

pub mod constants {
    use super::*;

    /// Solar effective temperature used as the zero point of the flux fits.
    pub const SOLAR_TEFF_K: f64 = 5780.0;

    /// Offset of `t` from the solar effective temperature, in kelvin.
    #[inline]
    pub fn solar_offset_k(t: Temperature) -> f64 {
        kelvin_of(t) - SOLAR_TEFF_K
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _t = k(5780.0);
        let _d = au(1.0);
    }

    #[test]
    fn astronomical_unit_round_trip() {
        use uom::si::length::meter;
        let d = au(1.0);
        assert!((d.get::<meter>() - 1.495_978_707e11).abs() < 1.0);
        assert!((au_of(d) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn solar_offset_is_zero_for_the_sun() {
        assert_eq!(constants::solar_offset_k(k(constants::SOLAR_TEFF_K)), 0.0);
        assert_eq!(constants::solar_offset_k(k(3780.0)), -2000.0);
    }
}
