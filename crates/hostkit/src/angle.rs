//! Angle conversion.

use std::f64::consts::PI;

/// Converts degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees / 180.0 * PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_angles() {
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert_eq!(degrees_to_radians(180.0), PI);
        assert_eq!(degrees_to_radians(-180.0), -PI);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < 1e-12);
        assert!((degrees_to_radians(360.0) - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(degrees_to_radians(f64::NAN).is_nan());
        assert_eq!(degrees_to_radians(f64::INFINITY), f64::INFINITY);
    }
}
