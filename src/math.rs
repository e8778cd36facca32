//! Thin numeric helpers
//!
//! Free-function exponentiation wrappers for callers composing key
//! projections out of plain functions.

/// Raise `base` to a floating-point exponent
#[inline]
pub fn pow(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Raise `base` to an integer exponent
#[inline]
pub fn powi(base: f64, exponent: i32) -> f64 {
    base.powi(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow() {
        assert_eq!(pow(2.0, 10.0), 1024.0);
        assert!((pow(4.0, 0.5) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_powi() {
        assert_eq!(powi(3.0, 3), 27.0);
        assert_eq!(powi(2.0, -1), 0.5);
    }
}
