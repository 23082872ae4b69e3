/// The tolerance for treating two floating point parameters as equal.
///
/// Both the raster cache and the gamut table compare their parameters with
/// this same tolerance. Using different tolerances would either serve stale
/// rasters or recompute them needlessly.
pub const EPSILON: f64 = 1e-6;

/// Determine whether the two floats are close enough to be considered equal.
///
/// The difference must be strictly smaller than [`EPSILON`]. Not-a-numbers
/// are never close enough to anything, including themselves.
#[inline]
pub fn close_enough(f1: f64, f2: f64) -> bool {
    (f1 - f2).abs() < EPSILON
}

/// Test macro for asserting that two floating point numbers differ by at most
/// the given tolerance.
///
/// # Panics
///
/// This macro panics if the absolute difference exceeds the tolerance. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[cfg(test)]
macro_rules! assert_close {
    ($f1:expr, $f2:expr, $tolerance:expr $(,)?) => {{
        let (f1, f2, tolerance): (f64, f64, f64) = ($f1, $f2, $tolerance);
        assert!(
            (f1 - f2).abs() <= tolerance,
            "quantities differ by more than {}:\n{:?}\n{:?}",
            tolerance,
            f1,
            f2
        );
    }};
}

#[cfg(test)]
pub(crate) use assert_close;

#[cfg(test)]
mod test {
    use super::close_enough;

    #[test]
    fn test_close_enough() {
        assert!(close_enough(0.7, 0.7 + 5e-7), "within tolerance");
        assert!(!close_enough(0.7, 0.7 + 2e-6), "beyond tolerance");
        assert!(!close_enough(f64::NAN, f64::NAN), "not-a-number is never close");
    }
}
