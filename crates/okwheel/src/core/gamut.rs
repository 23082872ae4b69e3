use super::conversion::{oklab_to_linear_srgb, okxch_to_okxab};

/// Determine whether the linear or gamma-corrected sRGB coordinates are in
/// gamut, i.e., all three have unit range.
#[inline]
fn in_unit_cube(coordinates: &[f64; 3]) -> bool {
    coordinates.iter().all(|c| 0.0 <= *c && *c <= 1.0)
}

/// Clip the sRGB coordinates to unit range.
#[inline]
pub(crate) fn clip(coordinates: &[f64; 3]) -> [f64; 3] {
    let [r, g, b] = *coordinates;
    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

/// Determine whether the Oklch color with the given lightness, chroma, and hue
/// in degrees is in gamut for sRGB.
///
/// This function tests the *unclamped* linear sRGB coordinates. It does not
/// normalize its inputs, so a lightness outside unit range is typically out of
/// gamut.
///
/// ```
/// # use okwheel::in_gamut;
/// assert!(in_gamut(0.7, 0.0, 0.0));
/// assert!(in_gamut(0.7, 0.1, 30.0));
/// assert!(!in_gamut(0.7, 0.5, 30.0));
/// ```
#[allow(non_snake_case)]
#[inline]
pub fn in_gamut(L: f64, C: f64, h: f64) -> bool {
    in_unit_cube(&oklab_to_linear_srgb(&okxch_to_okxab(&[L, C, h])))
}

/// The initial upper bound for the chroma search.
const INITIAL_CHROMA: f64 = 0.4;
/// The growth factor for expanding the upper bound.
const EXPANSION: f64 = 1.35;
/// The ceiling for expanding the upper bound.
const CHROMA_CEILING: f64 = 1.5;
/// The number of bisection steps.
const BISECTIONS: usize = 16;

/// Find the maximum in-gamut chroma for the given lightness and hue.
///
/// Since there is no closed form for the sRGB gamut boundary in Oklch, this
/// function searches for it. It first grows an upper bound until that bound is
/// out of gamut or reaches the ceiling of 1.5. It then runs exactly 16 steps of
/// bisection and returns the lower, in-gamut end of the final interval. The
/// resolution is better than 1.5/2¹⁶ ≈ 2.3e-5, which is plenty for 24-bit
/// colors.
#[allow(non_snake_case)]
pub(crate) fn max_chroma(L: f64, h: f64) -> f64 {
    let mut lo = 0.0;
    let mut hi = INITIAL_CHROMA;

    loop {
        if CHROMA_CEILING <= hi || !in_gamut(L, hi, h) {
            break;
        }
        hi *= EXPANSION;
    }

    for _ in 0..BISECTIONS {
        let mid = (lo + hi) / 2.0;
        if in_gamut(L, mid, h) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}

#[cfg(test)]
mod test {
    use super::{clip, in_gamut, max_chroma};

    #[test]
    fn test_in_gamut() {
        assert!(in_gamut(0.5, 0.0, 123.0), "grays are in gamut");
        assert!(!in_gamut(0.5, 0.4, 123.0), "chroma 0.4 exceeds sRGB");
        assert!(!in_gamut(1.2, 0.0, 0.0), "too bright for sRGB");
        assert!(!in_gamut(-0.1, 0.0, 0.0), "too dark for sRGB");
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip(&[-0.5, 0.5, 1.5]), [0.0, 0.5, 1.0], "clipped to unit range");
    }

    #[test]
    fn test_max_chroma() {
        for h in [0.0, 29.0, 90.0, 142.0, 200.0, 264.0, 328.0] {
            let c = max_chroma(0.7, h);
            assert!(0.0 < c && c < 0.4, "chroma {} for hue {} out of range", c, h);
            assert!(in_gamut(0.7, c, h), "boundary for hue {} is in gamut", h);
            assert!(!in_gamut(0.7, c + 1e-4, h), "boundary for hue {} is tight", h);
        }

        // Black and white have no room for chroma.
        assert!(max_chroma(0.0, 0.0) < 1e-4, "black has no chroma");
        assert!(max_chroma(1.0, 0.0) < 1e-4, "white has no chroma");
    }
}
