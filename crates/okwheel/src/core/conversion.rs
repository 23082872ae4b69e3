use super::clip;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[f64; 3]; 3], vector: &[f64; 3]) -> [f64; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Clamp the value to unit range `0..=1`.
#[inline]
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Wrap the angle in degrees into the half-open range `0..360`.
///
/// Negative angles wrap around from the top, so that `-90` becomes `270`.
/// Because the remainder of a tiny negative angle may round up to exactly
/// 360, that value is folded back to zero.
///
/// ```
/// # use okwheel::wrap_deg;
/// assert_eq!(wrap_deg(-90.0), 270.0);
/// assert_eq!(wrap_deg(725.0), 5.0);
/// assert_eq!(wrap_deg(-1e-20), 0.0);
/// ```
#[inline]
pub fn wrap_deg(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped < 360.0 {
        wrapped
    } else {
        0.0
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert one linear sRGB coordinate to gamma-corrected sRGB.
///
/// This function implements sRGB's piecewise transfer function without
/// clamping: values at or below `0.0031308` scale linearly, larger values
/// follow the power curve.
#[inline]
pub fn linear_to_srgb(value: f64) -> f64 {
    if value <= 0.0031308 {
        12.92 * value
    } else {
        value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    }
}

/// Convert one gamma-corrected sRGB coordinate to linear sRGB.
///
/// This is the inverse of [`linear_to_srgb`].
#[inline]
pub fn srgb_to_linear(value: f64) -> f64 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for Oklch to Oklab. This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
#[inline]
pub(crate) fn okxch_to_okxab(value: &[f64; 3]) -> [f64; 3] {
    let [L, C, h] = *value;
    let hue_radian = h.to_radians();
    [L, C * hue_radian.cos(), C * hue_radian.sin()]
}

/// Convert coordinates for Oklab to Oklch. This is a one-hop, direct
/// conversion. The hue is wrapped into `0..360`.
#[allow(non_snake_case)]
#[inline]
pub(crate) fn okxab_to_okxch(value: &[f64; 3]) -> [f64; 3] {
    let [L, a, b] = *value;
    [L, a.hypot(b), wrap_deg(b.atan2(a).to_degrees())]
}

// --------------------------------------------------------------------------------------------------------------------
// https://bottosson.github.io/posts/oklab/#converting-from-linear-srgb-to-oklab

#[rustfmt::skip]
const OKLAB_TO_OKLMS: [[f64; 3]; 3] = [
    [ 1.0,  0.3963377774,  0.2158037573 ],
    [ 1.0, -0.1055613458, -0.0638541728 ],
    [ 1.0, -0.0894841775, -1.2914855480 ],
];

#[rustfmt::skip]
const OKLMS_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [  4.0767416621, -3.3077115913,  0.2309699292 ],
    [ -1.2684380046,  2.6097574011, -0.3413193965 ],
    [ -0.0041960863, -0.7034186147,  1.7076147010 ],
];

/// Convert coordinates for Oklab to linear sRGB. This is a one-hop, direct
/// conversion, even though it requires two matrix multiplications and a
/// coordinate-wise exponential.
///
/// The result is *not* clamped. Out-of-gamut colors have at least one
/// coordinate outside unit range.
#[inline]
pub(crate) fn oklab_to_linear_srgb(value: &[f64; 3]) -> [f64; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_LINEAR_SRGB, &[l.powi(3), m.powi(3), s.powi(3)])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert Oklch coordinates to 24-bit sRGB.
///
/// This function converts to linear sRGB, clips each coordinate to unit range
/// *before* applying the gamma, and then rounds to the nearest byte, with ties
/// to even. Hence out-of-gamut colors are clipped, not rejected.
pub(crate) fn oklch_to_24bit(value: &[f64; 3]) -> [u8; 3] {
    let linear = clip(&oklab_to_linear_srgb(&okxch_to_okxab(value)));
    linear.map(|c| (linear_to_srgb(c) * 255.0).round_ties_even() as u8)
}

/// Convert 24-bit sRGB coordinates to linear sRGB.
pub(crate) fn from_24bit(value: &[u8; 3]) -> [f64; 3] {
    value.map(|c| srgb_to_linear(f64::from(c) / 255.0))
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::assert_close;
    use rand::Rng;

    #[test]
    fn test_wrap_deg() {
        assert_eq!(wrap_deg(0.0), 0.0, "zero stays put");
        assert_eq!(wrap_deg(360.0), 0.0, "full rotation is zero");
        assert_eq!(wrap_deg(-0.1), 359.9, "small negative wraps to the top");
        assert_eq!(wrap_deg(359.9).floor(), 359.0, "just below full rotation");
        assert_eq!(wrap_deg(360.1).floor(), 0.0, "just past full rotation");

        let mut rng = rand::rng();
        for _ in 0..1_000 {
            let x: f64 = rng.random_range(-10_000.0..10_000.0);
            let w = wrap_deg(x);
            assert!((0.0..360.0).contains(&w), "{} wrapped to {}", x, w);
            assert_close!(w, wrap_deg(x + 360.0), 1e-9);
        }
    }

    #[test]
    fn test_gamma_round_trip() {
        for step in 0..=10_000 {
            let c = f64::from(step) / 10_000.0;
            assert_close!(srgb_to_linear(linear_to_srgb(c)), c, 1e-9);
        }

        let mut rng = rand::rng();
        for _ in 0..1_000 {
            let c: f64 = rng.random_range(0.0..=1.0);
            assert_close!(srgb_to_linear(linear_to_srgb(c)), c, 1e-9);
        }
    }

    #[test]
    fn test_oklab_conversions() {
        // White, black, and sRGB red as published with Oklab.
        let white = oklab_to_linear_srgb(&[1.0, 0.0, 0.0]);
        for c in white {
            assert_close!(c, 1.0, 1e-6);
        }

        let black = oklab_to_linear_srgb(&[0.0, 0.0, 0.0]);
        assert_eq!(black, [0.0, 0.0, 0.0], "black has no light");

        let red = oklab_to_linear_srgb(&[0.6279553606145516, 0.22486306106597398, 0.1258462985307351]);
        assert_close!(red[0], 1.0, 1e-6);
        assert_close!(red[1], 0.0, 1e-6);
        assert_close!(red[2], 0.0, 1e-6);

        let lch = okxab_to_okxch(&[0.6279553606145516, 0.22486306106597398, 0.1258462985307351]);
        assert_close!(lch[1], 0.25768330773615683, 1e-9);
        assert_close!(lch[2], 29.2338851923426, 1e-6);

        let lab = okxch_to_okxab(&lch);
        assert_close!(lab[1], 0.22486306106597398, 1e-12);
        assert_close!(lab[2], 0.1258462985307351, 1e-12);
    }

    #[test]
    fn test_oklch_to_24bit() {
        assert_eq!(oklch_to_24bit(&[1.0, 0.0, 0.0]), [255, 255, 255], "white");
        assert_eq!(oklch_to_24bit(&[0.0, 0.0, 0.0]), [0, 0, 0], "black");
        assert_eq!(
            oklch_to_24bit(&[0.6279553606145516, 0.25768330773615683, 29.2338851923426]),
            [255, 0, 0],
            "red"
        );

        // Way out of gamut, hence clipped rather than wrapped around.
        let clipped = oklch_to_24bit(&[0.7, 1.0, 140.0]);
        assert_eq!(clipped[0], 0, "red clips to zero");
        assert_eq!(clipped[2], 0, "blue clips to zero");
    }

    #[test]
    fn test_from_24bit() {
        assert_eq!(from_24bit(&[0, 0, 0]), [0.0, 0.0, 0.0], "black");
        assert_eq!(from_24bit(&[255, 255, 255]), [1.0, 1.0, 1.0], "white");
    }
}
