use core::str::FromStr;

use crate::core::{
    format_hashed, from_24bit, in_gamut, oklab_to_linear_srgb, oklch_to_24bit, okxab_to_okxch,
    okxch_to_okxab, parse_hashed, wrap_deg,
};
use crate::error::ColorFormatError;

/// A color in Oklab.
///
/// Oklab uses Cartesian coordinates: `l` is the lightness, `a` varies
/// red/green, and `b` varies blue/yellow. In practice, `a` and `b` are bounded
/// `-0.4..=0.4`. Oklab colors are transient values, computed on demand.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    /// Create a new Oklab color.
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert this color to Oklch.
    ///
    /// The hue of the result is wrapped into `0..360`. For grays, it is zero.
    pub fn to_oklch(&self) -> Oklch {
        let [l, c, h] = okxab_to_okxch(&[self.l, self.a, self.b]);
        Oklch { l, c, h }
    }

    /// Convert this color to linear sRGB.
    ///
    /// The coordinates are *not* clamped. They fall outside unit range exactly
    /// when the color is out of gamut.
    pub fn to_linear_srgb(&self) -> [f64; 3] {
        oklab_to_linear_srgb(&[self.l, self.a, self.b])
    }
}

// ====================================================================================================================

/// A color in Oklch.
///
/// Oklch is the polar form of [`Oklab`]: `l` is the lightness, `c` the
/// chroma, and `h` the hue in degrees. The constructor leaves the coordinates
/// as they are; conversions accept any real hue.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Oklch {
    /// Create a new Oklch color.
    ///
    /// ```
    /// # use okwheel::Oklch;
    /// let pink = Oklch::new(0.7, 0.15, 0.0);
    /// assert_eq!(pink.to_rgb().to_string(), "#E7729B");
    /// ```
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Convert this color to Oklab.
    pub fn to_oklab(&self) -> Oklab {
        let [l, a, b] = okxch_to_okxab(&[self.l, self.c, self.h]);
        Oklab { l, a, b }
    }

    /// Determine whether this color is in gamut for sRGB.
    pub fn in_gamut(&self) -> bool {
        in_gamut(self.l, self.c, self.h)
    }

    /// Convert this color to 24-bit sRGB.
    ///
    /// Out-of-gamut colors are clipped in linear sRGB before gamma encoding.
    /// Callers that care about the gamut boundary should limit the chroma with
    /// a [`GamutTable`](crate::gamut::GamutTable) first.
    pub fn to_rgb(&self) -> Rgb {
        Rgb(oklch_to_24bit(&[self.l, self.c, self.h]))
    }

    /// Get a copy of this color with the hue wrapped into `0..360`.
    #[must_use = "method returns a new color and does not mutate the original value"]
    pub fn normalize(&self) -> Self {
        Self {
            h: wrap_deg(self.h),
            ..*self
        }
    }
}

impl From<Oklab> for Oklch {
    fn from(value: Oklab) -> Self {
        value.to_oklch()
    }
}

impl From<Oklch> for Oklab {
    fn from(value: Oklch) -> Self {
        value.to_oklab()
    }
}

// ====================================================================================================================

/// A 24-bit sRGB color.
///
/// Its display is the uppercase hashed hexadecimal form, and it parses the
/// same form with one or two digits per coordinate in either case.
///
/// ```
/// # use okwheel::Rgb;
/// # use okwheel::error::ColorFormatError;
/// let sand: Rgb = "#eedcad".parse()?;
/// assert_eq!(sand, Rgb::new(0xee, 0xdc, 0xad));
/// assert_eq!(format!("{}", sand), "#EEDCAD");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new 24-bit color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Get the red coordinate.
    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    /// Get the green coordinate.
    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    /// Get the blue coordinate.
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// Convert this color to linear sRGB.
    pub fn to_linear(&self) -> [f64; 3] {
        from_24bit(&self.0)
    }

    /// Format this color in uppercase hashed hexadecimal notation.
    pub fn to_hex_format(&self) -> String {
        format!("{}", self)
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl From<Oklch> for Rgb {
    fn from(value: Oklch) -> Self {
        value.to_rgb()
    }
}

impl FromStr for Rgb {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hashed(s).map(Self)
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format_hashed(&self.0, f)
    }
}

#[cfg(test)]
mod test {
    use super::{Oklab, Oklch, Rgb};
    use crate::core::assert_close;
    use crate::error::ColorFormatError;

    #[test]
    fn test_polar_round_trip() {
        let lch = Oklch::new(0.7, 0.15, 250.0);
        let lab = lch.to_oklab();
        assert_close!(lab.l, 0.7, 0.0);
        let back = lab.to_oklch();
        assert_close!(back.c, 0.15, 1e-12);
        assert_close!(back.h, 250.0, 1e-9);

        let negative = Oklch::new(0.7, 0.15, -110.0).to_oklab().to_oklch();
        assert_close!(negative.h, 250.0, 1e-9);
        assert_close!(Oklch::new(0.5, 0.1, -90.0).normalize().h, 270.0, 0.0);
    }

    #[test]
    fn test_grays() {
        let gray = Oklab::new(0.5, 0.0, 0.0).to_oklch();
        assert_eq!(gray, Oklch::new(0.5, 0.0, 0.0), "grays have zero hue");
        assert!(gray.in_gamut(), "grays are in gamut");

        let rgb = Oklch::new(1.0, 0.0, 42.0).to_rgb();
        assert_eq!(rgb, Rgb::new(255, 255, 255), "white");
        assert_eq!(rgb.to_linear(), [1.0, 1.0, 1.0], "linear white");
    }

    #[test]
    fn test_rgb() -> Result<(), ColorFormatError> {
        let pink: Rgb = "#f65D87".parse()?;
        assert_eq!(pink.r(), 0xf6, "red");
        assert_eq!(pink.g(), 0x5d, "green");
        assert_eq!(pink.b(), 0x87, "blue");
        assert_eq!(pink.to_string(), "#F65D87", "uppercase display");
        assert_eq!(pink.to_hex_format(), "#F65D87", "uppercase hex");
        assert_eq!(<[u8; 3]>::from(pink), [0xf6, 0x5d, 0x87], "coordinates");
        assert_eq!("#abc".parse::<Rgb>()?, Rgb::new(0xaa, 0xbb, 0xcc), "short form");
        assert_eq!(
            "abc".parse::<Rgb>(),
            Err(ColorFormatError::UnknownFormat),
            "missing hash"
        );
        Ok(())
    }
}
