//! Utility module with okwheel's errors.
//!
//! The color math, gamut table, rasterizer, and picker never fail. They clamp
//! or ignore out-of-range inputs instead. The errors below only arise from the
//! inspection and parsing helpers around them.

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// The ranges used by this crate include:
///
///   * `0..=359` for the hue indexes of a
///     [`GamutTable`](crate::gamut::GamutTable);
///   * `0..=width-1` and `0..=height-1` for the pixel coordinates of a
///     [`PixelBuffer`](crate::raster::PixelBuffer).
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: core::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: usize, expected: core::ops::RangeInclusive<usize>) -> Self {
        Self { value, expected }
    }
}

impl core::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

// ====================================================================================================================

/// An erroneous color format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with `#`.
    UnknownFormat,

    /// A color format with an unexpected number of characters. For example,
    /// `#00` is missing a hexadecimal digit, whereas `#💩00` has the correct
    /// length in bytes but not in characters.
    UnexpectedCharacters,

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#efg` has a malformed third coordinate.
    MalformedHex,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnknownFormat => f.write_str("color format should start with `#`"),
            UnexpectedCharacters => f.write_str(
                "color format should have 3 or 6 hexadecimal digits after the `#`",
            ),
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}
