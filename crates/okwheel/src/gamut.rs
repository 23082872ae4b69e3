//! The sRGB gamut boundary in Oklch at a fixed lightness.

use crate::core::{close_enough, max_chroma, wrap_deg};
use crate::error::OutOfBoundsError;

/// The number of entries in a gamut table, one per integer hue degree.
pub const HUE_STEPS: usize = 360;

/// A table of maximum in-gamut chroma per hue.
///
/// For a fixed lightness L, entry `h` is the largest chroma C such that
/// `Oklch(L, C, h)` still converts to an sRGB color with all coordinates in
/// unit range. Entries are independent per-hue maxima, i.e., the table is not
/// monotonic in hue. Since there is no closed form for the gamut boundary,
/// [`GamutTable::new`] searches for each entry, which takes a few thousand
/// color conversions. Hence a table should be built once per lightness and
/// then reused.
///
/// ```
/// # use okwheel::gamut::GamutTable;
/// # use okwheel::Oklch;
/// let table = GamutTable::new(0.7);
/// let rim = Oklch::new(0.7, table[30], 30.0);
/// assert!(rim.in_gamut());
/// ```
#[derive(Clone, Debug)]
pub struct GamutTable {
    lightness: f64,
    chroma: Box<[f64; HUE_STEPS]>,
}

impl GamutTable {
    /// Build the gamut table for the given lightness.
    ///
    /// The lightness is used as is, without clamping. Lightness outside unit
    /// range has no in-gamut colors and hence results in near-zero entries.
    pub fn new(lightness: f64) -> Self {
        let mut chroma = Box::new([0.0; HUE_STEPS]);
        for (hue, entry) in chroma.iter_mut().enumerate() {
            *entry = max_chroma(lightness, hue as f64);
        }

        Self { lightness, chroma }
    }

    /// Get the lightness this table was built for.
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Determine whether this table was built for the given lightness, within
    /// [`EPSILON`](crate::EPSILON).
    pub fn is_for(&self, lightness: f64) -> bool {
        close_enough(self.lightness, lightness)
    }

    /// Get the maximum chroma for the given integer hue.
    ///
    /// # Errors
    ///
    /// This method returns an error if the hue index is not in `0..=359`.
    pub fn get(&self, hue: usize) -> Result<f64, OutOfBoundsError> {
        self.chroma
            .get(hue)
            .copied()
            .ok_or_else(|| OutOfBoundsError::new(hue, 0..=HUE_STEPS - 1))
    }

    /// Get the index of the entry covering the given hue in degrees.
    ///
    /// The hue is wrapped into `0..360` and then rounded down.
    pub fn index_of(hue: f64) -> usize {
        (wrap_deg(hue).floor() as usize).min(HUE_STEPS - 1)
    }

    /// Get the maximum chroma for the given, arbitrary hue in degrees.
    ///
    /// This method looks up the entry for the hue's integer degree. It does
    /// not interpolate between entries.
    pub fn max_chroma(&self, hue: f64) -> f64 {
        self.chroma[Self::index_of(hue)]
    }

    /// Scale the chroma for the given hue.
    ///
    /// This method computes `min(fraction × Cmax × saturation, Cmax)`, where
    /// `Cmax` is the entry for the hue. The fraction typically is the
    /// normalized radius on the wheel. Negative fractions and saturations
    /// count as zero. Since the result never exceeds the entry, the
    /// corresponding Oklch color is always in gamut.
    pub fn scaled_chroma(&self, hue: f64, fraction: f64, saturation: f64) -> f64 {
        let limit = self.max_chroma(hue);
        (fraction.max(0.0) * limit * saturation.max(0.0)).min(limit)
    }

    /// Get an iterator over the entries in hue order.
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.chroma.iter()
    }
}

impl core::ops::Index<usize> for GamutTable {
    type Output = f64;

    /// Access the entry for the given integer hue.
    ///
    /// # Panics
    ///
    /// This method panics if the index is not in `0..=359`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.chroma[index]
    }
}

impl<'a> IntoIterator for &'a GamutTable {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
