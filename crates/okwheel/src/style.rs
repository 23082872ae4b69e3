//! Helper module with the style of a color wheel and its builder.
//!
//! A style is supplied afresh with every paint or pointer sample. Its setters
//! store the values as given, whereas its getters return the effective values
//! used for rendering: Lightness is clamped to unit range, the render quality
//! to `0.25..=1.0`, the inner hole ratio to `0.0..=0.95`, and a negative
//! saturation scale counts as zero.
//!
//!
//! # Example
//!
//! ```
//! # use okwheel::style::{ChannelOrder, WheelStyle};
//! let style = WheelStyle::builder()
//!     .base_lightness(0.6)
//!     .inner_hole_ratio(1.2)
//!     .channel_order(ChannelOrder::Rgba)
//!     .build();
//!
//! assert_eq!(style.lightness(), 0.6);
//! assert_eq!(style.inner_hole_ratio(), 0.95);
//! assert_eq!(style.channel_order(), ChannelOrder::Rgba);
//! ```

use crate::core::clamp01;

/// The byte order of a pixel.
///
/// Each pixel takes four bytes, three color channels and one alpha channel.
/// The default matches the premultiplied BGRA layout expected by most 2D
/// drawing surfaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChannelOrder {
    /// Blue, green, red, alpha.
    #[default]
    Bgra,
    /// Red, green, blue, alpha.
    Rgba,
}

impl ChannelOrder {
    /// Arrange the color channels and alpha in this byte order.
    #[inline]
    pub const fn arrange(&self, rgb: [u8; 3], alpha: u8) -> [u8; 4] {
        let [r, g, b] = rgb;
        match *self {
            Self::Bgra => [b, g, r, alpha],
            Self::Rgba => [r, g, b, alpha],
        }
    }

    /// Split the bytes of a pixel in this byte order into color channels and
    /// alpha.
    #[inline]
    pub const fn split(&self, pixel: [u8; 4]) -> ([u8; 3], u8) {
        match *self {
            Self::Bgra => ([pixel[2], pixel[1], pixel[0]], pixel[3]),
            Self::Rgba => ([pixel[0], pixel[1], pixel[2]], pixel[3]),
        }
    }
}

// ====================================================================================================================

const MIN_QUALITY: f64 = 0.25;
const MAX_INNER_HOLE: f64 = 0.95;

#[derive(Clone, Debug)]
struct StyleData {
    base_lightness: f64,
    lightness_offset: f64,
    hue_offset: f64,
    saturation_scale: f64,
    quality_scale: f64,
    inner_hole_ratio: f64,
    channel_order: ChannelOrder,
}

impl StyleData {
    pub const fn new() -> Self {
        Self {
            base_lightness: 0.7,
            lightness_offset: 0.0,
            hue_offset: 0.0,
            saturation_scale: 1.0,
            quality_scale: 1.0,
            inner_hole_ratio: 0.3,
            channel_order: ChannelOrder::Bgra,
        }
    }
}

/// A builder of wheel styles.
#[derive(Debug)]
pub struct StyleBuilder(StyleData);

impl StyleBuilder {
    /// Set the base lightness.
    pub fn base_lightness(&mut self, lightness: f64) -> &mut Self {
        self.0.base_lightness = lightness;
        self
    }

    /// Set the lightness offset, which is added to the base lightness.
    pub fn lightness_offset(&mut self, offset: f64) -> &mut Self {
        self.0.lightness_offset = offset;
        self
    }

    /// Set the hue rotation in degrees.
    pub fn hue_offset(&mut self, degrees: f64) -> &mut Self {
        self.0.hue_offset = degrees;
        self
    }

    /// Set the saturation scale, i.e., the fraction of the maximum in-gamut
    /// chroma reached at the rim.
    pub fn saturation_scale(&mut self, scale: f64) -> &mut Self {
        self.0.saturation_scale = scale;
        self
    }

    /// Set the render quality scale.
    ///
    /// The wheel is rasterized at this fraction of the device resolution and
    /// stretched to fit when drawn. Smaller values trade crispness for
    /// latency.
    pub fn quality_scale(&mut self, scale: f64) -> &mut Self {
        self.0.quality_scale = scale;
        self
    }

    /// Set the radius of the hole relative to the radius of the wheel.
    pub fn inner_hole_ratio(&mut self, ratio: f64) -> &mut Self {
        self.0.inner_hole_ratio = ratio;
        self
    }

    /// Set the byte order of rendered pixels.
    pub fn channel_order(&mut self, order: ChannelOrder) -> &mut Self {
        self.0.channel_order = order;
        self
    }

    /// Instantiate the style.
    pub fn build(&self) -> WheelStyle {
        WheelStyle(self.0.clone())
    }
}

/// The style of a color wheel.
#[derive(Clone, Debug)]
pub struct WheelStyle(StyleData);

impl Default for WheelStyle {
    fn default() -> Self {
        WheelStyle(StyleData::new())
    }
}

impl WheelStyle {
    /// Create a new builder with the default style values.
    pub fn builder() -> StyleBuilder {
        StyleBuilder(StyleData::new())
    }

    /// Create a new builder starting from this style.
    pub fn to_builder(&self) -> StyleBuilder {
        StyleBuilder(self.0.clone())
    }

    /// Get the base lightness as given.
    pub fn base_lightness(&self) -> f64 {
        self.0.base_lightness
    }

    /// Get the lightness offset as given.
    pub fn lightness_offset(&self) -> f64 {
        self.0.lightness_offset
    }

    /// Get the effective lightness, i.e., the sum of base lightness and
    /// offset clamped to unit range.
    pub fn lightness(&self) -> f64 {
        clamp01(self.0.base_lightness + self.0.lightness_offset)
    }

    /// Get the hue rotation in degrees.
    pub fn hue_offset(&self) -> f64 {
        self.0.hue_offset
    }

    /// Get the effective saturation scale, which is never negative.
    pub fn saturation_scale(&self) -> f64 {
        self.0.saturation_scale.max(0.0)
    }

    /// Get the effective quality scale in `0.25..=1.0`.
    pub fn quality_scale(&self) -> f64 {
        self.0.quality_scale.clamp(MIN_QUALITY, 1.0)
    }

    /// Get the effective inner hole ratio in `0.0..=0.95`.
    pub fn inner_hole_ratio(&self) -> f64 {
        self.0.inner_hole_ratio.clamp(0.0, MAX_INNER_HOLE)
    }

    /// Get the byte order of rendered pixels.
    pub fn channel_order(&self) -> ChannelOrder {
        self.0.channel_order
    }
}
