//! Rasterizing the color wheel.
//!
//! A wheel is an annulus. Its angle maps to Oklch hue and its radius to
//! chroma, with the hole's edge at zero chroma and the rim at the maximum
//! in-gamut chroma scaled by the saturation. Lightness is the same for all
//! pixels. Both edges of the annulus are antialiased over one pixel, and the
//! resulting pixels are stored with premultiplied alpha.

use crate::core::{close_enough, wrap_deg};
use crate::error::OutOfBoundsError;
use crate::gamut::GamutTable;
use crate::geometry::WheelGeometry;
use crate::style::ChannelOrder;
use crate::Oklch;

/// The number of bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// An owned buffer of premultiplied 32-bit pixels.
///
/// Rows are stored top to bottom without padding, i.e., the stride is four
/// times the width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new, fully transparent buffer.
    pub fn new(width: usize, height: usize, order: ChannelOrder) -> Self {
        Self {
            width,
            height,
            order,
            data: vec![0; width * height * BYTES_PER_PIXEL],
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the number of bytes per row.
    pub fn stride(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    /// Get the byte order of pixels.
    pub fn channel_order(&self) -> ChannelOrder {
        self.order
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        y * self.stride() + x * BYTES_PER_PIXEL
    }

    fn put(&mut self, x: usize, y: usize, pixel: [u8; 4]) {
        let offset = self.offset(x, y);
        self.data[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&pixel);
    }

    /// Get the bytes of the pixel at the given coordinates, in this buffer's
    /// channel order.
    ///
    /// # Errors
    ///
    /// This method returns an error if either coordinate is out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Result<[u8; 4], OutOfBoundsError> {
        if self.width <= x {
            return Err(OutOfBoundsError::new(x, 0..=self.width.saturating_sub(1)));
        } else if self.height <= y {
            return Err(OutOfBoundsError::new(y, 0..=self.height.saturating_sub(1)));
        }

        let offset = self.offset(x, y);
        let mut pixel = [0; 4];
        pixel.copy_from_slice(&self.data[offset..offset + BYTES_PER_PIXEL]);
        Ok(pixel)
    }

    /// Convert this buffer into straight, i.e., not premultiplied, RGBA
    /// bytes.
    ///
    /// This is the layout expected by most image file formats. Fully
    /// transparent pixels become transparent black.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.data.len());
        for chunk in self.data.chunks_exact(BYTES_PER_PIXEL) {
            let Ok(pixel) = <[u8; 4]>::try_from(chunk) else {
                continue;
            };

            let (rgb, alpha) = self.order.split(pixel);
            if alpha == 0 {
                result.extend_from_slice(&[0, 0, 0, 0]);
                continue;
            }

            let [r, g, b] = rgb.map(|c| unpremultiply(c, alpha));
            result.extend_from_slice(&[r, g, b, alpha]);
        }
        result
    }
}

#[inline]
fn premultiply(value: u8, alpha: f64) -> u8 {
    (f64::from(value) * alpha).round_ties_even() as u8
}

#[inline]
fn unpremultiply(value: u8, alpha: u8) -> u8 {
    (f64::from(value) * 255.0 / f64::from(alpha))
        .round_ties_even()
        .min(255.0) as u8
}

// ====================================================================================================================

/// The parameters that determine a raster.
///
/// Two keys are equal if their dimensions and channel orders are the same and
/// their floating point parameters are within [`EPSILON`](crate::EPSILON) of
/// each other. Equal keys produce identical rasters. The floating point
/// parameters should be the effective values, i.e., as returned by a
/// [`WheelStyle`](crate::style::WheelStyle).
#[derive(Clone, Copy, Debug)]
pub struct RenderKey {
    /// The width of the raster in pixels.
    pub width: u32,
    /// The height of the raster in pixels.
    pub height: u32,
    /// The device scale.
    pub device_scale: f32,
    /// The lightness of all pixels.
    pub lightness: f64,
    /// The hue rotation in degrees.
    pub hue_offset: f64,
    /// The saturation scale.
    pub saturation_scale: f64,
    /// The inner hole ratio.
    pub inner_hole_ratio: f64,
    /// The byte order of pixels.
    pub channel_order: ChannelOrder,
}

impl PartialEq for RenderKey {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.channel_order == other.channel_order
            && close_enough(f64::from(self.device_scale), f64::from(other.device_scale))
            && close_enough(self.lightness, other.lightness)
            && close_enough(self.hue_offset, other.hue_offset)
            && close_enough(self.saturation_scale, other.saturation_scale)
            && close_enough(self.inner_hole_ratio, other.inner_hole_ratio)
    }
}

/// Determine the opacity of a pixel at the given normalized radius.
///
/// Pixels within the annulus are opaque. Pixels within one pixel's width
/// inside the hole or outside the rim fade out linearly.
fn coverage(radius: f64, inner: f64, feather: f64) -> f64 {
    if radius < inner {
        ((radius - (inner - feather)) / feather).clamp(0.0, 1.0)
    } else if 1.0 < radius {
        ((1.0 + feather - radius) / feather).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Render the color wheel for the given key.
///
/// The gamut table must have been built for the key's lightness. The returned
/// buffer has the key's dimensions and channel order. A wheel with width or
/// height one has radius zero and results in a fully transparent buffer.
///
/// ```
/// # use okwheel::gamut::GamutTable;
/// # use okwheel::raster::{render_wheel, RenderKey};
/// # use okwheel::style::ChannelOrder;
/// let table = GamutTable::new(0.7);
/// let key = RenderKey {
///     width: 64,
///     height: 64,
///     device_scale: 1.0,
///     lightness: 0.7,
///     hue_offset: 0.0,
///     saturation_scale: 1.0,
///     inner_hole_ratio: 0.3,
///     channel_order: ChannelOrder::Bgra,
/// };
///
/// let buffer = render_wheel(&key, &table);
/// assert_eq!(buffer.as_bytes().len(), 64 * 64 * 4);
/// assert_eq!(buffer.pixel(0, 0)?, [0, 0, 0, 0]);
/// # Ok::<(), okwheel::error::OutOfBoundsError>(())
/// ```
pub fn render_wheel(key: &RenderKey, table: &GamutTable) -> PixelBuffer {
    let width = key.width as usize;
    let height = key.height as usize;
    let mut buffer = PixelBuffer::new(width, height, key.channel_order);

    let geometry = WheelGeometry::new(width as f64, height as f64);
    if geometry.is_degenerate() {
        return buffer;
    }

    let feather = geometry.feather();
    let inner = key.inner_hole_ratio;

    for y in 0..height {
        for x in 0..width {
            let Some(polar) = geometry.locate(x as f64, y as f64) else {
                continue;
            };

            let alpha = coverage(polar.radius, inner, feather);
            if alpha <= 0.0 {
                continue;
            }

            let hue = wrap_deg(polar.angle + key.hue_offset);
            let fraction = (polar.radius - inner) / (1.0 - inner);
            let chroma = table.scaled_chroma(hue, fraction, key.saturation_scale);
            let rgb: [u8; 3] = Oklch::new(key.lightness, chroma, hue).to_rgb().into();

            let opacity = (255.0 * alpha).round_ties_even() as u8;
            let pixel = key
                .channel_order
                .arrange(rgb.map(|c| premultiply(c, alpha)), opacity);
            buffer.put(x, y, pixel);
        }
    }

    buffer
}

#[cfg(test)]
mod test {
    use super::{premultiply, render_wheel, PixelBuffer, RenderKey};
    use crate::error::OutOfBoundsError;
    use crate::gamut::GamutTable;
    use crate::style::ChannelOrder;
    use crate::Oklch;

    fn expected_pixel(order: ChannelOrder, lightness: f64, chroma: f64, hue: f64) -> [u8; 4] {
        order.arrange(Oklch::new(lightness, chroma, hue).to_rgb().into(), 255)
    }

    fn key(width: u32, height: u32) -> RenderKey {
        RenderKey {
            width,
            height,
            device_scale: 1.0,
            lightness: 0.7,
            hue_offset: 0.0,
            saturation_scale: 1.0,
            inner_hole_ratio: 0.3,
            channel_order: ChannelOrder::Bgra,
        }
    }

    #[test]
    fn test_rim_is_saturated() -> Result<(), OutOfBoundsError> {
        let table = GamutTable::new(0.7);

        for order in [ChannelOrder::Bgra, ChannelOrder::Rgba] {
            let buffer = render_wheel(
                &RenderKey {
                    channel_order: order,
                    ..key(201, 201)
                },
                &table,
            );

            for (x, y, hue) in [(200, 100, 0), (100, 200, 90), (0, 100, 180), (100, 0, 270)] {
                assert_eq!(
                    buffer.pixel(x, y)?,
                    expected_pixel(order, 0.7, table[hue], hue as f64),
                    "rim pixel for hue {} with {:?}",
                    hue,
                    order
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_hue_offset() -> Result<(), OutOfBoundsError> {
        let table = GamutTable::new(0.7);
        let buffer = render_wheel(
            &RenderKey {
                hue_offset: 450.0,
                ..key(201, 201)
            },
            &table,
        );

        assert_eq!(
            buffer.pixel(200, 100)?,
            expected_pixel(ChannelOrder::Bgra, 0.7, table[90], 90.0),
            "east shows hue 90"
        );
        assert_eq!(
            buffer.pixel(100, 200)?,
            expected_pixel(ChannelOrder::Bgra, 0.7, table[180], 180.0),
            "south shows hue 180"
        );
        Ok(())
    }

    #[test]
    fn test_transparency() -> Result<(), OutOfBoundsError> {
        let table = GamutTable::new(0.7);
        let buffer = render_wheel(&key(201, 201), &table);

        assert_eq!(buffer.pixel(100, 100)?, [0, 0, 0, 0], "center");
        assert_eq!(buffer.pixel(0, 0)?, [0, 0, 0, 0], "corner");
        assert_eq!(buffer.pixel(200, 200)?, [0, 0, 0, 0], "corner");

        // At the hole's edge, chroma is zero and hence the pixel is gray.
        let [b, g, r, a] = buffer.pixel(130, 100)?;
        assert_eq!(a, 255, "opaque at hole's edge");
        assert!(r == g && g == b, "gray at hole's edge");
        Ok(())
    }

    #[test]
    fn test_antialiasing() -> Result<(), OutOfBoundsError> {
        let table = GamutTable::new(0.7);
        let buffer = render_wheel(&key(201, 201), &table);

        // (171, 171) is 100.41 pixels from the center, i.e., within the rim's
        // fringe of one pixel.
        let pixel = buffer.pixel(171, 171)?;
        let alpha = pixel[3];
        assert!(0 < alpha && alpha < 255, "partial coverage {}", alpha);
        assert!(
            pixel[..3].iter().all(|c| *c <= alpha),
            "premultiplied channels {:?}",
            pixel
        );

        let straight = buffer.to_straight_rgba();
        let offset = 171 * buffer.stride() + 171 * 4;
        assert_eq!(straight[offset + 3], alpha, "alpha is unchanged");
        assert!(
            straight[offset..offset + 3].iter().any(|c| alpha < *c),
            "straight color is brighter than premultiplied color"
        );
        assert_eq!(&straight[..4], &[0, 0, 0, 0], "transparent corner");
        Ok(())
    }

    #[test]
    fn test_premultiply() {
        assert_eq!(premultiply(1, 0.5), 0, "ties round to even");
        assert_eq!(premultiply(3, 0.5), 2, "ties round to even");
        assert_eq!(premultiply(200, 1.0), 200, "opaque");
        assert_eq!(premultiply(200, 0.25), 50, "quarter");
    }

    #[test]
    fn test_degenerate() {
        let table = GamutTable::new(0.7);
        for (width, height) in [(1, 1), (1, 50), (50, 1)] {
            let buffer = render_wheel(&key(width, height), &table);
            assert_eq!(
                buffer.as_bytes().len(),
                (width * height * 4) as usize,
                "buffer size"
            );
            assert!(
                buffer.as_bytes().iter().all(|b| *b == 0),
                "{}×{} is transparent",
                width,
                height
            );
        }
    }

    #[test]
    fn test_pixel_bounds() {
        let buffer = PixelBuffer::new(3, 2, ChannelOrder::Bgra);
        assert_eq!(buffer.stride(), 12, "stride");
        assert_eq!(buffer.pixel(2, 1), Ok([0, 0, 0, 0]), "last pixel");
        assert_eq!(
            buffer.pixel(3, 0),
            Err(OutOfBoundsError::new(3, 0..=2)),
            "x out of bounds"
        );
        assert_eq!(
            buffer.pixel(0, 2),
            Err(OutOfBoundsError::new(2, 0..=1)),
            "y out of bounds"
        );
    }

    #[test]
    fn test_key_equality() {
        let base = key(200, 200);
        assert_eq!(
            base,
            RenderKey {
                lightness: 0.7 + 1e-7,
                hue_offset: -5e-7,
                ..base
            },
            "within tolerance"
        );
        assert_ne!(
            base,
            RenderKey {
                hue_offset: 1e-5,
                ..base
            },
            "hue offset differs"
        );
        assert_ne!(base, key(200, 201), "height differs");
        assert_ne!(
            base,
            RenderKey {
                saturation_scale: 0.5,
                ..base
            },
            "saturation differs"
        );
        assert_ne!(
            base,
            RenderKey {
                inner_hole_ratio: 0.4,
                ..base
            },
            "inner hole differs"
        );
        assert_ne!(
            base,
            RenderKey {
                device_scale: 2.0,
                ..base
            },
            "device scale differs"
        );
        assert_ne!(
            base,
            RenderKey {
                channel_order: ChannelOrder::Rgba,
                ..base
            },
            "channel order differs"
        );
    }
}
