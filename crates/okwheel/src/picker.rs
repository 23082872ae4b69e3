//! The interactive color wheel.
//!
//! [`WheelPicker`] ties gamut table, rasterizer, and pointer handling
//! together. It keeps the expensive state, i.e., the gamut table and the
//! rendered wheel, across calls and recomputes either only when the style or
//! size changes in a way that affects it. Pointer samples never touch the
//! raster.
//!
//!
//! # Example
//!
//! ```
//! # use okwheel::geometry::{Point, Size};
//! # use okwheel::picker::{PointerEvent, WheelPicker};
//! # use okwheel::style::WheelStyle;
//! let style = WheelStyle::default();
//! let size = Size::new(200.0, 200.0);
//! let mut picker = WheelPicker::new();
//!
//! let frame = picker.paint(size, 1.0, &style);
//! assert_eq!(frame.image.width(), 200);
//! assert!(frame.marker.is_none());
//!
//! let repaint = picker.handle_pointer(size, PointerEvent::Pressed(Point::new(199.0, 99.5)), &style);
//! assert!(repaint);
//!
//! let selection = picker.selection().expect("rim is part of the wheel");
//! assert!(selection.hue() < 1e-9);
//! assert_eq!(selection.hex(), selection.color().to_string());
//! ```

use std::time::Instant;

use crate::core::{format_summary, wrap_deg};
use crate::gamut::GamutTable;
use crate::geometry::{Point, Rect, Size, WheelGeometry};
use crate::raster::{render_wheel, PixelBuffer, RenderKey};
use crate::style::WheelStyle;
use crate::{Oklch, Rgb};

/// The radius of the selection marker in local coordinates.
pub const MARKER_RADIUS: f64 = 6.0;

/// The stroke width of the selection marker in local coordinates.
pub const MARKER_STROKE: f64 = 1.0;

/// The ring marking the last picked position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
    pub color: Rgb,
}

impl Marker {
    /// Create a new white marker at the given position.
    pub const fn at(center: Point) -> Self {
        Self {
            center,
            radius: MARKER_RADIUS,
            stroke_width: MARKER_STROKE,
            color: Rgb::new(255, 255, 255),
        }
    }

    /// Get the bounding box of the marker's circle.
    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.center.x - self.radius,
            y: self.center.y - self.radius,
            width: 2.0 * self.radius,
            height: 2.0 * self.radius,
        }
    }
}

/// Everything a drawing surface needs to show the wheel.
///
/// The image is in premultiplied alpha at compute resolution. It should be
/// stretched to fill the bounds, which are in local coordinates, just like the
/// marker. The marker is drawn on top of the image.
#[derive(Debug)]
pub struct Frame<'a> {
    pub image: &'a PixelBuffer,
    pub bounds: Rect,
    pub device_scale: f32,
    pub marker: Option<Marker>,
}

/// A picked color.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    lightness: f64,
    chroma: f64,
    hue: f64,
    color: Rgb,
    hex: String,
    info: String,
}

impl Selection {
    /// Get the Oklch lightness.
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Get the Oklch chroma.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Get the Oklch hue in degrees, including the hue rotation.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Get the color as Oklch.
    pub fn oklch(&self) -> Oklch {
        Oklch::new(self.lightness, self.chroma, self.hue)
    }

    /// Get the 24-bit color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Get the color in `#RRGGBB` notation.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Get a one-line summary of the coordinates, e.g.,
    /// `L=0.700  C=0.210  H=0.0°  RGB=(255,87,153) #FF5799`.
    pub fn info(&self) -> &str {
        &self.info
    }
}

/// A pointer event in local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The primary button was pressed.
    Pressed(Point),
    /// The pointer moved, with or without the primary button held.
    Moved { position: Point, primary: bool },
    /// The primary button was released.
    Released(Point),
}

/// Counts of expensive computations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub table_builds: usize,
    pub raster_builds: usize,
}

// ====================================================================================================================

#[derive(Debug)]
struct RasterCache {
    key: RenderKey,
    buffer: PixelBuffer,
}

/// Compute the raster dimensions for the given local size.
///
/// The local size is first converted to device pixels, rounding up, and then
/// scaled by the quality, rounding to nearest with ties to even. Both steps
/// produce at least one pixel.
fn compute_size(size: Size, device_scale: f32, quality: f64) -> (u32, u32) {
    let scale = f64::from(device_scale);
    let device = |extent: f64| (extent * scale).ceil().max(1.0);
    let compute = |extent: f64| (device(extent) * quality).round_ties_even().max(1.0) as u32;
    (compute(size.width), compute(size.height))
}

/// Get a gamut table for the lightness, reusing the one in the slot if
/// possible.
fn fresh_table<'a>(
    slot: &'a mut Option<GamutTable>,
    lightness: f64,
    stats: &mut RenderStats,
) -> &'a GamutTable {
    let table = match slot.take() {
        Some(table) if table.is_for(lightness) => table,
        _ => {
            let start = Instant::now();
            let table = GamutTable::new(lightness);
            stats.table_builds += 1;
            log::debug!(
                "built gamut table for L={:.4} in {:.1}ms",
                lightness,
                start.elapsed().as_secs_f64() * 1_000.0
            );
            table
        }
    };

    slot.insert(table)
}

/// An interactive Oklch color wheel.
///
/// The picker caches one gamut table and one raster. Its state comprises
/// three independent optional parts: the gamut table, which exists after the
/// first paint; the raster, which exists after the first paint until
/// [`WheelPicker::release`]; and the selection, which exists after the first
/// sample that hits the wheel. Additionally, the picker tracks the last
/// sampled position, which is shown as a [`Marker`] whether it hit the wheel
/// or not.
#[derive(Debug, Default)]
pub struct WheelPicker {
    table: Option<GamutTable>,
    cache: Option<RasterCache>,
    marker: Option<Point>,
    selection: Option<Selection>,
    stats: RenderStats,
}

impl WheelPicker {
    /// Create a new picker without table, raster, or selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint the wheel.
    ///
    /// This method ensures that the gamut table matches the style's lightness
    /// and that the cached raster matches size, device scale, and style. It
    /// recomputes either only when necessary. The returned frame borrows the
    /// cached raster.
    pub fn paint(&mut self, size: Size, device_scale: f32, style: &WheelStyle) -> Frame<'_> {
        let (width, height) = compute_size(size, device_scale, style.quality_scale());
        let lightness = style.lightness();
        let table = fresh_table(&mut self.table, lightness, &mut self.stats);

        let key = RenderKey {
            width,
            height,
            device_scale,
            lightness,
            hue_offset: style.hue_offset(),
            saturation_scale: style.saturation_scale(),
            inner_hole_ratio: style.inner_hole_ratio(),
            channel_order: style.channel_order(),
        };

        let cache = match self.cache.take() {
            Some(cache) if cache.key == key => {
                log::trace!("reusing {}×{} raster", width, height);
                cache
            }
            stale => {
                drop(stale);
                let start = Instant::now();
                let buffer = render_wheel(&key, table);
                self.stats.raster_builds += 1;
                log::debug!(
                    "rendered {}×{} raster in {:.1}ms",
                    width,
                    height,
                    start.elapsed().as_secs_f64() * 1_000.0
                );
                RasterCache { key, buffer }
            }
        };

        let cache = self.cache.insert(cache);
        Frame {
            image: &cache.buffer,
            bounds: Rect::with_size(size),
            device_scale,
            marker: self.marker.map(Marker::at),
        }
    }

    /// Sample the wheel at the given local position.
    ///
    /// This method always moves the marker to the position. If the position
    /// is on the wheel, it also updates the selection and returns it. If the
    /// position is inside the hole, outside the rim, or not finite, or if the
    /// wheel has not been painted yet, it leaves the selection as is and
    /// returns `None`.
    pub fn sample(&mut self, size: Size, point: Point, style: &WheelStyle) -> Option<&Selection> {
        self.marker = Some(point);

        if self.table.is_none() {
            log::trace!("ignoring sample before first paint");
            return None;
        }

        let Some(polar) = WheelGeometry::for_size(size).locate(point.x, point.y) else {
            log::trace!("ignoring sample on degenerate wheel");
            return None;
        };

        let inner = style.inner_hole_ratio();
        if !polar.radius.is_finite() || polar.radius < inner || 1.0 < polar.radius {
            log::trace!(
                "ignoring sample at ({:.1}, {:.1}) with radius {:.3}",
                point.x,
                point.y,
                polar.radius
            );
            return None;
        }

        let lightness = style.lightness();
        let table = fresh_table(&mut self.table, lightness, &mut self.stats);
        let hue = wrap_deg(polar.angle + style.hue_offset());
        let fraction = (polar.radius - inner) / (1.0 - inner);
        let chroma = table.scaled_chroma(hue, fraction, style.saturation_scale());

        let color = Oklch::new(lightness, chroma, hue).to_rgb();
        let hex = color.to_hex_format();
        let info = format_summary(lightness, chroma, hue, color.as_ref(), &hex);

        let selection = self.selection.insert(Selection {
            lightness,
            chroma,
            hue,
            color,
            hex,
            info,
        });
        Some(&*selection)
    }

    /// Handle the pointer event.
    ///
    /// Presses and moves with the primary button held sample the wheel,
    /// whereas other moves and releases are ignored. This method returns
    /// `true` if the host should repaint, since the marker and possibly the
    /// selection changed.
    pub fn handle_pointer(&mut self, size: Size, event: PointerEvent, style: &WheelStyle) -> bool {
        match event {
            PointerEvent::Pressed(position)
            | PointerEvent::Moved {
                position,
                primary: true,
            } => {
                self.sample(size, position, style);
                true
            }
            PointerEvent::Moved { primary: false, .. } | PointerEvent::Released(_) => false,
        }
    }

    /// Get the current selection.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Get the marker for the last sampled position.
    pub fn marker(&self) -> Option<Marker> {
        self.marker.map(Marker::at)
    }

    /// Determine whether a raster is currently cached.
    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Get the counts of gamut table and raster computations so far.
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Release the cached raster.
    ///
    /// The gamut table, selection, and marker are retained. The next paint
    /// renders the raster again.
    pub fn release(&mut self) {
        if let Some(cache) = self.cache.take() {
            log::debug!(
                "released {}×{} raster",
                cache.buffer.width(),
                cache.buffer.height()
            );
        }
    }
}
