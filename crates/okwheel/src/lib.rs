//! # Ok 🎨 Wheel
//!
//! Okwheel renders a color wheel whose angle and radius map to hue and chroma
//! in the perceptually uniform Oklch color space, at one lightness for the
//! whole wheel. Each hue extends exactly to the edge of the sRGB gamut, so
//! that the rim shows the most colorful displayable color for every hue and
//! no pixel is ever clipped.
//!
//!
//! ## 1. Overview
//!
//! Okwheel's main abstractions are:
//!
//!   * [`Oklab`], [`Oklch`], and [`Rgb`] implement the **color math**, i.e.,
//!     conversion from Oklch to Oklab, linear sRGB, and 24-bit sRGB, as well
//!     as the [`in_gamut`] test.
//!   * [`GamutTable`](gamut::GamutTable) captures the **gamut boundary** for
//!     one lightness as the maximum in-gamut chroma for each integer hue.
//!   * [`render_wheel`](raster::render_wheel) **rasterizes** the annular wheel
//!     into a [`PixelBuffer`](raster::PixelBuffer) with premultiplied alpha
//!     and antialiased edges.
//!   * [`WheelPicker`] **caches** gamut table and raster across paints and
//!     maps **pointer events** to a [`Selection`](picker::Selection).
//!   * [`WheelStyle`] holds the wheel's **configuration**, including
//!     lightness, hue rotation, saturation, size of the hole, and render
//!     quality.
//!
//!
//! ## 2. Paint, Point, Pick
//!
//! A host, i.e., some windowing toolkit's custom control, creates one
//! [`WheelPicker`] per wheel. Whenever the control needs to be drawn, it
//! calls [`WheelPicker::paint`] with the control's size, the device scale,
//! and the current style and then draws the frame's image stretched to the
//! frame's bounds, followed by the optional marker.
//!
//! ```
//! # use okwheel::{WheelPicker, WheelStyle};
//! # use okwheel::geometry::Size;
//! let style = WheelStyle::builder()
//!     .base_lightness(0.8)
//!     .inner_hole_ratio(0.5)
//!     .build();
//!
//! let mut picker = WheelPicker::new();
//! let frame = picker.paint(Size::new(120.0, 80.0), 2.0, &style);
//! assert_eq!(frame.image.width(), 240);
//! assert_eq!(frame.image.height(), 160);
//! ```
//!
//! Whenever the pointer is pressed or dragged, the control forwards the event
//! to [`WheelPicker::handle_pointer`], which updates the selection if the
//! pointer is on the wheel.
//!
//! ```
//! # use okwheel::{WheelPicker, WheelStyle};
//! # use okwheel::geometry::{Point, Size};
//! # use okwheel::picker::PointerEvent;
//! # let style = WheelStyle::default();
//! # let size = Size::new(200.0, 200.0);
//! # let mut picker = WheelPicker::new();
//! # picker.paint(size, 1.0, &style);
//! let pressed = PointerEvent::Pressed(Point::new(99.5, 30.0));
//! if picker.handle_pointer(size, pressed, &style) {
//!     // Repaint to move the marker.
//!     picker.paint(size, 1.0, &style);
//! }
//!
//! let selection = picker.selection().expect("point is on the wheel");
//! assert!((selection.hue() - 270.0).abs() < 1e-9);
//! assert!(selection.oklch().in_gamut());
//! ```
//!
//! Repeated paints with the same size and style reuse the cached raster.
//! Changing the lightness recomputes gamut table and raster. Changing any
//! other style property or the size recomputes just the raster. Pointer
//! events never recompute anything but the selection.
//!
//!
//! ## 3. Diagnostics
//!
//! Okwheel logs through the [log](https://crates.io/crates/log) facade:
//! Table and raster computations are logged at debug level, including their
//! durations, and cache hits as well as ignored pointer samples at trace
//! level. It is up to the application to install a logger.

mod core;
pub mod error;
pub mod gamut;
pub mod geometry;
mod object;
pub mod picker;
pub mod raster;
pub mod style;

pub use core::{
    clamp01, close_enough, in_gamut, linear_to_srgb, srgb_to_linear, wrap_deg, EPSILON,
};
pub use object::{Oklab, Oklch, Rgb};
pub use picker::WheelPicker;
pub use style::WheelStyle;
