//! Points, sizes, and the polar geometry of the wheel.
//!
//! All coordinates are in pixels with the origin at the top-left corner and
//! the y-axis pointing down. Consequently, hues increase clockwise on screen.

use crate::core::wrap_deg;

/// A point in local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The size of a control in local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Get a copy of this size with both dimensions at least one.
    #[must_use = "method returns a new size and does not mutate the original value"]
    pub fn at_least_one(&self) -> Self {
        Self {
            width: self.width.max(1.0),
            height: self.height.max(1.0),
        }
    }
}

/// A rectangle in local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle with the origin as top-left corner.
    pub const fn with_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Get the size of this rectangle.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

// ====================================================================================================================

/// A position on the wheel in polar coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    /// The distance from the center, normalized so that the rim is at 1.
    pub radius: f64,
    /// The angle in degrees `0..360`, measured clockwise from the positive
    /// x-axis. It does not include any hue rotation.
    pub angle: f64,
}

/// The geometry of a wheel inscribed into a `width × height` area.
///
/// The center sits at `((width-1)/2, (height-1)/2)` so that it coincides with
/// the center of the pixel grid, and the radius is the smaller of the two
/// center coordinates. An area of width or height one has radius zero and is
/// degenerate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl WheelGeometry {
    /// Create the geometry for the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        let cx = (width - 1.0) / 2.0;
        let cy = (height - 1.0) / 2.0;
        Self {
            cx,
            cy,
            radius: cx.min(cy),
        }
    }

    /// Create the geometry for the given local size, with both dimensions
    /// floored to one.
    pub fn for_size(size: Size) -> Self {
        let Size { width, height } = size.at_least_one();
        Self::new(width, height)
    }

    /// Determine whether the wheel has no area.
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }

    /// Get the width of the antialiased fringes at the rim and the hole,
    /// which is one pixel in normalized units.
    pub fn feather(&self) -> f64 {
        1.0 / self.radius
    }

    /// Locate the point in polar coordinates.
    ///
    /// This method returns `None` for a degenerate wheel.
    pub fn locate(&self, x: f64, y: f64) -> Option<Polar> {
        if self.is_degenerate() {
            return None;
        }

        let dx = (x - self.cx) / self.radius;
        let dy = (y - self.cy) / self.radius;
        Some(Polar {
            radius: dx.hypot(dy),
            angle: wrap_deg(dy.atan2(dx).to_degrees()),
        })
    }

    /// Get the point for the given polar coordinates.
    pub fn point_at(&self, polar: Polar) -> Point {
        let (sin, cos) = polar.angle.to_radians().sin_cos();
        Point::new(
            (polar.radius * self.radius).mul_add(cos, self.cx),
            (polar.radius * self.radius).mul_add(sin, self.cy),
        )
    }
}
