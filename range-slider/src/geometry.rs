//! View-local geometry for the slider.
//!
//! All coordinates are floating point pixels relative to the slider's own
//! bounds:
//! - Origin (0, 0) at the top-left corner
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! Pointer positions are plain [`glam::Vec2`] values; [`Rect`] adds the
//! handful of rectangle operations the layout and hit testing need.

use glam::Vec2;

/// An axis-aligned rectangle described by its origin and size.
///
/// A rectangle whose width or height is not positive contains no points.
///
/// # Examples
///
/// ```
/// use range_slider::glam::Vec2;
/// use range_slider::geometry::Rect;
///
/// let frame = Rect::new(30.0, 0.0, 20.0, 20.0);
/// assert!(frame.contains(Vec2::new(40.0, 10.0)));
/// assert!(!frame.contains(Vec2::new(50.0, 10.0)));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Vec2,
    /// Width (x) and height (y).
    pub size: Vec2,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    /// Creates a rectangle from its origin and extent.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Left edge.
    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.x
    }

    /// Top edge.
    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Half-open containment test: the left and top edges are inside, the
    /// right and bottom edges are not.
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.origin + self.size;
        point.x >= self.origin.x && point.x < max.x && point.y >= self.origin.y && point.y < max.y
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the
    /// top and bottom.
    ///
    /// An inset larger than half an extent collapses that extent to zero
    /// around the center instead of producing a negative size.
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        let center = self.center();
        let width = (self.size.x - dx * 2.0).max(0.0);
        let height = (self.size.y - dy * 2.0).max(0.0);
        Self {
            origin: Vec2::new(center.x - width * 0.5, center.y - height * 0.5),
            size: Vec2::new(width, height),
        }
    }

    /// Square of side `side` whose center is `center`.
    pub fn centered_square(center: Vec2, side: f32) -> Self {
        let half = side * 0.5;
        Self::new(center.x - half, center.y - half, side, side)
    }
}
