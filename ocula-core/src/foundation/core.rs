pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Pixel size of the drawing surface the host presents.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Build a viewport from a pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` when either side is zero; such frames are never drawn.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width as `f64`.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Width / height, or `None` for an empty viewport.
    pub fn aspect(self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.w() / self.h())
        }
    }

    /// Map a normalized point onto the surface with independent x/y scaling.
    pub fn to_pixels(self, p: Point) -> Point {
        Point::new(p.x * self.w(), p.y * self.h())
    }

    /// Center of the surface in pixels.
    pub fn center(self) -> Point {
        Point::new(self.w() / 2.0, self.h() / 2.0)
    }

    /// Whole-surface rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.w(), self.h())
    }
}

/// Axis a motion law travels along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Motion along x.
    Horizontal,
    /// Motion along y.
    Vertical,
}

impl Axis {
    /// Component of `p` along this axis.
    pub fn along(self, p: Point) -> f64 {
        match self {
            Self::Horizontal => p.x,
            Self::Vertical => p.y,
        }
    }

    /// Replace the component of `p` along this axis.
    pub fn with_along(self, p: Point, v: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(v, p.y),
            Self::Vertical => Point::new(p.x, v),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
