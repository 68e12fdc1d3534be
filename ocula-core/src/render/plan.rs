use crate::{
    foundation::{
        color::Rgba8,
        core::{Point, Rect, Viewport},
    },
    session::settings::ThemeMode,
};

/// One color stop of a vertical gradient, `offset` in `[0, 1]` from top to bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient.
    pub offset: f64,
    /// Color at `offset`.
    pub color: Rgba8,
}

impl GradientStop {
    /// Stop at `offset` with `color`.
    pub fn new(offset: f64, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// Stroke around a disc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in pixels, centered on the edge.
    pub width: f64,
}

/// Backend-agnostic draw operation, in pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the whole surface with the theme base color. Backends may cache
    /// the result per (size, theme).
    Background {
        /// Theme the color belongs to.
        mode: ThemeMode,
        /// Fill color.
        color: Rgba8,
    },
    /// Straight line segment of the given width.
    Segment {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Rgba8,
    },
    /// Flat disc.
    Disc {
        /// Center in pixels.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill color; transparent fills are skipped.
        fill: Rgba8,
        /// Optional ring around the edge.
        outline: Option<Outline>,
    },
    /// Disc filled with a vertical gradient spanning its diameter.
    ShadedDisc {
        /// Center in pixels.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Gradient stops from top to bottom.
        stops: Vec<GradientStop>,
        /// Optional ring around the edge.
        outline: Option<Outline>,
    },
    /// Named image stretched into `rect`. Unknown or unready images draw nothing.
    Image {
        /// Name in the image store.
        key: String,
        /// Destination rectangle in pixels.
        rect: Rect,
    },
}

/// Everything drawn for one frame, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayList {
    /// Surface the ops are drawn on.
    pub viewport: Viewport,
    /// Ops in paint order.
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    /// Empty list for `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ops: Vec::new(),
        }
    }

    /// Append an op.
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// `true` without ops.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Centers of every shaded disc, in draw order.
    pub fn shaded_centers(&self) -> impl Iterator<Item = Point> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::ShadedDisc { center, .. } => Some(*center),
            _ => None,
        })
    }

    /// Number of segment ops.
    pub fn segment_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Segment { .. }))
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
