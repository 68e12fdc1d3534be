use std::sync::Arc;

use crate::foundation::core::{Point, Viewport};

/// Aspect ratio assumed for time allocation before the first resize.
pub const DEFAULT_ASPECT: f64 = 2.5;

/// How normalized waypoints land on the pixel surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMapping {
    /// x scales with width and y with height.
    Stretch,
    /// A centered square whose side is `fill` times the shorter canvas side.
    /// Angles survive any aspect ratio.
    CenteredSquare {
        /// Square side over the shorter canvas side.
        fill: f64,
    },
}

impl PathMapping {
    /// Square mapping sized to 82% of the shorter side.
    pub const SQUARE_82: Self = Self::CenteredSquare { fill: 0.82 };

    /// Pixel position of normalized point `p`.
    pub fn map(self, p: Point, vp: Viewport) -> Point {
        match self {
            Self::Stretch => vp.to_pixels(p),
            Self::CenteredSquare { fill } => {
                let size = vp.w().min(vp.h()) * fill;
                let ox = (vp.w() - size) / 2.0;
                let oy = (vp.h() - size) / 2.0;
                Point::new(ox + p.x * size, oy + p.y * size)
            }
        }
    }

    /// Weight applied to x deltas when measuring segment lengths.
    pub fn x_weight(self, aspect: f64) -> f64 {
        match self {
            Self::Stretch => aspect,
            Self::CenteredSquare { .. } => 1.0,
        }
    }
}

/// Immutable ordered list of normalized waypoints.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSpec {
    points: Arc<[Point]>,
}

impl PathSpec {
    /// Path through `points`, in order.
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        let points: Vec<Point> = points.into();
        Self {
            points: points.into(),
        }
    }

    /// Waypoints in normalized units.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` for a path without waypoints.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pixel-space copy of the path for the given surface.
    pub fn to_pixels(&self, mapping: PathMapping, vp: Viewport) -> Vec<Point> {
        self.points.iter().map(|&p| mapping.map(p, vp)).collect()
    }
}

/// Cumulative time at each waypoint, allocated proportionally to segment
/// length.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentTimeline {
    times: Vec<f64>,
    total: f64,
}

impl SegmentTimeline {
    /// Allocate `total` across the segments of `points`. x deltas are scaled by
    /// `x_weight` before measuring. A path with no length spreads time evenly.
    pub fn build(points: &[Point], total: f64, x_weight: f64) -> Self {
        let lengths: Vec<f64> = points
            .windows(2)
            .map(|w| {
                let dx = (w[1].x - w[0].x) * x_weight;
                let dy = w[1].y - w[0].y;
                dx.hypot(dy)
            })
            .collect();
        let sum: f64 = lengths.iter().sum();

        let mut times = Vec::with_capacity(points.len().max(1));
        times.push(0.0);
        if lengths.is_empty() {
            return Self { times, total };
        }

        let even = total / lengths.len() as f64;
        let mut acc = 0.0;
        for len in &lengths {
            let share = if sum > 0.0 { len / sum * total } else { even };
            acc += share;
            times.push(acc);
        }
        // Pin the last entry against accumulated rounding.
        if let Some(last) = times.last_mut() {
            *last = total;
        }
        Self { times, total }
    }

    /// Cumulative time at each waypoint; starts at 0.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Time at the last waypoint.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Index `i >= 1` of the waypoint that ends the segment containing `t`.
    /// Returns `None` for paths with fewer than two waypoints.
    pub fn segment_end(&self, t: f64) -> Option<usize> {
        if self.times.len() < 2 {
            return None;
        }
        let last = self.times.len() - 1;
        Some((1..=last).find(|&i| t <= self.times[i]).unwrap_or(last))
    }

    /// Segment end index and progress ratio within that segment.
    pub fn locate(&self, t: f64) -> Option<(usize, f64)> {
        let i = self.segment_end(t)?;
        let start = self.times[i - 1];
        let mut span = self.times[i] - start;
        if span == 0.0 {
            span = 1.0;
        }
        Some((i, (t - start) / span))
    }

    /// Interpolated position on `points` (same length as the timeline) at `t`.
    pub fn position(&self, points: &[Point], t: f64) -> Option<Point> {
        let (i, ratio) = self.locate(t)?;
        let a = *points.get(i - 1)?;
        let b = *points.get(i)?;
        Some(if ratio <= 0.0 {
            a
        } else if ratio >= 1.0 {
            b
        } else {
            a.lerp(b, ratio)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/path.rs"]
mod tests;
