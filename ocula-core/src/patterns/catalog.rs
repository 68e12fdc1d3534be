//! The fixed pattern roster.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    foundation::{
        core::{Axis, Point},
        math::spread,
    },
    motion::path::{PathMapping, PathSpec},
    patterns::{
        Worker,
        anchored::{AnchorSpace, Anchored, Highlight, ThemedImages},
        expansion::Expansion,
        flick::Flick,
        parametric::{Parametric, circle, lemniscate, partial_circle},
        polyline::Polyline,
        random_flick::RandomFlick,
        roam::Roam,
        sweep::Sweep,
    },
};

/// Canonical names, in roster order.
pub const PATTERN_NAMES: [&str; 14] = [
    "Vertical Waves",
    "Stellar Trail",
    "Infinity Trail",
    "Circular Trail",
    "Horizontal Wave",
    "Flick Pulse",
    "Horizontal Balls",
    "Vertical Balls",
    "Horizontal Fast",
    "Vertical Fast",
    "Free Ball",
    "Peripheral 1",
    "Random Flick",
    "Peripheral 2",
];

/// Repeats per pattern in comprehensive playback.
pub const DEFAULT_COMPREHENSIVE_LOOPS: [u32; 14] = [1, 6, 8, 3, 1, 1, 1, 1, 1, 1, 1, 5, 1, 4];

/// A named worker.
#[derive(Debug)]
pub struct Pattern {
    /// Canonical pattern name.
    pub name: &'static str,
    /// Worker running the pattern.
    pub worker: Worker,
}

/// Build every pattern, in roster order.
pub fn roster(images: &ThemedImages) -> Vec<Pattern> {
    let workers = [
        Worker::new(Polyline::new(
            vertical_waves_path(),
            PathMapping::Stretch,
            2125.0,
            true,
        )),
        Worker::new(Polyline::new(
            stellar_path(),
            PathMapping::SQUARE_82,
            5700.0,
            false,
        )),
        Worker::new(Parametric::new(lemniscate, lemniscate, 11_000.0, false)),
        Worker::new(Parametric::new(partial_circle, circle, 15_000.0, true).with_reference_ring()),
        Worker::new(Polyline::new(
            horizontal_wave_path(),
            PathMapping::Stretch,
            2600.0,
            true,
        )),
        Worker::new(Flick::new(flick_pulse_path(), 750.0, true)),
        Worker::new(Sweep::new(
            horizontal_sweep_layout(),
            Axis::Horizontal,
            0.15,
            0.85,
            1000.0,
        )),
        Worker::new(Sweep::new(
            vertical_sweep_layout(),
            Axis::Vertical,
            0.08,
            0.92,
            1200.0,
        )),
        Worker::new(Sweep::new(
            horizontal_sweep_layout(),
            Axis::Horizontal,
            0.15,
            0.85,
            2100.0,
        )),
        Worker::new(Sweep::new(
            vertical_sweep_layout(),
            Axis::Vertical,
            0.08,
            0.92,
            2700.0,
        )),
        Worker::new(Roam::default()),
        Worker::new(Expansion::new(0.7, 140.0, Axis::Horizontal)),
        Worker::new(RandomFlick::default()),
        Worker::new(
            Anchored::new(
                &RING_ANCHORS,
                AnchorSpace::Local,
                images.clone(),
                Highlight::OnlyActive,
                850.0,
                0.9,
            )
            .with_dot_divisor(60.0)
            .with_fixed_divisor(70.0),
        ),
    ];

    PATTERN_NAMES
        .into_iter()
        .zip(workers)
        .map(|(name, worker)| Pattern { name, worker })
        .collect()
}

/// Seven columns, each visited top then bottom.
pub fn vertical_waves_path() -> PathSpec {
    let cols = 7;
    let points: Vec<Point> = (0..cols)
        .flat_map(|i| {
            let x = spread(0.16, 0.84, i, cols);
            [Point::new(x, 0.1), Point::new(x, 0.9)]
        })
        .collect();
    PathSpec::new(points)
}

/// Six rows, each visited left then right.
pub fn horizontal_wave_path() -> PathSpec {
    let rows = 6;
    let points: Vec<Point> = (0..rows)
        .flat_map(|i| {
            let y = spread(0.12, 0.88, i, rows);
            [Point::new(0.18, y), Point::new(0.82, y)]
        })
        .collect();
    PathSpec::new(points)
}

/// Five-pointed star drawn in one stroke.
pub fn stellar_path() -> PathSpec {
    let outer: Vec<Point> = (0..5)
        .map(|i| {
            let angle = -FRAC_PI_2 + TAU * i as f64 / 5.0;
            Point::new(0.5 + 0.45 * angle.cos(), 0.5 + 0.45 * angle.sin())
        })
        .collect();
    PathSpec::new([1, 3, 0, 2, 4, 1].map(|i| outer[i]).to_vec())
}

/// Eleven waypoints pulsing out from and back to the center.
pub fn flick_pulse_path() -> PathSpec {
    PathSpec::new(vec![
        Point::new(0.2, 0.1),
        Point::new(0.4, 0.1),
        Point::new(0.19, 0.3),
        Point::new(0.19, 0.9),
        Point::new(0.38, 0.45),
        Point::new(0.35, 0.9),
        Point::new(0.8, 0.9),
        Point::new(0.75, 0.1),
        Point::new(0.65, 0.6),
        Point::new(0.5, 0.7),
        Point::new(0.57, 0.1),
    ])
}

/// Seven targets alternating between the right and left sides.
pub fn horizontal_sweep_layout() -> Vec<Point> {
    (0..7)
        .map(|i| {
            let x = if i % 2 == 0 { 0.85 } else { 0.15 };
            Point::new(x, 0.1 + 0.125 * i as f64)
        })
        .collect()
}

/// Sixteen targets, staggered between the top and bottom sides.
pub fn vertical_sweep_layout() -> Vec<Point> {
    (1..9)
        .flat_map(|i| {
            let i = i as f64;
            [
                Point::new(i / 9.0, 0.08),
                Point::new((1.0 + 2.0 * i) / 18.0, 0.92),
            ]
        })
        .collect()
}

/// Twelve anchors around the rim of the peripheral image, clockwise from
/// the top. Some sit slightly outside the image square.
pub const RING_ANCHORS: [Point; 12] = [
    Point::new(0.5, -0.08),
    Point::new(0.79, -0.002),
    Point::new(1.002, 0.21),
    Point::new(1.08, 0.5),
    Point::new(1.002, 0.79),
    Point::new(0.79, 1.002),
    Point::new(0.5, 1.08),
    Point::new(0.21, 1.002),
    Point::new(-0.002, 0.79),
    Point::new(-0.08, 0.5),
    Point::new(-0.002, 0.21),
    Point::new(0.21, -0.002),
];

#[cfg(test)]
#[path = "../../tests/unit/patterns/catalog.rs"]
mod tests;
