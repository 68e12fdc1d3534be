use std::{f64::consts::TAU, sync::Arc};

use crate::{
    driver::stage::Stage,
    foundation::{
        color::Rgba8,
        core::{Point, Viewport},
        math::{RandomSource, linspace},
    },
    motion::ease::Ease,
    patterns::{Stepper, travel::Travel},
};

/// Intervals in the cached trace of the drawn curve.
pub const TRACE_SAMPLES: usize = 2000;

/// Unit-scale curve point for a phase angle in radians.
pub type CurveFn = fn(f64) -> Point;

/// Target following a closed parametric curve, one revolution per pass.
#[derive(Clone, Debug)]
pub struct Parametric {
    motion: CurveFn,
    trace: Arc<[Point]>,
    travel: Travel,
    reference_ring: bool,
}

impl Parametric {
    /// `motion` positions the target; `trace` is sampled once and drawn as
    /// the reference curve.
    pub fn new(motion: CurveFn, trace: CurveFn, speed: f64, oscillating: bool) -> Self {
        let trace: Vec<Point> = linspace(0.0, TAU, TRACE_SAMPLES).map(trace).collect();
        Self {
            motion,
            trace: trace.into(),
            travel: Travel::new(speed, oscillating),
            reference_ring: false,
        }
    }

    /// Also draw a fixed outlined ring near the top of the surface.
    pub fn with_reference_ring(mut self) -> Self {
        self.reference_ring = true;
        self
    }

    /// Timing state.
    pub fn travel(&self) -> &Travel {
        &self.travel
    }

    #[cfg(test)]
    pub(crate) fn travel_mut(&mut self) -> &mut Travel {
        &mut self.travel
    }

    /// Cached samples of the drawn curve.
    pub fn trace(&self) -> &[Point] {
        &self.trace
    }

    /// Target center in pixels.
    pub fn position(&self, viewport: Viewport) -> Point {
        let angle = TAU * (self.travel.t() / self.travel.total());
        place((self.motion)(angle), viewport)
    }
}

/// Curve space is scaled by a quarter of the width on both axes, around the
/// surface center.
fn place(p: Point, viewport: Viewport) -> Point {
    let scale = viewport.w() / 4.0;
    Point::new(
        scale * p.x + viewport.w() / 2.0,
        scale * p.y + viewport.h() / 2.0,
    )
}

impl Stepper for Parametric {
    fn reset(&mut self, _rng: &mut dyn RandomSource) {
        self.travel.reset();
    }

    fn advance(&mut self, raw_dt_ms: f64, _rng: &mut dyn RandomSource) -> u32 {
        let total = self.travel.total();
        let ratio = (total - self.travel.t()) / total;
        self.travel.step(raw_dt_ms, Ease::Waypoint.apply(ratio))
    }

    fn draw(&self, stage: &mut Stage<'_>) {
        let vp = stage.viewport();
        for w in self.trace.windows(2) {
            stage.grid_line(place(w[0], vp), place(w[1], vp));
        }

        if self.reference_ring {
            let outline = if stage.settings().dark_mode {
                Rgba8::WHITE
            } else {
                Rgba8::BLACK
            };
            stage.disc(
                Point::new(vp.w() / 2.0, vp.h() / 5.0),
                vp.w() / 36.0,
                Rgba8::TRANSPARENT,
                outline,
            );
        }

        let dots = stage.dots();
        stage.shaded_disc(
            self.position(vp),
            vp.w() / 60.0,
            dots.primary,
            dots.secondary,
            Rgba8::TRANSPARENT,
        );
    }
}

/// Figure-eight (lemniscate of Bernoulli).
pub fn lemniscate(a: f64) -> Point {
    let d = 1.0 + a.sin().powi(2);
    Point::new(a.cos() / d, a.sin() * a.cos() / d)
}

/// Half-unit circle.
pub fn circle(a: f64) -> Point {
    Point::new(0.5 * a.cos(), 0.5 * a.sin())
}

/// Half-unit circle covering 8/9 of a turn per pass, starting just left of
/// the top.
pub fn partial_circle(a: f64) -> Point {
    let phase = a * 8.0 / 9.0 - 3.5 * std::f64::consts::PI / 9.0;
    Point::new(0.5 * phase.cos(), 0.5 * phase.sin())
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/parametric.rs"]
mod tests;
