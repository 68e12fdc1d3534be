use crate::{
    driver::stage::Stage,
    foundation::{
        core::{Axis, Point},
        math::RandomSource,
    },
    motion::clock::{DeltaPolicy, STALL_CLAMP_MS},
    patterns::Stepper,
};

/// Travel between the inner and outer extremes, in normalized units.
pub const EXPANSION_DISTANCE: f64 = 0.2;

/// Two mirrored dots moving out from near the center and back.
#[derive(Clone, Debug)]
pub struct Expansion {
    outer: f64,
    speed: f64,
    axis: Axis,
    current: f64,
    expanding: bool,
}

impl Expansion {
    /// Dots reach `outer` (fraction of the axis) and move at `speed`.
    pub fn new(outer: f64, speed: f64, axis: Axis) -> Self {
        let mut e = Self {
            outer,
            speed,
            axis,
            current: 0.0,
            expanding: true,
        };
        e.current = e.inner();
        e
    }

    /// Closest the dots get to the center: never nearer than one dot radius.
    pub fn inner(&self) -> f64 {
        (self.outer - EXPANSION_DISTANCE).max(0.5 + 1.0 / 36.0)
    }

    /// Farthest the dots get from the center.
    pub fn outer(&self) -> f64 {
        self.outer
    }

    /// Current distance along the axis.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Pixel centers of both dots.
    pub fn dots(&self, w: f64, h: f64) -> [Point; 2] {
        let p = self.current;
        match self.axis {
            Axis::Horizontal => [
                Point::new((1.0 - p) * w, h / 2.0),
                Point::new(p * w, h / 2.0),
            ],
            Axis::Vertical => [
                Point::new(w / 2.0, (1.0 - p) * h),
                Point::new(w / 2.0, p * h),
            ],
        }
    }
}

impl Stepper for Expansion {
    fn reset(&mut self, _rng: &mut dyn RandomSource) {
        self.current = self.inner();
        self.expanding = true;
    }

    fn advance(&mut self, raw_dt_ms: f64, _rng: &mut dyn RandomSource) -> u32 {
        let dt = DeltaPolicy::Clamp {
            max_ms: STALL_CLAMP_MS,
        }
        .apply(raw_dt_ms);
        let dx = dt * self.speed / 2_000_000.0;

        if self.expanding {
            self.current += dx;
            if self.current >= self.outer {
                self.current = self.outer;
                self.expanding = false;
            }
            return 0;
        }

        self.current -= dx;
        let inner = self.inner();
        if self.current <= inner {
            self.current = inner;
            self.expanding = true;
            return 1;
        }
        0
    }

    fn draw(&self, stage: &mut Stage<'_>) {
        let vp = stage.viewport();
        let radius = vp.w() / 36.0;
        for p in self.dots(vp.w(), vp.h()) {
            stage.target(p, radius);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/expansion.rs"]
mod tests;
