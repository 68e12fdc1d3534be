use crate::{
    driver::stage::Stage,
    foundation::{
        core::{Axis, Point},
        math::RandomSource,
    },
    motion::{
        clock::{DeltaPolicy, STALL_CLAMP_MS},
        ease::Ease,
    },
    patterns::Stepper,
};

/// Largest normalized displacement in one frame.
pub const MAX_STEP: f64 = 0.08;

/// Targets pinned to two opposite sides; one at a time crosses over.
///
/// The moving target advances through the list and back (ping-pong). One
/// completion is reported per full forward-then-backward traversal.
#[derive(Clone, Debug)]
pub struct Sweep {
    layout: Vec<Point>,
    positions: Vec<Point>,
    axis: Axis,
    low: f64,
    high: f64,
    speed: f64,
    current: usize,
    dir: f64,
    forward: bool,
}

impl Sweep {
    /// `low` and `high` are the two sides along `axis`, in normalized units.
    pub fn new(layout: Vec<Point>, axis: Axis, low: f64, high: f64, speed: f64) -> Self {
        let mut sweep = Self {
            positions: layout.clone(),
            layout,
            axis,
            low,
            high,
            speed,
            current: 0,
            dir: 1.0,
            forward: true,
        };
        sweep.aim();
        sweep
    }

    /// Index of the moving target.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Normalized target positions.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Point the current target at the side it is not on.
    fn aim(&mut self) {
        self.dir = match self.positions.get(self.current) {
            Some(&p) if self.axis.along(p) > 0.5 => -1.0,
            _ => 1.0,
        };
    }

    fn speed_factor(&self, pos: f64) -> f64 {
        // A collapsed band measures progress against a unit span.
        let span = self.high - self.low;
        let span = if span == 0.0 { 1.0 } else { span };
        Ease::Sweep.apply((pos - self.low) / span)
    }

    fn arrived(&self) -> bool {
        self.positions.get(self.current).is_some_and(|&p| {
            let v = self.axis.along(p);
            v >= self.high || v <= self.low
        })
    }

    /// Snap the current target to its destination and hand over to the next.
    fn hand_over(&mut self) -> u32 {
        let side = if self.dir > 0.0 { self.high } else { self.low };
        let Some(p) = self.positions.get_mut(self.current) else {
            return 0;
        };
        *p = self.axis.with_along(*p, side);

        let last = self.positions.len() - 1;
        let mut completions = 0;
        if self.forward && self.current >= last {
            self.forward = false;
            self.current = last;
        } else if !self.forward && self.current == 0 {
            self.forward = true;
            completions = 1;
        } else if self.forward {
            self.current += 1;
        } else {
            self.current -= 1;
        }
        self.aim();
        completions
    }
}

impl Stepper for Sweep {
    fn reset(&mut self, _rng: &mut dyn RandomSource) {
        self.positions.clone_from(&self.layout);
        self.current = 0;
        self.forward = true;
        self.aim();
    }

    fn advance(&mut self, raw_dt_ms: f64, _rng: &mut dyn RandomSource) -> u32 {
        let dt = DeltaPolicy::Clamp {
            max_ms: STALL_CLAMP_MS,
        }
        .apply(raw_dt_ms);
        if dt == 0.0 {
            return 0;
        }
        let Some(&p) = self.positions.get(self.current) else {
            return 0;
        };

        let pos = self.axis.along(p);
        let raw = dt * self.speed_factor(pos) * self.speed * self.dir / 1_000_000.0;
        let step = raw.clamp(-MAX_STEP, MAX_STEP);
        self.positions[self.current] = self.axis.with_along(p, pos + step);

        if self.arrived() {
            self.hand_over()
        } else {
            0
        }
    }

    fn draw(&self, stage: &mut Stage<'_>) {
        let vp = stage.viewport();
        let radius = vp.w() / 45.0;
        for &p in &self.positions {
            stage.target(vp.to_pixels(p), radius);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/sweep.rs"]
mod tests;
