use crate::{
    driver::stage::Stage,
    foundation::{
        core::{Point, Rect},
        math::RandomSource,
    },
    motion::clock::{DeltaPolicy, STALL_DISCARD_MS},
    patterns::Stepper,
};

/// Interval between jumps (ms).
pub const FLICK_TICK_MS: f64 = 1000.0;
/// Interval between completions (ms).
pub const FLICK_PERIOD_MS: f64 = 15_000.0;

/// Target that jumps to a random spot on a fixed tick.
#[derive(Clone, Debug)]
pub struct RandomFlick {
    region: Rect,
    position: Point,
    t: f64,
    next_tick: f64,
}

impl Default for RandomFlick {
    fn default() -> Self {
        Self::new(Rect::new(0.2, 0.1, 0.8, 0.9))
    }
}

impl RandomFlick {
    /// Jumps land uniformly inside `region`.
    pub fn new(region: Rect) -> Self {
        Self {
            region,
            position: Point::new(0.5, 0.5),
            t: 0.0,
            next_tick: FLICK_TICK_MS,
        }
    }

    /// Current normalized position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Milliseconds into the current period.
    pub fn elapsed(&self) -> f64 {
        self.t
    }
}

impl Stepper for RandomFlick {
    fn reset(&mut self, _rng: &mut dyn RandomSource) {
        self.t = 0.0;
        self.next_tick = FLICK_TICK_MS;
    }

    fn advance(&mut self, raw_dt_ms: f64, rng: &mut dyn RandomSource) -> u32 {
        // Jumps are decided on the time reached by the previous frame.
        if self.t >= self.next_tick {
            self.position = Point::new(
                rng.next_in(self.region.x0, self.region.width()),
                rng.next_in(self.region.y0, self.region.height()),
            );
            self.next_tick += FLICK_TICK_MS;
        }

        let dt = DeltaPolicy::Discard {
            threshold_ms: STALL_DISCARD_MS,
        }
        .apply(raw_dt_ms);
        self.t += dt;

        let mut completions = 0;
        while self.t >= FLICK_PERIOD_MS {
            self.t -= FLICK_PERIOD_MS;
            self.next_tick -= FLICK_PERIOD_MS;
            completions += 1;
        }
        completions
    }

    fn draw(&self, stage: &mut Stage<'_>) {
        let vp = stage.viewport();
        stage.target(vp.to_pixels(self.position), vp.w() / 50.0);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/random_flick.rs"]
mod tests;
