use crate::{
    driver::stage::Stage,
    foundation::{
        core::{Point, Rect},
        math::RandomSource,
    },
    motion::clock::{DeltaPolicy, STALL_CLAMP_MS},
    patterns::Stepper,
    render::plan::GradientStop,
};

/// Normalized units per second.
pub const ROAM_SPEED: f64 = 0.34;
/// Seconds between completions.
pub const ROAM_PERIOD_S: f64 = 20.0;

/// Single target walking at constant speed between random destinations.
#[derive(Clone, Debug)]
pub struct Roam {
    region: Rect,
    position: Point,
    target: Point,
    elapsed_s: f64,
}

impl Default for Roam {
    fn default() -> Self {
        Self::new(Rect::new(0.15, 0.1, 0.85, 0.9))
    }
}

impl Roam {
    /// Destinations are drawn uniformly from `region`.
    pub fn new(region: Rect) -> Self {
        Self {
            region,
            position: Point::new(0.5, 0.5),
            target: Point::new(0.5, 0.5),
            elapsed_s: 0.0,
        }
    }

    /// Current normalized position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Destination being walked to.
    pub fn target(&self) -> Point {
        self.target
    }

    /// Seconds into the current period.
    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    fn pick(&self, rng: &mut dyn RandomSource) -> Point {
        Point::new(
            rng.next_in(self.region.x0, self.region.width()),
            rng.next_in(self.region.y0, self.region.height()),
        )
    }

    fn walk(&mut self, dt_s: f64, rng: &mut dyn RandomSource) {
        let to_target = self.target - self.position;
        let distance = to_target.hypot();
        let max_step = ROAM_SPEED * dt_s;

        if distance <= max_step || distance == 0.0 {
            self.position = self.target;
            self.target = self.pick(rng);
            return;
        }
        self.position += to_target * (max_step / distance);
    }
}

impl Stepper for Roam {
    fn reset(&mut self, rng: &mut dyn RandomSource) {
        self.elapsed_s = 0.0;
        self.position = Point::new(0.5, 0.5);
        self.target = self.pick(rng);
    }

    fn advance(&mut self, raw_dt_ms: f64, rng: &mut dyn RandomSource) -> u32 {
        let dt_s = DeltaPolicy::Clamp {
            max_ms: STALL_CLAMP_MS,
        }
        .apply(raw_dt_ms)
            / 1000.0;

        let mut completions = 0;
        self.elapsed_s += dt_s;
        while self.elapsed_s >= ROAM_PERIOD_S {
            self.elapsed_s -= ROAM_PERIOD_S;
            completions += 1;
        }
        self.walk(dt_s, rng);
        completions
    }

    fn draw(&self, stage: &mut Stage<'_>) {
        let vp = stage.viewport();
        let dots = stage.dots();
        stage.gradient_disc(
            vp.to_pixels(self.position),
            vp.w() / 50.0,
            vec![
                GradientStop::new(0.0, dots.primary),
                GradientStop::new(0.3, dots.primary),
                GradientStop::new(0.7, dots.secondary),
                GradientStop::new(1.0, dots.secondary),
            ],
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/roam.rs"]
mod tests;
