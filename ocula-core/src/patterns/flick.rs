use crate::{
    driver::stage::Stage,
    foundation::{
        color::Rgba8,
        core::{Point, Viewport},
        math::RandomSource,
    },
    motion::{
        clock::{DeltaPolicy, FLICK_CLAMP_MS},
        path::{PathMapping, PathSpec},
    },
    patterns::Stepper,
};

/// Highlight jumping between fixed waypoints once per chip.
#[derive(Clone, Debug)]
pub struct Flick {
    path: PathSpec,
    chip_ms: f64,
    total: f64,
    reversible: bool,
    t: f64,
    dir: f64,
    pixels: Vec<Point>,
}

impl Flick {
    /// Flick over `path`, holding each waypoint for `chip_ms`.
    pub fn new(path: PathSpec, chip_ms: f64, reversible: bool) -> Self {
        let chip_ms = chip_ms.max(1.0);
        Self {
            total: path.len() as f64 * chip_ms,
            path,
            chip_ms,
            reversible,
            t: 0.0,
            dir: 1.0,
            pixels: Vec::new(),
        }
    }

    /// Milliseconds into the current pass.
    pub fn elapsed(&self) -> f64 {
        self.t
    }

    /// Length of one pass in milliseconds.
    pub fn total(&self) -> f64 {
        self.total
    }

    #[cfg(test)]
    pub(crate) fn set_elapsed(&mut self, t: f64) {
        self.t = t;
    }

    /// Waypoint holding the highlight, `None` for an empty path.
    pub fn active_index(&self) -> Option<usize> {
        let last = self.path.len().checked_sub(1)?;
        let chip = (self.t / self.chip_ms).floor().max(0.0) as usize;
        Some(chip.min(last))
    }
}

impl Stepper for Flick {
    fn reset(&mut self, _rng: &mut dyn RandomSource) {
        self.t = 0.0;
        self.dir = 1.0;
    }

    fn rescale(&mut self, viewport: Viewport) {
        self.pixels = self.path.to_pixels(PathMapping::Stretch, viewport);
    }

    fn advance(&mut self, raw_dt_ms: f64, _rng: &mut dyn RandomSource) -> u32 {
        let dt = DeltaPolicy::Clamp {
            max_ms: FLICK_CLAMP_MS,
        }
        .apply(raw_dt_ms);
        self.t += dt * self.dir;

        let mut completions = 0;
        if self.t >= self.total {
            if self.reversible {
                self.t = self.total;
                self.dir = -1.0;
            } else {
                self.t = 0.0;
                completions += 1;
            }
        }
        if self.t <= 0.0 && self.dir < 0.0 {
            self.t = 0.0;
            self.dir = 1.0;
            completions += 1;
        }
        completions
    }

    fn draw(&self, stage: &mut Stage<'_>) {
        let radius = stage.viewport().w() / 35.0;
        let outline = if stage.settings().dark_mode {
            Rgba8::rgb_alpha(0, 0, 0, 0.25)
        } else {
            Rgba8::rgb_alpha(0, 0, 0, 0.45)
        };

        stage.grid_polyline(&self.pixels);
        for &p in &self.pixels {
            stage.disc(p, radius, Rgba8::WHITE, outline);
        }
        if let Some(p) = self.active_index().and_then(|i| self.pixels.get(i)) {
            stage.target(*p, radius);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/flick.rs"]
mod tests;
