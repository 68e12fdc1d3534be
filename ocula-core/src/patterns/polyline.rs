use crate::{
    driver::stage::Stage,
    foundation::{
        core::{Point, Viewport},
        math::RandomSource,
    },
    motion::{
        ease::Ease,
        path::{DEFAULT_ASPECT, PathMapping, PathSpec, SegmentTimeline},
    },
    patterns::{Stepper, travel::Travel},
};

/// Target eased along a chain of straight segments.
#[derive(Clone, Debug)]
pub struct Polyline {
    path: PathSpec,
    mapping: PathMapping,
    timeline: SegmentTimeline,
    travel: Travel,
    pixels: Vec<Point>,
    radius: f64,
}

impl Polyline {
    /// Target traveling `path` at `speed`. A reversible path returns to its start before
    /// completing.
    pub fn new(path: PathSpec, mapping: PathMapping, speed: f64, reversible: bool) -> Self {
        let travel = Travel::new(speed, reversible);
        let timeline = SegmentTimeline::build(
            path.points(),
            travel.total(),
            mapping.x_weight(DEFAULT_ASPECT),
        );
        Self {
            path,
            mapping,
            timeline,
            travel,
            pixels: Vec::new(),
            radius: 0.0,
        }
    }

    /// Segment time table for the current aspect.
    pub fn timeline(&self) -> &SegmentTimeline {
        &self.timeline
    }

    /// Timing state.
    pub fn travel(&self) -> &Travel {
        &self.travel
    }

    #[cfg(test)]
    pub(crate) fn travel_mut(&mut self) -> &mut Travel {
        &mut self.travel
    }

    /// Current target center in pixels, once the surface size is known.
    pub fn position(&self) -> Option<Point> {
        self.timeline.position(&self.pixels, self.travel.t())
    }

    fn multiplier(&self) -> f64 {
        self.timeline
            .locate(self.travel.t())
            .map(|(_, ratio)| Ease::Waypoint.apply(ratio))
            .unwrap_or(0.0)
    }
}

impl Stepper for Polyline {
    fn reset(&mut self, _rng: &mut dyn RandomSource) {
        self.travel.reset();
    }

    fn rescale(&mut self, viewport: Viewport) {
        let aspect = viewport.aspect().unwrap_or(DEFAULT_ASPECT);
        self.timeline = SegmentTimeline::build(
            self.path.points(),
            self.travel.total(),
            self.mapping.x_weight(aspect),
        );
        self.pixels = self.path.to_pixels(self.mapping, viewport);
        self.radius = viewport.w() / 60.0;
    }

    fn advance(&mut self, raw_dt_ms: f64, _rng: &mut dyn RandomSource) -> u32 {
        let multiplier = self.multiplier();
        self.travel.step(raw_dt_ms, multiplier)
    }

    fn draw(&self, stage: &mut Stage<'_>) {
        stage.grid_polyline(&self.pixels);
        if let Some(p) = self.position() {
            stage.target(p, self.radius);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/polyline.rs"]
mod tests;
