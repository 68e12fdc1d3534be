//! Motion laws and the generic worker that drives them.
//!
//! Each pattern implements [`Stepper`]: it owns its path and timing state,
//! advances that state from a raw frame delta and draws itself onto a
//! [`Stage`]. [`Worker`] supplies the shared lifecycle around a stepper:
//! callback scheduling, clock priming, resize detection and display list
//! assembly.

pub(crate) mod anchored;
pub(crate) mod catalog;
pub(crate) mod expansion;
pub(crate) mod flick;
pub(crate) mod parametric;
pub(crate) mod polyline;
pub(crate) mod random_flick;
pub(crate) mod roam;
pub(crate) mod sweep;
pub(crate) mod travel;

use crate::{
    driver::{FrameDriver, stage::Stage},
    foundation::{core::Viewport, math::RandomSource},
    render::plan::DisplayList,
    session::settings::Settings,
};

/// One motion law.
pub trait Stepper {
    /// Return to the initial timing state. Called on every start.
    fn reset(&mut self, rng: &mut dyn RandomSource);

    /// Recompute anything derived from the surface size.
    fn rescale(&mut self, _viewport: Viewport) {}

    /// Advance by a raw wall-clock delta (ms). Each law applies its own
    /// delta policy. Returns the number of completions this frame.
    fn advance(&mut self, raw_dt_ms: f64, rng: &mut dyn RandomSource) -> u32;

    /// Emit this frame's draw operations. The background is already drawn.
    fn draw(&self, stage: &mut Stage<'_>);
}

/// Result of one executed callback.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    /// Completions reported by the stepper this frame.
    pub completions: u32,
    /// `None` when the viewport has no area.
    pub display: Option<DisplayList>,
}

/// A stepper plus the per-frame lifecycle that drives it.
pub struct Worker {
    driver: FrameDriver,
    stepper: Box<dyn Stepper>,
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker")
            .field("driver", &self.driver)
            .finish_non_exhaustive()
    }
}

impl Worker {
    /// Idle worker around `stepper`.
    pub fn new(stepper: impl Stepper + 'static) -> Self {
        Self {
            driver: FrameDriver::default(),
            stepper: Box::new(stepper),
        }
    }

    /// Reset the motion law and schedule the first callback.
    pub fn start(&mut self, rng: &mut dyn RandomSource) {
        self.stepper.reset(rng);
        self.driver.start();
    }

    /// Cancel the pending callback.
    pub fn stop(&mut self) {
        self.driver.stop();
    }

    /// `true` between start and stop.
    pub fn is_active(&self) -> bool {
        self.driver.is_active()
    }

    /// `true` while a callback is scheduled.
    pub fn has_pending(&self) -> bool {
        self.driver.has_pending()
    }

    /// Run the pending callback, if any.
    ///
    /// The first callback after [`Worker::start`] only primes the clock.
    /// Zero-area viewports still advance time but produce no display list.
    pub fn frame(
        &mut self,
        now_ms: f64,
        viewport: Viewport,
        settings: &Settings,
        rng: &mut dyn RandomSource,
    ) -> Option<FrameOutput> {
        let begin = self.driver.begin_frame(now_ms, viewport)?;
        if begin.resized && !viewport.is_empty() {
            self.stepper.rescale(viewport);
        }

        let completions = match begin.raw_dt_ms {
            Some(dt) => self.stepper.advance(dt, rng),
            None => 0,
        };

        let display = (!viewport.is_empty()).then(|| {
            let mut list = DisplayList::new(viewport);
            let mut stage = Stage::new(settings, &mut list);
            stage.background();
            self.stepper.draw(&mut stage);
            list
        });

        self.driver.end_frame();
        Some(FrameOutput {
            completions,
            display,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/worker.rs"]
mod tests;
