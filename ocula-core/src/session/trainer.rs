use crate::{
    foundation::{core::Viewport, math::RandomSource},
    patterns::{Worker, catalog::Pattern},
    render::plan::DisplayList,
    session::settings::Settings,
};

/// How many completions a trainer waits for before finishing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatTarget {
    /// Never finishes; the worker repeats through its own reverse or restart.
    Unbounded,
    /// Finish after this many completions.
    Count(u32),
}

impl RepeatTarget {
    fn reached(self, count: u32) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Count(n) => count >= n,
        }
    }
}

/// Per-frame trainer notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrainerEvent {
    /// A completion that did not reach the target.
    Repeated {
        /// Completions since the trainer started.
        count: u32,
    },
    /// The target was reached and the worker stopped.
    Finished,
}

/// Output of one trainer callback.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainerFrame {
    /// Display list for this frame, if the surface has area.
    pub display: Option<DisplayList>,
    /// Events in the order they happened.
    pub events: Vec<TrainerEvent>,
}

/// One worker bound to a repeat-count target.
#[derive(Debug)]
pub struct Trainer {
    name: &'static str,
    worker: Worker,
    target: RepeatTarget,
    count: u32,
    running: bool,
}

impl Trainer {
    /// Idle trainer for `pattern`.
    pub fn new(pattern: Pattern, target: RepeatTarget) -> Self {
        Self {
            name: pattern.name,
            worker: pattern.worker,
            target,
            count: 0,
            running: false,
        }
    }

    /// Canonical name of the pattern.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current repeat target.
    pub fn target(&self) -> RepeatTarget {
        self.target
    }

    /// Replace the repeat target; the count is kept.
    pub fn set_target(&mut self, target: RepeatTarget) {
        self.target = target;
    }

    /// Completions since the last start.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// `true` between start and stop.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// `true` while the worker has a callback scheduled.
    pub fn has_pending(&self) -> bool {
        self.worker.has_pending()
    }

    /// Reset the count and start the worker.
    pub fn start(&mut self, rng: &mut dyn RandomSource) {
        self.running = true;
        self.count = 0;
        self.worker.start(rng);
    }

    /// Stop the worker; the count is kept.
    pub fn stop(&mut self) {
        self.running = false;
        self.worker.stop();
    }

    /// Run the worker's pending callback and count its completions. Reaching
    /// the target stops the worker before this returns.
    pub fn frame(
        &mut self,
        now_ms: f64,
        viewport: Viewport,
        settings: &Settings,
        rng: &mut dyn RandomSource,
    ) -> Option<TrainerFrame> {
        let out = self.worker.frame(now_ms, viewport, settings, rng)?;
        let mut events = Vec::new();
        for _ in 0..out.completions {
            self.count += 1;
            if self.target.reached(self.count) {
                self.stop();
                events.push(TrainerEvent::Finished);
                break;
            }
            events.push(TrainerEvent::Repeated { count: self.count });
        }
        Some(TrainerFrame {
            display: out.display,
            events,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/trainer.rs"]
mod tests;
