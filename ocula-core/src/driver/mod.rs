//! Per-frame lifecycle shared by every worker: callback scheduling, frame
//! clock, resize detection and the drawing helpers handed to motion laws.

pub(crate) mod frame_loop;
pub(crate) mod stage;

use crate::{
    driver::frame_loop::FrameLoop, foundation::core::Viewport, motion::clock::FrameClock,
};

/// What a scheduled callback learned when it began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameBegin {
    /// Raw delta since the previous callback; `None` on the priming callback.
    pub raw_dt_ms: Option<f64>,
    /// The viewport differs from the one seen by the previous callback.
    pub resized: bool,
}

/// Loop, clock and last-seen viewport for one worker.
#[derive(Debug, Default)]
pub struct FrameDriver {
    frame_loop: FrameLoop,
    clock: FrameClock,
    viewport: Option<Viewport>,
}

impl FrameDriver {
    /// Re-prime the clock and schedule the first callback.
    pub fn start(&mut self) {
        self.clock.reset();
        self.frame_loop.start();
    }

    /// Cancel the pending callback.
    pub fn stop(&mut self) {
        self.frame_loop.stop();
    }

    /// `true` while the loop runs.
    pub fn is_active(&self) -> bool {
        self.frame_loop.is_active()
    }

    /// `true` while a callback is scheduled.
    pub fn has_pending(&self) -> bool {
        self.frame_loop.has_pending()
    }

    /// Viewport seen by the last callback.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Consume the pending callback. Returns `None` when nothing is scheduled
    /// or the loop was stopped.
    pub fn begin_frame(&mut self, now_ms: f64, viewport: Viewport) -> Option<FrameBegin> {
        self.frame_loop.take_pending()?;
        if !self.frame_loop.is_active() {
            return None;
        }
        let resized = self.viewport != Some(viewport);
        self.viewport = Some(viewport);
        let raw_dt_ms = self.clock.tick(now_ms);
        Some(FrameBegin { raw_dt_ms, resized })
    }

    /// Re-request the next callback if the loop is still active.
    pub fn end_frame(&mut self) {
        if self.frame_loop.is_active() {
            self.frame_loop.schedule();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/driver.rs"]
mod tests;
