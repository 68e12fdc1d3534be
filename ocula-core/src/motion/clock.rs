/// Largest frame delta (ms) most motion laws accept before clamping.
pub const STALL_CLAMP_MS: f64 = 50.0;
/// Clamp used by the discrete flick law.
pub const FLICK_CLAMP_MS: f64 = 80.0;
/// Deltas at or above this (ms) are dropped by the tick-driven laws.
pub const STALL_DISCARD_MS: f64 = 1000.0;

/// How a raw wall-clock delta is made safe before it drives motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeltaPolicy {
    /// Clamp into `[0, max_ms]`.
    Clamp {
        /// Upper bound in milliseconds.
        max_ms: f64,
    },
    /// Treat deltas `>= threshold_ms` as a stall and use zero instead.
    Discard {
        /// Smallest delta treated as a stall, in milliseconds.
        threshold_ms: f64,
    },
}

impl DeltaPolicy {
    /// Safe delta for `raw_ms`. Non-finite input yields zero.
    pub fn apply(self, raw_ms: f64) -> f64 {
        if !raw_ms.is_finite() {
            return 0.0;
        }
        match self {
            Self::Clamp { max_ms } => raw_ms.clamp(0.0, max_ms),
            Self::Discard { threshold_ms } => {
                if raw_ms >= threshold_ms {
                    0.0
                } else {
                    raw_ms.max(0.0)
                }
            }
        }
    }
}

/// Last-frame timestamp bookkeeping shared by every worker.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Forget the last timestamp; the next tick only primes the clock.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    /// Record `now_ms` and return the raw delta since the previous tick, or
    /// `None` when this tick primed the clock.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        let prev = self.last_ms.replace(now_ms);
        prev.map(|p| now_ms - p)
    }

    /// `true` once a timestamp has been seen since the last reset.
    pub fn is_primed(&self) -> bool {
        self.last_ms.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/clock.rs"]
mod tests;
