use crate::motion::clock::{DeltaPolicy, STALL_CLAMP_MS};

/// Duration of one pass over a path, in time units.
pub const TRAVEL_TOTAL: f64 = 10_000.0;

/// Eased time along a single pass, with optional return leg.
///
/// `t` stays in `[0, total]`. A reversible travel signals completion when it
/// gets back to 0; a one-way travel signals at the end and restarts from 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Travel {
    t: f64,
    total: f64,
    speed: f64,
    reversible: bool,
    reverse: bool,
}

impl Travel {
    /// Travel advancing `speed` time units per second at full multiplier.
    pub fn new(speed: f64, reversible: bool) -> Self {
        Self {
            t: 0.0,
            total: TRAVEL_TOTAL,
            speed,
            reversible,
            reverse: false,
        }
    }

    /// Back to the start, moving forward.
    pub fn reset(&mut self) {
        self.t = 0.0;
        self.reverse = false;
    }

    /// Current time along the pass.
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Length of one pass.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// `true` on the return leg.
    pub fn is_reversing(&self) -> bool {
        self.reverse
    }

    #[cfg(test)]
    pub(crate) fn set_t(&mut self, t: f64) {
        self.t = t.clamp(0.0, self.total);
    }

    /// Move by `raw_dt_ms` scaled by `multiplier`. Returns 1 on completion.
    pub fn step(&mut self, raw_dt_ms: f64, multiplier: f64) -> u32 {
        let dt = DeltaPolicy::Clamp {
            max_ms: STALL_CLAMP_MS,
        }
        .apply(raw_dt_ms);
        let change = dt * multiplier / 1000.0 * self.speed;

        if self.reverse {
            self.t -= change;
        } else {
            self.t += change;
        }

        if self.t >= self.total {
            self.t = self.total;
            if !self.reversible {
                self.t = 0.0;
                return 1;
            }
            self.reverse = true;
        } else if self.t <= 0.0 {
            self.t = 0.0;
            if self.reverse {
                self.reverse = false;
                return 1;
            }
        }
        0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/travel.rs"]
mod tests;
