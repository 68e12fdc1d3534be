/// Speed multipliers that slow apparent motion near the ends of a travel.
///
/// Both curves take a progress ratio in `[0, 1]` (clamped) and peak at 0.5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// `-500·(r-0.5)^10 + 0.5`: near zero at waypoints, 0.5 mid-segment.
    Waypoint,
    /// `-250·(r-0.5)^8 + 1`: bell profile used by the multi-target sweep.
    Sweep,
}

impl Ease {
    /// Multiplier for a progress ratio.
    pub fn apply(self, ratio: f64) -> f64 {
        let r = ratio.clamp(0.0, 1.0) - 0.5;
        match self {
            Self::Waypoint => -500.0 * r.powi(10) + 0.5,
            Self::Sweep => -250.0 * r.powi(8) + 1.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/ease.rs"]
mod tests;
