/// Source of uniform draws in `[0, 1)` for the random-walk and random-flick
/// motion laws. Injected so trajectories can be replayed exactly.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[lo, lo + span)`.
    fn next_in(&mut self, lo: f64, span: f64) -> f64 {
        self.next_f64() * span + lo
    }
}

/// Seeded SplitMix64 generator.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Generator starting from `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit draw.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next draw in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Seed from the wall clock; used when no explicit seed is configured.
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x0C0F_FEE0);
        Self::new(nanos)
    }
}

impl RandomSource for Rng64 {
    fn next_f64(&mut self) -> f64 {
        self.next_f64_01()
    }
}

/// Replays a fixed list of draws, cycling when exhausted. Test and replay
/// helper for exact trajectories.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Replay `values` in order.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Points on `[lo, hi]` with `n` intervals, both ends included.
pub(crate) fn linspace(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n == 0 { 0.0 } else { (hi - lo) / n as f64 };
    (0..=n).map(move |i| lo + step * i as f64)
}

/// Evenly spaced value `i` of `count` between `start` and `end`.
pub(crate) fn spread(start: f64, end: f64, i: usize, count: usize) -> f64 {
    let ratio = if count <= 1 {
        0.0
    } else {
        i as f64 / (count - 1) as f64
    };
    start + (end - start) * ratio
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
