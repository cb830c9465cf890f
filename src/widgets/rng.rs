use std::time::{SystemTime, UNIX_EPOCH};

const GOLDEN_GAMMA: u32 = 0x9E37_79B9;

pub(crate) fn splitmix32(mut z: u32) -> u32 {
    z = z.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

/// Small seeded generator for decorative placement. Not for anything that matters.
#[derive(Debug, Clone)]
pub struct SplitMix {
    state: u32,
}

impl SplitMix {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_clock() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_millis() as u32)
            .unwrap_or(0);
        Self::new(splitmix32(now))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        splitmix32(self.state)
    }

    /// Uniform in `[low, high)`. Returns `low` for an empty range.
    pub fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        let unit = (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32;
        low + unit * (high - low)
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.next_u32() as usize % len.max(1)
    }
}
