/// Widen an unsigned pixel extent into the signed coordinate space, saturating at `i32::MAX`.
pub(crate) fn to_px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Clamp a signed extent back to an unsigned size; negative values become 0.
pub(crate) fn to_extent(v: i32) -> u32 {
    u32::try_from(v).unwrap_or(0)
}

/// Small deterministic generator (SplitMix64) used by the demo scene.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seed the generator.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `0..bound`; returns 0 when `bound == 0`.
    pub fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        let bound = bound as u64;
        // Reject the short tail so every residue is equally likely.
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let v = self.next_u64();
            if v < zone {
                return (v % bound) as usize;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
