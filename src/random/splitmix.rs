//! SplitMix64 seed expander.

/// Golden-ratio increment applied after every output.
const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 mixer used only to expand a single `u64` seed into
/// generator state.
///
/// Unlike the textbook variant, the output mixes the state *before*
/// it is advanced, so the first output is a function of the raw seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix(u64);

impl From<u64> for SplitMix {
    fn from(seed: u64) -> Self {
        Self(seed)
    }
}

impl SplitMix {
    pub fn next(&mut self) -> u64 {
        let z = self.0;
        self.0 = z.wrapping_add(GAMMA);
        let z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        let z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_mixes_to_zero_first() {
        let mut mix = SplitMix::from(0);
        assert_eq!(mix.next(), 0);
        assert_ne!(mix.next(), 0);
    }

    #[test]
    fn advances_by_gamma() {
        let mut a = SplitMix::from(7);
        let mut b = SplitMix::from(7u64.wrapping_add(GAMMA));
        a.next();
        assert_eq!(a.next(), b.next());
    }
}
