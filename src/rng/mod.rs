//! Random number generation with hardware entropy.

mod hw;

use rand::rngs::OsRng;
use rand_core::{RngCore, impls};
use zeroize::Zeroize;

/// Odd 64-bit multipliers; one is picked per step from the mixed state.
const MULTIPLIERS: [u64; 12] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0x5851_f42d_4c95_7f2d,
    0xda94_2042_e4dd_58b5,
    0xd134_2543_de82_ef95,
    0xa076_1d64_78bd_642f,
    0xe703_7ed1_a0b4_28db,
    0x8ebc_6af0_9c88_c6e3,
    0x5899_65cc_7537_4cc3,
    0x1d8e_4e27_c47d_124f,
    0xff51_afd7_ed55_8ccd,
];

/// Which generator backs password draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Source {
    /// Cycle-counter entropy folded into a multiplicative state.
    #[default]
    Hardware,
    /// The operating system CSPRNG.
    Os,
}

impl Source {
    pub fn from_urandom_flag(use_urandom: bool) -> Self {
        if use_urandom { Source::Os } else { Source::Hardware }
    }

    pub fn name(self) -> &'static str {
        match self {
            Source::Hardware => hw::source_name(),
            Source::Os => "os csprng",
        }
    }
}

/// PRNG that folds fresh hardware entropy into every step.
///
/// General purpose only; use [`Source::Os`] when the output must be
/// cryptographically secure.
pub struct HwRng {
    state: u64,
}

impl HwRng {
    pub fn new() -> Self {
        Self {
            state: hw::entropy(),
        }
    }

    #[cfg(test)]
    fn with_state(state: u64) -> Self {
        Self { state }
    }

    #[inline(always)]
    fn step(&mut self) -> u64 {
        let ent = hw::entropy();

        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        // Rotate, multiply by the selected odd constant, fold in entropy.
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl Default for HwRng {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HwRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HwRng { .. }")
    }
}

impl Drop for HwRng {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl RngCore for HwRng {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Generator selected at startup, passed by `&mut` into the engine.
#[derive(Debug)]
pub enum Generator {
    Hardware(HwRng),
    Os(OsRng),
}

impl Generator {
    pub fn new(source: Source) -> Self {
        log::debug!("random source: {}", source.name());
        match source {
            Source::Hardware => Generator::Hardware(HwRng::new()),
            Source::Os => Generator::Os(OsRng),
        }
    }

    pub fn source(&self) -> Source {
        match self {
            Generator::Hardware(_) => Source::Hardware,
            Generator::Os(_) => Source::Os,
        }
    }
}

impl RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        match self {
            Generator::Hardware(r) => r.next_u32(),
            Generator::Os(r) => r.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Generator::Hardware(r) => r.next_u64(),
            Generator::Os(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Generator::Hardware(r) => r.fill_bytes(dest),
            Generator::Os(r) => r.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        match self {
            Generator::Hardware(r) => r.try_fill_bytes(dest),
            Generator::Os(r) => r.try_fill_bytes(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn successive_outputs_differ() {
        let mut rng = HwRng::with_state(0);
        let a = rng.next_u64();
        let b = rng.next_u64();
        let c = rng.next_u64();
        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn high_and_low_bits_both_vary() {
        let mut rng = HwRng::new();
        let (mut or, mut and) = (0u64, u64::MAX);
        for _ in 0..256 {
            let v = rng.next_u64();
            or |= v;
            and &= v;
        }
        assert_eq!(or, u64::MAX);
        assert_eq!(and, 0);
    }

    #[test]
    fn gen_range_stays_in_bounds() {
        let mut rng = Generator::new(Source::Hardware);
        for _ in 0..1_000 {
            assert!(rng.gen_range(0..74usize) < 74);
        }
    }

    #[test]
    fn fill_bytes_writes_partial_tail() {
        let mut rng = HwRng::with_state(42);
        let mut buf = [0u8; 13];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn source_round_trips_through_generator() {
        assert_eq!(Generator::new(Source::Os).source(), Source::Os);
        assert_eq!(Generator::new(Source::Hardware).source(), Source::Hardware);
        assert_eq!(Source::from_urandom_flag(true), Source::Os);
        assert_eq!(Source::from_urandom_flag(false), Source::Hardware);
    }
}
