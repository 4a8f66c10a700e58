// The two xoshiro256 generators: ** (default) and ++ (seeded).
//
// Both share the linear transition in `state.rs` and differ only in the
// output scrambler applied to the pre-transition state:
//
//   xoshiro256**  result = rotl(s1 * 5, 7) * 9
//   xoshiro256++  result = rotl(s0 + s3, 23) + s0
//
// (Blackman & Vigna, "Scrambled Linear Pseudorandom Number Generators", 2019.)
//
// Neither is cryptographically secure. The scramblers are cheap and
// invertible enough that an observer of a few outputs can recover the state
// and predict every later output. Use these for simulation, sampling and
// shuffling, never for keys, tokens or anything an adversary may observe.

use crate::derive::RandomSource;
use crate::error::RngResult;
use crate::seed::{self, EntropySource};
use crate::state::GeneratorState;

/// xoshiro256** — the default engine when no reproducible seed is requested.
///
/// Not cryptographically secure (see module docs).
#[derive(Clone, Debug)]
pub struct Xoshiro256StarStar {
    state: GeneratorState,
}

impl Xoshiro256StarStar {
    /// Seed from an entropy source via the Seed Initializer.
    pub fn from_entropy<E: EntropySource + ?Sized>(source: &mut E) -> RngResult<Self> {
        let state = seed::initialize(source)?;
        tracing::trace!("xoshiro256** engine constructed from entropy");
        Ok(Self { state })
    }

    /// Start from an explicit state. Mainly for reference vectors.
    pub fn from_state(state: GeneratorState) -> Self {
        Self { state }
    }

    /// The current state, for inspection.
    pub fn state(&self) -> &GeneratorState {
        &self.state
    }
}

impl RandomSource for Xoshiro256StarStar {
    fn next_u64(&mut self) -> u64 {
        let [_, s1, _, _] = self.state.words();
        let result = s1.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        self.state = self.state.advanced();
        result
    }
}

/// xoshiro256++ seeded from a `u64` through SplitMix64.
///
/// Two instances created with the same seed produce identical output
/// sequences on every platform. Not cryptographically secure.
#[derive(Clone, Debug)]
pub struct SeededXoshiro256PlusPlus {
    state: GeneratorState,
}

impl SeededXoshiro256PlusPlus {
    /// Create a generator seeded from a `u64`.
    ///
    /// Uses SplitMix64 to expand the seed into the 256-bit internal state.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed::expand_seed(seed),
        }
    }

    /// Start from an explicit state.
    pub fn from_state(state: GeneratorState) -> Self {
        Self { state }
    }

    /// The current state, for inspection.
    pub fn state(&self) -> &GeneratorState {
        &self.state
    }
}

impl RandomSource for SeededXoshiro256PlusPlus {
    fn next_u64(&mut self) -> u64 {
        let [s0, _, _, s3] = self.state.words();
        let result = s0.wrapping_add(s3).rotate_left(23).wrapping_add(s0);
        self.state = self.state.advanced();
        result
    }
}
