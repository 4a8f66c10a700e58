// The 256-bit generator state shared by both xoshiro engines.
//
// Four `u64` words, never all zero. The linear transition below is the
// xoshiro256 "engine" half of the family: it is a bijection on the non-zero
// states with period 2^256 - 1, so a state that starts non-zero stays
// non-zero forever. Each generator in `xoshiro.rs` pairs this transition with
// its own output scrambler.
//
// The state is deliberately not serializable and not `Copy`. A generator owns
// exactly one `GeneratorState` and replaces it wholesale on every step.

use crate::error::{RngError, RngResult};

/// Four words of xoshiro256 state. Invariant: not all zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorState {
    s: [u64; 4],
}

impl GeneratorState {
    /// Build a state from explicit words, e.g. for golden-vector checks.
    ///
    /// Returns `RngError::AllZeroState` for `[0; 4]`, the one configuration
    /// the transition can never leave.
    pub fn from_words(words: [u64; 4]) -> RngResult<Self> {
        if words == [0; 4] {
            return Err(RngError::AllZeroState);
        }
        Ok(Self { s: words })
    }

    /// Internal constructor for callers that have already ruled out zero.
    pub(crate) fn from_nonzero(words: [u64; 4]) -> Self {
        debug_assert!(words != [0; 4], "all-zero xoshiro state");
        Self { s: words }
    }

    /// Copy of the current words `(s0, s1, s2, s3)`.
    pub fn words(&self) -> [u64; 4] {
        self.s
    }

    /// Apply one step of the linear transition, returning the next state.
    ///
    /// The whole update is computed into locals and returned as a new value,
    /// so the owner swaps its state in a single assignment.
    #[must_use]
    pub fn advanced(&self) -> Self {
        let [mut s0, mut s1, mut s2, mut s3] = self.s;

        let t = s1 << 17;

        s2 ^= s0;
        s3 ^= s1;
        s1 ^= s2;
        s0 ^= s3;

        s2 ^= t;
        s3 = s3.rotate_left(45);

        Self {
            s: [s0, s1, s2, s3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_words_are_rejected() {
        assert!(matches!(
            GeneratorState::from_words([0; 4]),
            Err(RngError::AllZeroState)
        ));
        assert!(GeneratorState::from_words([0, 0, 0, 1]).is_ok());
    }

    #[test]
    fn one_step_from_1_2_3_4() {
        let state = GeneratorState::from_words([1, 2, 3, 4]).unwrap();
        let next = state.advanced();
        assert_eq!(next.words(), [7, 0, 262_146, 211_106_232_532_992]);
        // The original is untouched; `advanced` is pure.
        assert_eq!(state.words(), [1, 2, 3, 4]);
    }

    #[test]
    fn single_bit_state_never_reaches_zero() {
        // The sparsest possible non-zero states are the likeliest to expose a
        // broken transition collapsing to zero.
        for word in 0..4 {
            let mut words = [0u64; 4];
            words[word] = 1;
            let mut state = GeneratorState::from_words(words).unwrap();
            for _ in 0..100_000 {
                state = state.advanced();
                assert_ne!(state.words(), [0; 4]);
            }
        }
    }
}
