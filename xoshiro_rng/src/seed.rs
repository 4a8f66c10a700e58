// Seed Initializer: turns entropy into a valid `GeneratorState`.
//
// The default engine draws 32 bytes from a cryptographically strong source
// (the OS, via `getrandom`) and reads them as four little-endian words. The
// only post-processing is the all-zero check: if all 256 bits come back zero
// (probability 2^-256) the draw is repeated. That loop guards the state
// invariant; it is not error recovery, and it has no iteration cap.
//
// The seeded engine instead expands a single `u64` with SplitMix64, the
// standard recommendation from the xoshiro authors. SplitMix64 is a bijection
// over consecutive counters, so at most one of its four outputs can be zero.

use crate::error::{RngError, RngResult};
use crate::state::GeneratorState;

/// Number of entropy bytes needed for one xoshiro256 state.
pub const SEED_BYTES: usize = 32;

/// The entropy boundary consumed by the Seed Initializer.
///
/// Implementations must return exactly `n` cryptographically strong,
/// uniformly distributed bytes, or fail.
pub trait EntropySource {
    fn secure_bytes(&mut self, n: usize) -> RngResult<Vec<u8>>;
}

/// Operating-system entropy via `getrandom`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn secure_bytes(&mut self, n: usize) -> RngResult<Vec<u8>> {
        let mut buf = vec![0u8; n];
        getrandom::getrandom(&mut buf)?;
        Ok(buf)
    }
}

/// Draw a fresh, non-zero generator state from `source`.
///
/// Fails if the source errors or hands back the wrong number of bytes.
pub fn initialize<E: EntropySource + ?Sized>(source: &mut E) -> RngResult<GeneratorState> {
    loop {
        let bytes = source.secure_bytes(SEED_BYTES)?;
        if bytes.len() != SEED_BYTES {
            return Err(RngError::ShortEntropy {
                expected: SEED_BYTES,
                actual: bytes.len(),
            });
        }

        let mut words = [0u64; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut le = [0u8; 8];
            le.copy_from_slice(chunk);
            *word = u64::from_le_bytes(le);
        }

        if words == [0; 4] {
            tracing::warn!("entropy source produced an all-zero seed; drawing again");
            continue;
        }
        tracing::debug!(bytes = SEED_BYTES, "seeded generator state from entropy");
        return Ok(GeneratorState::from_nonzero(words));
    }
}

/// Expand a `u64` seed into a full state with SplitMix64.
pub(crate) fn expand_seed(seed: u64) -> GeneratorState {
    let mut sm = seed;
    let words = [
        splitmix64(&mut sm),
        splitmix64(&mut sm),
        splitmix64(&mut sm),
        splitmix64(&mut sm),
    ];
    tracing::debug!(seed, "expanded u64 seed with SplitMix64");
    GeneratorState::from_nonzero(words)
}

/// SplitMix64 — used only for seeding from a single `u64`.
pub fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
