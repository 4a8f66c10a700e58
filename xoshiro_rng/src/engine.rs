// Engine selection and the `Random` facade.
//
// A `Random` owns exactly one engine, picked once at construction:
//
// - `Engine::Xoshiro` — xoshiro256** seeded from OS entropy. The default
//   whenever the caller does not ask for a reproducible seed.
// - `Engine::Seeded`  — xoshiro256++ expanded from a `u64` by SplitMix64,
//   for runs that must replay identically.
//
// The variant set is closed, so dispatch is a `match` rather than a trait
// object. Every public operation comes from `RandomSource`; `Random` only
// forwards `next_u64`.
//
// Threading: all operations take `&mut self`. A `Random` can be moved to
// another thread, but sharing one needs external synchronization (e.g.
// `Mutex<Random>`), because each draw reads and rewrites all four state words.

use std::fmt;

use crate::derive::RandomSource;
use crate::error::RngResult;
use crate::seed::{EntropySource, OsEntropy};
use crate::xoshiro::{SeededXoshiro256PlusPlus, Xoshiro256StarStar};

/// Which algorithm backs a `Random`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineKind {
    Xoshiro256StarStar,
    SeededXoshiro256PlusPlus,
}

impl EngineKind {
    pub fn name(self) -> &'static str {
        match self {
            EngineKind::Xoshiro256StarStar => "xoshiro256starstar",
            EngineKind::SeededXoshiro256PlusPlus => "seeded-xoshiro256plusplus",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The closed set of engines a `Random` can run on.
#[derive(Clone, Debug)]
pub enum Engine {
    Xoshiro(Xoshiro256StarStar),
    Seeded(SeededXoshiro256PlusPlus),
}

impl Engine {
    pub fn kind(&self) -> EngineKind {
        match self {
            Engine::Xoshiro(_) => EngineKind::Xoshiro256StarStar,
            Engine::Seeded(_) => EngineKind::SeededXoshiro256PlusPlus,
        }
    }
}

impl RandomSource for Engine {
    fn next_u64(&mut self) -> u64 {
        match self {
            Engine::Xoshiro(rng) => rng.next_u64(),
            Engine::Seeded(rng) => rng.next_u64(),
        }
    }
}

/// General-purpose random number facility.
///
/// ```
/// use xoshiro_rng::{Random, RandomSource};
///
/// let mut rng = Random::new().unwrap();
/// let die = rng.next_i32_range(1, 7).unwrap();
/// assert!((1..7).contains(&die));
/// ```
#[derive(Clone, Debug)]
pub struct Random {
    engine: Engine,
}

impl Random {
    /// Entropy-seeded xoshiro256**. Fails only if the OS entropy source does.
    pub fn new() -> RngResult<Self> {
        Self::from_entropy(&mut OsEntropy)
    }

    /// Entropy-seeded xoshiro256** drawing from a caller-supplied source.
    pub fn from_entropy<E: EntropySource + ?Sized>(source: &mut E) -> RngResult<Self> {
        let engine = Engine::Xoshiro(Xoshiro256StarStar::from_entropy(source)?);
        Ok(Self { engine })
    }

    /// Reproducible generator: the same seed always yields the same stream.
    pub fn from_seed(seed: u64) -> Self {
        tracing::trace!(seed, "seeded engine constructed");
        Self {
            engine: Engine::Seeded(SeededXoshiro256PlusPlus::new(seed)),
        }
    }

    /// Wrap an already-constructed engine.
    pub fn from_engine(engine: Engine) -> Self {
        Self { engine }
    }

    pub fn kind(&self) -> EngineKind {
        self.engine.kind()
    }

    /// The engine backing this generator, for inspecting its state.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl RandomSource for Random {
    fn next_u64(&mut self) -> u64 {
        self.engine.next_u64()
    }
}
