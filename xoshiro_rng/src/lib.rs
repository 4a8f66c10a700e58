// xoshiro_rng — fast, non-cryptographic random number engine.
//
// The default generator is xoshiro256** (Blackman & Vigna, 2019) seeded from
// OS entropy, used whenever the caller does not ask for a reproducible seed.
// A SplitMix64-seeded xoshiro256++ is available for replayable streams.
//
// Module overview:
// - `state.rs`:   GeneratorState — four u64 words, never all zero, plus the
//                 shared linear transition.
// - `seed.rs`:    Seed Initializer — EntropySource boundary, OsEntropy
//                 (getrandom), all-zero retry, SplitMix64 expansion.
// - `xoshiro.rs`: Core generators — xoshiro256** and seeded xoshiro256++.
// - `derive.rs`:  RandomSource trait — bounded integers (Lemire rejection),
//                 floats in [0, 1), byte fills, shuffle/choose.
// - `engine.rs`:  Engine enum chosen at construction and the Random facade.
// - `error.rs`:   RngError.
//
// **Not cryptographically secure.** Outputs are predictable to anyone who
// observes enough of them. Never use this crate for keys, tokens or nonces.
//
// Generators are single-owner values: every operation takes `&mut self` and
// there is no internal locking.

pub mod derive;
pub mod engine;
pub mod error;
pub mod seed;
pub mod state;
pub mod xoshiro;

pub use derive::RandomSource;
pub use engine::{Engine, EngineKind, Random};
pub use error::{RngError, RngResult};
pub use seed::{EntropySource, OsEntropy};
pub use state::GeneratorState;
pub use xoshiro::{SeededXoshiro256PlusPlus, Xoshiro256StarStar};
