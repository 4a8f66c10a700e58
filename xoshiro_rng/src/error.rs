// Error taxonomy for the engine.
//
// Only two things can go wrong: a caller passes a bound that violates an
// operation's precondition, or construction cannot obtain entropy. Once a
// generator exists, raw-word production and every derivation are total.

use thiserror::Error;

/// Result type used by `xoshiro_rng`.
pub type RngResult<T> = Result<T, RngError>;

/// Errors produced by construction and the bounded derivations.
#[derive(Debug, Error)]
pub enum RngError {
    /// A single-argument bounded operation received a negative bound.
    #[error("bound must be non-negative, got {bound}")]
    NegativeBound { bound: i64 },

    /// A two-argument bounded operation received `min > max`.
    #[error("min ({min}) must not exceed max ({max})")]
    InvertedRange { min: i64, max: i64 },

    /// The OS entropy source failed.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] getrandom::Error),

    /// An entropy source returned the wrong number of bytes.
    #[error("entropy source returned {actual} bytes, expected {expected}")]
    ShortEntropy { expected: usize, actual: usize },

    /// Caller-supplied state words were all zero.
    #[error("generator state must not be all zero")]
    AllZeroState,
}
