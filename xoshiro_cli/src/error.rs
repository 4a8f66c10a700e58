// CLI error type. Wraps engine errors and adds config/argument failures.

use std::path::PathBuf;

use thiserror::Error;
use xoshiro_rng::RngError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Rng(#[from] RngError),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Args(String),
}
