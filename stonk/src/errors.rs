use thiserror::Error;

use crate::providers::ProviderError;

/// The unified error type for the `stonk` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The quote could not be retrieved at all: network failure, a
    /// malformed response, or an empty result set. Fatal for a run.
    #[error("{0}")]
    DataUnavailable(#[from] ProviderError),

    /// The response parsed but carries no bars to tabulate. Only the
    /// table is skipped.
    #[error("No stock data available.")]
    IncompleteData,

    /// Writing the table failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the run must stop with a non-zero exit code.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::IncompleteData)
    }
}
