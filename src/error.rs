//! Error type shared by the multiplexer and the configuration loader.

use std::path::PathBuf;

/// Errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value was requested from a multiplexer with no live sources.
    ///
    /// This is a caller bug: check [`has_next`] before asking for a value.
    ///
    /// [`has_next`]: crate::mux::WeightedMultiplexer::has_next
    #[error("multiplexer is drained: no live sources remain")]
    Drained,

    /// A source was configured with a weight of zero.
    #[error("source {index}: weight must be at least 1")]
    InvalidWeight { index: usize },

    /// A source was configured with no elements.
    #[error("source {index}: sequence must contain at least one element")]
    EmptySequence { index: usize },

    /// The sum of all source weights does not fit in a `u64`.
    #[error("total weight overflows u64")]
    WeightOverflow,

    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be parsed as YAML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
