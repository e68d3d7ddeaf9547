//! Error types for graph operations

use thiserror::Error;

/// Errors that can occur while building or refreshing the graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The decoded feed is too small to be trusted
    #[error("Too few substances: {found} decoded (need at least {required})")]
    TooFewSubstances {
        /// Number of substances supplied
        found: usize,
        /// Configured minimum
        required: usize,
    },

    /// The substance source failed to load
    #[error("Source error: {0}")]
    Source(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
