//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph build or refresh error
    #[error("Graph error: {0}")]
    Graph(#[from] mixcheck_graph::GraphError),

    /// Feed decoding error
    #[error("Catalog error: {0}")]
    Catalog(#[from] mixcheck_catalog::CatalogError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No substance data loaded
    #[error("No substance data loaded. Pass --data <path> or set data_path in the config.")]
    NotLoaded,
}
