//! Error types for catalog decoding

use crate::conversions::ConversionError;
use thiserror::Error;

/// Errors that can occur while reading or decoding a substance feed
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Reading the feed failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The feed is not valid JSON, or an entry has the wrong shape
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The document is valid JSON but not a substance feed
    #[error("Invalid feed format: {0}")]
    Format(String),

    /// An entry could not be turned into a domain record
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}
