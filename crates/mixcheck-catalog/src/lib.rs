//! mixcheck Catalog
//!
//! Decodes the substance feed (a JSON document in the PsychonautWiki shape)
//! into domain records and provides a file-backed
//! [`SubstanceSource`](mixcheck_domain::traits::SubstanceSource).
//!
//! # Architecture
//!
//! - `wire`: serde types mirroring the feed
//! - `conversions`: wire to domain, validating routes, units and ranges
//! - `decode`: per-entry tolerant decoding of a whole document
//! - `source`: file-backed source re-read on every load
//!
//! Malformed entries are dropped here, so the graph builder only ever sees
//! valid records.
//!
//! # Examples
//!
//! ```
//! use mixcheck_catalog::decode_substances;
//!
//! let catalog = decode_substances(r#"{"substances": [{"name": "Caffeine"}]}"#).unwrap();
//! assert_eq!(catalog.substances[0].name, "Caffeine");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod conversions;
mod decode;
mod error;
mod source;
pub mod wire;

pub use conversions::ConversionError;
pub use decode::{decode_substances, DecodedCatalog};
pub use error::CatalogError;
pub use source::FileSource;
