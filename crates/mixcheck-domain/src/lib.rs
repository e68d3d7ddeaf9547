//! mixcheck Domain Layer
//!
//! This crate contains the core vocabulary of mixcheck: decoded substance
//! records, administration routes, interaction severities, and the name
//! matching rules every other layer relies on. It depends only on `regex`
//! (for wildcard interaction patterns) and performs no I/O.
//!
//! ## Key Concepts
//!
//! - **Substance**: a decoded record with classes, effects, dose tables and
//!   three interaction lists (dangerous, unsafe, uncertain)
//! - **Severity**: dangerous > unsafe > uncertain
//! - **Meaning-equal names**: equality after trimming and case folding, the
//!   only notion of "same name" in the system
//! - **Wildcard patterns**: interaction entries containing `x`, matching
//!   substituted analogues such as `4-HxA`
//! - **Alias groups**: fixed families ("Serotonin releasers", ...) expanded
//!   into their members before matching
//!
//! ## Architecture
//!
//! - Pure domain logic only
//! - Decoding lives in `mixcheck-catalog`, the graph in `mixcheck-graph`
//! - Trait definitions for the boundaries the other crates implement

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alias;
pub mod interaction;
pub mod names;
pub mod route;
pub mod severity;
pub mod substance;
pub mod traits;

// Re-exports for convenience
pub use interaction::Interaction;
pub use route::{AdministrationRoute, Roa};
pub use severity::Severity;
pub use substance::{Category, EffectRef, InteractionLists, Substance};
pub use traits::SubstanceSource;
