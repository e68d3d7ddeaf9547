//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::Substance;

/// Provider of decoded substance records
///
/// Implemented by the infrastructure layer (mixcheck-catalog). Individual
/// malformed entries are the provider's business: it drops them and returns
/// only the records it could decode.
pub trait SubstanceSource {
    /// Error type for load operations
    type Error;

    /// Load the full list of decoded substances
    fn load_substances(&self) -> Result<Vec<Substance>, Self::Error>;
}

impl SubstanceSource for Vec<Substance> {
    type Error = std::convert::Infallible;

    fn load_substances(&self) -> Result<Vec<Substance>, Self::Error> {
        Ok(self.clone())
    }
}
