//! Interaction module - a verdict about an unordered pair of substances

use crate::names::normalize;
use crate::Severity;
use std::hash::{Hash, Hasher};

/// Interaction between two substances
///
/// Equality and hashing ignore the order of the pair and the case of the
/// names, so `(MDMA, Tramadol)` and `(tramadol, MDMA)` with the same severity
/// collapse into one entry of a set.
#[derive(Debug, Clone)]
pub struct Interaction {
    /// First substance as queried
    pub a_name: String,

    /// Second substance as queried
    pub b_name: String,

    /// Worst applicable severity
    pub severity: Severity,
}

impl Interaction {
    /// Create a new interaction
    pub fn new(a_name: impl Into<String>, b_name: impl Into<String>, severity: Severity) -> Self {
        Self {
            a_name: a_name.into(),
            b_name: b_name.into(),
            severity,
        }
    }

    /// Normalized names, smaller first
    fn pair_key(&self) -> (String, String) {
        let a = normalize(&self.a_name);
        let b = normalize(&self.b_name);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Whether the pair involves the given name
    pub fn involves(&self, name: &str) -> bool {
        let name = normalize(name);
        normalize(&self.a_name) == name || normalize(&self.b_name) == name
    }
}

impl PartialEq for Interaction {
    fn eq(&self, other: &Self) -> bool {
        self.severity == other.severity && self.pair_key() == other.pair_key()
    }
}

impl Eq for Interaction {}

impl Hash for Interaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.severity.hash(state);
        self.pair_key().hash(state);
    }
}
