//! Severity module - how bad a combination is

use std::cmp::Ordering;
use std::fmt;

/// Severity of an interaction between two substances
///
/// Ordered from worst to mildest:
/// - Dangerous: the combination should be avoided
/// - Unsafe: the combination carries significant risk
/// - Uncertain: too little is known to call it safe
///
/// `Ord` follows danger, so `max()` picks the worse of two severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Combination should be avoided
    Dangerous,

    /// Combination carries significant risk
    Unsafe,

    /// Combination is poorly understood
    Uncertain,
}

impl Severity {
    /// All severities in checking order, worst first
    pub const ALL: [Severity; 3] = [Severity::Dangerous, Severity::Unsafe, Severity::Uncertain];

    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Dangerous => "dangerous",
            Severity::Unsafe => "unsafe",
            Severity::Uncertain => "uncertain",
        }
    }

    /// Parse a severity from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dangerous" => Some(Severity::Dangerous),
            "unsafe" => Some(Severity::Unsafe),
            "uncertain" => Some(Severity::Uncertain),
            _ => None,
        }
    }

    /// Numeric danger: higher is worse
    pub fn danger_count(&self) -> u8 {
        match self {
            Severity::Dangerous => 3,
            Severity::Unsafe => 2,
            Severity::Uncertain => 1,
        }
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.danger_count().cmp(&other.danger_count())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid severity: {}", s))
    }
}
