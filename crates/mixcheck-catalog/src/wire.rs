//! Serialized shape of the substance feed
//!
//! Field names follow the feed (`commonNames`, `class`, `dangerousInteractions`,
//! ...). Everything except a substance's name is optional.

use serde::Deserialize;
use serde_json::Value;

/// One substance entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSubstance {
    /// Unique name
    pub name: String,
    /// Alternative names
    #[serde(default)]
    pub common_names: Vec<String>,
    /// Reference page
    pub url: Option<String>,
    /// Short description
    pub summary: Option<String>,
    /// Search categories
    #[serde(default)]
    pub categories: Vec<String>,
    /// Class tags
    #[serde(rename = "class")]
    pub classes: Option<WireClasses>,
    /// Declared effects
    #[serde(default)]
    pub effects: Vec<WireEffect>,
    /// Route entries, decoded one by one so a bad route only loses itself
    #[serde(default)]
    pub roas: Vec<Value>,
    /// Names sharing tolerance
    #[serde(default)]
    pub cross_tolerances: Vec<String>,
    /// Dangerous combinations
    #[serde(default)]
    pub dangerous_interactions: Vec<WireInteraction>,
    /// Unsafe combinations
    #[serde(default)]
    pub unsafe_interactions: Vec<WireInteraction>,
    /// Combinations with uncertain outcome
    #[serde(default)]
    pub uncertain_interactions: Vec<WireInteraction>,
}

/// Psychoactive and chemical class tags
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireClasses {
    /// Psychoactive class names
    #[serde(default)]
    pub psychoactive: Vec<String>,
    /// Chemical class names
    #[serde(default)]
    pub chemical: Vec<String>,
}

/// Effect reference
#[derive(Debug, Clone, Deserialize)]
pub struct WireEffect {
    /// Effect name
    pub name: String,
    /// Reference page
    pub url: Option<String>,
}

/// Interaction partner, written either as a bare name or as `{"name": ...}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireInteraction {
    /// Bare name
    Name(String),
    /// Object carrying a name
    Named {
        /// Partner name
        name: String,
    },
}

impl WireInteraction {
    /// Partner name
    pub fn into_name(self) -> String {
        match self {
            WireInteraction::Name(name) | WireInteraction::Named { name } => name,
        }
    }
}

/// Dose and duration data for one route
#[derive(Debug, Clone, Deserialize)]
pub struct WireRoa {
    /// Route name (`oral`, `smoked`, ...)
    pub name: String,
    /// Dose table
    pub dose: Option<WireDose>,
    /// Duration table
    pub duration: Option<WireDuration>,
}

/// Dose table
#[derive(Debug, Clone, Deserialize)]
pub struct WireDose {
    /// Unit of every amount
    pub units: Option<String>,
    /// Threshold amount
    pub threshold: Option<f64>,
    /// Light range
    pub light: Option<WireRange>,
    /// Common range
    pub common: Option<WireRange>,
    /// Strong range
    pub strong: Option<WireRange>,
    /// Heavy amount
    pub heavy: Option<f64>,
}

/// Numeric range
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WireRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

/// Duration table
#[derive(Debug, Clone, Deserialize)]
pub struct WireDuration {
    /// Onset
    pub onset: Option<WireDurationRange>,
    /// Come-up
    pub comeup: Option<WireDurationRange>,
    /// Peak
    pub peak: Option<WireDurationRange>,
    /// Offset
    pub offset: Option<WireDurationRange>,
    /// Total
    pub total: Option<WireDurationRange>,
    /// Afterglow
    pub afterglow: Option<WireDurationRange>,
}

/// Duration range with its unit
#[derive(Debug, Clone, Deserialize)]
pub struct WireDurationRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Unit (`minutes`, `hours`, ...)
    pub units: String,
}

/// Search category
#[derive(Debug, Clone, Deserialize)]
pub struct WireCategory {
    /// Category name
    pub name: String,
    /// Description
    pub description: Option<String>,
    /// Reference page
    pub url: Option<String>,
}
