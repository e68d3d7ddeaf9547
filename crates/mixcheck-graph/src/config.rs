//! Configuration for graph construction and refresh
//!
//! Defines the minimum feed size and the refresh interval.

use crate::GraphError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for building and refreshing the knowledge graph
///
/// # Examples
///
/// ```
/// use mixcheck_graph::GraphConfig;
///
/// let config = GraphConfig::default();
/// assert_eq!(config.min_substances, 50);
///
/// let config = GraphConfig::strict();
/// assert_eq!(config.min_substances, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Smallest decoded feed accepted as a new graph
    /// Default: 50
    #[serde(default = "default_min_substances")]
    pub min_substances: usize,

    /// Seconds between background reloads of the source, 0 disables them
    /// Default: 3600 (hourly)
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

fn default_min_substances() -> usize {
    50
}

fn default_refresh_interval_secs() -> u64 {
    3600
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            min_substances: default_min_substances(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl GraphConfig {
    /// Strict preset: demands a large feed, refreshes daily
    pub fn strict() -> Self {
        Self {
            min_substances: 200,
            refresh_interval_secs: 86_400,
        }
    }

    /// Lenient preset: the minimum feed size, no background refresh
    pub fn lenient() -> Self {
        Self {
            min_substances: 50,
            refresh_interval_secs: 0,
        }
    }

    /// Refresh interval, `None` when background refresh is disabled
    pub fn refresh_interval(&self) -> Option<Duration> {
        if self.refresh_interval_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.refresh_interval_secs))
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.min_substances < 50 {
            return Err(GraphError::Config(format!(
                "min_substances must be at least 50, got {}",
                self.min_substances
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, GraphError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| GraphError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, GraphError> {
        toml::to_string_pretty(self)
            .map_err(|e| GraphError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
