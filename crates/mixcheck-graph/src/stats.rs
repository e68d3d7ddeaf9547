//! Statistics collected while building and refreshing graphs

use mixcheck_domain::Severity;
use std::collections::HashMap;

/// Counts describing one built graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildStats {
    /// Substances in the graph
    pub substances: usize,

    /// Input records skipped because their name was already taken
    pub duplicate_substances: usize,

    /// Input records skipped because their name was blank
    pub blank_substances: usize,

    /// Distinct psychoactive classes
    pub psychoactive_classes: usize,

    /// Distinct chemical classes
    pub chemical_classes: usize,

    /// Distinct effects
    pub effects: usize,

    /// Distinct unresolved interaction placeholders
    pub unresolved: usize,

    /// Interaction links per severity
    pub links: HashMap<Severity, usize>,

    /// Cross-tolerance names that matched nothing and were dropped
    pub dropped_cross_tolerances: usize,

    /// Time spent building, in milliseconds
    pub build_time_ms: u64,
}

impl BuildStats {
    /// Record an interaction link
    pub fn record_link(&mut self, severity: Severity) {
        *self.links.entry(severity).or_insert(0) += 1;
    }

    /// Interaction links of one severity
    pub fn links_for(&self, severity: Severity) -> usize {
        self.links.get(&severity).copied().unwrap_or(0)
    }

    /// Interaction links over all severities
    pub fn total_links(&self) -> usize {
        self.links.values().sum()
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Knowledge Graph Summary".to_string(),
            "=======================".to_string(),
            format!("Substances: {}", self.substances),
            format!("Psychoactive classes: {}", self.psychoactive_classes),
            format!("Chemical classes: {}", self.chemical_classes),
            format!("Effects: {}", self.effects),
            format!("Unresolved interaction partners: {}", self.unresolved),
            String::new(),
            "Interaction links:".to_string(),
        ];

        for severity in Severity::ALL {
            lines.push(format!("  {}: {}", severity, self.links_for(severity)));
        }
        lines.push(format!("  Total: {}", self.total_links()));

        if self.duplicate_substances > 0 || self.blank_substances > 0 || self.dropped_cross_tolerances > 0 {
            lines.push(String::new());
            lines.push(format!("Duplicate substances skipped: {}", self.duplicate_substances));
            lines.push(format!("Unnamed substances skipped: {}", self.blank_substances));
            lines.push(format!("Cross-tolerances dropped: {}", self.dropped_cross_tolerances));
        }

        lines.push(String::new());
        lines.push(format!("Build time: {}ms", self.build_time_ms));
        lines.join("\n")
    }
}

/// Outcomes of background refreshes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshMetrics {
    /// Refresh cycles attempted
    pub attempts: usize,

    /// Refreshes that replaced the graph
    pub successes: usize,

    /// Refreshes that left the previous graph in place
    pub failures: usize,

    /// Message of the most recent failure
    pub last_error: Option<String>,
}

impl RefreshMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful refresh
    pub fn record_success(&mut self) {
        self.attempts += 1;
        self.successes += 1;
    }

    /// Record a failed refresh
    pub fn record_failure(&mut self, error: impl Into<String>) {
        self.attempts += 1;
        self.failures += 1;
        self.last_error = Some(error.into());
    }

    /// Reset all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_counting() {
        let mut stats = BuildStats::default();
        stats.record_link(Severity::Dangerous);
        stats.record_link(Severity::Dangerous);
        stats.record_link(Severity::Uncertain);

        assert_eq!(stats.links_for(Severity::Dangerous), 2);
        assert_eq!(stats.links_for(Severity::Unsafe), 0);
        assert_eq!(stats.total_links(), 3);
    }

    #[test]
    fn test_summary_mentions_every_severity() {
        let summary = BuildStats::default().summary();
        assert!(summary.contains("dangerous: 0"));
        assert!(summary.contains("unsafe: 0"));
        assert!(summary.contains("uncertain: 0"));
        assert!(!summary.contains("Duplicate"));
    }

    #[test]
    fn test_summary_reports_skipped_records() {
        let stats = BuildStats {
            blank_substances: 2,
            ..Default::default()
        };
        assert!(stats.summary().contains("Unnamed substances skipped: 2"));
    }

    #[test]
    fn test_refresh_metrics() {
        let mut metrics = RefreshMetrics::new();
        metrics.record_success();
        metrics.record_failure("boom");

        assert_eq!(metrics.attempts, 2);
        assert_eq!(metrics.successes, 1);
        assert_eq!(metrics.failures, 1);
        assert_eq!(metrics.last_error.as_deref(), Some("boom"));

        metrics.reset();
        assert_eq!(metrics, RefreshMetrics::default());
    }
}
