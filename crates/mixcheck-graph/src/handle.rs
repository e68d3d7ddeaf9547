//! Shared, swappable access to the current graph
//!
//! One writer replaces the graph, any number of readers query it. Readers
//! take an `Arc` snapshot and keep it for as long as they like; a refresh
//! builds its replacement off to the side and swaps the pointer under a
//! short write lock.

use crate::{BuildStats, GraphBuilder, GraphConfig, GraphError, KnowledgeGraph};
use mixcheck_domain::traits::SubstanceSource;
use mixcheck_domain::{Severity, Substance};
use std::fmt::Display;
use std::sync::{Arc, PoisonError, RwLock};

/// Holder of the graph currently in service
///
/// # Examples
///
/// ```
/// use mixcheck_domain::Substance;
/// use mixcheck_graph::{GraphConfig, GraphHandle};
///
/// let handle = GraphHandle::new(GraphConfig::default());
/// assert!(handle.current().is_none());
///
/// // Too small: rejected, nothing loaded
/// assert!(handle.refresh(vec![Substance::new("Caffeine")]).is_err());
/// assert!(!handle.is_loaded());
/// ```
#[derive(Debug)]
pub struct GraphHandle {
    builder: GraphBuilder,
    current: RwLock<Option<Arc<KnowledgeGraph>>>,
}

impl GraphHandle {
    /// Create an empty handle that builds graphs with `config`
    pub fn new(config: GraphConfig) -> Self {
        Self {
            builder: GraphBuilder::new(config),
            current: RwLock::new(None),
        }
    }

    /// Create a handle already serving `graph`
    pub fn with_graph(config: GraphConfig, graph: KnowledgeGraph) -> Self {
        Self {
            builder: GraphBuilder::new(config),
            current: RwLock::new(Some(Arc::new(graph))),
        }
    }

    /// Snapshot of the graph in service, if any has been loaded
    pub fn current(&self) -> Option<Arc<KnowledgeGraph>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a graph has been loaded
    pub fn is_loaded(&self) -> bool {
        self.current().is_some()
    }

    /// Configuration used for rebuilds
    pub fn config(&self) -> &GraphConfig {
        self.builder.config()
    }

    /// Build a graph from `substances` and put it in service
    ///
    /// On failure the graph in service stays untouched.
    pub fn refresh(&self, substances: Vec<Substance>) -> Result<BuildStats, GraphError> {
        let graph = match self.builder.build(substances) {
            Ok(graph) => graph,
            Err(e) => {
                tracing::warn!("Refresh rejected, keeping previous graph: {}", e);
                return Err(e);
            }
        };

        let stats = graph.stats().clone();
        let previous = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(Arc::new(graph));

        tracing::info!(
            "Graph swapped in: {} substances (previous: {})",
            stats.substances,
            previous.map_or(0, |g| g.len())
        );
        Ok(stats)
    }

    /// Load substances from `source` and refresh with them
    pub fn reload_from<S>(&self, source: &S) -> Result<BuildStats, GraphError>
    where
        S: SubstanceSource,
        S::Error: Display,
    {
        let substances = source
            .load_substances()
            .map_err(|e| GraphError::Source(e.to_string()))?;
        self.refresh(substances)
    }

    /// Resolve `a` and `b` against the graph in service
    ///
    /// Returns `None` when nothing is loaded.
    pub fn resolve(&self, a: &str, b: &str) -> Option<Severity> {
        self.current().and_then(|graph| graph.resolve(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(size: usize) -> Vec<Substance> {
        (0..size)
            .map(|i| Substance::new(format!("Filler {}", i)))
            .collect()
    }

    struct FailingSource;

    impl SubstanceSource for FailingSource {
        type Error = String;

        fn load_substances(&self) -> Result<Vec<Substance>, Self::Error> {
            Err("feed unavailable".to_string())
        }
    }

    #[test]
    fn test_refresh_swaps_graph() {
        let handle = GraphHandle::new(GraphConfig::default());
        let stats = handle.refresh(feed(50)).unwrap();
        assert_eq!(stats.substances, 50);
        assert_eq!(handle.current().unwrap().len(), 50);

        handle.refresh(feed(60)).unwrap();
        assert_eq!(handle.current().unwrap().len(), 60);
    }

    #[test]
    fn test_readers_keep_their_snapshot() {
        let handle = GraphHandle::new(GraphConfig::default());
        handle.refresh(feed(50)).unwrap();
        let snapshot = handle.current().unwrap();

        handle.refresh(feed(70)).unwrap();
        assert_eq!(snapshot.len(), 50);
        assert_eq!(handle.current().unwrap().len(), 70);
    }

    #[test]
    fn test_source_error_keeps_graph() {
        let handle = GraphHandle::new(GraphConfig::default());
        handle.refresh(feed(55)).unwrap();

        let result = handle.reload_from(&FailingSource);
        assert_eq!(result, Err(GraphError::Source("feed unavailable".to_string())));
        assert_eq!(handle.current().unwrap().len(), 55);
    }

    #[test]
    fn test_reload_from_vec_source() {
        let handle = GraphHandle::new(GraphConfig::default());
        let stats = handle.reload_from(&feed(52)).unwrap();
        assert_eq!(stats.substances, 52);
        assert!(handle.is_loaded());
    }

    #[test]
    fn test_resolve_without_graph() {
        let handle = GraphHandle::new(GraphConfig::default());
        assert_eq!(handle.resolve("MDMA", "Tramadol"), None);
    }
}
