//! mixcheck Graph
//!
//! In-memory knowledge graph of psychoactive substances and the interaction
//! resolver that answers "how dangerous is taking A with B?".
//!
//! # Overview
//!
//! The graph is responsible for:
//! - **Unification**: one entity per psychoactive class, chemical class and
//!   effect, however many substances mention it
//! - **Linking**: cross-tolerance and interaction names placed on classes,
//!   substances or shared placeholders for names nothing matches
//! - **Resolution**: the worst applicable severity for two names, known or not
//! - **Refresh**: replacing the graph in service without disturbing readers
//!
//! # Usage
//!
//! ## One-time Build
//!
//! ```
//! use mixcheck_domain::{Severity, Substance};
//! use mixcheck_graph::GraphBuilder;
//!
//! let mut feed: Vec<Substance> = (0..50).map(|i| Substance::new(format!("Filler {}", i))).collect();
//! feed.push(Substance::new("Phenelzine").with_interactions(Severity::Dangerous, ["Serotonin releasers"]));
//! feed.push(Substance::new("MDMA"));
//!
//! let graph = GraphBuilder::default_config().build(feed).unwrap();
//! assert_eq!(graph.resolve("MDMA", "Phenelzine"), Some(Severity::Dangerous));
//! println!("{}", graph.stats().summary());
//! ```
//!
//! ## Background Refresh
//!
//! ```no_run
//! use mixcheck_graph::{GraphConfig, GraphHandle, RefreshWorker};
//! use mixcheck_domain::Substance;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = GraphConfig::default();
//!     let handle = Arc::new(GraphHandle::new(config.clone()));
//!     let source: Vec<Substance> = Vec::new();
//!
//!     if let Some(interval) = config.refresh_interval() {
//!         let mut worker = RefreshWorker::new(source, handle.clone(), interval);
//!         worker.run().await;
//!     }
//! }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [graph]
//! min_substances = 50
//! refresh_interval_secs = 3600
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod arena;
mod builder;
mod config;
mod entity;
mod error;
mod graph;
mod handle;
mod resolver;
mod search;
mod stats;
mod worker;

pub use builder::GraphBuilder;
pub use config::GraphConfig;
pub use entity::{
    ChemicalClass, ChemicalClassId, CrossTolerance, Effect, EffectId, InteractionBucket,
    PsychoactiveClass, PsychoactiveClassId, SubstanceId, SubstanceNode, TargetRef,
    UnresolvedId, UnresolvedInteraction,
};
pub use error::GraphError;
pub use graph::KnowledgeGraph;
pub use handle::GraphHandle;
pub use resolver::{InteractionResolver, COMMON_COMBINATIONS};
pub use stats::{BuildStats, RefreshMetrics};
pub use worker::RefreshWorker;
