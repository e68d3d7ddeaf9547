//! Stats command implementation.

use crate::error::Result;
use crate::output::Formatter;
use mixcheck_graph::KnowledgeGraph;

/// Execute the stats command.
pub fn execute_stats(graph: &KnowledgeGraph, formatter: &Formatter) -> Result<String> {
    formatter.format_stats(graph.stats())
}
