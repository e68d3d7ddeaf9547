//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use mixcheck_graph::KnowledgeGraph;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, graph: &KnowledgeGraph, formatter: &Formatter) -> Result<String> {
    let node = graph
        .substance(&args.name)
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown substance: {}", args.name)))?;
    formatter.format_substance(node, graph)
}
