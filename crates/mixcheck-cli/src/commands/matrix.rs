//! Matrix command implementation.

use crate::cli::MatrixArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use mixcheck_graph::KnowledgeGraph;

/// Execute the matrix command.
pub fn execute_matrix(args: MatrixArgs, graph: &KnowledgeGraph, formatter: &Formatter) -> Result<String> {
    if args.names.len() < 2 {
        return Err(CliError::InvalidInput(
            "Matrix needs at least two substances".to_string(),
        ));
    }

    let interactions = graph.resolver().interactions_among(&args.names);
    formatter.format_interactions(&interactions)
}
