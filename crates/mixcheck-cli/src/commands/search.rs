//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use mixcheck_graph::KnowledgeGraph;

/// Execute the search command.
pub fn execute_search(args: SearchArgs, graph: &KnowledgeGraph, formatter: &Formatter) -> Result<String> {
    if args.limit == Some(0) {
        return Err(CliError::InvalidInput(
            "Limit must be greater than 0".to_string(),
        ));
    }

    let mut hits = graph.search(&args.query, &args.categories);
    if let Some(limit) = args.limit {
        hits.truncate(limit);
    }

    formatter.format_search(&hits)
}
