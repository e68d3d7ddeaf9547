//! Check command implementation.

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::output::Formatter;
use mixcheck_graph::KnowledgeGraph;

/// Execute the check command.
pub fn execute_check(args: CheckArgs, graph: &KnowledgeGraph, formatter: &Formatter) -> Result<String> {
    let verdict = graph.resolve(&args.a, &args.b);
    formatter.format_verdict(&args.a, &args.b, verdict)
}
