//! Command implementations.
//!
//! Every command renders its answer to a string; the caller decides where it
//! goes.

pub mod check;
pub mod common;
pub mod matrix;
pub mod search;
pub mod show;
pub mod stats;

pub use self::check::execute_check;
pub use self::common::execute_common;
pub use self::matrix::execute_matrix;
pub use self::search::execute_search;
pub use self::show::execute_show;
pub use self::stats::execute_stats;

use crate::cli::Command;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use mixcheck_graph::KnowledgeGraph;

/// Run a query command against `graph`.
pub fn execute(command: Command, graph: &KnowledgeGraph, formatter: &Formatter) -> Result<String> {
    match command {
        Command::Check(args) => execute_check(args, graph, formatter),
        Command::Matrix(args) => execute_matrix(args, graph, formatter),
        Command::Common(args) => execute_common(args, graph, formatter),
        Command::Show(args) => execute_show(args, graph, formatter),
        Command::Search(args) => execute_search(args, graph, formatter),
        Command::Stats => execute_stats(graph, formatter),
        Command::Repl => Err(CliError::InvalidInput(
            "Already in interactive mode".to_string(),
        )),
    }
}
