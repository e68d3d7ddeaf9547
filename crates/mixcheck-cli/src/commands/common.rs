//! Common command implementation.

use crate::cli::CommonArgs;
use crate::error::Result;
use crate::output::Formatter;
use mixcheck_graph::KnowledgeGraph;

/// Execute the common command.
pub fn execute_common(args: CommonArgs, graph: &KnowledgeGraph, formatter: &Formatter) -> Result<String> {
    let interactions = graph.resolver().check_common(&args.name);
    formatter.format_interactions(&interactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use crate::config::OutputFormat;

    #[test]
    fn test_common_lists_known_combinations() {
        let args = CommonArgs {
            name: "MDMA".to_string(),
        };
        let output = execute_common(args, &fixtures::graph(), &Formatter::new(OutputFormat::Quiet, false)).unwrap();
        assert_eq!(output, "unsafe\tMDMA\tAlcohol");
    }

    #[test]
    fn test_common_skips_itself() {
        let args = CommonArgs {
            name: "Alcohol".to_string(),
        };
        let output = execute_common(args, &fixtures::graph(), &Formatter::new(OutputFormat::Quiet, false)).unwrap();
        assert_eq!(output, "uncertain\tAlcohol\tCaffeine");
    }
}
