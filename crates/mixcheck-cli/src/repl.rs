//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{CheckArgs, Command, CommonArgs, MatrixArgs, SearchArgs, ShowArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use mixcheck_catalog::FileSource;
use mixcheck_graph::{GraphHandle, RefreshWorker};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use std::sync::Arc;

/// Run the interactive REPL.
///
/// When the configuration asks for periodic refresh and a feed file is
/// known, a [`RefreshWorker`] reloads it in the background for as long as
/// the REPL runs.
pub async fn run_repl(
    handle: Arc<GraphHandle>,
    source: Option<FileSource>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", formatter.info("mixcheck REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let worker = match (&source, config.graph.refresh_interval()) {
        (Some(source), Some(interval)) => {
            let mut worker = RefreshWorker::new(source.clone(), handle.clone(), interval);
            Some(tokio::spawn(async move { worker.run().await }))
        }
        _ => None,
    };

    loop {
        let prompt = if handle.is_loaded() {
            "mixcheck> "
        } else {
            "mixcheck (no data)> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Reload) => match reload(&handle, source.as_ref(), formatter) {
                        Ok(message) => println!("{}", message),
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    Ok(ReplCommand::Command(cmd)) => {
                        match execute_repl_command(cmd, &handle, formatter) {
                            Ok(output) => println!("{}", output),
                            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    if let Some(worker) = worker {
        worker.abort();
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Reload,
    Command(Command),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "reload" => Ok(ReplCommand::Reload),
        "stats" => Ok(ReplCommand::Command(Command::Stats)),
        "check" => parse_check_command(&parts[1..]),
        "matrix" => parse_matrix_command(&parts[1..]),
        "common" => parse_common_command(&parts[1..]),
        "show" => parse_show_command(&parts[1..]),
        "search" => parse_search_command(&parts[1..]),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

/// Execute a query command against the graph currently in service.
fn execute_repl_command(cmd: Command, handle: &GraphHandle, formatter: &Formatter) -> Result<String> {
    let graph = handle.current().ok_or(CliError::NotLoaded)?;
    commands::execute(cmd, &graph, formatter)
}

fn reload(handle: &GraphHandle, source: Option<&FileSource>, formatter: &Formatter) -> Result<String> {
    let source = source.ok_or(CliError::NotLoaded)?;
    let stats = handle.reload_from(source)?;
    Ok(formatter.success(&format!(
        "Reloaded {} substances from {}",
        stats.substances,
        source.path().display()
    )))
}

/// Split arguments into substance names.
///
/// Names containing spaces are separated with commas or `+`; without either,
/// every word is its own name.
fn split_names(args: &[&str]) -> Vec<String> {
    let joined = args.join(" ");
    if joined.contains(',') || joined.contains('+') {
        joined
            .split([',', '+'])
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        args.iter().map(|s| s.to_string()).collect()
    }
}

fn parse_check_command(args: &[&str]) -> Result<ReplCommand> {
    let names = split_names(args);
    if names.len() != 2 {
        return Err(CliError::InvalidInput(
            "Usage: check <a> <b>  (or: check <a>, <b> for names with spaces)".to_string(),
        ));
    }

    let mut names = names.into_iter();
    Ok(ReplCommand::Command(Command::Check(CheckArgs {
        a: names.next().unwrap_or_default(),
        b: names.next().unwrap_or_default(),
    })))
}

fn parse_matrix_command(args: &[&str]) -> Result<ReplCommand> {
    let names = split_names(args);
    if names.len() < 2 {
        return Err(CliError::InvalidInput(
            "Usage: matrix <a> <b> [c] ...".to_string(),
        ));
    }

    Ok(ReplCommand::Command(Command::Matrix(MatrixArgs { names })))
}

fn parse_common_command(args: &[&str]) -> Result<ReplCommand> {
    if args.is_empty() {
        return Err(CliError::InvalidInput("Usage: common <name>".to_string()));
    }

    Ok(ReplCommand::Command(Command::Common(CommonArgs {
        name: args.join(" "),
    })))
}

fn parse_show_command(args: &[&str]) -> Result<ReplCommand> {
    if args.is_empty() {
        return Err(CliError::InvalidInput("Usage: show <name>".to_string()));
    }

    Ok(ReplCommand::Command(Command::Show(ShowArgs {
        name: args.join(" "),
    })))
}

fn parse_search_command(args: &[&str]) -> Result<ReplCommand> {
    let (categories, words): (Vec<&str>, Vec<&str>) =
        args.iter().copied().partition(|word| word.starts_with('#'));

    Ok(ReplCommand::Command(Command::Search(SearchArgs {
        query: words.join(" "),
        categories: categories
            .iter()
            .map(|c| c.trim_start_matches('#').to_string())
            .collect(),
        limit: Some(20),
    })))
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("Failed to initialize editor: {}", e),
    ))
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let mixcheck_dir = home.join(".mixcheck");
    std::fs::create_dir_all(&mixcheck_dir)?;
    Ok(mixcheck_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  check <a> <b>                  - Severity of combining two substances");
    println!("  matrix <a> <b> [c] ...         - Every pair among several substances");
    println!("  common <name>                  - Check against commonly co-used substances");
    println!("  show <name>                    - Show what is known about a substance");
    println!("  search [query] [#category]     - Search substances by name and category");
    println!("  stats                          - Statistics of the loaded graph");
    println!("  reload                         - Reload the substance feed now");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
    println!("  Separate names containing spaces with ',' or '+':");
    println!("    check Hormonal birth control, Alcohol");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        match parse_repl_command(line) {
            Ok(ReplCommand::Command(cmd)) => cmd,
            other => panic!("Expected a command, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin_commands() {
        assert!(matches!(parse_repl_command("quit"), Ok(ReplCommand::Exit)));
        assert!(matches!(parse_repl_command("?"), Ok(ReplCommand::Help)));
        assert!(matches!(parse_repl_command("reload"), Ok(ReplCommand::Reload)));
        assert!(matches!(parse("stats"), Command::Stats));
    }

    #[test]
    fn test_check_with_plain_names() {
        match parse("check MDMA Tramadol") {
            Command::Check(args) => {
                assert_eq!(args.a, "MDMA");
                assert_eq!(args.b, "Tramadol");
            }
            other => panic!("Expected Check, got {:?}", other),
        }
    }

    #[test]
    fn test_check_with_separated_names() {
        match parse("check Hormonal birth control + Alcohol") {
            Command::Check(args) => {
                assert_eq!(args.a, "Hormonal birth control");
                assert_eq!(args.b, "Alcohol");
            }
            other => panic!("Expected Check, got {:?}", other),
        }
        assert!(parse_repl_command("check MDMA").is_err());
        assert!(parse_repl_command("check a b c").is_err());
    }

    #[test]
    fn test_matrix_and_show() {
        match parse("matrix MDMA, Alcohol, Grapefruit juice") {
            Command::Matrix(args) => {
                assert_eq!(args.names, vec!["MDMA", "Alcohol", "Grapefruit juice"]);
            }
            other => panic!("Expected Matrix, got {:?}", other),
        }
        match parse("show 2C-B Fly") {
            Command::Show(args) => assert_eq!(args.name, "2C-B Fly"),
            other => panic!("Expected Show, got {:?}", other),
        }
    }

    #[test]
    fn test_search_categories() {
        match parse("search meth #stimulant #common") {
            Command::Search(args) => {
                assert_eq!(args.query, "meth");
                assert_eq!(args.categories, vec!["stimulant", "common"]);
            }
            other => panic!("Expected Search, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            parse_repl_command("mix a b"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_commands_need_a_graph() {
        let handle = GraphHandle::new(mixcheck_graph::GraphConfig::default());
        let formatter = Formatter::new(crate::config::OutputFormat::Quiet, false);
        let result = execute_repl_command(Command::Stats, &handle, &formatter);
        assert!(matches!(result, Err(CliError::NotLoaded)));
        assert!(matches!(reload(&handle, None, &formatter), Err(CliError::NotLoaded)));
    }
}
