//! mixcheck CLI - Check how dangerous it is to combine psychoactive substances.

use clap::Parser;
use mixcheck_catalog::FileSource;
use mixcheck_cli::commands;
use mixcheck_cli::repl;
use mixcheck_cli::{logging, Cli, CliError, Command, Config, Formatter};
use mixcheck_graph::GraphHandle;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> mixcheck_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|_| {
            let cfg = Config::default();
            cfg.save().ok();
            cfg
        }),
    };

    logging::init(&config.settings.log_level);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let source = config.resolve_data_path(cli.data).map(FileSource::new);
    let handle = Arc::new(GraphHandle::new(config.graph.clone()));

    if let Some(source) = &source {
        if let Err(e) = handle.reload_from(source) {
            // The REPL can still start and retry with `reload`
            if matches!(cli.command, None | Some(Command::Repl)) {
                eprintln!("{}", formatter.warning(&e.to_string()));
            } else {
                return Err(e.into());
            }
        }
    }

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(handle, source, &config, &formatter).await?;
        }
        Some(cmd) => {
            let graph = handle.current().ok_or(CliError::NotLoaded)?;
            println!("{}", commands::execute(cmd, &graph, &formatter)?);
        }
    }

    Ok(())
}
