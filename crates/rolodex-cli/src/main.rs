mod commands;
mod console;
mod error;
mod session;
mod target;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::console::LineConsole;
use crate::error::{exit_code_for, report_error};
use crate::session::Session;
use crate::target::{open_store, resolve_target};
use rolodex_config as config;

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "Interactive contact book")]
struct Cli {
    /// Database file to open (created when missing)
    #[arg(long, conflicts_with = "in_memory")]
    db_path: Option<PathBuf>,
    /// Keep contacts in memory only; they are lost on exit
    #[arg(long)]
    in_memory: bool,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        in_memory,
        config: config_path,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let target = resolve_target(in_memory, db_path, &app_config.storage)?;
    let store = open_store(&target)?;

    let mut console = LineConsole::stdio();
    Session::new(&store, &mut console)
        .run()
        .with_context(|| "interactive session")
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
