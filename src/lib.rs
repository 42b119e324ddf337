//! quire - export markdown notes to other formats through pandoc

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_config, handle_export, handle_features, handle_formats},
};

/// Main entry point for the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;
    let notes_dir = config.notes_dir(cli.dir.as_ref());

    match &cli.command {
        Command::Export(args) => handle_export(args, &notes_dir, &config).await,
        Command::Formats(args) => handle_formats(args, &notes_dir, &config),
        Command::Features(args) => handle_features(args, &config),
        Command::Config(command) => handle_config(command, &config, &config_path),
        Command::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "quire",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
