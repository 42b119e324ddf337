//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::{ExportMode, OutputFormat};
use output::DisplayFormat;

/// quire - export markdown notes through pandoc
#[derive(Parser, Debug)]
#[command(name = "quire", version, about, long_about = None)]
pub struct Cli {
    /// Vault directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "QUIRE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export a document to another format
    Export(ExportArgs),

    /// List export formats and whether they are available
    Formats(FormatsArgs),

    /// Show detected external binaries
    Features(FeaturesArgs),

    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Document to export (relative to the vault directory)
    pub document: PathBuf,

    /// Target format (see `quire formats`)
    #[arg(short = 'F', long = "to", default_value = "html")]
    pub format: OutputFormat,

    /// Prepare content from rendered HTML or from the Markdown source
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<ExportMode>,

    /// Write exports to this folder instead of next to the document
    #[arg(short, long)]
    pub output_folder: Option<PathBuf>,

    /// Print the pandoc command line
    #[arg(long)]
    pub show_command: bool,
}

/// Arguments for the `formats` command
#[derive(Parser, Debug)]
pub struct FormatsArgs {
    /// Check availability against this document
    #[arg(long)]
    pub document: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = DisplayFormat::Human)]
    pub format: DisplayFormat,
}

/// Arguments for the `features` command
#[derive(Parser, Debug)]
pub struct FeaturesArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = DisplayFormat::Human)]
    pub format: DisplayFormat,
}

/// Subcommands of `config`
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective settings
    Show,

    /// Print the config file location
    Path,

    /// Print one setting
    Get {
        /// Setting key, e.g. `export.mode`
        key: String,
    },

    /// Change one setting
    ///
    /// `export.extra_arguments` takes one value per converter argument.
    Set {
        /// Setting key, e.g. `export.pdf_engine`
        key: String,
        /// New value
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
        values: Vec<String>,
    },

    /// Reset one setting to its default
    Unset {
        /// Setting key
        key: String,
    },
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

fn parse_mode(s: &str) -> Result<ExportMode, String> {
    s.parse()
}
