//! Handler for the `config` command.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::ConfigCommand;
use crate::cli::config::Config;

/// Handle the `config` subcommands.
///
/// `set` and `unset` rewrite the file at `config_path`.
pub fn handle_config(command: &ConfigCommand, config: &Config, config_path: &Path) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let rendered = toml::to_string_pretty(config).context("failed to serialize config")?;
            print!("{}", rendered);
        }
        ConfigCommand::Path => println!("{}", config_path.display()),
        ConfigCommand::Get { key } => {
            if let Some(value) = config.get(key)? {
                println!("{}", value);
            }
        }
        ConfigCommand::Set { key, values } => {
            let mut updated = config.clone();
            updated.set_values(key, values)?;
            updated.save(config_path)?;
            println!("Set {}", key);
        }
        ConfigCommand::Unset { key } => {
            let mut updated = config.clone();
            updated.unset(key)?;
            updated.save(config_path)?;
            println!("Unset {}", key);
        }
    }
    Ok(())
}
