//! Configuration file support.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::{ExportMode, ExportSettings};
use crate::infra::write_atomic;

/// Keys accepted by `config get/set/unset`.
pub const KEYS: &[&str] = &[
    "dir",
    "export.mode",
    "export.output_folder",
    "export.extra_arguments",
    "export.show_command",
    "export.pandoc",
    "export.pdf_engine",
    "export.timeout_secs",
    "export.theme",
];

/// Application configuration loaded from config file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default vault directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Export settings
    pub export: ExportSettings,
}

impl Config {
    /// Load configuration from `path`, or the default location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))?;
        if config.export.timeout_secs == 0 {
            bail!(
                "invalid config file {}: export.timeout_secs must be at least 1",
                config_path.display()
            );
        }
        Ok(config)
    }

    /// Write the configuration, replacing the file atomically.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("failed to serialize config")?;
        write_atomic(config_path, contents.as_bytes())
            .with_context(|| format!("failed to write config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/quire/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quire")
            .join("config.toml")
    }

    /// Resolve the vault directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Current working directory
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Current value of a setting, `None` when unset.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let export = &self.export;
        let value = match key {
            "dir" => self.dir.as_deref().map(display_path),
            "export.mode" => Some(export.mode.to_string()),
            "export.output_folder" => export.output_folder.as_deref().map(display_path),
            "export.extra_arguments" => Some(export.extra_arguments.clone()),
            "export.show_command" => Some(export.show_command.to_string()),
            "export.pandoc" => export.pandoc.as_deref().map(display_path),
            "export.pdf_engine" => export.pdf_engine.as_deref().map(display_path),
            "export.timeout_secs" => Some(export.timeout_secs.to_string()),
            "export.theme" => export.theme.clone(),
            other => bail!(unknown_key(other)),
        };
        Ok(value)
    }

    /// Change a setting from command-line values.
    ///
    /// `export.extra_arguments` stores one value per line; every other key
    /// takes exactly one value.
    pub fn set_values(&mut self, key: &str, values: &[String]) -> Result<()> {
        if key == "export.extra_arguments" {
            self.export.extra_arguments = values.join("\n");
            return Ok(());
        }
        match values {
            [value] => self.set(key, value),
            _ => bail!("{} takes a single value, got {}", key, values.len()),
        }
    }

    /// Change a setting from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let export = &mut self.export;
        match key {
            "dir" => self.dir = Some(PathBuf::from(value)),
            "export.mode" => {
                export.mode = value.parse::<ExportMode>().map_err(anyhow::Error::msg)?;
            }
            "export.output_folder" => export.output_folder = Some(PathBuf::from(value)),
            "export.extra_arguments" => export.extra_arguments = value.to_string(),
            "export.show_command" => {
                export.show_command = value
                    .parse()
                    .with_context(|| format!("invalid boolean for {}: {}", key, value))?;
            }
            "export.pandoc" => export.pandoc = Some(PathBuf::from(value)),
            "export.pdf_engine" => export.pdf_engine = Some(PathBuf::from(value)),
            "export.timeout_secs" => {
                let secs: u64 = value
                    .parse()
                    .with_context(|| format!("invalid number for {}: {}", key, value))?;
                if secs == 0 {
                    bail!("export.timeout_secs must be at least 1");
                }
                export.timeout_secs = secs;
            }
            "export.theme" => export.theme = Some(value.to_string()),
            other => bail!(unknown_key(other)),
        }
        Ok(())
    }

    /// Reset a setting to its default.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        let defaults = ExportSettings::default();
        let export = &mut self.export;
        match key {
            "dir" => self.dir = None,
            "export.mode" => export.mode = defaults.mode,
            "export.output_folder" => export.output_folder = None,
            "export.extra_arguments" => export.extra_arguments = defaults.extra_arguments,
            "export.show_command" => export.show_command = defaults.show_command,
            "export.pandoc" => export.pandoc = None,
            "export.pdf_engine" => export.pdf_engine = None,
            "export.timeout_secs" => export.timeout_secs = defaults.timeout_secs,
            "export.theme" => export.theme = None,
            other => bail!(unknown_key(other)),
        }
        Ok(())
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

fn unknown_key(key: &str) -> String {
    format!("unknown setting '{}' (expected one of: {})", key, KEYS.join(", "))
}
