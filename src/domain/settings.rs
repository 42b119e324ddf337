//! User-facing export settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default converter timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Where exported content is sourced from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Render the document to HTML first and convert the rendered HTML.
    #[default]
    Html,
    /// Convert the raw Markdown after rewriting embeds and wiki links.
    #[serde(alias = "md", alias = "markdown-preserve")]
    Markdown,
}

impl ExportMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "markdown" | "md" | "markdown-preserve" => Ok(Self::Markdown),
            other => Err(format!(
                "invalid export mode '{}': expected 'html' or 'markdown'",
                other
            )),
        }
    }
}

/// Export configuration, persisted under `[export]` in the config file.
///
/// Read-only for the duration of an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub mode: ExportMode,

    /// Folder receiving exported files instead of the document's folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_folder: Option<PathBuf>,

    /// Extra converter arguments, one token per line.
    pub extra_arguments: String,

    /// Echo the invoked converter command after each export.
    pub show_command: bool,

    /// Converter binary override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pandoc: Option<PathBuf>,

    /// PDF engine binary override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_engine: Option<PathBuf>,

    pub timeout_secs: u64,

    /// Theme for standalone HTML: `default`, `dark`, or a CSS file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            mode: ExportMode::default(),
            output_folder: None,
            extra_arguments: String::new(),
            show_command: false,
            pandoc: None,
            pdf_engine: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: None,
        }
    }
}
