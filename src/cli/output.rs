//! Output types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Display format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DisplayFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// A registered export command in listing output.
#[derive(Debug, Serialize)]
pub struct FormatListing {
    pub id: String,
    pub command: String,
    pub format: String,
    pub extension: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A capability and where it was found.
#[derive(Debug, Serialize)]
pub struct FeatureListing {
    pub capability: String,
    pub path: Option<String>,
}
