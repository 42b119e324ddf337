//! A single user-initiated export.

use std::path::{Path, PathBuf};
use thiserror::Error;

use super::format::{OutputFormat, is_supported_input};

/// Error returned when a document cannot be the source of an export.
#[derive(Debug, Error)]
#[error("unsupported input document: {}", path.display())]
pub struct UnsupportedInputError {
    pub path: PathBuf,
}

/// A transient request to export one document to one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    source: PathBuf,
    format: OutputFormat,
}

impl ExportRequest {
    /// Creates a request, rejecting documents without a supported extension.
    pub fn new(
        source: impl Into<PathBuf>,
        format: OutputFormat,
    ) -> Result<Self, UnsupportedInputError> {
        let source = source.into();
        if !is_supported_input(&source) {
            return Err(UnsupportedInputError { path: source });
        }
        Ok(Self { source, format })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    pub fn short_name(&self) -> &'static str {
        self.format.short_name()
    }

    /// Path of the exported file.
    ///
    /// Replaces the source extension with the target one; when an output
    /// folder is given, the file name is placed in that folder instead.
    pub fn output_path(&self, output_folder: Option<&Path>) -> PathBuf {
        let replaced = self.source.with_extension(self.extension());
        match (output_folder, replaced.file_name()) {
            (Some(folder), Some(name)) => folder.join(name),
            _ => replaced,
        }
    }
}
