//! Decides whether a document can currently be exported to a format.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{Capability, FeatureMap, OutputFormat, is_supported_input};

/// Why an export command is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Ineligible {
    #[error("no document is open")]
    NoDocument,

    #[error("{} is not available", .0.default_binary())]
    MissingCapability(Capability),

    #[error("unsupported input document: {}", .0.display())]
    UnsupportedInput(PathBuf),
}

/// Checks capability requirements and the input type, failing closed.
///
/// Performs no I/O: the document is judged by its extension only.
pub fn check_export(
    document: Option<&Path>,
    format: OutputFormat,
    features: &FeatureMap,
) -> Result<(), Ineligible> {
    let document = document.ok_or(Ineligible::NoDocument)?;
    check_capabilities(format, features)?;
    if !is_supported_input(document) {
        return Err(Ineligible::UnsupportedInput(document.to_path_buf()));
    }

    Ok(())
}

/// Checks only the binaries a format requires.
pub fn check_capabilities(format: OutputFormat, features: &FeatureMap) -> Result<(), Ineligible> {
    if format.needs_converter() && !features.has(Capability::Converter) {
        return Err(Ineligible::MissingCapability(Capability::Converter));
    }
    if format.needs_pdf_engine() && !features.has(Capability::PdfEngine) {
        return Err(Ineligible::MissingCapability(Capability::PdfEngine));
    }
    Ok(())
}

/// Returns true if `document` can be exported to `format` right now.
pub fn can_export(document: Option<&Path>, format: OutputFormat, features: &FeatureMap) -> bool {
    check_export(document, format, features).is_ok()
}
