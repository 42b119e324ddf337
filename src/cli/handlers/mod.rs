//! Command handlers for the CLI.

mod config;
mod export;
mod features;
mod formats;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use config::handle_config;
pub use export::handle_export;
pub use features::handle_features;
pub use formats::handle_formats;

// ===========================================
// Shared Utilities
// ===========================================

/// Absolute path of the vault directory.
pub(crate) fn vault_root(notes_dir: &Path) -> Result<PathBuf> {
    notes_dir
        .canonicalize()
        .with_context(|| format!("vault directory not found: {}", notes_dir.display()))
}

/// Resolves a document argument against the vault root.
pub(crate) fn resolve_document(root: &Path, document: &Path) -> PathBuf {
    if document.is_absolute() {
        document.to_path_buf()
    } else {
        root.join(document)
    }
}
