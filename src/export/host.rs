//! The editor-side collaborator export depends on.
//!
//! The engine never reads or renders documents itself: it asks a
//! [`DocumentHost`] for the active document, its raw text, and its rendered
//! HTML. [`VaultHost`] is the host used by the command-line binary.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::debug;

use crate::domain::OutputFormat;
use crate::infra::{FrontmatterError, FsError, read_document, split_frontmatter};

use super::html::markdown_to_html;
use super::template::render_page;
use super::theme::theme_css;
use super::transform::transform_embeds_and_links;

/// Errors raised by a host while reading or rendering a document.
#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("failed to parse frontmatter of {path}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },

    #[error("failed to read theme {path}: {source}")]
    Theme {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// A document rendered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub html: String,
    /// Metadata handed to the converter through `--metadata-file`.
    pub metadata: Mapping,
}

/// Capabilities the export engine needs from its host editor.
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// Path of the currently active document, if any.
    fn active_document(&self) -> Option<PathBuf>;

    /// Renders a document to HTML, along with its metadata.
    async fn render_html(
        &self,
        document: &Path,
        format: OutputFormat,
    ) -> Result<RenderedDocument, HostError>;

    /// Reads the raw source text of a document.
    async fn read_source(&self, document: &Path) -> Result<String, HostError>;
}

/// Host backed by a directory of Markdown files.
#[derive(Debug, Clone)]
pub struct VaultHost {
    root: PathBuf,
    active: Option<PathBuf>,
    theme: Option<String>,
}

impl VaultHost {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            active: None,
            theme: None,
        }
    }

    /// Opens a document, making it the active one.
    pub fn with_active(mut self, document: impl Into<PathBuf>) -> Self {
        self.active = Some(document.into());
        self
    }

    /// Theme used for standalone HTML pages.
    pub fn with_theme(mut self, theme: Option<String>) -> Self {
        self.theme = theme;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl DocumentHost for VaultHost {
    fn active_document(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    async fn render_html(
        &self,
        document: &Path,
        format: OutputFormat,
    ) -> Result<RenderedDocument, HostError> {
        let source = read_document(document).await?;
        let split = split_frontmatter(&source).map_err(|source| HostError::Frontmatter {
            path: document.to_path_buf(),
            source,
        })?;

        let mut metadata = split.metadata;
        let title_key = Value::from("title");
        if !metadata.contains_key(&title_key) {
            let stem = document
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            metadata.insert(title_key.clone(), Value::from(stem));
        }

        let fragment = markdown_to_html(&transform_embeds_and_links(split.body));

        let html = if format == OutputFormat::Html {
            let title = match metadata.get(&title_key) {
                Some(Value::String(s)) => s.clone(),
                Some(other) => serde_yaml::to_string(other)
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default(),
                None => String::new(),
            };
            let css = theme_css(self.theme.as_deref(), &self.root)?;
            render_page(&title, &fragment, &css)?
        } else {
            fragment
        };

        debug!(document = %document.display(), %format, bytes = html.len(), "rendered document");
        Ok(RenderedDocument { html, metadata })
    }

    async fn read_source(&self, document: &Path) -> Result<String, HostError> {
        Ok(read_document(document).await?)
    }
}
