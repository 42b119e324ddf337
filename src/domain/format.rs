//! Output formats offered for export and the input types they accept.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// File extensions (without the dot) that can be exported.
pub const INPUT_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Returns true if the path has a supported input extension.
pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| INPUT_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)))
}

/// A target format for export.
///
/// Every variant carries static metadata: a human-readable name, the
/// identifier pandoc uses for it, the extension of the written file, and a
/// short code shown in messages.
///
/// # Examples
///
/// ```
/// use quire::domain::OutputFormat;
///
/// let format: OutputFormat = "docx".parse().unwrap();
/// assert_eq!(format.pretty_name(), "Word Document (docx)");
/// assert_eq!(format.extension(), "docx");
/// assert!(format.needs_converter());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputFormat {
    AsciiDoc,
    Docx,
    Markdown,
    Html,
    Latex,
    Odt,
    Pptx,
    Epub,
    Pdf,
    RevealJs,
    Beamer,
    Rst,
    DokuWiki,
    MediaWiki,
}

/// Error returned when parsing an unknown format identifier.
#[derive(Debug, Clone)]
pub struct ParseFormatError(String);

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown output format '{}'", self.0)
    }
}

impl std::error::Error for ParseFormatError {}

impl OutputFormat {
    /// All formats in registration order.
    pub const ALL: &'static [OutputFormat] = &[
        OutputFormat::AsciiDoc,
        OutputFormat::Docx,
        OutputFormat::Markdown,
        OutputFormat::Html,
        OutputFormat::Latex,
        OutputFormat::Odt,
        OutputFormat::Pptx,
        OutputFormat::Epub,
        OutputFormat::Pdf,
        OutputFormat::RevealJs,
        OutputFormat::Beamer,
        OutputFormat::Rst,
        OutputFormat::DokuWiki,
        OutputFormat::MediaWiki,
    ];

    /// Human-readable name, used in command names.
    pub fn pretty_name(self) -> &'static str {
        match self {
            Self::AsciiDoc => "AsciiDoc (adoc)",
            Self::Docx => "Word Document (docx)",
            Self::Markdown => "Pandoc Markdown",
            Self::Html => "HTML (without Pandoc)",
            Self::Latex => "LaTeX",
            Self::Odt => "OpenDocument (odt)",
            Self::Pptx => "PowerPoint (pptx)",
            Self::Epub => "ePub",
            Self::Pdf => "PDF (via LaTeX)",
            Self::RevealJs => "Reveal.js Slides",
            Self::Beamer => "Beamer Slides",
            Self::Rst => "reStructured Text (RST)",
            Self::DokuWiki => "DokuWiki",
            Self::MediaWiki => "MediaWiki",
        }
    }

    /// The converter's identifier for this format. Unique across formats.
    pub fn id(self) -> &'static str {
        match self {
            Self::AsciiDoc => "asciidoc",
            Self::Docx => "docx",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Latex => "latex",
            Self::Odt => "odt",
            Self::Pptx => "pptx",
            Self::Epub => "epub",
            Self::Pdf => "pdf",
            Self::RevealJs => "revealjs",
            Self::Beamer => "beamer",
            Self::Rst => "rst",
            Self::DokuWiki => "dokuwiki",
            Self::MediaWiki => "mediawiki",
        }
    }

    /// Extension of the written file, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::AsciiDoc => "adoc",
            Self::Docx => "docx",
            Self::Markdown => "pandoc.md",
            Self::Html => "html",
            Self::Latex => "tex",
            Self::Odt => "odt",
            Self::Pptx => "pptx",
            Self::Epub => "epub",
            Self::Pdf => "pdf",
            Self::RevealJs => "reveal.html",
            Self::Beamer => "tex",
            Self::Rst => "rst",
            Self::DokuWiki => "txt",
            Self::MediaWiki => "mediawiki",
        }
    }

    /// Short display code shown in progress messages.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::AsciiDoc => "AsciiDoc",
            Self::Docx => "Word",
            Self::Markdown => "markdown",
            Self::Html => "HTML",
            Self::Latex => "LaTeX",
            Self::Odt => "OpenDocument",
            Self::Pptx => "PowerPoint",
            Self::Epub => "ePub",
            Self::Pdf => "PDF",
            Self::RevealJs => "Reveal.js",
            Self::Beamer => "Beamer",
            Self::Rst => "RST",
            Self::DokuWiki => "DokuWiki",
            Self::MediaWiki => "MediaWiki",
        }
    }

    /// The `-t` value passed to pandoc.
    ///
    /// PDF goes through the LaTeX writer; pandoc picks the PDF engine from
    /// the `.pdf` output extension.
    pub fn writer(self) -> &'static str {
        match self {
            Self::Pdf => "latex",
            other => other.id(),
        }
    }

    /// Whether the external converter is required.
    pub fn needs_converter(self) -> bool {
        self != Self::Html
    }

    /// Whether a PDF engine is required.
    pub fn needs_pdf_engine(self) -> bool {
        self == Self::Pdf
    }

    /// Whether pandoc should produce a standalone document (`-s`).
    pub fn standalone(self) -> bool {
        matches!(
            self,
            Self::Html | Self::RevealJs | Self::Latex | Self::Beamer | Self::Pdf | Self::AsciiDoc
        )
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseFormatError(needle.to_string()))
    }
}

impl Serialize for OutputFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.id())
    }
}
