//! Capabilities provided by external binaries.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A named external dependency whose presence gates output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// The document converter (pandoc).
    Converter,
    /// The LaTeX engine used for PDF output.
    PdfEngine,
}

impl Capability {
    pub const ALL: &'static [Capability] = &[Capability::Converter, Capability::PdfEngine];

    /// Stable name used in listings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Converter => "converter",
            Self::PdfEngine => "pdf-engine",
        }
    }

    /// Binary searched for on the system path when no override is set.
    pub fn default_binary(self) -> &'static str {
        match self {
            Self::Converter => "pandoc",
            Self::PdfEngine => "pdflatex",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Resolved location of each available capability.
///
/// A missing entry means the capability is unavailable, which is a normal
/// state rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureMap(BTreeMap<Capability, PathBuf>);

impl FeatureMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the path of an available capability.
    pub fn insert(&mut self, capability: Capability, path: impl Into<PathBuf>) {
        self.0.insert(capability, path.into());
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, capability: Capability, path: impl Into<PathBuf>) -> Self {
        self.insert(capability, path);
        self
    }

    pub fn get(&self, capability: Capability) -> Option<&Path> {
        self.0.get(&capability).map(PathBuf::as_path)
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.0.contains_key(&capability)
    }
}
