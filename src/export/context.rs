//! Session state shared by every export.

use std::path::{Path, PathBuf};

use crate::domain::{ExportSettings, FeatureMap};

use super::features::{PathProbe, detect_features};

/// Settings, detected features and project root for one session.
///
/// Built once at startup and read-only during exports. A settings change
/// produces a new context through [`reload`](Self::reload) rather than
/// mutating this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportContext {
    settings: ExportSettings,
    features: FeatureMap,
    project_root: PathBuf,
}

impl ExportContext {
    pub fn new(settings: ExportSettings, features: FeatureMap, project_root: PathBuf) -> Self {
        Self {
            settings,
            features,
            project_root,
        }
    }

    /// Builds a context, probing for external binaries.
    pub fn detect<P: PathProbe>(
        settings: ExportSettings,
        project_root: PathBuf,
        probe: &P,
    ) -> Self {
        let features = detect_features(&settings, probe);
        Self::new(settings, features, project_root)
    }

    /// Replaces the settings wholesale and re-probes features.
    pub fn reload<P: PathProbe>(&self, settings: ExportSettings, probe: &P) -> Self {
        Self::detect(settings, self.project_root.clone(), probe)
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    pub fn features(&self) -> &FeatureMap {
        &self.features
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Configured output folder, resolved against the project root.
    pub fn output_folder(&self) -> Option<PathBuf> {
        self.settings
            .output_folder
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|folder| self.project_root.join(folder))
    }
}
