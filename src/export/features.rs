//! Detection of the external binaries export depends on.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{Capability, ExportSettings, FeatureMap};

/// Looks up a binary by name (allows faking the system path in tests).
pub trait PathProbe {
    fn lookup(&self, binary: &str) -> Option<PathBuf>;
}

/// Searches the directories listed in `PATH`.
#[derive(Debug, Clone, Default)]
pub struct SystemPath {
    path: Option<OsString>,
}

impl SystemPath {
    /// Probe over the current process's `PATH`.
    pub fn new() -> Self {
        Self {
            path: env::var_os("PATH"),
        }
    }

    /// Probe over an explicit `PATH`-style list.
    pub fn with_path(path: impl Into<OsString>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl PathProbe for SystemPath {
    fn lookup(&self, binary: &str) -> Option<PathBuf> {
        let path = self.path.as_ref()?;
        env::split_paths(path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| candidates(&dir, binary))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(windows)]
fn candidates(dir: &Path, binary: &str) -> Vec<PathBuf> {
    let exts = env::var("PATHEXT").unwrap_or_else(|_| ".EXE;.CMD;.BAT;.COM".to_string());
    std::iter::once(dir.join(binary))
        .chain(
            exts.split(';')
                .filter(|e| !e.is_empty())
                .map(|ext| dir.join(format!("{}{}", binary, ext.to_ascii_lowercase()))),
        )
        .collect()
}

#[cfg(not(windows))]
fn candidates(dir: &Path, binary: &str) -> Vec<PathBuf> {
    vec![dir.join(binary)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Builds the feature map for a session.
///
/// For each capability the configured override wins when set; otherwise the
/// probe searches for the default binary. A capability found nowhere is
/// simply absent from the map.
pub fn detect_features<P: PathProbe>(settings: &ExportSettings, probe: &P) -> FeatureMap {
    let mut features = FeatureMap::new();

    for &capability in Capability::ALL {
        let configured = match capability {
            Capability::Converter => settings.pandoc.as_deref(),
            Capability::PdfEngine => settings.pdf_engine.as_deref(),
        }
        .filter(|p| !p.as_os_str().is_empty());

        let resolved = match configured {
            Some(path) => Some(path.to_path_buf()),
            None => probe.lookup(capability.default_binary()),
        };

        match resolved {
            Some(path) => {
                debug!(capability = %capability, path = %path.display(), "capability available");
                features.insert(capability, path);
            }
            None => debug!(capability = %capability, "capability unavailable"),
        }
    }

    features
}
