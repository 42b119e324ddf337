//! Isolated test environment with temp directory.

// Not every test crate uses every helper
#![allow(dead_code)]

use super::{QuireCommand, TestDoc};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary vault.
///
/// The temp directory holds the vault, a config file, and an empty `bin`
/// directory used as `PATH`, so converter detection never sees binaries
/// installed on the host machine.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
    vault_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to resolve temp directory");
        let vault_dir = root.join("vault");
        std::fs::create_dir_all(&vault_dir).expect("Failed to create vault");
        std::fs::create_dir_all(root.join("bin")).expect("Failed to create bin");
        Self {
            _temp_dir: temp_dir,
            root,
            vault_dir,
        }
    }

    /// Returns the path to the vault directory.
    pub fn vault_dir(&self) -> &Path {
        &self.vault_dir
    }

    /// Returns the path of the config file passed with `--config`.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Returns the directory used as `PATH`.
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    /// Returns a path inside the scratch area outside the vault.
    pub fn scratch(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Writes the config file.
    pub fn write_config(&self, toml: &str) {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
    }

    /// Adds a document to the vault and returns its path.
    pub fn add_doc(&self, doc: &TestDoc) -> PathBuf {
        self.write_file(doc.name(), &doc.render())
    }

    /// Writes a file into the vault, creating parent folders.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.vault_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads a file from the vault.
    pub fn read_file(&self, name: &str) -> String {
        let path = self.vault_dir.join(name);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Creates a QuireCommand configured for this test environment.
    pub fn cmd(&self) -> QuireCommand {
        QuireCommand::new()
            .dir(&self.vault_dir)
            .config(&self.config_path())
            .env("PATH", self.bin_dir())
    }

    /// Installs a fake pandoc script on the test `PATH`.
    #[cfg(unix)]
    pub fn fake_pandoc(&self, behavior: FakePandoc) -> PathBuf {
        let script = self.bin_dir().join("pandoc");
        let log = self.scratch("pandoc-args.txt");
        let stdin_copy = self.scratch("pandoc-stdin.txt");
        let input_copy = self.scratch("pandoc-input.md");

        let tail = match behavior {
            FakePandoc::Clean => "exit 0".to_string(),
            FakePandoc::Warn(text) => format!("echo '{}' >&2\nexit 0", text),
            FakePandoc::Fail(code, text) => format!("echo '{}' >&2\nexit {}", text, code),
        };
        let body = format!(
            r#"#!/bin/sh
PATH=/usr/bin:/bin
printf '%s\n' "$@" > '{log}'
out=""
last=""
while [ $# -gt 0 ]; do
  if [ "$1" = "-o" ]; then out="$2"; fi
  last="$1"
  shift
done
cat > '{stdin_copy}'
case "$last" in
  *.md) cp "$last" '{input_copy}' ;;
esac
if [ -n "$out" ]; then printf 'converted\n' > "$out"; fi
{tail}
"#,
            log = log.display(),
            stdin_copy = stdin_copy.display(),
            input_copy = input_copy.display(),
            tail = tail,
        );
        write_executable(&script, &body);
        script
    }

    /// Arguments the fake pandoc received, one per line.
    pub fn pandoc_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.scratch("pandoc-args.txt"))
            .expect("fake pandoc was not run")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Text the fake pandoc read from stdin.
    pub fn pandoc_stdin(&self) -> String {
        std::fs::read_to_string(self.scratch("pandoc-stdin.txt")).expect("fake pandoc was not run")
    }

    /// Copy of the Markdown input file the fake pandoc received.
    pub fn pandoc_input(&self) -> String {
        std::fs::read_to_string(self.scratch("pandoc-input.md"))
            .expect("fake pandoc received no input file")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// How the fake pandoc script finishes.
#[derive(Debug, Clone, Copy)]
pub enum FakePandoc {
    Clean,
    Warn(&'static str),
    Fail(i32, &'static str),
}

#[cfg(unix)]
fn write_executable(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, body).expect("Failed to write script");
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("Failed to mark script executable");
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // TestEnv Foundation
    // ===========================================

    #[test]
    fn test_env_creates_vault_directory() {
        let env = TestEnv::new();
        assert!(env.vault_dir().is_dir(), "vault directory should exist");
        assert!(env.bin_dir().is_dir(), "bin directory should exist");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.vault_dir().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.vault_dir().to_string_lossy());
        assert_eq!(args[2], "--config");
    }

    #[test]
    fn test_env_add_doc_creates_nested_file() {
        let env = TestEnv::new();
        let path = env.add_doc(&TestDoc::new("projects/Plan.md").body("x"));

        assert!(path.is_file());
        assert_eq!(env.read_file("projects/Plan.md"), "x");
    }

    #[cfg(unix)]
    #[test]
    fn test_env_fake_pandoc_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let env = TestEnv::new();
        let script = env.fake_pandoc(FakePandoc::Clean);

        let mode = std::fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
