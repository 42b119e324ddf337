//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `quire` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct QuireCommand {
    args: Vec<String>,
    envs: Vec<(String, OsString)>,
}

impl QuireCommand {
    /// Creates a new command for the `quire` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Sets the `--dir` option to specify the vault directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets the `--config` option.
    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets an environment variable for the process.
    pub fn env(mut self, key: &str, value: impl Into<OsString>) -> Self {
        self.envs.push((key.to_string(), value.into()));
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("quire").expect("Failed to find quire binary");
        cmd.env_remove("RUST_LOG").env_remove("QUIRE_CONFIG");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `export` command.
    pub fn export(self, document: &str, format: &str) -> Self {
        self.args(["export", document, "--to", format])
    }

    /// Configures for the `formats` command.
    pub fn formats(self) -> Self {
        self.args(["formats"])
    }

    /// Configures for the `features` command.
    pub fn features(self) -> Self {
        self.args(["features"])
    }

    /// Configures for a `config` subcommand.
    pub fn config_cmd<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args(["config"]).args(args)
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--mode markdown` to an export.
    pub fn markdown_mode(self) -> Self {
        self.args(["--mode", "markdown"])
    }

    /// Adds `--show-command` to an export.
    pub fn show_command(self) -> Self {
        self.args(["--show-command"])
    }
}

impl Default for QuireCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ===========================================
    // QuireCommand Basics
    // ===========================================

    #[test]
    fn test_command_runs_binary() {
        QuireCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_dir() {
        let temp = TempDir::new().unwrap();
        let cmd = QuireCommand::new().dir(temp.path());
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], temp.path().to_string_lossy());
    }

    #[test]
    fn test_command_output_success() {
        let output = QuireCommand::new().args(["--help"]).output_success();
        assert!(output.contains("quire") || output.contains("export"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = QuireCommand::new().formats().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"formats".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"json".to_string()));
    }
}
