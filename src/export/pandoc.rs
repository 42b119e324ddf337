//! Invocation of the external converter.
//!
//! Builds the pandoc argument vector, runs the process through a
//! [`ProcessRunner`], and classifies the result. Pandoc prints plenty of
//! harmless diagnostics on stderr, so stderr alone never fails an export:
//! only a non-zero exit status, a spawn error or a timeout does.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::domain::{Capability, FeatureMap, OutputFormat};

/// Errors from a converter invocation.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The process could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        command: String,
        #[source]
        source: io::Error,
    },

    /// The process exited with a non-zero status.
    #[error("pandoc exited with {status}: {stderr}")]
    Failed {
        status: String,
        stderr: String,
        command: String,
    },

    /// The process did not finish in time and was killed.
    #[error("pandoc timed out after {seconds}s")]
    Timeout { seconds: u64, command: String },
}

impl ConvertError {
    /// The command line that was being run.
    pub fn command(&self) -> &str {
        match self {
            Self::Spawn { command, .. }
            | Self::Failed { command, .. }
            | Self::Timeout { command, .. } => command,
        }
    }
}

/// Content handed to the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    /// A file on disk, passed as the last argument.
    File { path: PathBuf, format: &'static str },
    /// Literal text fed through stdin.
    Text {
        contents: String,
        format: &'static str,
        metadata_file: Option<PathBuf>,
    },
}

impl InputSpec {
    fn format(&self) -> &'static str {
        match self {
            Self::File { format, .. } | Self::Text { format, .. } => format,
        }
    }
}

/// Where and what the converter writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    pub path: PathBuf,
    pub format: OutputFormat,
}

/// Binaries and environment for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterPaths {
    pub pandoc: PathBuf,
    pub pdf_engine: Option<PathBuf>,
    /// Working directory of the process (the source document's folder).
    pub directory: PathBuf,
    pub timeout: Duration,
}

impl ConverterPaths {
    /// Takes binary locations from the feature map.
    ///
    /// Falls back to a bare `pandoc` when the converter was not detected, so
    /// the failure surfaces as a spawn error.
    pub fn from_features(features: &FeatureMap, directory: PathBuf, timeout: Duration) -> Self {
        Self {
            pandoc: features
                .get(Capability::Converter)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(Capability::Converter.default_binary())),
            pdf_engine: features.get(Capability::PdfEngine).map(Path::to_path_buf),
            directory,
            timeout,
        }
    }
}

/// Result of a finished conversion.
///
/// An empty `error` means clean success; otherwise the export succeeded
/// with warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub error: String,
    pub command: String,
}

impl ConversionOutcome {
    pub fn has_warnings(&self) -> bool {
        !self.error.is_empty()
    }
}

/// A fully specified process call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub directory: PathBuf,
    pub stdin: Option<String>,
    pub timeout: Duration,
}

impl Invocation {
    /// Human-readable command line, quoting arguments with whitespace.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.args.iter().cloned())
            .map(|part| quote(&part))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote(part: &str) -> String {
    if part.is_empty() || part.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
        format!("'{}'", part.replace('\'', r"'\''"))
    } else {
        part.to_string()
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `None` when terminated by a signal.
    pub code: Option<i32>,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Errors from running a process.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("timed out")]
    Timeout,
}

/// Spawns processes (allows spying on invocations in tests).
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, RunError>;
}

/// Runs processes with tokio, killing them when the timeout expires.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner;

#[async_trait]
impl ProcessRunner for TokioRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ProcessOutput, RunError> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .current_dir(&invocation.directory)
            .stdin(if invocation.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd.spawn()?;

        if let (Some(text), Some(mut stdin)) = (&invocation.stdin, child.stdin.take()) {
            // Write concurrently with output collection so a full pipe
            // cannot deadlock against pandoc's own writes.
            let text = text.clone();
            tokio::spawn(async move {
                if let Err(e) = stdin.write_all(text.as_bytes()).await {
                    debug!(error = %e, "converter closed stdin early");
                }
            });
        }

        match tokio::time::timeout(invocation.timeout, child.wait_with_output()).await {
            Ok(output) => {
                let output = output?;
                Ok(ProcessOutput {
                    code: output.status.code(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                })
            }
            Err(_) => Err(RunError::Timeout),
        }
    }
}

/// Builds converter calls and classifies their results.
#[derive(Debug, Clone, Default)]
pub struct Converter<R> {
    runner: R,
}

impl<R: ProcessRunner> Converter<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Builds the argument vector.
    ///
    /// `[extra] -f <in> -t <writer> [-s] -o <out> [--metadata-file <m>]
    /// [--pdf-engine=<engine>] [<input file>]`
    pub fn build_args(
        input: &InputSpec,
        output: &OutputSpec,
        extra_args: &[String],
        paths: &ConverterPaths,
    ) -> Vec<String> {
        let mut args = extra_args.to_vec();
        args.extend([
            "-f".to_string(),
            input.format().to_string(),
            "-t".to_string(),
            output.format.writer().to_string(),
        ]);
        if output.format.standalone() {
            args.push("-s".to_string());
        }
        args.extend(["-o".to_string(), output.path.to_string_lossy().into_owned()]);

        if let InputSpec::Text {
            metadata_file: Some(metadata),
            ..
        } = input
        {
            args.extend([
                "--metadata-file".to_string(),
                metadata.to_string_lossy().into_owned(),
            ]);
        }
        if let Some(engine) = paths.pdf_engine.as_ref().filter(|_| output.format.needs_pdf_engine()) {
            args.push(format!("--pdf-engine={}", engine.to_string_lossy()));
        }
        if let InputSpec::File { path, .. } = input {
            args.push(path.to_string_lossy().into_owned());
        }
        args
    }

    /// Assembles the process call for an input/output pair.
    pub fn invocation(
        input: &InputSpec,
        output: &OutputSpec,
        extra_args: &[String],
        paths: &ConverterPaths,
    ) -> Invocation {
        Invocation {
            program: paths.pandoc.clone(),
            args: Self::build_args(input, output, extra_args, paths),
            directory: paths.directory.clone(),
            stdin: match input {
                InputSpec::Text { contents, .. } => Some(contents.clone()),
                InputSpec::File { .. } => None,
            },
            timeout: paths.timeout,
        }
    }

    /// Runs the converter once.
    ///
    /// Returns the stderr text as warnings on a zero exit status.
    pub async fn invoke(
        &self,
        input: &InputSpec,
        output: &OutputSpec,
        extra_args: &[String],
        paths: &ConverterPaths,
    ) -> Result<ConversionOutcome, ConvertError> {
        let invocation = Self::invocation(input, output, extra_args, paths);
        let command = invocation.command_line();
        info!(%command, directory = %invocation.directory.display(), "running converter");

        let result = match self.runner.run(&invocation).await {
            Ok(result) => result,
            Err(RunError::Io(source)) => {
                return Err(ConvertError::Spawn {
                    program: invocation.program.to_string_lossy().into_owned(),
                    command,
                    source,
                });
            }
            Err(RunError::Timeout) => {
                return Err(ConvertError::Timeout {
                    seconds: invocation.timeout.as_secs(),
                    command,
                });
            }
        };

        let stderr = result.stderr.trim().to_string();
        if !result.success() {
            let status = match result.code {
                Some(code) => format!("exit code {}", code),
                None => "a signal".to_string(),
            };
            return Err(ConvertError::Failed {
                status,
                stderr,
                command,
            });
        }

        if !stderr.is_empty() {
            warn!(%command, warnings = %stderr, "converter reported warnings");
        }
        Ok(ConversionOutcome {
            error: stderr,
            command,
        })
    }
}
