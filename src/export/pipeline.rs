//! The export flow: prepare content, convert, report.
//!
//! ```text
//! Idle -> Preparing -> Converting -> Succeeded
//!                 \              \-> SucceededWithWarnings
//!                  \-> Succeeded (HTML written directly)
//!          any step fails ------> Failed
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::domain::{ExportMode, ExportRequest, OutputFormat};
use crate::infra::{FsError, write_atomic};

use super::args::{resolve_args, split_arg_lines};
use super::context::ExportContext;
use super::host::{DocumentHost, HostError};
use super::notify::{Notification, NotificationKind, Notifier};
use super::pandoc::{
    ConversionOutcome, ConvertError, Converter, ConverterPaths, InputSpec, OutputSpec,
    ProcessRunner,
};
use super::transform::transform_embeds_and_links;

/// Errors that abort an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("failed to create temporary file: {0}")]
    TempFile(#[source] io::Error),

    #[error("failed to serialize metadata: {0}")]
    Metadata(#[from] serde_yaml::Error),

    #[error("output write did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// States of the export flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportState {
    Idle,
    Preparing,
    Converting,
    Succeeded,
    SucceededWithWarnings,
    Failed,
}

impl ExportState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Succeeded | Self::SucceededWithWarnings | Self::Failed
        )
    }
}

impl fmt::Display for ExportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Preparing => "preparing",
            Self::Converting => "converting",
            Self::Succeeded => "succeeded",
            Self::SucceededWithWarnings => "succeeded_with_warnings",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Summary of a finished export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub state: ExportState,
    pub output: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportReport {
    pub fn succeeded(&self) -> bool {
        self.state != ExportState::Failed
    }
}

enum Completion {
    /// The HTML page was written without the converter.
    Written,
    Converted(ConversionOutcome),
}

/// Runs exports against a host, a converter and a notification sink.
pub struct Exporter<'a, H, R, N> {
    context: &'a ExportContext,
    host: &'a H,
    converter: Converter<R>,
    notifier: &'a N,
}

impl<'a, H, R, N> Exporter<'a, H, R, N>
where
    H: DocumentHost,
    R: ProcessRunner,
    N: Notifier,
{
    pub fn new(context: &'a ExportContext, host: &'a H, runner: R, notifier: &'a N) -> Self {
        Self {
            context,
            host,
            converter: Converter::new(runner),
            notifier,
        }
    }

    pub fn context(&self) -> &ExportContext {
        self.context
    }

    pub fn host(&self) -> &H {
        self.host
    }

    pub fn converter(&self) -> &Converter<R> {
        &self.converter
    }

    /// Exports one document.
    ///
    /// Never returns an error: failures end in [`ExportState::Failed`] with
    /// one failure notification. Temporary files are removed on every path.
    pub async fn export(&self, request: &ExportRequest) -> ExportReport {
        let output = request.output_path(self.context.output_folder().as_deref());
        let show_command = self.context.settings().show_command;

        self.notify(
            NotificationKind::Info,
            format!(
                "Exporting {} to {}",
                request.source().display(),
                request.short_name()
            ),
        );
        debug!(state = %ExportState::Idle, source = %request.source().display(), format = %request.format());

        let report = match self.run(request, &output).await {
            Ok(Completion::Written) => {
                self.notify(
                    NotificationKind::Success,
                    format!("Successfully exported to {}", output.display()),
                );
                ExportReport {
                    state: ExportState::Succeeded,
                    output,
                    command: None,
                    warnings: None,
                    error: None,
                }
            }
            Ok(Completion::Converted(outcome)) if outcome.has_warnings() => {
                self.notify(
                    NotificationKind::Success,
                    format!("Exported to {} with warnings", output.display()),
                );
                self.notify(
                    NotificationKind::Warning,
                    format!("Pandoc warnings: {}", outcome.error),
                );
                ExportReport {
                    state: ExportState::SucceededWithWarnings,
                    output,
                    command: Some(outcome.command),
                    warnings: Some(outcome.error),
                    error: None,
                }
            }
            Ok(Completion::Converted(outcome)) => {
                self.notify(
                    NotificationKind::Success,
                    format!("Successfully exported to {}", output.display()),
                );
                ExportReport {
                    state: ExportState::Succeeded,
                    output,
                    command: Some(outcome.command),
                    warnings: None,
                    error: None,
                }
            }
            Err(err) => {
                error!(error = %err, source = %request.source().display(), "export failed");
                self.notify(NotificationKind::Failure, format!("Export failed: {}", err));
                let command = match &err {
                    ExportError::Convert(convert) => Some(convert.command().to_string()),
                    _ => None,
                };
                ExportReport {
                    state: ExportState::Failed,
                    output,
                    command,
                    warnings: None,
                    error: Some(err.to_string()),
                }
            }
        };

        if let Some(command) = report.command.as_ref().filter(|_| show_command) {
            self.notify(NotificationKind::Command, format!("Pandoc command: {}", command));
        }

        info!(state = %report.state, output = %report.output.display(), "export finished");
        report
    }

    async fn run(&self, request: &ExportRequest, output: &Path) -> Result<Completion, ExportError> {
        debug!(state = %ExportState::Preparing);
        let settings = self.context.settings();
        let source = request.source();
        let format = request.format();

        match settings.mode {
            ExportMode::Html => {
                let rendered = self.host.render_html(source, format).await?;

                if format == OutputFormat::Html {
                    write_output(output, rendered.html).await?;
                    return Ok(Completion::Written);
                }

                let metadata_file = scratch_file(".yaml")?;
                let yaml = serde_yaml::to_string(&rendered.metadata)?;
                write_scratch(&metadata_file, yaml).await?;

                let input = InputSpec::Text {
                    contents: rendered.html,
                    format: "html",
                    metadata_file: Some(metadata_file.path().to_path_buf()),
                };
                let outcome = self.convert(request, &input, output).await?;
                Ok(Completion::Converted(outcome))
            }
            ExportMode::Markdown => {
                let text = self.host.read_source(source).await?;
                let content_file = scratch_file(".md")?;
                write_scratch(&content_file, transform_embeds_and_links(&text)).await?;

                let input = InputSpec::File {
                    path: content_file.path().to_path_buf(),
                    format: "markdown",
                };
                let outcome = self.convert(request, &input, output).await?;
                Ok(Completion::Converted(outcome))
            }
        }
    }

    async fn convert(
        &self,
        request: &ExportRequest,
        input: &InputSpec,
        output: &Path,
    ) -> Result<ConversionOutcome, ExportError> {
        let settings = self.context.settings();
        let extra_args = resolve_args(
            &split_arg_lines(&settings.extra_arguments),
            self.context.project_root(),
        );
        let directory = request
            .source()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.context.project_root().to_path_buf());
        let paths = ConverterPaths::from_features(
            self.context.features(),
            directory,
            Duration::from_secs(settings.timeout_secs),
        );

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FsError::from_io(parent, e))?;
        }

        debug!(state = %ExportState::Converting);
        let spec = OutputSpec {
            path: output.to_path_buf(),
            format: request.format(),
        };
        Ok(self
            .converter
            .invoke(input, &spec, &extra_args, &paths)
            .await?)
    }

    fn notify(&self, kind: NotificationKind, message: String) {
        self.notifier.notify(Notification::new(kind, message));
    }
}

/// A temporary file removed when dropped.
fn scratch_file(suffix: &str) -> Result<NamedTempFile, ExportError> {
    tempfile::Builder::new()
        .prefix("quire-")
        .suffix(suffix)
        .tempfile()
        .map_err(ExportError::TempFile)
}

/// Atomic write of the final output, off the async worker threads.
async fn write_output(path: &Path, contents: String) -> Result<(), ExportError> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || write_atomic(&path, contents.as_bytes())).await??;
    Ok(())
}

async fn write_scratch(file: &NamedTempFile, contents: String) -> Result<(), FsError> {
    tokio::fs::write(file.path(), contents)
        .await
        .map_err(|e| FsError::from_io(file.path(), e))
}
