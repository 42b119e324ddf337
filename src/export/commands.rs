//! One export command per output format.

use thiserror::Error;

use crate::domain::{ExportRequest, OutputFormat};

use super::context::ExportContext;
use super::eligibility::{Ineligible, check_export};
use super::host::DocumentHost;
use super::notify::Notifier;
use super::pandoc::ProcessRunner;
use super::pipeline::{ExportReport, Exporter};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("command is disabled: {0}")]
    Disabled(#[from] Ineligible),
}

/// An `Export as ...` action bound to a single format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportCommand {
    id: String,
    name: String,
    format: OutputFormat,
}

impl ExportCommand {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            id: format!("export-{}", format.id()),
            name: format!("Export as {}", format.pretty_name()),
            format,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Whether the command can run against the host's active document.
    pub fn check<H: DocumentHost>(&self, ctx: &ExportContext, host: &H) -> Result<(), Ineligible> {
        let document = host.active_document();
        check_export(document.as_deref(), self.format, ctx.features())
    }

    pub fn is_enabled<H: DocumentHost>(&self, ctx: &ExportContext, host: &H) -> bool {
        self.check(ctx, host).is_ok()
    }

    /// Exports the active document.
    ///
    /// A disabled command returns an error without notifying; once started,
    /// the outcome is reported through the exporter's notifier.
    pub async fn run<H, R, N>(
        &self,
        exporter: &Exporter<'_, H, R, N>,
    ) -> Result<ExportReport, CommandError>
    where
        H: DocumentHost,
        R: ProcessRunner,
        N: Notifier,
    {
        self.check(exporter.context(), exporter.host())?;
        let document = exporter
            .host()
            .active_document()
            .ok_or(Ineligible::NoDocument)?;
        let request = ExportRequest::new(document.clone(), self.format)
            .map_err(|_| Ineligible::UnsupportedInput(document))?;
        Ok(exporter.export(&request).await)
    }
}

/// All export commands in registration order.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<ExportCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: OutputFormat::ALL
                .iter()
                .copied()
                .map(ExportCommand::new)
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExportCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ExportCommand> {
        self.commands.iter().find(|c| c.id == id)
    }

    pub fn for_format(&self, format: OutputFormat) -> &ExportCommand {
        self.commands
            .iter()
            .find(|c| c.format == format)
            .expect("every output format is registered in CommandRegistry::new")
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
