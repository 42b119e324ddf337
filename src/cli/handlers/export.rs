//! Handler for the `export` command.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::cli::ExportArgs;
use crate::cli::config::Config;
use crate::domain::ExportSettings;
use crate::export::{
    CommandRegistry, ConsoleNotifier, ExportContext, Exporter, SystemPath, TokioRunner, VaultHost,
};

use super::{resolve_document, vault_root};

/// Handle the `export` command.
pub async fn handle_export(args: &ExportArgs, notes_dir: &Path, config: &Config) -> Result<()> {
    let root = vault_root(notes_dir)?;
    let settings = apply_overrides(config.export.clone(), args);
    let context = ExportContext::detect(settings, root.clone(), &SystemPath::new());
    debug!(features = ?context.features(), "detected features");

    let document = resolve_document(&root, &args.document);
    let host = VaultHost::new(&root)
        .with_active(&document)
        .with_theme(context.settings().theme.clone());
    let notifier = ConsoleNotifier;
    let exporter = Exporter::new(&context, &host, TokioRunner, &notifier);

    let registry = CommandRegistry::new();
    let command = registry.for_format(args.format);
    let report = command
        .run(&exporter)
        .await
        .with_context(|| format!("cannot {}", command.name().to_lowercase()))?;

    if !report.succeeded() {
        bail!(
            "export of {} to {} failed",
            args.document.display(),
            args.format.short_name()
        );
    }
    Ok(())
}

/// Per-invocation flags override the saved settings for this run only.
fn apply_overrides(mut settings: ExportSettings, args: &ExportArgs) -> ExportSettings {
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    if let Some(folder) = &args.output_folder {
        settings.output_folder = Some(folder.clone());
    }
    if args.show_command {
        settings.show_command = true;
    }
    settings
}
