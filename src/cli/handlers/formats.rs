//! Handler for the `formats` command.

use std::path::Path;

use anyhow::Result;

use crate::cli::FormatsArgs;
use crate::cli::config::Config;
use crate::cli::output::{DisplayFormat, FormatListing};
use crate::export::{CommandRegistry, ExportContext, SystemPath, check_capabilities, check_export};

use super::{resolve_document, vault_root};

/// Handle the `formats` command.
pub fn handle_formats(args: &FormatsArgs, notes_dir: &Path, config: &Config) -> Result<()> {
    let root = vault_root(notes_dir)?;
    let context = ExportContext::detect(config.export.clone(), root.clone(), &SystemPath::new());
    let document = args.document.as_ref().map(|d| resolve_document(&root, d));

    let listings = list_formats(&CommandRegistry::new(), &context, document.as_deref());

    match args.format {
        DisplayFormat::Human => {
            for listing in &listings {
                let status = match &listing.reason {
                    None => "available".to_string(),
                    Some(reason) => format!("unavailable: {}", reason),
                };
                println!(
                    "{:<12} {:<34} .{:<12} {}",
                    listing.format, listing.command, listing.extension, status
                );
            }
        }
        DisplayFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&listings)?);
        }
    }

    Ok(())
}

/// Enabled state of each registered command.
///
/// Without a document only the required binaries are checked.
fn list_formats(
    registry: &CommandRegistry,
    context: &ExportContext,
    document: Option<&Path>,
) -> Vec<FormatListing> {
    registry
        .iter()
        .map(|command| {
            let format = command.format();
            let check = match document {
                Some(doc) => check_export(Some(doc), format, context.features()),
                None => check_capabilities(format, context.features()),
            };
            FormatListing {
                id: command.id().to_string(),
                command: command.name().to_string(),
                format: format.id().to_string(),
                extension: format.extension().to_string(),
                enabled: check.is_ok(),
                reason: check.err().map(|e| e.to_string()),
            }
        })
        .collect()
}
