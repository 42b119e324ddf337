//! Export orchestration: converting documents through pandoc.
//!
//! An [`ExportCommand`] per output format checks eligibility against the
//! detected [`FeatureMap`](crate::domain::FeatureMap) and hands the active
//! document to an [`Exporter`], which prepares content (host-rendered HTML or
//! transformed Markdown), invokes the [`Converter`] and reports the outcome
//! through a [`Notifier`].

mod args;
mod commands;
mod context;
mod eligibility;
mod features;
mod host;
mod html;
mod notify;
mod pandoc;
mod pipeline;
pub mod template;
mod theme;
mod transform;

pub use args::{resolve_args, split_arg_lines};
pub use commands::{CommandError, CommandRegistry, ExportCommand};
pub use context::ExportContext;
pub use eligibility::{Ineligible, can_export, check_capabilities, check_export};
pub use features::{PathProbe, SystemPath, detect_features};
pub use host::{DocumentHost, HostError, RenderedDocument, VaultHost};
pub use html::markdown_to_html;
pub use notify::{ConsoleNotifier, Notification, NotificationKind, Notifier};
pub use pandoc::{
    ConversionOutcome, ConvertError, Converter, ConverterPaths, InputSpec, Invocation,
    OutputSpec, ProcessOutput, ProcessRunner, RunError, TokioRunner,
};
pub use pipeline::{ExportError, ExportReport, ExportState, Exporter};
pub use template::{PAGE_TEMPLATE, render_page};
pub use theme::{THEME_DARK, THEME_DEFAULT, theme_css};
pub use transform::{rewrite_embeds, rewrite_links, transform_embeds_and_links};
