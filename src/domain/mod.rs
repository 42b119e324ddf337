//! Core types: OutputFormat, Capability, FeatureMap, ExportSettings, ExportRequest

mod features;
mod format;
mod request;
mod settings;

pub use features::{Capability, FeatureMap};
pub use format::{INPUT_EXTENSIONS, OutputFormat, ParseFormatError, is_supported_input};
pub use request::{ExportRequest, UnsupportedInputError};
pub use settings::{DEFAULT_TIMEOUT_SECS, ExportMode, ExportSettings};
