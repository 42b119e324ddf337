//! Test harness for CLI integration tests.
//!
//! Provides isolated vaults with their own config file, programmatic
//! document creation, fake converter scripts, and CLI assertion helpers
//! using `assert_cmd`.

mod command;
mod doc;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::QuireCommand;
#[allow(unused_imports)]
pub use doc::TestDoc;
#[allow(unused_imports)]
pub use env::{FakePandoc, TestEnv};
