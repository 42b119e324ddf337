//! File I/O and frontmatter parsing

mod frontmatter;
mod fs;

pub use frontmatter::{Frontmatter, FrontmatterError, split_frontmatter};
pub use fs::{FsError, decode_text, read_document, write_atomic};
