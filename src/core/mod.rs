//! Core generation pipeline.
//!
//! ## Module Structure
//!
//! - `discover`: find candidate source files in a directory
//! - `header`: extract the leading comment block of one file
//! - `index`: write the banner and all header blocks to an output sink

pub mod discover;
pub mod header;
pub mod index;

pub use discover::{FileOrder, SourceFile, discover_files};
pub use header::{HeaderRules, extract_header, header_block};
pub use index::{IndexOptions, IndexSummary, ReadErrorPolicy, SkippedFile, write_index};
