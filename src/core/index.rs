//! Index document emission.

use std::io::Write;

use anyhow::{Context, Result};

use super::{
    discover::SourceFile,
    header::{HeaderRules, extract_header},
};

/// What to do when a candidate file cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadErrorPolicy {
    /// Abort the whole run on the first unreadable file.
    #[default]
    FailFast,
    /// Emit nothing for the file, record it, and carry on.
    Skip,
}

#[derive(Debug, Clone)]
pub struct IndexOptions {
    pub banner: String,
    pub rules: HeaderRules,
    pub on_read_error: ReadErrorPolicy,
}

/// A file left out of the index because it could not be read.
#[derive(Debug)]
pub struct SkippedFile {
    pub name: String,
    pub error: anyhow::Error,
}

#[derive(Debug, Default)]
pub struct IndexSummary {
    pub files_scanned: usize,
    pub lines_written: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Write the banner and every file's header block to `writer`, in the order given.
///
/// With [`ReadErrorPolicy::FailFast`] the first read failure is returned and
/// whatever was already written stays written.
pub fn write_index<W: Write>(
    files: &[SourceFile],
    options: &IndexOptions,
    writer: &mut W,
) -> Result<IndexSummary> {
    let mut summary = IndexSummary::default();

    writeln!(writer, "{}", options.banner).context("Failed to write output")?;

    for file in files {
        let block = match extract_header(&file.path, &options.rules) {
            Ok(block) => block,
            Err(error) if options.on_read_error == ReadErrorPolicy::Skip => {
                summary.skipped.push(SkippedFile {
                    name: file.name.clone(),
                    error,
                });
                continue;
            }
            Err(error) => {
                // keep partial output visible before bailing
                writer.flush().ok();
                return Err(error);
            }
        };

        for line in &block {
            writeln!(writer, "{}", line).context("Failed to write output")?;
        }
        summary.files_scanned += 1;
        summary.lines_written += block.len();
    }

    writer.flush().context("Failed to write output")?;
    Ok(summary)
}
