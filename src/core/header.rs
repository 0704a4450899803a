//! Leading comment block extraction.
//!
//! A header block is the first contiguous run of comment lines in a file. The
//! run ends at the first non-comment line, or at a comment line that is empty,
//! is only the marker, or mentions the stop-keyword.

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// What counts as a comment line and where a header ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRules {
    pub marker: char,
    pub stop_keyword: String,
}

impl HeaderRules {
    pub fn new(marker: char, stop_keyword: &str) -> Self {
        Self {
            marker,
            stop_keyword: stop_keyword.to_string(),
        }
    }

    fn is_comment(&self, trimmed: &str) -> bool {
        trimmed.starts_with(self.marker)
    }

    /// Whether a comment line after the first one terminates the block.
    fn ends_block(&self, trimmed: &str) -> bool {
        trimmed.is_empty()
            || trimmed.chars().eq(std::iter::once(self.marker))
            || trimmed.contains(self.stop_keyword.as_str())
    }
}

/// Read `path` and return its header block.
///
/// Fails if the file is missing, unreadable, or not valid UTF-8.
pub fn extract_header(path: &Path, rules: &HeaderRules) -> Result<Vec<String>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(header_block(&source, rules))
}

/// Return the trimmed lines of the header block in `source`.
///
/// Empty when `source` has no comment line at all.
pub fn header_block(source: &str, rules: &HeaderRules) -> Vec<String> {
    let lines: Vec<&str> = source.lines().collect();

    let Some(start) = lines
        .iter()
        .position(|line| rules.is_comment(line.trim()))
    else {
        return Vec::new();
    };

    // The first comment line is never checked against the stop rules.
    let end = lines[start + 1..]
        .iter()
        .position(|line| {
            let trimmed = line.trim();
            !rules.is_comment(trimmed) || rules.ends_block(trimmed)
        })
        .map_or(lines.len(), |offset| start + 1 + offset);

    lines[start..end]
        .iter()
        .map(|line| line.trim().to_string())
        .collect()
}
