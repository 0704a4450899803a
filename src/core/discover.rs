//! Source file discovery.
//!
//! Only the top level of a directory is scanned; names must match `*.<extension>`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::{MatchOptions, Pattern, glob_with};

/// A candidate file whose header will be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name as listed in the directory.
    pub name: String,
    /// Path used to open the file.
    pub path: PathBuf,
}

/// Order in which discovered files are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileOrder {
    #[default]
    ByName,
    /// Whatever order the directory listing produced.
    Listing,
}

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        // `.hidden.m` is not picked up by `*.m`
        require_literal_leading_dot: true,
    }
}

/// List regular files directly inside `dir` whose name ends in `.<extension>`.
///
/// Entries that match the pattern but are directories are ignored. Fails if
/// `dir` is not valid UTF-8, since it has to be spelled out in the pattern.
pub fn discover_files(dir: &Path, extension: &str, order: FileOrder) -> Result<Vec<SourceFile>> {
    let Some(dir_str) = dir.to_str() else {
        bail!("Directory path is not valid UTF-8: {}", dir.display());
    };
    let base = Pattern::escape(dir_str);
    let pattern = Path::new(&base).join(format!("*.{}", extension));
    let pattern = pattern.to_string_lossy();

    let entries = glob_with(&pattern, match_options())
        .with_context(|| format!("Invalid file pattern: \"{}\"", pattern))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.context("Failed to list directory entry")?;
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        files.push(SourceFile { name, path });
    }

    if order == FileOrder::ByName {
        files.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(files)
}
