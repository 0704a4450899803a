//! Diagnostic output on stderr.
//!
//! Stdout carries the generated document, so everything here goes to stderr.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::CONFIG_FILE_NAME;
use crate::core::{IndexSummary, SkippedFile};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print one warning per skipped file.
pub fn print_skipped(skipped: &[SkippedFile]) {
    print_skipped_to(skipped, &mut io::stderr().lock());
}

pub fn print_skipped_to<W: Write>(skipped: &[SkippedFile], writer: &mut W) {
    for file in skipped {
        let _ = writeln!(
            writer,
            "{} skipped {}: {:#}",
            "warning:".bold().yellow(),
            file.name,
            file.error
        );
    }
}

/// Print the discovery line shown in verbose mode.
pub fn print_discovered(count: usize, extension: &str, config_path: Option<&Path>) {
    print_discovered_to(count, extension, config_path, &mut io::stderr().lock());
}

pub fn print_discovered_to<W: Write>(
    count: usize,
    extension: &str,
    config_path: Option<&Path>,
    writer: &mut W,
) {
    if let Some(path) = config_path {
        let _ = writeln!(writer, "Using config {}", path.display());
    }
    let _ = writeln!(
        writer,
        "Found {} *.{} {}",
        count,
        extension,
        if count == 1 { "file" } else { "files" }
    );
}

/// Print the closing summary shown in verbose mode.
pub fn print_summary(summary: &IndexSummary) {
    print_summary_to(summary, &mut io::stderr().lock());
}

pub fn print_summary_to<W: Write>(summary: &IndexSummary, writer: &mut W) {
    let msg = format!(
        "Indexed {} {}, {} header {}",
        summary.files_scanned,
        if summary.files_scanned == 1 { "file" } else { "files" },
        summary.lines_written,
        if summary.lines_written == 1 { "line" } else { "lines" }
    );
    if summary.skipped.is_empty() {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    } else {
        let _ = writeln!(
            writer,
            "{} {} ({} skipped)",
            "warning:".bold().yellow(),
            msg,
            summary.skipped.len()
        );
    }
}

/// Print the result of `tocgen init`.
pub fn print_init_created() {
    print_init_created_to(&mut io::stderr().lock());
}

pub fn print_init_created_to<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
}
