use std::process::ExitCode;

use crate::core::IndexSummary;

/// Exit status for the CLI.
///
/// - `Success` (0): index written, every candidate file was read
/// - `Failure` (1): index written, but some files were skipped as unreadable
/// - `Error` (2): run aborted (unreadable file, invalid config, write failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Index written, every candidate file was read.
    Success,
    /// Index written, but some files were skipped as unreadable.
    Failure,
    /// Run aborted.
    Error,
}

impl ExitStatus {
    pub fn from_summary(summary: &IndexSummary) -> Self {
        if summary.skipped.is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
