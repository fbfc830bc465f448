//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod build;
mod check;
mod explain;
mod output;

pub use build::{BuildReport, BuiltFile, FailedFile, FileStatus};
pub use check::{CheckReport, CheckedFile};
pub use explain::{ExplainReport, UnitSummary};
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Report, TerminalOutput};
