//! Core operations.
//!
//! This module contains the business logic for ts2delphi commands,
//! separated from CLI argument parsing and output rendering.

pub mod build;
pub mod check;
pub mod explain;

pub use build::{BuildOptions, build};
pub use check::check;
pub use explain::explain;
use ts2delphi_codegen::{TranslateError, project::SourceEntry};
use ts2delphi_core::to_forward_slashes;

use crate::reports::FailedFile;

/// Source path of an entry as shown to the user.
fn source_label(entry: &SourceEntry) -> String {
    to_forward_slashes(&entry.source.to_string_lossy())
}

fn failed(entry: &SourceEntry, err: TranslateError) -> FailedFile {
    FailedFile {
        source: source_label(entry),
        rendered: format!("{:?}", miette::Report::new(err)),
    }
}
