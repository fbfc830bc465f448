//! Check command report data structures.

use std::path::PathBuf;

use ts2delphi_codegen::{Diagnostic, Severity};

use super::{
    FailedFile,
    output::{Output, Report},
};

/// Report data from a translation dry run.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub files: Vec<CheckedFile>,
    pub failures: Vec<FailedFile>,
    pub missing_main: Option<String>,
}

/// A file that translated, with what the translation reported.
#[derive(Debug)]
pub struct CheckedFile {
    /// Source path relative to the input root.
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether every file translated.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    fn warning_count(&self) -> usize {
        self.files
            .iter()
            .flat_map(|f| &f.diagnostics)
            .filter(|d| d.severity.is_warning())
            .count()
            + usize::from(self.missing_main.is_some())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(main) = &self.missing_main {
            out.warning(&format!("main file '{}' was not found", main));
        }

        for file in &self.files {
            for diag in &file.diagnostics {
                let location = match &diag.location {
                    Some(loc) => format!("{}: {}", file.source, loc),
                    None => file.source.clone(),
                };
                match diag.severity {
                    Severity::Warning => {
                        out.warning(&format!("{}\n  --> {}", diag.message, location));
                    }
                    Severity::Info => {
                        out.preformatted(&format!("info: {}\n  --> {}", diag.message, location));
                    }
                }
            }
        }

        for failure in &self.failures {
            out.error(&failure.rendered);
        }

        let warnings = self.warning_count();
        if warnings > 0 || !self.is_valid() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} files in {} translate ({} warnings)",
                self.files.len(),
                self.config_path.display(),
                warnings
            ));
        } else {
            out.preformatted(&format!(
                "✗ {} of {} files failed to translate",
                self.failures.len(),
                self.files.len() + self.failures.len()
            ));
        }
    }
}
