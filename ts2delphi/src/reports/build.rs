//! Build command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from translating a project.
#[derive(Debug)]
pub struct BuildReport {
    /// Output root of the project.
    pub output_dir: PathBuf,
    /// Successfully translated files, in traversal order.
    pub files: Vec<BuiltFile>,
    /// Files whose translation failed.
    pub failures: Vec<FailedFile>,
    /// Configured main file that was not found.
    pub missing_main: Option<String>,
    /// Whether files were previewed instead of written.
    pub dry_run: bool,
}

/// A successfully translated file.
#[derive(Debug)]
pub struct BuiltFile {
    /// Source path relative to the input root.
    pub source: String,
    /// Generated file path.
    pub output: PathBuf,
    pub status: FileStatus,
    /// Warning diagnostics raised while translating.
    pub warnings: Vec<String>,
}

/// What happened to a generated file.
#[derive(Debug)]
pub enum FileStatus {
    /// Written to disk.
    Written,
    /// Already up to date on disk.
    Unchanged,
    /// Dry-run preview of the generated text.
    Preview(String),
}

/// A file whose translation failed.
#[derive(Debug)]
pub struct FailedFile {
    /// Source path relative to the input root.
    pub source: String,
    /// The error, already rendered.
    pub rendered: String,
}

impl BuildReport {
    /// Whether any file failed.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(main) = &self.missing_main {
            out.warning(&format!("main file '{}' was not found", main));
        }
        for file in &self.files {
            for warning in &file.warnings {
                out.warning(&format!("{} ({})", warning, file.source));
            }
        }

        if self.dry_run {
            self.render_preview(out);
        } else {
            self.render_written(out);
        }

        for failure in &self.failures {
            out.newline();
            out.error(&failure.rendered);
        }

        out.newline();
        out.preformatted(&format!(
            "{} translated, {} failed",
            plural(self.files.len(), "file"),
            self.failures.len()
        ));
    }
}

impl BuildReport {
    fn render_written(&self, out: &mut dyn Output) {
        out.key_value("Output", &self.output_dir.display().to_string());
        for file in &self.files {
            let output = file.output.display().to_string();
            match file.status {
                FileStatus::Unchanged => out.list_item(&format!("{} (unchanged)", output)),
                _ => out.added_item(&output),
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output) {
        for file in &self.files {
            if let FileStatus::Preview(content) = &file.status {
                out.divider(&file.output.display().to_string());
                out.preformatted(content.trim_end());
            }
        }
        out.divider("Summary");
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
