//! Build operation - translate and write every file of a project.

use eyre::Result;
use tracing::debug;
use ts2delphi_codegen::project::{FileOutcome, Project};
use ts2delphi_core::{OutputFile, WriteResult};

use super::{failed, source_label};
use crate::reports::{BuildReport, BuiltFile, FailedFile, FileStatus};

/// Options for the build operation.
pub struct BuildOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the build operation.
///
/// Files that fail to translate or cannot be written are reported and do
/// not stop the others.
pub fn build(project: &Project, opts: BuildOptions) -> Result<BuildReport> {
    let report = project.translate_all()?;

    let mut files = Vec::new();
    let mut failures = Vec::new();

    for FileOutcome { entry, result } in report.outcomes {
        let translation = match result {
            Ok(translation) => translation,
            Err(err) => {
                failures.push(failed(&entry, err));
                continue;
            }
        };

        let warnings = translation
            .diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .map(|d| d.message.clone())
            .collect();

        let status = if opts.dry_run {
            FileStatus::Preview(translation.content)
        } else {
            match OutputFile::new(&entry.output, translation.content).write() {
                Ok(WriteResult::Written) => FileStatus::Written,
                Ok(WriteResult::Unchanged) => FileStatus::Unchanged,
                Err(err) => {
                    failures.push(FailedFile {
                        source: source_label(&entry),
                        rendered: format!(
                            "failed to write '{}': {:?}",
                            entry.output.display(),
                            err
                        ),
                    });
                    continue;
                }
            }
        };
        debug!(output = %entry.output.display(), "output file ready");

        files.push(BuiltFile {
            source: source_label(&entry),
            output: entry.output,
            status,
            warnings,
        });
    }

    Ok(BuildReport {
        output_dir: project.output_root().to_path_buf(),
        files,
        failures,
        missing_main: report.missing_main,
        dry_run: opts.dry_run,
    })
}
