//! Check operation - translate without writing.

use std::path::Path;

use eyre::Result;
use ts2delphi_codegen::project::{FileOutcome, Project};

use super::{failed, source_label};
use crate::reports::{CheckReport, CheckedFile};

/// Execute the check operation.
///
/// Translates every file and returns the diagnostics and failures.
pub fn check(project: &Project, config_path: &Path) -> Result<CheckReport> {
    let report = project.translate_all()?;

    let mut files = Vec::new();
    let mut failures = Vec::new();
    for FileOutcome { entry, result } in report.outcomes {
        match result {
            Ok(translation) => files.push(CheckedFile {
                source: source_label(&entry),
                diagnostics: translation.diagnostics,
            }),
            Err(err) => failures.push(failed(&entry, err)),
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        files,
        failures,
        missing_main: report.missing_main,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use ts2delphi_codegen::LexerConfig;

    use super::*;

    #[test]
    fn test_check_collects_diagnostics() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("src");
        fs::create_dir_all(&input).unwrap();
        fs::write(
            input.join("Program.ast.json"),
            r#"{ "functions": [{ "defaultExport": true, "body": [
                { "kind": "WhileStatement", "condition": { "kind": "TrueKeyword", "text": "true" } }
            ] }] }"#,
        )
        .unwrap();

        let project = Project::new(
            LexerConfig::new(&input),
            temp.path().join("out"),
            Some("Program.ts"),
        );
        let report = check(&project, Path::new("ts2delphi.toml")).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.files[0].source, "Program.ts");
        let messages: Vec<&str> = report.files[0]
            .diagnostics
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(messages, vec!["skipped WhileStatement"]);
        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_check_reports_missing_entry_point() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("src");
        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("Program.ast.json"), "{}").unwrap();

        let project = Project::new(
            LexerConfig::new(&input),
            temp.path().join("out"),
            Some("Program.ts"),
        );
        let report = check(&project, Path::new("ts2delphi.toml")).unwrap();

        assert!(!report.is_valid());
        assert!(report.failures[0].rendered.contains("default-exported function"));
    }
}
