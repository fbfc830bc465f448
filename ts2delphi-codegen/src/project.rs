//! Project-wide translation: discover AST documents, translate each one.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::{debug, warn};
use ts2delphi_ast::{AST_EXTENSION, SourceFile};
use ts2delphi_core::to_forward_slashes;
use ts2delphi_manifest::ProjectToml;
use walkdir::WalkDir;

use crate::{
    LexerConfig, TranslateError,
    translate::{FileRequest, Translation, translate_source},
};

/// A source file found under the input root.
#[derive(Debug, Clone)]
pub struct SourceEntry {
    /// The AST document on disk.
    pub ast_path: PathBuf,
    /// Source path relative to the input root (e.g., "sub/Unit.ts").
    pub source: PathBuf,
    /// Where the generated file goes.
    pub output: PathBuf,
    pub name: String,
    pub is_main: bool,
}

impl SourceEntry {
    /// The translation request for this entry.
    pub fn request(&self) -> FileRequest {
        FileRequest {
            name: self.name.clone(),
            source: self.source.clone(),
            is_main: self.is_main,
        }
    }
}

/// The result of translating one entry.
#[derive(Debug)]
pub struct FileOutcome {
    pub entry: SourceEntry,
    pub result: std::result::Result<Translation, TranslateError>,
}

/// The results of a project run, in traversal order.
#[derive(Debug, Default)]
pub struct ProjectReport {
    pub outcomes: Vec<FileOutcome>,
    /// Configured main file that no AST document matched.
    pub missing_main: Option<String>,
}

impl ProjectReport {
    pub fn translated(&self) -> impl Iterator<Item = (&SourceEntry, &Translation)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|t| (&o.entry, t)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&SourceEntry, &TranslateError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.entry, e)))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Translation settings for a whole project.
#[derive(Debug, Clone)]
pub struct Project {
    config: LexerConfig,
    output_root: PathBuf,
    /// Main file relative to the input root, with forward slashes.
    main: Option<String>,
}

impl Project {
    pub fn new(config: LexerConfig, output_root: impl Into<PathBuf>, main: Option<&str>) -> Self {
        Self {
            config,
            output_root: output_root.into(),
            main: main.map(normalize_main),
        }
    }

    /// Build the project described by a ts2delphi.toml.
    pub fn from_manifest(project: &ProjectToml) -> Self {
        let manifest = project.manifest();
        Self::new(
            LexerConfig::from_manifest(manifest, project.input_dir()),
            project.output_dir(),
            manifest.project.main.as_deref(),
        )
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    pub fn input_root(&self) -> &Path {
        &self.config.input_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn main(&self) -> Option<&str> {
        self.main.as_deref()
    }

    /// Find every AST document under the input root, depth-first and
    /// sorted by file name.
    pub fn discover(&self) -> Result<Vec<SourceEntry>> {
        let root = self.input_root();
        let mut entries = Vec::new();

        for item in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let item = item.wrap_err_with(|| {
                format!("failed to read input directory '{}'", root.display())
            })?;
            if !item.file_type().is_file() {
                continue;
            }
            let relative = item.path().strip_prefix(root).wrap_err_with(|| {
                format!("'{}' is outside '{}'", item.path().display(), root.display())
            })?;
            if let Some(entry) = self.make_entry(item.path(), relative) {
                debug!(
                    source = %entry.source.display(),
                    is_main = entry.is_main,
                    "found source file"
                );
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// Describe a single AST document, which may live outside the input root.
    ///
    /// Returns `None` if the path is not an AST document.
    pub fn entry(&self, ast_path: &Path) -> Option<SourceEntry> {
        let root = strip_cur_dir(self.input_root());
        let relative = strip_cur_dir(ast_path)
            .strip_prefix(root)
            .ok()
            .or_else(|| ast_path.file_name().map(Path::new))?;
        self.make_entry(ast_path, relative)
    }

    fn make_entry(&self, ast_path: &Path, relative: &Path) -> Option<SourceEntry> {
        let stem = relative
            .file_name()?
            .to_str()?
            .strip_suffix(AST_EXTENSION)
            .filter(|stem| !stem.is_empty())?;
        let dir = relative.parent().unwrap_or(Path::new(""));
        let source = dir.join(format!("{}.ts", stem));

        Some(SourceEntry {
            ast_path: ast_path.to_path_buf(),
            output: self.output_root.join(dir).join(format!("{}.pas", stem)),
            name: stem.to_string(),
            is_main: self.is_main(&source),
            source,
        })
    }

    /// Load and translate one entry.
    pub fn translate_entry(
        &self,
        entry: &SourceEntry,
    ) -> std::result::Result<Translation, TranslateError> {
        let file = SourceFile::open(&entry.ast_path)?;
        translate_source(&file, &entry.request(), &self.config)
    }

    /// Translate every discovered file.
    ///
    /// A failing file does not stop the others.
    pub fn translate_all(&self) -> Result<ProjectReport> {
        let entries = self.discover()?;

        let missing_main = self
            .main
            .as_ref()
            .filter(|_| !entries.iter().any(|e| e.is_main))
            .cloned();
        if let Some(main) = &missing_main {
            warn!(main = %main, "main file not found under the input directory");
        }

        let outcomes = entries
            .into_iter()
            .map(|entry| {
                let result = self.translate_entry(&entry);
                if let Err(err) = &result {
                    warn!(file = %entry.source.display(), error = %err, "translation failed");
                }
                FileOutcome { entry, result }
            })
            .collect();

        Ok(ProjectReport {
            outcomes,
            missing_main,
        })
    }

    fn is_main(&self, source: &Path) -> bool {
        self.main
            .as_deref()
            .is_some_and(|main| to_forward_slashes(&source.to_string_lossy()) == main)
    }
}

fn strip_cur_dir(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}

fn normalize_main(main: &str) -> String {
    let main = to_forward_slashes(main);
    main.strip_prefix("./").unwrap_or(&main).to_string()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_discover_sorted_and_mirrored() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("in");
        write(&input, "b.ast.json", "{}");
        write(&input, "a/Inner.ast.json", "{}");
        write(&input, "Program.ast.json", "{}");
        write(&input, "notes.txt", "ignored");

        let project = Project::new(
            LexerConfig::new(&input),
            temp.path().join("out"),
            Some("./Program.ts"),
        );
        let entries = project.discover().unwrap();

        let sources: Vec<String> = entries
            .iter()
            .map(|e| to_forward_slashes(&e.source.to_string_lossy()))
            .collect();
        assert_eq!(sources, vec!["Program.ts", "a/Inner.ts", "b.ts"]);
        assert_eq!(
            entries[1].output,
            temp.path().join("out").join("a").join("Inner.pas")
        );
        assert_eq!(entries[1].name, "Inner");
        assert!(entries[0].is_main);
        assert!(!entries[2].is_main);
    }

    #[test]
    fn test_entry_for_single_document() {
        let project = Project::new(LexerConfig::new("./in"), "out", Some("Program.ts"));

        let entry = project.entry(Path::new("in/sub/Unit.ast.json")).unwrap();
        assert_eq!(entry.source, PathBuf::from("sub/Unit.ts"));
        assert_eq!(entry.output, PathBuf::from("out/sub/Unit.pas"));
        assert!(!entry.is_main);

        let outside = project.entry(Path::new("/tmp/Program.ast.json")).unwrap();
        assert_eq!(outside.source, PathBuf::from("Program.ts"));
        assert!(outside.is_main);

        assert!(project.entry(Path::new("in/notes.txt")).is_none());
    }

    #[test]
    fn test_missing_input_dir() {
        let temp = TempDir::new().unwrap();
        let project = Project::new(LexerConfig::new(temp.path().join("nope")), temp.path(), None);
        assert!(project.discover().is_err());
    }

    #[test]
    fn test_failed_file_does_not_stop_others() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("in");
        write(&input, "Broken.ast.json", r#"{ "imports": [{ "specifier": "./end" }] }"#);
        write(&input, "Fine.ast.json", r#"{ "functions": [{ "name": "add", "exported": true }] }"#);

        let project = Project::new(LexerConfig::new(&input), temp.path().join("out"), None);
        let report = project.translate_all().unwrap();

        assert!(report.has_failures());
        let failed: Vec<&str> = report.failures().map(|(e, _)| e.name.as_str()).collect();
        assert_eq!(failed, vec!["Broken"]);
        let translated: Vec<&str> = report.translated().map(|(e, _)| e.name.as_str()).collect();
        assert_eq!(translated, vec!["Fine"]);
        assert!(report.missing_main.is_none());
    }

    #[test]
    fn test_missing_main_reported() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("in");
        write(&input, "Unit.ast.json", "{}");

        let project = Project::new(
            LexerConfig::new(&input),
            temp.path().join("out"),
            Some("Program.ts"),
        );
        let report = project.translate_all().unwrap();
        assert_eq!(report.missing_main.as_deref(), Some("Program.ts"));
        assert!(!report.has_failures());
    }

    #[test]
    fn test_invalid_document_is_a_file_failure() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("in");
        write(&input, "Bad.ast.json", "{ not json");

        let project = Project::new(LexerConfig::new(&input), temp.path().join("out"), None);
        let report = project.translate_all().unwrap();
        let (_, err) = report.failures().next().unwrap();
        assert!(matches!(err, TranslateError::Ast(_)));
    }
}
