//! Per-file state shared by the lexer stages and emitters.

use std::path::{Path, PathBuf};

use ts2delphi_core::ReservedKeywords;
use ts2delphi_manifest::Manifest;

use crate::{diagnostic::Diagnostic, writer::Indent};

/// Options shared by every file of a project.
#[derive(Debug, Clone)]
pub struct LexerConfig {
    /// Names that generated project units may not take.
    pub reserved_keywords: ReservedKeywords,
    /// Directory that relative imports resolve against.
    pub input_root: PathBuf,
    /// Import prefixes naming Pascal system units.
    pub system_prefixes: Vec<String>,
    pub indent: Indent,
}

impl LexerConfig {
    /// Create a config with the default keywords and prefixes.
    pub fn new(input_root: impl Into<PathBuf>) -> Self {
        Self {
            reserved_keywords: ReservedKeywords::default(),
            input_root: input_root.into(),
            system_prefixes: vec!["@delphi/".to_string()],
            indent: Indent::default(),
        }
    }

    /// Build the config from the `[translate]` table of a manifest.
    pub fn from_manifest(manifest: &Manifest, input_root: impl Into<PathBuf>) -> Self {
        let translate = &manifest.translate;
        Self {
            reserved_keywords: ReservedKeywords::new()
                .with_extra(translate.reserved_keywords.iter().cloned()),
            input_root: input_root.into(),
            system_prefixes: translate.system_prefixes.clone(),
            indent: translate.indent.into(),
        }
    }

    /// Find the system prefix that `specifier` starts with.
    pub fn system_prefix(&self, specifier: &str) -> Option<&str> {
        self.system_prefixes
            .iter()
            .find(|p| specifier.starts_with(p.as_str()))
            .map(String::as_str)
    }
}

/// State for the translation of one file.
///
/// Collects diagnostics while the stages and emitters run.
#[derive(Debug)]
pub struct TranslationContext<'c> {
    /// Source path relative to the input root (e.g., "sub/Unit.ts").
    file: PathBuf,
    config: &'c LexerConfig,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'c> TranslationContext<'c> {
    pub fn new(file: impl Into<PathBuf>, config: &'c LexerConfig) -> Self {
        Self {
            file: file.into(),
            config,
            diagnostics: Vec::new(),
        }
    }

    /// The file being translated, relative to the input root.
    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn config(&self) -> &'c LexerConfig {
        self.config
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, stage: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(stage, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, stage: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(stage, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Take the collected diagnostics, leaving the context empty.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
