use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ClassDeclaration, Error, FunctionDeclaration, ImportDeclaration, Result};

/// File name suffix of AST documents (`Unit.ts` is described by `Unit.ast.json`).
pub const AST_EXTENSION: &str = ".ast.json";

/// The declarations of one source file, as produced by the front-end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    #[serde(default)]
    pub imports: Vec<ImportDeclaration>,
    /// Top-level functions in declaration order.
    #[serde(default)]
    pub functions: Vec<FunctionDeclaration>,
    /// Top-level classes in declaration order.
    #[serde(default)]
    pub classes: Vec<ClassDeclaration>,
}

impl FromStr for SourceFile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "<memory>")
    }
}

impl SourceFile {
    /// Read and parse an AST document from the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse an AST document with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Find the default-exported function, if any.
    pub fn default_export(&self) -> Option<&FunctionDeclaration> {
        self.functions.iter().find(|f| f.default_export)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::Statement;

    const UNIT_AST: &str = r#"{
        "imports": [{ "specifier": "@delphi/system/classes" }],
        "classes": [{
            "name": "TestThread",
            "extends": "TThread",
            "properties": [
                { "name": "sleepTime", "type": "number", "initializer": "1000", "visibility": "private" }
            ]
        }]
    }"#;

    #[test]
    fn test_parse_document() {
        let file: SourceFile = UNIT_AST.parse().unwrap();
        assert_eq!(file.imports[0].specifier, "@delphi/system/classes");
        assert!(file.functions.is_empty());
        assert_eq!(file.classes[0].extends.as_deref(), Some("TThread"));
    }

    #[test]
    fn test_empty_document() {
        let file: SourceFile = "{}".parse().unwrap();
        assert_eq!(file, SourceFile::default());
    }

    #[test]
    fn test_default_export() {
        let file: SourceFile = r#"{
            "functions": [
                { "name": "helper" },
                { "defaultExport": true, "body": [{ "kind": "EmptyStatement" }] }
            ]
        }"#
        .parse()
        .unwrap();

        let entry = file.default_export().unwrap();
        assert!(entry.is_entry_point());
        assert_eq!(entry.body, vec![Statement::Unsupported]);
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = SourceFile::from_str_with_filename("{ \"imports\": 4 }", "Bad.ast.json")
            .unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = SourceFile::open(temp.path().join("Missing.ast.json")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_reads_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Unit.ast.json");
        fs::write(&path, UNIT_AST).unwrap();

        let file = SourceFile::open(&path).unwrap();
        assert_eq!(file.classes.len(), 1);
    }
}
