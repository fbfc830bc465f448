//! Manifest types and parsing for ts2delphi.toml files.

mod file;
mod parse;
mod validate;

use std::{fmt, path::PathBuf};

pub use file::ProjectToml;
use serde::{Deserialize, Serialize};
pub use validate::ParseContext;

/// Conventional manifest file name.
pub const MANIFEST_FILE_NAME: &str = "ts2delphi.toml";

/// Manifest written by `ts2delphi init`.
pub const DEFAULT_MANIFEST: &str = r#"[project]
input = "src"
output = "out"
main = "Program.ts"

[translate]
system_prefixes = ["@delphi/"]
reserved_keywords = []
indent = "tab"
"#;

/// Root manifest for ts2delphi.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub translate: TranslateConfig,
}

/// The `[project]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Input root, relative to the manifest directory.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Output root, relative to the manifest directory.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Program entry-point file, relative to the input root.
    ///
    /// Library-only projects leave this unset.
    #[serde(default)]
    pub main: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            main: None,
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("src")
}

fn default_output() -> PathBuf {
    PathBuf::from("out")
}

/// The `[translate]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslateConfig {
    /// Import prefixes that name Pascal system units (`@delphi/system/classes`).
    #[serde(default = "default_system_prefixes")]
    pub system_prefixes: Vec<String>,

    /// Unit names rejected in addition to the built-in reserved keywords.
    #[serde(default)]
    pub reserved_keywords: Vec<String>,

    #[serde(default)]
    pub indent: IndentStyle,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            system_prefixes: default_system_prefixes(),
            reserved_keywords: Vec::new(),
            indent: IndentStyle::default(),
        }
    }
}

fn default_system_prefixes() -> Vec<String> {
    vec!["@delphi/".to_string()]
}

/// Indentation unit of generated files: `"tab"` or a number of spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIndent", into = "RawIndent")]
pub enum IndentStyle {
    #[default]
    Tab,
    Spaces(u8),
}

impl IndentStyle {
    /// Widths accepted for space indentation.
    pub const SPACE_WIDTHS: [u8; 3] = [2, 4, 8];
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentStyle::Tab => write!(f, "tab"),
            IndentStyle::Spaces(n) => write!(f, "{} spaces", n),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Name(String),
    Width(u8),
}

impl TryFrom<RawIndent> for IndentStyle {
    type Error = String;

    fn try_from(raw: RawIndent) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawIndent::Name(name) if name.eq_ignore_ascii_case("tab") => Ok(IndentStyle::Tab),
            RawIndent::Name(name) => Err(format!(
                "unknown indent '{}', expected \"tab\" or a number of spaces",
                name
            )),
            RawIndent::Width(n) => Ok(IndentStyle::Spaces(n)),
        }
    }
}

impl From<IndentStyle> for RawIndent {
    fn from(indent: IndentStyle) -> Self {
        match indent {
            IndentStyle::Tab => RawIndent::Name("tab".to_string()),
            IndentStyle::Spaces(n) => RawIndent::Width(n),
        }
    }
}

/// Command-line values that take precedence over the manifest.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub main: Option<String>,
}

impl Overrides {
    /// Returns true if no override is set.
    pub fn is_empty(&self) -> bool {
        self.input.is_none() && self.output.is_none() && self.main.is_none()
    }
}
