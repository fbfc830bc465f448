//! Explain command report data structures.

use std::path::PathBuf;

use serde::Serialize;
use ts2delphi_codegen::{Diagnostic, lexer::StageInfo};

use super::output::{Output, Report};

/// Report data describing how one AST document is translated.
#[derive(Debug, Serialize)]
pub struct ExplainReport {
    /// The AST document.
    pub ast_path: PathBuf,
    /// Source path relative to the input root.
    pub source: PathBuf,
    /// Where the generated file goes.
    pub output: PathBuf,
    pub is_main: bool,
    /// Lexer stages in execution order.
    pub stages: Vec<StageInfo>,
    pub unit: UnitSummary,
    pub diagnostics: Vec<Diagnostic>,
    /// The full unit model, for `--json`.
    pub model: serde_json::Value,
}

/// The unit model, condensed to one line per entry.
#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub kind: String,
    pub name: String,
    pub used_units: Vec<String>,
    pub types: Vec<String>,
    pub implementations: Vec<String>,
    /// Number of statements in the program block.
    pub body_statements: Option<usize>,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("ts2delphi Translation Explanation");
        out.newline();

        out.key_value("Input", &self.ast_path.display().to_string());
        out.key_value("Source", &self.source.display().to_string());
        out.key_value("Output", &self.output.display().to_string());
        out.key_value("Main file", if self.is_main { "yes" } else { "no" });
        out.newline();

        out.section("Lexer Stages");
        for (i, stage) in self.stages.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", stage.name, stage.description));
        }
        out.newline();

        let unit = &self.unit;
        out.key_value("Unit", &format!("{} {}", unit.kind, unit.name));
        render_list(out, "Used Units", &unit.used_units);
        render_list(out, "Types", &unit.types);
        render_list(out, "Implementations", &unit.implementations);
        if let Some(count) = unit.body_statements {
            out.newline();
            out.key_value("Program block", &format!("{} statements", count));
        }

        if !self.diagnostics.is_empty() {
            out.newline();
            out.section("Diagnostics");
            for diag in &self.diagnostics {
                out.list_item(&diag.to_string());
            }
        }
    }
}

fn render_list(out: &mut dyn Output, name: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.newline();
    out.section(&format!("{} ({})", name, items.len()));
    for item in items {
        out.list_item(item);
    }
}
