//! Explain operation - show how one AST document is translated.

use eyre::Result;
use ts2delphi_ast::SourceFile;
use ts2delphi_codegen::{
    TranslateError, TranslationContext, build_model,
    lexer::stages,
    project::{Project, SourceEntry},
    unit::UnitModel,
};

use crate::reports::{ExplainReport, UnitSummary};

/// Execute the explain operation.
///
/// Runs the lexer stages over the document and returns the resulting unit
/// model. Translation failures are returned as [`TranslateError`] inside
/// the report error.
pub fn explain(project: &Project, entry: &SourceEntry) -> Result<ExplainReport> {
    let file = SourceFile::open(&entry.ast_path).map_err(TranslateError::from)?;
    let mut ctx = TranslationContext::new(&entry.source, project.config());
    let unit = build_model(&file, &entry.request(), &mut ctx)?;

    Ok(ExplainReport {
        ast_path: entry.ast_path.clone(),
        source: entry.source.clone(),
        output: entry.output.clone(),
        is_main: entry.is_main,
        stages: stages().to_vec(),
        unit: summarize(&unit),
        model: serde_json::to_value(&unit)?,
        diagnostics: ctx.take_diagnostics(),
    })
}

fn summarize(unit: &UnitModel<'_>) -> UnitSummary {
    UnitSummary {
        kind: unit.kind().to_string(),
        name: unit.name().to_string(),
        used_units: unit.used_units().map(ToString::to_string).collect(),
        types: unit
            .types()
            .map(|t| format!("{} = {}", t.key(), t.kind.keyword()))
            .collect(),
        implementations: unit
            .implementations()
            .map(|i| i.key().to_string())
            .collect(),
        body_statements: unit.body().map(<[_]>::len),
    }
}
