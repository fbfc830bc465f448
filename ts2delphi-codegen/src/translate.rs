//! Translation of a single AST document.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;
use ts2delphi_ast::SourceFile;

use crate::{
    LexerConfig, Result, TranslateError, TranslationContext,
    diagnostic::Diagnostic,
    emit::render_unit,
    lexer::run_stages,
    unit::{UnitKind, UnitModel},
};

/// Identity of the file being translated.
#[derive(Debug, Clone)]
pub struct FileRequest {
    /// Unit name, the source file's base name.
    pub name: String,
    /// Source path relative to the input root (e.g., "sub/Unit.ts").
    pub source: PathBuf,
    /// Whether this is the configured program entry point.
    pub is_main: bool,
}

impl FileRequest {
    /// A library unit request.
    pub fn unit(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            is_main: false,
        }
    }

    /// A program entry-point request.
    pub fn program(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            is_main: true,
            ..Self::unit(name, source)
        }
    }
}

/// The generated text of one file.
#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub kind: UnitKind,
    pub name: String,
    pub content: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the lexer stages and return the populated model.
///
/// # Errors
///
/// Fails if the main file has no default-exported function, or if a stage
/// rejects the file.
pub fn build_model<'a>(
    file: &'a SourceFile,
    request: &FileRequest,
    ctx: &mut TranslationContext<'_>,
) -> Result<UnitModel<'a>> {
    let kind = if request.is_main {
        if file.default_export().is_none() {
            return Err(TranslateError::MissingEntryPoint {
                file: request.source.clone(),
            });
        }
        UnitKind::Program
    } else {
        UnitKind::Unit
    };

    let mut unit = UnitModel::new(kind, request.name.as_str());
    run_stages(file, &mut unit, ctx)?;
    Ok(unit)
}

/// Translate one AST document into Pascal source text.
pub fn translate_source(
    file: &SourceFile,
    request: &FileRequest,
    config: &LexerConfig,
) -> Result<Translation> {
    let mut ctx = TranslationContext::new(&request.source, config);
    let unit = build_model(file, request, &mut ctx)?;
    let content = render_unit(&unit, config.indent, &mut ctx);

    info!(
        file = %request.source.display(),
        kind = %unit.kind(),
        warnings = ctx.has_warnings(),
        "translated"
    );

    Ok(Translation {
        kind: unit.kind(),
        name: unit.name().to_string(),
        content,
        diagnostics: ctx.take_diagnostics(),
    })
}
