//! Declaration-collecting stages.
//!
//! Each stage reads one kind of top-level declaration from the AST and
//! registers what it finds in the [`UnitModel`]. The stages always run in
//! the same order: imports, functions, classes.

mod classes;
mod functions;
mod imports;

pub use classes::ClassStage;
pub use functions::FunctionStage;
pub use imports::ImportStage;
use serde::Serialize;
use tracing::debug;
use ts2delphi_ast::SourceFile;

use crate::{Result, TranslationContext, unit::UnitModel};

/// Information about a lexer stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageInfo {
    /// The stage name.
    pub name: &'static str,
    /// A human-readable description.
    pub description: &'static str,
}

/// A stage of the lexer pipeline.
pub trait Lexer {
    /// The name of this stage (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this stage does.
    fn description(&self) -> &'static str;

    /// Register the declarations this stage handles.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be translated. Input the stage
    /// merely skips is recorded as a diagnostic instead.
    fn lex<'a>(
        &self,
        file: &'a SourceFile,
        unit: &mut UnitModel<'a>,
        ctx: &mut TranslationContext<'_>,
    ) -> Result<()>;

    /// Get information about this stage.
    fn info(&self) -> StageInfo {
        StageInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// The stages in execution order.
pub fn stages() -> [StageInfo; 3] {
    [ImportStage.info(), FunctionStage.info(), ClassStage.info()]
}

/// Run every stage over `file`.
pub fn run_stages<'a>(
    file: &'a SourceFile,
    unit: &mut UnitModel<'a>,
    ctx: &mut TranslationContext<'_>,
) -> Result<()> {
    run_stage(&ImportStage, file, unit, ctx)?;
    run_stage(&FunctionStage, file, unit, ctx)?;
    run_stage(&ClassStage, file, unit, ctx)?;
    Ok(())
}

fn run_stage<'a>(
    stage: &impl Lexer,
    file: &'a SourceFile,
    unit: &mut UnitModel<'a>,
    ctx: &mut TranslationContext<'_>,
) -> Result<()> {
    debug!(stage = stage.name(), file = %ctx.file().display(), "running stage");
    stage.lex(file, unit, ctx)
}
