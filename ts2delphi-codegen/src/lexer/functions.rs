//! Top-level functions become implementations, exported ones also types.

use std::borrow::Cow;

use tracing::debug;
use ts2delphi_ast::SourceFile;

use super::Lexer;
use crate::{
    Result, TranslationContext,
    unit::{ImplKind, TypeEntry, UnitModel},
};

/// Registers top-level functions and records the program entry point.
pub struct FunctionStage;

impl Lexer for FunctionStage {
    fn name(&self) -> &'static str {
        "functions"
    }

    fn description(&self) -> &'static str {
        "Register functions and the default-exported program body"
    }

    fn lex<'a>(
        &self,
        file: &'a SourceFile,
        unit: &mut UnitModel<'a>,
        ctx: &mut TranslationContext<'_>,
    ) -> Result<()> {
        for func in &file.functions {
            let Some(name) = func.name.as_deref() else {
                if func.default_export {
                    debug!("found the default unit entry point");
                    unit.set_body(&func.body);
                    if !unit.is_program() {
                        ctx.add_info(
                            self.name(),
                            "default-exported function ignored outside the main file",
                        );
                    }
                } else {
                    ctx.add_info(self.name(), "skipped an unnamed function");
                }
                continue;
            };

            if func.default_export && unit.is_program() {
                ctx.add_warning(
                    self.name(),
                    format!(
                        "default export '{}' is named, the program block stays empty",
                        name
                    ),
                );
            }

            if func.exported {
                unit.register_type(TypeEntry::function(name));
            }

            unit.register_implementation(
                ImplKind::Function,
                name,
                &func.parameters,
                func.return_type.as_deref(),
                Cow::Borrowed(&func.body),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        LexerConfig,
        unit::{TypeKind, UnitKind},
    };

    fn setup(json: &str) -> (SourceFile, LexerConfig) {
        (json.parse().unwrap(), LexerConfig::new("/project/in"))
    }

    #[test]
    fn test_exported_function() {
        let (file, config) = setup(
            r#"{ "functions": [{
                "name": "add", "exported": true,
                "parameters": [{ "name": "a", "type": "number" }, { "name": "b", "type": "number" }],
                "returnType": "number"
            }] }"#,
        );
        let mut ctx = TranslationContext::new("Math.ts", &config);
        let mut unit = UnitModel::new(UnitKind::Unit, "Math");
        FunctionStage.lex(&file, &mut unit, &mut ctx).unwrap();

        let types: Vec<_> = unit.types().collect();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "Add");
        assert_eq!(types[0].kind, TypeKind::Function);

        let impls: Vec<_> = unit.implementations().collect();
        assert_eq!(impls.len(), 1);
        assert_eq!(impls[0].key().to_string(), "function add");
        assert_eq!(impls[0].return_type.as_deref(), Some("Float"));
        assert!(matches!(impls[0].body, Cow::Borrowed(_)));
    }

    #[test]
    fn test_private_function_has_no_type() {
        let (file, config) = setup(r#"{ "functions": [{ "name": "helper" }] }"#);
        let mut ctx = TranslationContext::new("Unit.ts", &config);
        let mut unit = UnitModel::new(UnitKind::Unit, "Unit");
        FunctionStage.lex(&file, &mut unit, &mut ctx).unwrap();

        assert!(!unit.has_types());
        assert_eq!(unit.implementations().count(), 1);
    }

    #[test]
    fn test_default_export_becomes_body() {
        let (file, config) = setup(
            r#"{ "functions": [{ "defaultExport": true, "body": [{ "kind": "ReturnStatement" }] }] }"#,
        );
        let mut ctx = TranslationContext::new("Program.ts", &config);
        let mut unit = UnitModel::new(UnitKind::Program, "Program");
        FunctionStage.lex(&file, &mut unit, &mut ctx).unwrap();

        assert_eq!(unit.body().map(<[_]>::len), Some(1));
        assert!(!unit.has_types());
        assert!(!unit.has_implementations());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_named_default_export_warns_in_program() {
        let (file, config) = setup(
            r#"{ "functions": [{ "name": "main", "defaultExport": true, "exported": true }] }"#,
        );
        let mut ctx = TranslationContext::new("Program.ts", &config);
        let mut unit = UnitModel::new(UnitKind::Program, "Program");
        FunctionStage.lex(&file, &mut unit, &mut ctx).unwrap();

        assert!(unit.body().is_none());
        assert_eq!(unit.implementations().count(), 1);
        assert!(ctx.has_warnings());
        assert_eq!(
            ctx.diagnostics[0].message,
            "default export 'main' is named, the program block stays empty"
        );
    }

    #[test]
    fn test_named_default_export_in_unit_is_quiet() {
        let (file, config) =
            setup(r#"{ "functions": [{ "name": "main", "defaultExport": true }] }"#);
        let mut ctx = TranslationContext::new("Unit.ts", &config);
        let mut unit = UnitModel::new(UnitKind::Unit, "Unit");
        FunctionStage.lex(&file, &mut unit, &mut ctx).unwrap();

        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_unnamed_non_default_skipped() {
        let (file, config) = setup(r#"{ "functions": [{ "exported": true }] }"#);
        let mut ctx = TranslationContext::new("Unit.ts", &config);
        let mut unit = UnitModel::new(UnitKind::Unit, "Unit");
        FunctionStage.lex(&file, &mut unit, &mut ctx).unwrap();

        assert!(unit.body().is_none());
        assert!(!unit.has_implementations());
        assert_eq!(ctx.diagnostics.len(), 1);
    }
}
