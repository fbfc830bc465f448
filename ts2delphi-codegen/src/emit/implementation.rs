//! The `implementation` section and statement translation.

use tracing::debug;
use ts2delphi_ast::{Expression, Statement};

use crate::{
    TranslationContext,
    diagnostic::Diagnostic,
    unit::{UnitModel, local_vars},
    writer::Writer,
};

/// Name of this emitter in diagnostics.
const EMITTER: &str = "implementation";

/// Type written for local variables declared without a type.
const UNTYPED_VAR: &str = "Variant";

/// Write every registered implementation, in registration order.
pub fn emit_implementations(
    unit: &UnitModel<'_>,
    w: &mut Writer,
    ctx: &mut TranslationContext<'_>,
) {
    for entry in unit.implementations() {
        match &entry.return_type {
            Some(returns) => w.write_line(&format!("{} {}: {};", entry.kind, entry.name, returns)),
            None => w.write_line(&format!("{} {};", entry.kind, entry.name)),
        };
        emit_block(&entry.body, w, ctx, &entry.key().to_string(), "end");
    }
}

/// Write an optional `var` block, then `begin`, the translated statements
/// and `close`.
///
/// Only top-level statements are considered. `location` names the block in
/// diagnostics for statements that are left out.
pub fn emit_block(
    statements: &[Statement],
    w: &mut Writer,
    ctx: &mut TranslationContext<'_>,
    location: &str,
    close: &str,
) {
    let vars = local_vars(statements);
    if !vars.is_empty() {
        w.write_line("var");
        w.indent();
        for (name, ty) in vars {
            let ty = ty.unwrap_or_else(|| {
                ctx.add_diagnostic(
                    Diagnostic::warning(
                        EMITTER,
                        format!("'{}' has no type and is declared {}", name, UNTYPED_VAR),
                    )
                    .at(location),
                );
                UNTYPED_VAR
            });
            w.write_line(&format!("{}: {};", name, ty));
        }
        w.dedent();
    }

    w.write_line("begin");
    w.indent();
    for statement in statements {
        emit_statement(statement, w, ctx, location);
    }
    w.dedent();
    w.write_line(close);
}

fn emit_statement(
    statement: &Statement,
    w: &mut Writer,
    ctx: &mut TranslationContext<'_>,
    location: &str,
) {
    match statement {
        // Declared in the var block
        Statement::VariableStatement { .. } => {}
        Statement::ExpressionStatement { expression } => {
            emit_expression(expression, w, ctx, location);
        }
        other => skip(other.kind_name(), ctx, location),
    }
}

fn emit_expression(
    expression: &Expression,
    w: &mut Writer,
    ctx: &mut TranslationContext<'_>,
    location: &str,
) {
    let Expression::BinaryExpression {
        left,
        operator,
        right,
        ..
    } = expression
    else {
        return skip(expression.syntax_kind(), ctx, location);
    };

    match left.as_ref() {
        Expression::PropertyAccessExpression { receiver, name, .. } if is_this(receiver) => {
            w.write_indented(&[name.as_str()])
                .write(&[" :", operator.as_str(), " "])
                .write(&[right.text()])
                .write(&[";"])
                .newline();
        }
        _ => {
            w.write_line(&format!("{} :{} {};", left.text(), operator, right.text()));
        }
    }
}

fn is_this(expression: &Expression) -> bool {
    match expression {
        Expression::ThisExpression => true,
        Expression::Identifier { text } => text == "this",
        _ => false,
    }
}

fn skip(kind: &str, ctx: &mut TranslationContext<'_>, location: &str) {
    debug!(kind, location, "unknown statement");
    ctx.add_diagnostic(Diagnostic::info(EMITTER, format!("skipped {}", kind)).at(location));
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use ts2delphi_ast::SourceFile;

    use super::*;
    use crate::{
        LexerConfig,
        diagnostic::Severity,
        unit::{ImplKind, UnitKind},
    };

    fn body(json: &str) -> Vec<Statement> {
        let file: SourceFile =
            format!(r#"{{ "functions": [{{ "name": "run", "body": {} }}] }}"#, json)
                .parse()
                .unwrap();
        file.functions.into_iter().next().unwrap().body
    }

    fn emit(statements: &[Statement], return_type: Option<&str>) -> (String, Vec<Diagnostic>) {
        let config = LexerConfig::new("/project/in");
        let mut ctx = TranslationContext::new("Unit.ts", &config);
        let mut unit = UnitModel::new(UnitKind::Unit, "Unit");
        unit.register_implementation(
            ImplKind::Function,
            "run",
            &[],
            return_type,
            Cow::Borrowed(statements),
        );
        let mut w = Writer::default();
        emit_implementations(&unit, &mut w, &mut ctx);
        (w.build(), ctx.take_diagnostics())
    }

    #[test]
    fn test_loop_dropped_assignment_kept() {
        let statements = body(
            r#"[
                { "kind": "WhileStatement", "condition": { "kind": "PrefixUnaryExpression", "text": "!done" }, "body": [] },
                { "kind": "ExpressionStatement", "expression": {
                    "kind": "BinaryExpression", "text": "x = 1", "operator": "=",
                    "left": { "kind": "Identifier", "text": "x" },
                    "right": { "kind": "NumericLiteral", "text": "1" }
                } }
            ]"#,
        );
        let (text, diagnostics) = emit(&statements, Some("int"));

        assert_eq!(text, "function run: Integer;\nbegin\n\tx := 1;\nend\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Info);
        assert_eq!(diagnostics[0].message, "skipped WhileStatement");
        assert_eq!(diagnostics[0].location.as_deref(), Some("function run"));
    }

    #[test]
    fn test_this_member_assignment() {
        let statements = vec![Statement::expression(Expression::assign(
            Expression::this_member("delay"),
            Expression::raw("1000"),
        ))];
        let (text, diagnostics) = emit(&statements, None);

        assert_eq!(text, "function run;\nbegin\n\tdelay := 1000;\nend\n");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_compound_operator() {
        let statements = body(
            r#"[{ "kind": "ExpressionStatement", "expression": {
                "kind": "BinaryExpression", "text": "total += step", "operator": "+=",
                "left": { "kind": "Identifier", "text": "total" },
                "right": { "kind": "Identifier", "text": "step" }
            } }]"#,
        );
        let (text, _) = emit(&statements, None);
        assert!(text.contains("\ttotal :+= step;\n"));
    }

    #[test]
    fn test_var_block() {
        let statements = body(
            r#"[
                { "kind": "VariableStatement", "declarations": [
                    { "name": "total", "type": "number" },
                    { "name": "anything" }
                ] }
            ]"#,
        );
        let (text, diagnostics) = emit(&statements, None);

        assert_eq!(
            text,
            "function run;\nvar\n\ttotal: number;\n\tanything: Variant;\nbegin\nend\n"
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(
            diagnostics[0].message,
            "'anything' has no type and is declared Variant"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("function run"));
    }

    #[test]
    fn test_call_statement_skipped() {
        let statements = body(
            r#"[{ "kind": "ExpressionStatement", "expression": {
                "kind": "CallExpression", "text": "tick()",
                "expression": { "kind": "Identifier", "text": "tick" }
            } }]"#,
        );
        let (text, diagnostics) = emit(&statements, None);

        assert_eq!(text, "function run;\nbegin\nend\n");
        assert_eq!(diagnostics[0].message, "skipped CallExpression");
    }

    #[test]
    fn test_unmodelled_kinds_skipped_by_name() {
        let statements = body(
            r#"[
                { "kind": "VariableStatement", "declarations": [
                    { "name": "started", "type": "Date",
                      "initializer": { "kind": "NewExpression", "text": "new Date()" } },
                    { "name": "done", "type": "boolean",
                      "initializer": { "kind": "FalseKeyword", "text": "false" } }
                ] },
                { "kind": "WhileStatement",
                  "condition": { "kind": "PrefixUnaryExpression", "text": "!this.terminated" },
                  "body": [] },
                { "kind": "ExpressionStatement",
                  "expression": { "kind": "PostfixUnaryExpression", "text": "i++" } },
                { "kind": "ExpressionStatement", "expression": {
                    "kind": "BinaryExpression", "text": "x = 1", "operator": "=",
                    "left": { "kind": "Identifier", "text": "x" },
                    "right": { "kind": "NumericLiteral", "text": "1" }
                } }
            ]"#,
        );
        let (text, diagnostics) = emit(&statements, None);

        assert_eq!(
            text,
            "function run;\nvar\n\tstarted: Date;\n\tdone: boolean;\nbegin\n\tx := 1;\nend\n"
        );
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["skipped WhileStatement", "skipped PostfixUnaryExpression"]
        );
    }
}
