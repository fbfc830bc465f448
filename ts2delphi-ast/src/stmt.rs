//! Statements.

use serde::{Deserialize, Serialize};

use crate::Expression;

/// A single declarator of a `let`/`const`/`var` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub name: String,
    /// Declared (or front-end inferred) type text.
    #[serde(rename = "type", default)]
    pub ty: Option<String>,
    #[serde(default)]
    pub initializer: Option<Expression>,
}

/// A statement, tagged by its syntax kind.
///
/// Control-flow statements keep their nested statement lists so the AST
/// stays faithful, although the emitters only translate top-level
/// assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum Statement {
    /// `let a: number = 1, b = 2;`
    VariableStatement {
        declarations: Vec<VariableDeclaration>,
    },
    /// An expression evaluated for its effect, e.g. `x = 1;`
    ExpressionStatement { expression: Expression },
    IfStatement {
        condition: Expression,
        #[serde(default)]
        then_statement: Vec<Statement>,
        #[serde(default)]
        else_statement: Option<Vec<Statement>>,
    },
    WhileStatement {
        condition: Expression,
        #[serde(default)]
        body: Vec<Statement>,
    },
    ForStatement {
        #[serde(default)]
        initializer: Option<Expression>,
        #[serde(default)]
        condition: Option<Expression>,
        #[serde(default)]
        incrementor: Option<Expression>,
        #[serde(default)]
        body: Vec<Statement>,
    },
    ReturnStatement {
        #[serde(default)]
        expression: Option<Expression>,
    },
    Block { statements: Vec<Statement> },
    /// Any statement kind not listed above.
    #[serde(other)]
    Unsupported,
}

impl Statement {
    /// Create an expression statement.
    pub fn expression(expression: Expression) -> Self {
        Statement::ExpressionStatement { expression }
    }

    /// Get the syntax kind name.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::VariableStatement { .. } => "VariableStatement",
            Statement::ExpressionStatement { .. } => "ExpressionStatement",
            Statement::IfStatement { .. } => "IfStatement",
            Statement::WhileStatement { .. } => "WhileStatement",
            Statement::ForStatement { .. } => "ForStatement",
            Statement::ReturnStatement { .. } => "ReturnStatement",
            Statement::Block { .. } => "Block",
            Statement::Unsupported => "Unsupported",
        }
    }
}
