//! Callable implementation entries.

use std::{borrow::Cow, fmt};

use indexmap::IndexMap;
use serde::Serialize;
use ts2delphi_ast::Statement;

/// Kind of a callable implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImplKind {
    Function,
    Procedure,
    Constructor,
}

impl ImplKind {
    /// Pascal keyword of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImplKind::Function => "function",
            ImplKind::Procedure => "procedure",
            ImplKind::Constructor => "constructor",
        }
    }
}

impl fmt::Display for ImplKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry key of an implementation, displayed as e.g. `function add`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImplKey {
    pub kind: ImplKind,
    pub name: String,
}

impl ImplKey {
    pub fn new(kind: ImplKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for ImplKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}

/// A callable listed in the `implementation` section.
///
/// The body borrows the AST statement list, or owns its statements when
/// synthesized (class constructors).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImplEntry<'a> {
    pub kind: ImplKind,
    pub name: String,
    /// Parameter name to normalized type.
    pub parameters: IndexMap<String, Option<String>>,
    /// Normalized return type.
    pub return_type: Option<String>,
    pub body: Cow<'a, [Statement]>,
}

impl<'a> ImplEntry<'a> {
    /// Registry key of this entry.
    pub fn key(&self) -> ImplKey {
        ImplKey::new(self.kind, self.name.clone())
    }

    /// Append a statement, taking ownership of the body if borrowed.
    pub fn push_statement(&mut self, statement: Statement) {
        self.body.to_mut().push(statement);
    }

    /// Local variables declared by top-level statements, name to type text.
    pub fn local_vars(&self) -> IndexMap<&str, Option<&str>> {
        local_vars(&self.body)
    }
}

/// Collect `name -> type` for every top-level variable declaration.
///
/// The first declaration of a name wins.
pub fn local_vars(statements: &[Statement]) -> IndexMap<&str, Option<&str>> {
    let mut vars = IndexMap::new();
    for statement in statements {
        if let Statement::VariableStatement { declarations } = statement {
            for decl in declarations {
                vars.entry(decl.name.as_str())
                    .or_insert(decl.ty.as_deref());
            }
        }
    }
    vars
}

#[cfg(test)]
mod tests {
    use ts2delphi_ast::{Expression, VariableDeclaration};

    use super::*;

    fn entry<'a>(body: Cow<'a, [Statement]>) -> ImplEntry<'a> {
        ImplEntry {
            kind: ImplKind::Function,
            name: "run".into(),
            parameters: IndexMap::new(),
            return_type: None,
            body,
        }
    }

    #[test]
    fn test_key_display() {
        assert_eq!(ImplKey::new(ImplKind::Function, "add").to_string(), "function add");
        assert_eq!(
            ImplKey::new(ImplKind::Constructor, "TestThread").to_string(),
            "constructor TestThread"
        );
    }

    #[test]
    fn test_push_statement_copies_borrowed_body() {
        let original = vec![Statement::Unsupported];
        let mut impl_entry = entry(Cow::Borrowed(&original));
        impl_entry.push_statement(Statement::expression(Expression::raw("x = 1")));

        assert_eq!(impl_entry.body.len(), 2);
        assert_eq!(original.len(), 1);
        assert!(matches!(impl_entry.body, Cow::Owned(_)));
    }

    #[test]
    fn test_local_vars() {
        let body = vec![
            Statement::VariableStatement {
                declarations: vec![
                    VariableDeclaration {
                        name: "total".into(),
                        ty: Some("number".into()),
                        initializer: None,
                    },
                    VariableDeclaration {
                        name: "label".into(),
                        ty: None,
                        initializer: None,
                    },
                ],
            },
            Statement::Block { statements: vec![] },
        ];
        let impl_entry = entry(Cow::Owned(body));
        let vars = impl_entry.local_vars();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars["total"], Some("number"));
        assert_eq!(vars["label"], None);
    }
}
