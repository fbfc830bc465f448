//! Expressions.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;

/// An expression, tagged by its syntax kind.
///
/// Every expression keeps its source text, which is what the emitters copy
/// into the generated Pascal. Kinds without a variant of their own
/// (`PrefixUnaryExpression`, `ArrowFunction`, ...) deserialize as [`Expression::Raw`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "kind", rename_all_fields = "camelCase")]
pub enum Expression {
    /// `left <operator> right`, assignments included.
    BinaryExpression {
        left: Box<Expression>,
        /// Operator token text (e.g., "=", "+=").
        operator: String,
        right: Box<Expression>,
        text: String,
    },
    /// `receiver.name`
    PropertyAccessExpression {
        #[serde(rename = "expression")]
        receiver: Box<Expression>,
        name: String,
        text: String,
    },
    /// `this`
    ThisExpression,
    /// A plain identifier reference.
    Identifier { text: String },
    /// `callee(arguments...)`
    CallExpression {
        #[serde(rename = "expression")]
        callee: Box<Expression>,
        #[serde(default)]
        arguments: Vec<Expression>,
        text: String,
    },
    /// Literal values.
    #[serde(
        alias = "NumericLiteral",
        alias = "StringLiteral",
        alias = "TrueKeyword",
        alias = "FalseKeyword",
        alias = "NullKeyword"
    )]
    Literal { text: String },
    /// Any other expression, carried only as source text.
    Raw {
        #[serde(default)]
        text: String,
        /// The kind this expression was read as, when it had no variant.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        syntax_kind: Option<String>,
    },
}

/// Tags handled by the derived representation, aliases included.
const KNOWN_KINDS: &[&str] = &[
    "BinaryExpression",
    "PropertyAccessExpression",
    "ThisExpression",
    "Identifier",
    "CallExpression",
    "Literal",
    "NumericLiteral",
    "StringLiteral",
    "TrueKeyword",
    "FalseKeyword",
    "NullKeyword",
    "Raw",
];

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Expression::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = value.get("kind").and_then(Value::as_str).unwrap_or_default();
        if KNOWN_KINDS.contains(&kind) {
            return Expression::deserialize(value).map_err(de::Error::custom);
        }

        let text = value
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Ok(Expression::Raw {
            text: text.to_string(),
            syntax_kind: Some(kind.to_string()).filter(|kind| !kind.is_empty()),
        })
    }
}

impl Expression {
    /// Create an identifier expression.
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier { text: name.into() }
    }

    /// Create an opaque expression from its source text.
    pub fn raw(text: impl Into<String>) -> Self {
        Expression::Raw {
            text: text.into(),
            syntax_kind: None,
        }
    }

    /// Create a `this.<name>` property access.
    pub fn this_member(name: impl Into<String>) -> Self {
        let name = name.into();
        Expression::PropertyAccessExpression {
            text: format!("this.{}", name),
            receiver: Box::new(Expression::ThisExpression),
            name,
        }
    }

    /// Create a `left = right` assignment.
    pub fn assign(left: Expression, right: Expression) -> Self {
        Expression::BinaryExpression {
            text: format!("{} = {}", left.text(), right.text()),
            left: Box::new(left),
            operator: "=".to_string(),
            right: Box::new(right),
        }
    }

    /// Get the source text of this expression.
    pub fn text(&self) -> &str {
        match self {
            Expression::BinaryExpression { text, .. }
            | Expression::PropertyAccessExpression { text, .. }
            | Expression::Identifier { text }
            | Expression::CallExpression { text, .. }
            | Expression::Literal { text }
            | Expression::Raw { text, .. } => text,
            Expression::ThisExpression => "this",
        }
    }

    /// Get the syntax kind name.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::BinaryExpression { .. } => "BinaryExpression",
            Expression::PropertyAccessExpression { .. } => "PropertyAccessExpression",
            Expression::ThisExpression => "ThisExpression",
            Expression::Identifier { .. } => "Identifier",
            Expression::CallExpression { .. } => "CallExpression",
            Expression::Literal { .. } => "Literal",
            Expression::Raw { .. } => "Raw",
        }
    }

    /// Get the kind this expression was read as.
    ///
    /// Same as [`Expression::kind_name`] except for raw expressions that
    /// came from a kind without a variant of their own.
    pub fn syntax_kind(&self) -> &str {
        match self {
            Expression::Raw {
                syntax_kind: Some(kind),
                ..
            } => kind,
            other => other.kind_name(),
        }
    }
}
