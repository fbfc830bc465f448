//! Top-level declarations of a source file.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Statement;

/// An `import ... from "<specifier>"` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    /// The module specifier literal, without quotes.
    pub specifier: String,
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Declared type text (e.g., "number").
    #[serde(rename = "type", default)]
    pub ty: Option<String>,
}

/// A top-level function declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    /// Function name, absent for `export default function () {}`.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether the function carries the `export` modifier.
    #[serde(default)]
    pub exported: bool,
    /// Whether the function is the file's default export.
    #[serde(default)]
    pub default_export: bool,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Return type text.
    #[serde(default)]
    pub return_type: Option<String>,
    /// Top-level statements of the function body.
    #[serde(default)]
    pub body: Vec<Statement>,
}

impl FunctionDeclaration {
    /// Returns true for an unnamed default export, the shape of a program entry point.
    pub fn is_entry_point(&self) -> bool {
        self.name.is_none() && self.default_export
    }
}

/// Member visibility modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Protected,
}

impl Visibility {
    /// Returns the visibility keyword as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A class property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    pub name: String,
    /// Declared type text.
    #[serde(rename = "type", default)]
    pub ty: Option<String>,
    /// Initializer source text (e.g., "1000" for `x: number = 1000`).
    #[serde(default)]
    pub initializer: Option<String>,
    /// Explicit visibility modifier, if written.
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(rename = "static", default)]
    pub is_static: bool,
}

/// A top-level class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub name: String,
    /// Text of the `extends` clause (e.g., "TThread").
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDeclaration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_defaults() {
        let func: FunctionDeclaration = serde_json::from_str(r#"{ "name": "run" }"#).unwrap();
        assert_eq!(func.name.as_deref(), Some("run"));
        assert!(!func.exported);
        assert!(!func.default_export);
        assert!(func.parameters.is_empty());
        assert!(func.return_type.is_none());
        assert!(func.body.is_empty());
    }

    #[test]
    fn test_entry_point_shape() {
        let entry: FunctionDeclaration =
            serde_json::from_str(r#"{ "defaultExport": true }"#).unwrap();
        assert!(entry.is_entry_point());

        let named: FunctionDeclaration =
            serde_json::from_str(r#"{ "name": "main", "defaultExport": true }"#).unwrap();
        assert!(!named.is_entry_point());
    }

    #[test]
    fn test_property_fields() {
        let prop: PropertyDeclaration = serde_json::from_str(
            r#"{ "name": "sleepTime", "type": "number", "initializer": "1000", "visibility": "private", "static": true }"#,
        )
        .unwrap();
        assert_eq!(prop.ty.as_deref(), Some("number"));
        assert_eq!(prop.initializer.as_deref(), Some("1000"));
        assert_eq!(prop.visibility, Some(Visibility::Private));
        assert!(prop.is_static);
    }

    #[test]
    fn test_visibility_display() {
        assert_eq!(Visibility::Public.to_string(), "public");
        assert_eq!(Visibility::Protected.to_string(), "protected");
    }
}
