//! Type declaration entries.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use ts2delphi_ast::Visibility;

/// A declaration listed in the interface `type` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeEntry {
    pub name: String,
    pub visibility: Option<Visibility>,
    #[serde(flatten)]
    pub kind: TypeKind,
}

/// Declaration payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeKind {
    Struct {
        members: Vec<TypeEntry>,
    },
    Var {
        #[serde(rename = "type")]
        ty: Option<String>,
    },
    Const {
        #[serde(rename = "type")]
        ty: Option<String>,
    },
    Function,
    Class {
        /// Literal text of the parent type.
        parent: Option<String>,
        members: IndexMap<String, ClassMember>,
    },
}

impl TypeKind {
    /// Pascal keyword written after `Name =`.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Struct { .. } => "record",
            TypeKind::Var { .. } => "var",
            TypeKind::Const { .. } => "const",
            TypeKind::Function => "function",
            TypeKind::Class { .. } => "class",
        }
    }
}

/// A class member together with its static flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassMember {
    #[serde(flatten)]
    pub entry: TypeEntry,
    pub is_static: bool,
}

impl TypeEntry {
    /// Create a function type entry.
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: None,
            kind: TypeKind::Function,
        }
    }

    /// Create a class type entry.
    pub fn class(
        name: impl Into<String>,
        parent: Option<String>,
        members: IndexMap<String, ClassMember>,
    ) -> Self {
        Self {
            name: name.into(),
            visibility: None,
            kind: TypeKind::Class { parent, members },
        }
    }

    /// Create a variable entry.
    pub fn var(name: impl Into<String>, ty: Option<String>) -> Self {
        Self {
            name: name.into(),
            visibility: None,
            kind: TypeKind::Var { ty },
        }
    }

    /// Set the visibility tag.
    pub fn with_visibility(mut self, visibility: Option<Visibility>) -> Self {
        self.visibility = visibility;
        self
    }

    /// Deduplication key of this entry.
    pub fn key(&self) -> TypeKey {
        let parent = match &self.kind {
            TypeKind::Class { parent, .. } => parent.clone(),
            _ => None,
        };
        TypeKey {
            name: self.name.clone(),
            parent,
        }
    }

    /// Nested members, in declaration order.
    ///
    /// Returns `None` for entries that cannot carry members.
    pub fn members(&self) -> Option<Vec<&TypeEntry>> {
        match &self.kind {
            TypeKind::Struct { members } => Some(members.iter().collect()),
            TypeKind::Class { members, .. } => Some(members.values().map(|m| &m.entry).collect()),
            _ => None,
        }
    }
}

/// Registry key of a type entry.
///
/// Classes also key on their parent so `Foo` and `Foo extends Bar` coexist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeKey {
    pub name: String,
    pub parent: Option<String>,
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parent {
            Some(parent) => write!(f, "{} extends {}", self.name, parent),
            None => write!(f, "{}", self.name),
        }
    }
}
