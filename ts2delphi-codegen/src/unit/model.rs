//! The unit model and its registries.

use std::{borrow::Cow, fmt};

use indexmap::{IndexMap, IndexSet, map::Entry};
use serde::{Serialize, Serializer};
use tracing::debug;
use ts2delphi_ast::{Parameter, Statement};
use ts2delphi_core::{map_type_name, normalize_identifier};

use super::{ImplEntry, ImplKey, ImplKind, TypeEntry, TypeKey};

/// Whether the generated file is a library unit or a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Unit,
    Program,
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Unit => "unit",
            UnitKind::Program => "program",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry of the `uses` clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UsedUnit {
    /// Normalized unit name.
    pub name: String,
    /// Generated file path for project units.
    pub path: Option<String>,
}

impl fmt::Display for UsedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} in '{}'", self.name, path),
            None => write!(f, "{}", self.name),
        }
    }
}

impl Serialize for UsedUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Declarations collected for one source file.
#[derive(Debug, Clone, Serialize)]
pub struct UnitModel<'a> {
    kind: UnitKind,
    name: String,
    used_units: IndexSet<UsedUnit>,
    #[serde(serialize_with = "serialize_values")]
    types: IndexMap<TypeKey, TypeEntry>,
    #[serde(serialize_with = "serialize_values")]
    implementations: IndexMap<ImplKey, ImplEntry<'a>>,
    body: Option<&'a [Statement]>,
}

fn serialize_values<K, V, S>(map: &IndexMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    V: Serialize,
    S: Serializer,
{
    serializer.collect_seq(map.values())
}

impl<'a> UnitModel<'a> {
    /// Create an empty model for the file named `name`.
    pub fn new(kind: UnitKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            used_units: IndexSet::new(),
            types: IndexMap::new(),
            implementations: IndexMap::new(),
            body: None,
        }
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_program(&self) -> bool {
        self.kind == UnitKind::Program
    }

    /// Entries of the `uses` clause in registration order.
    pub fn used_units(&self) -> impl Iterator<Item = &UsedUnit> {
        self.used_units.iter()
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeEntry> {
        self.types.values()
    }

    pub fn implementations(&self) -> impl Iterator<Item = &ImplEntry<'a>> {
        self.implementations.values()
    }

    pub fn has_used_units(&self) -> bool {
        !self.used_units.is_empty()
    }

    pub fn has_types(&self) -> bool {
        !self.types.is_empty()
    }

    pub fn has_implementations(&self) -> bool {
        !self.implementations.is_empty()
    }

    /// Statements of the program main block.
    pub fn body(&self) -> Option<&'a [Statement]> {
        self.body
    }

    pub fn set_body(&mut self, body: &'a [Statement]) {
        self.body = Some(body);
    }

    /// Add a unit to the `uses` clause.
    ///
    /// The name is normalized; `path` is the generated file of a project unit.
    /// Registering an identifier twice keeps its first position.
    pub fn register_used_unit(&mut self, name: &str, path: Option<&str>) {
        let unit = UsedUnit {
            name: normalize_identifier(name),
            path: path.map(str::to_string),
        };
        debug!(unit = %unit, "adding to the uses");
        self.used_units.insert(unit);
    }

    /// Add a type declaration. Returns false if its key was already registered.
    pub fn register_type(&mut self, mut entry: TypeEntry) -> bool {
        entry.name = normalize_identifier(&entry.name);
        match self.types.entry(entry.key()) {
            Entry::Occupied(existing) => {
                debug!(key = %existing.key(), "type already registered");
                false
            }
            Entry::Vacant(slot) => {
                debug!(key = %slot.key(), "adding to the types");
                slot.insert(entry);
                true
            }
        }
    }

    /// Add a callable implementation, or return the one already registered
    /// under the same kind and name.
    pub fn register_implementation(
        &mut self,
        kind: ImplKind,
        name: &str,
        parameters: &[Parameter],
        return_type: Option<&str>,
        body: Cow<'a, [Statement]>,
    ) -> &mut ImplEntry<'a> {
        match self.implementations.entry(ImplKey::new(kind, name)) {
            Entry::Occupied(existing) => {
                debug!(key = %existing.key(), "implementation already registered");
                existing.into_mut()
            }
            Entry::Vacant(slot) => {
                debug!(key = %slot.key(), "adding to the implementations");
                let parameters = parameters
                    .iter()
                    .map(|p| (p.name.clone(), p.ty.as_deref().map(map_type_name)))
                    .collect();
                slot.insert(ImplEntry {
                    kind,
                    name: name.to_string(),
                    parameters,
                    return_type: return_type.map(map_type_name),
                    body,
                })
            }
        }
    }
}
