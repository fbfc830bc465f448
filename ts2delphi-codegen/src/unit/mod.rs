//! Per-file unit model filled by the lexer stages and read by the emitters.

mod entry;
mod implementation;
mod model;

pub use entry::{ClassMember, TypeEntry, TypeKey, TypeKind};
pub use implementation::{ImplEntry, ImplKey, ImplKind, local_vars};
pub use model::{UnitKind, UnitModel, UsedUnit};
