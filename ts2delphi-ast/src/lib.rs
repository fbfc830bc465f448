//! AST document types for the ts2delphi transpiler.
//!
//! Tokenizing and parsing TypeScript happens in an external front-end. That
//! front-end serializes the declarations of each source file into an AST
//! document which this crate deserializes.
//!
//! # Architecture
//!
//! ```text
//! Unit.ts → front-end → Unit.ast.json → ts2delphi-ast (SourceFile) → codegen → Unit.pas
//! ```
//!
//! Only the shapes the translator reads are modeled. Statement and
//! expression kinds the translator has no use for are still accepted, so a
//! front-end never has to filter its output.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod decl;
mod error;
mod expr;
mod file;
mod stmt;

pub use decl::{
    ClassDeclaration, FunctionDeclaration, ImportDeclaration, Parameter, PropertyDeclaration,
    Visibility,
};
pub use error::{Error, Result};
pub use expr::Expression;
pub use file::{AST_EXTENSION, SourceFile};
pub use stmt::{Statement, VariableDeclaration};
