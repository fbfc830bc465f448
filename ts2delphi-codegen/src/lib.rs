//! Translation of TypeScript-shaped AST documents into Pascal units.
//!
//! The pipeline for one file:
//!
//! 1. [`lexer`] stages read the [`SourceFile`](ts2delphi_ast::SourceFile)
//!    and populate a [`unit::UnitModel`].
//! 2. [`emit`] serializes the model through a [`writer::Writer`].
//!
//! [`project::Project`] drives this for every document under an input root.
//!
//! # Module Organization
//!
//! - [`unit`] - Unit model and its registries (UnitModel, TypeEntry, ImplEntry)
//! - [`lexer`] - Declaration-collecting stages (ImportStage, FunctionStage, ClassStage)
//! - [`emit`] - Type and implementation emitters
//! - [`writer`] - Indented text accumulator
//! - [`project`] - Directory traversal and per-file results

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod context;
mod diagnostic;
pub mod emit;
mod error;
pub mod lexer;
pub mod project;
mod translate;
pub mod unit;
pub mod writer;

pub use context::{LexerConfig, TranslationContext};
pub use diagnostic::{Diagnostic, Severity};
pub use error::{Result, TranslateError};
pub use translate::{FileRequest, Translation, build_model, translate_source};
