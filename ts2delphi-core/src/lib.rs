//! Core utilities and types for the ts2delphi transpiler.
//!
//! This crate provides the naming, keyword and type tables shared by the
//! lexer stages and emitters, plus output file writing.

mod file;
mod keywords;
mod type_mapper;
mod utils;

// File operations
pub use file::{OutputFile, WriteResult};
// Pascal keywords
pub use keywords::{PASCAL_RESERVED_KEYWORDS, ReservedKeywords};
// Primitive type table
pub use type_mapper::{PrimitiveType, map_type_name};
// String utilities
pub use utils::{is_word_char, normalize_identifier, to_forward_slashes};
