// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_MANIFEST, IndentStyle, MANIFEST_FILE_NAME, Manifest, Overrides, ParseContext,
    ProjectConfig, ProjectToml, TranslateConfig,
};
