//! Indented text output for generated Pascal files.

mod indent;
mod text_writer;

pub use indent::Indent;
pub use text_writer::Writer;
