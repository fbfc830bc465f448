use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for translating one file.
pub type Result<T> = std::result::Result<T, TranslateError>;

/// A failure that aborts the translation of a single file.
#[derive(Debug, Error, Diagnostic)]
pub enum TranslateError {
    #[error("`{name}` is a reserved keyword")]
    #[diagnostic(
        code(ts2delphi::reserved_keyword),
        help("rename the imported file, generated unit names cannot be Pascal keywords")
    )]
    ReservedKeyword { file: PathBuf, name: String },

    #[error("the main program file '{}' needs a default-exported function", file.display())]
    #[diagnostic(
        code(ts2delphi::missing_entry_point),
        help("export an unnamed default function from the main file, its body becomes the program block")
    )]
    MissingEntryPoint { file: PathBuf },

    #[error("import '{specifier}' in '{}' resolves outside the input directory", file.display())]
    #[diagnostic(code(ts2delphi::import_outside_root))]
    ImportOutsideRoot { file: PathBuf, specifier: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Ast(ts2delphi_ast::Error),
}

impl From<Box<ts2delphi_ast::Error>> for TranslateError {
    fn from(err: Box<ts2delphi_ast::Error>) -> Self {
        TranslateError::Ast(*err)
    }
}
