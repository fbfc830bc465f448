//! Indentation configuration for generated files.

use ts2delphi_manifest::IndentStyle;

/// Indentation unit for one level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indent {
    /// Tab character.
    #[default]
    Tab,
    /// Spaces with the specified width (2, 4 or 8).
    Spaces(u8),
}

impl Indent {
    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tab => "\t",
            Self::Spaces(2) => "  ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
        }
    }
}

impl From<IndentStyle> for Indent {
    fn from(style: IndentStyle) -> Self {
        match style {
            IndentStyle::Tab => Self::Tab,
            IndentStyle::Spaces(n) => Self::Spaces(n),
        }
    }
}
