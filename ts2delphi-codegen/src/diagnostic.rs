//! Non-fatal messages collected while translating a file.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Input that was translated with a loss.
    Warning,
    /// Informational message, e.g. a statement left untranslated.
    Info,
}

impl Severity {
    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from a lexer stage or emitter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The stage or emitter that produced this diagnostic.
    pub stage: String,
    pub message: String,
    /// Optional location in the unit (e.g., "function add").
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            stage: stage.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Create a new info diagnostic.
    pub fn info(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            stage: stage.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (in {})", loc)?;
        }
        Ok(())
    }
}
