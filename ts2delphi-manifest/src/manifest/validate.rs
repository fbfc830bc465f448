//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Source context for error reporting
    source: Arc<SourceContext>,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Find the span of a quoted string value in the source.
    pub fn find_string_span(&self, value: &str) -> Option<SourceSpan> {
        find_string_span(self.source.src(), value)
    }

    /// Find the span of a `key = ...` assignment key in the source.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), key)
    }

    /// Validate an additional reserved keyword.
    pub fn validate_keyword(&self, keyword: &str) -> Result<()> {
        match validate_identifier(keyword) {
            Some(reason) => Err(self.source.invalid_keyword_error(
                keyword,
                reason,
                self.find_string_span(keyword),
            )),
            None => Ok(()),
        }
    }
}

/// Find the span of `value` written as a double- or single-quoted TOML string.
///
/// The span covers the value without its quotes.
pub(crate) fn find_string_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Find the span of `key` at the start of a line followed by `=`.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                let start = offset + (line.len() - trimmed.len());
                return Some(SourceSpan::from((start, key.len())));
            }
        }
        offset += line.len();
    }
    None
}

/// Validate that a keyword is a plain Pascal identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("keyword must start with a letter or underscore"),
        None => return Some("keyword cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("keyword must contain only letters, numbers, and underscores");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("label").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("Record2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1st").is_some());
        assert!(validate_identifier("my-unit").is_some());
        assert!(validate_identifier("two words").is_some());
    }

    #[test]
    fn test_find_string_span() {
        let src = "[translate]\nreserved_keywords = [\"label\"]";
        let span = find_string_span(src, "label").unwrap();
        assert_eq!(span.offset(), 34);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_find_string_span_single_quotes() {
        let span = find_string_span("main = 'App.js'", "App.js").unwrap();
        assert_eq!(span.offset(), 8);
    }

    #[test]
    fn test_find_string_span_missing() {
        assert!(find_string_span("main = \"App.ts\"", "App").is_none());
    }

    #[test]
    fn test_find_key_span() {
        let src = "[translate]\n  indent = 3\n";
        let span = find_key_span(src, "indent").unwrap();
        assert_eq!(span.offset(), 14);
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn test_find_key_span_ignores_prefixes() {
        let src = "indentation = 1\nindent=4\n";
        let span = find_key_span(src, "indent").unwrap();
        assert_eq!(span.offset(), 16);
    }

    #[test]
    fn test_validate_keyword_error() {
        let ctx = ParseContext::new("reserved_keywords = [\"9lives\"]", "ts2delphi.toml");
        let err = ctx.validate_keyword("9lives").unwrap_err();
        assert!(err.to_string().contains("9lives"));
        assert_eq!(ctx.filename(), "ts2delphi.toml");
    }
}
