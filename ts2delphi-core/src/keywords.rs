//! Reserved Pascal keywords that generated unit names must not collide with.

/// Built-in reserved keyword set.
pub const PASCAL_RESERVED_KEYWORDS: &[&str] = &[
    "unit", "for", "each", "except", "begin", "end", "types", "class",
];

/// A reserved keyword set, the built-in keywords plus any configured extras.
///
/// Pascal identifiers are case-insensitive, so lookups ignore ASCII case.
#[derive(Debug, Clone)]
pub struct ReservedKeywords {
    words: Vec<String>,
}

impl ReservedKeywords {
    /// Create a set holding only the built-in keywords.
    pub fn new() -> Self {
        Self {
            words: PASCAL_RESERVED_KEYWORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }

    /// Add extra keywords on top of the current set.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in extra {
            let word = word.into();
            if !self.contains(&word) {
                self.words.push(word);
            }
        }
        self
    }

    /// Check if a name is a reserved keyword.
    pub fn contains(&self, name: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(name))
    }

    /// Iterate over all keywords.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of keywords in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for ReservedKeywords {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keywords() {
        let keywords = ReservedKeywords::new();
        assert!(keywords.contains("unit"));
        assert!(keywords.contains("begin"));
        assert!(keywords.contains("class"));
        assert!(!keywords.contains("utils"));
        assert_eq!(keywords.len(), PASCAL_RESERVED_KEYWORDS.len());
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let keywords = ReservedKeywords::new();
        assert!(keywords.contains("Unit"));
        assert!(keywords.contains("END"));
    }

    #[test]
    fn test_with_extra_deduplicates() {
        let keywords = ReservedKeywords::new().with_extra(["label", "Begin", "label"]);
        assert!(keywords.contains("label"));
        assert_eq!(keywords.len(), PASCAL_RESERVED_KEYWORDS.len() + 1);
    }
}
