//! Shared string utilities for identifier handling.

/// Returns true for characters that belong to an identifier segment (`[A-Za-z0-9_]`).
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Normalize a name into a Pascal identifier (e.g., "system.classes" -> "System.Classes").
///
/// The name is split into runs of word characters; the first character of
/// every run is uppercased and everything else is kept as-is, separators
/// included.
pub fn normalize_identifier(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        let word = is_word_char(c);
        if word && !in_word {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
        in_word = word;
    }
    result
}

/// Replace platform path separators with `/` (e.g., "sub\\unit.pas" -> "sub/unit.pas")
pub fn to_forward_slashes(s: &str) -> String {
    s.replace('\\', "/")
}
