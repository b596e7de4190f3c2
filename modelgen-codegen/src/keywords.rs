//! Rust reserved words and shared diagnostic messages.

/// Words that cannot be used as Rust identifiers without escaping.
///
/// Covers strict keywords, weak keywords (treated as reserved everywhere for
/// simplicity) and keywords reserved for future use.
pub const RESERVED_RUST_KEYWORDS: &[&str] = &[
    // strict
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "try", "type", "unsafe", "use", "where", "while",
    // weak
    "union", "'static", "macro_rules",
    // reserved for future use
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "typeof", "unsized",
    "yield",
];

/// Returns true if `word` is a reserved Rust keyword.
#[must_use]
pub fn is_reserved_rust_keyword(word: &str) -> bool {
    RESERVED_RUST_KEYWORDS.contains(&word)
}

/// Warning emitted when a polymorphic shape is rendered best-effort.
#[must_use]
pub fn unstable_polymorphic_warning(name: &str) -> String {
    format!(
        "Polymorphic and union types are not fully supported by the Rust generator. {name} output will be unstable!"
    )
}

/// Warning emitted when a field falls back to `serde_json::Value`.
#[must_use]
pub fn unstable_field_warning(name: &str) -> String {
    format!(
        "Unsure how to handle {name}, so you must implement serialization (e.g From<serde_json::Value>) for it."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keywords() {
        for word in [
            "as", "async", "await", "crate", "enum", "fn", "impl", "match", "mod", "self", "Self",
            "struct", "type", "union", "'static", "macro_rules", "abstract", "box", "yield",
        ] {
            assert!(is_reserved_rust_keyword(word), "{word} should be reserved");
        }
    }

    #[test]
    fn test_not_reserved() {
        assert!(!is_reserved_rust_keyword("dinosaur"));
        assert!(!is_reserved_rust_keyword("class"));
        assert!(!is_reserved_rust_keyword("SELF"));
    }

    #[test]
    fn test_warnings_name_the_field() {
        assert!(unstable_field_warning("members").contains("members"));
        assert!(unstable_polymorphic_warning("Pet").contains("Pet output will be unstable"));
    }
}
