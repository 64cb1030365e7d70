//! Python keyword vocabulary (for declaration-name validation).

/// Hard keywords in Python 3.10+.
///
/// Soft keywords (`match`, `case`, `type`, `_`) are deliberately absent: Python allows
/// them as ordinary binding names, so the generator may declare them verbatim.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// Attribute names the generated package keeps for itself.
///
/// `__getattr__` backs the dynamic fallback for executables that could not be declared
/// statically, so no alias may shadow it.
pub const RESERVED_ATTRS: &[&str] = &["__getattr__"];

/// Check whether a name is a Python hard keyword.
pub fn is_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_match_python_iskeyword() {
        assert!(is_keyword("if"));
        assert!(is_keyword("lambda"));
        assert!(is_keyword("False"));
        assert!(!is_keyword("ls"));
        assert!(!is_keyword("print"));
    }

    #[test]
    fn soft_keywords_are_not_reserved() {
        assert!(!is_keyword("match"));
        assert!(!is_keyword("case"));
        assert!(!is_keyword("type"));
        assert!(!is_keyword("_"));
    }

    #[test]
    fn keyword_table_is_sorted_case_sensitively() {
        // Uppercase literals sort before lowercase, same order `keyword.kwlist` uses.
        let mut sorted = PYTHON_KEYWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(PYTHON_KEYWORDS, sorted.as_slice());
    }

    #[test]
    fn getattr_is_reserved() {
        assert!(RESERVED_ATTRS.contains(&"__getattr__"));
    }
}
