//! Name resolution for discovered executables.
//!
//! Every executable found on the search path must end up as exactly one of:
//!
//! - **Direct** — the raw file name is already a valid, non-keyword Python identifier
//!   and can be declared verbatim (`ls`, `git`, `python3`).
//! - **Aliased** — the raw name is not usable, but the sanitized form is a valid
//!   identifier that collides with nothing already claimed (`git-lfs` → `git_lfs`).
//! - **Undeclarable** — neither form works (`2to3`); the name is only reachable through
//!   the package's dynamic `__getattr__` fallback.
//!
//! Resolution is two-phase by contract: the caller claims *all* direct names before
//! asking for any alias, so alias candidates are checked against the completed direct
//! set. A direct name therefore always wins a collision with a would-be alias,
//! regardless of discovery order.

use std::collections::HashSet;

use shhell_core::{is_identifier, is_keyword, RESERVED_ATTRS};

// ============================================================================
// Sanitizer
// ============================================================================

/// Fixed character substitutions applied by [`sanitize`], in table order.
///
/// ```text
/// sanitize("i-dunno-c++-but-i-love-python3.10")
///   == "i_dunno_cpp_but_i_love_python3_10"
/// ```
pub const ALIAS_TRANSLATIONS: &[(char, &str)] = &[('.', "_"), ('-', "_"), ('+', "p")];

/// Map a raw executable name to a best-effort identifier candidate.
///
/// Applies [`ALIAS_TRANSLATIONS`] to every occurrence of each listed character and
/// leaves everything else untouched. The result is *not* guaranteed to be a valid
/// identifier (it may still start with a digit, say); callers must re-check with
/// [`shhell_core::is_identifier`].
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        match ALIAS_TRANSLATIONS.iter().find(|(from, _)| *from == ch) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

// ============================================================================
// Resolver
// ============================================================================

/// Classification of one raw executable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Declared verbatim: the raw name is a valid, non-keyword identifier.
    Direct(String),
    /// Declared under a sanitized alias.
    Aliased(String),
    /// Cannot be represented as a static declaration.
    Undeclarable,
}

/// Build the reserved set consulted during alias resolution.
///
/// `__getattr__` (the dynamic fallback) is an ordinary member of this set; it needs no
/// special-case branch in [`resolve`].
pub fn reserved_attrs() -> HashSet<&'static str> {
    RESERVED_ATTRS.iter().copied().collect()
}

/// Resolve one raw name against the completed set of claimed direct identifiers.
///
/// The keyword trailing-underscore rule applies only to alias candidates: a raw name
/// that *is* a keyword (`if`) fails the direct check, sanitizes to itself, and is
/// accepted as `if_`.
pub fn resolve(raw_name: &str, claimed_direct: &HashSet<String>, reserved: &HashSet<&str>) -> Outcome {
    if is_identifier(raw_name) && !is_keyword(raw_name) {
        return Outcome::Direct(raw_name.to_string());
    }

    let candidate = sanitize(raw_name);
    if is_identifier(&candidate)
        && !claimed_direct.contains(&candidate)
        && !reserved.contains(candidate.as_str())
    {
        let alias = if is_keyword(&candidate) {
            format!("{candidate}_")
        } else {
            candidate
        };
        return Outcome::Aliased(alias);
    }

    Outcome::Undeclarable
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_fresh(raw: &str) -> Outcome {
        resolve(raw, &HashSet::new(), &reserved_attrs())
    }

    #[test]
    fn plain_name_is_direct() {
        assert_eq!(resolve_fresh("ls"), Outcome::Direct("ls".to_string()));
    }

    #[test]
    fn dashed_name_is_aliased() {
        assert_eq!(resolve_fresh("git-lfs"), Outcome::Aliased("git_lfs".to_string()));
    }

    #[test]
    fn kitchen_sink_alias() {
        assert_eq!(
            resolve_fresh("i-dunno-c++-but-i-love-python3.10"),
            Outcome::Aliased("i_dunno_cpp_but_i_love_python3_10".to_string())
        );
    }

    #[test]
    fn keyword_gets_trailing_underscore() {
        // "if" is a valid identifier but reserved; sanitize is a no-op on it.
        assert_eq!(resolve_fresh("if"), Outcome::Aliased("if_".to_string()));
        assert_eq!(resolve_fresh("import"), Outcome::Aliased("import_".to_string()));
    }

    #[test]
    fn leading_digit_is_undeclarable() {
        // sanitize("2to3") == "2to3", still not an identifier
        assert_eq!(resolve_fresh("2to3"), Outcome::Undeclarable);
        assert_eq!(resolve_fresh("7z"), Outcome::Undeclarable);
    }

    #[test]
    fn alias_colliding_with_direct_is_undeclarable() {
        let claimed: HashSet<String> = ["git_lfs".to_string()].into();
        assert_eq!(resolve("git-lfs", &claimed, &reserved_attrs()), Outcome::Undeclarable);
    }

    #[test]
    fn alias_colliding_with_getattr_is_undeclarable() {
        // "__getattr-_" sanitizes to the reserved dynamic-fallback name.
        assert_eq!(resolve_fresh("__getattr-_"), Outcome::Undeclarable);
    }

    #[test]
    fn direct_ignores_claimed_set() {
        // Directs are claimed in phase one; a duplicate raw name never reaches the
        // resolver twice, so the claimed set only constrains aliases.
        let claimed: HashSet<String> = ["ls".to_string()].into();
        assert_eq!(resolve("ls", &claimed, &reserved_attrs()), Outcome::Direct("ls".to_string()));
    }

    #[test]
    fn sanitize_replaces_every_occurrence() {
        assert_eq!(sanitize("a.b.c"), "a_b_c");
        assert_eq!(sanitize("c++"), "cpp");
        assert_eq!(sanitize("--"), "__");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for raw in ["git-lfs", "python3.10", "c++", "already_clean", ""] {
            let once = sanitize(raw);
            assert_eq!(sanitize(&once), once);
        }
    }
}
