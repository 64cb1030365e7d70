//! Python identifier validity (PEP 3131 semantics).

use unicode_ident::{is_xid_continue, is_xid_start};

/// Check whether `name` is a syntactically valid Python identifier.
///
/// Mirrors `str.isidentifier`: the first character must be in XID_Start (or be `_`),
/// every following character must be in XID_Continue. Keywords are *not* rejected
/// here; use [`crate::keywords::is_keyword`] for that.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || is_xid_start(c) => {}
        _ => return false,
    }
    chars.all(is_xid_continue)
}
