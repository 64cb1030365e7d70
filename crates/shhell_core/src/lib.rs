//! Provide the canonical vocabulary of the declaration language shhell generates for.
//!
//! The generated stub package is Python, so every name the generator binds must be a
//! syntactically valid Python identifier that is not a reserved word. This crate is the
//! single source of truth for those rules.
//!
//! ## Notes
//!
//! - This is a "language core" crate: **no IO**, no global state, no generator-specific types.
//! - Current scope: the hard keyword table, identifier validity, and the attribute names
//!   the generated package reserves for itself.

pub mod idents;
pub mod keywords;

pub use idents::is_identifier;
pub use keywords::{is_keyword, PYTHON_KEYWORDS, RESERVED_ATTRS};
