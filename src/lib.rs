#![forbid(unsafe_code)]
//! shhell — autocompletion for your whole PATH
//!
//! shhell scans the executable search path and regenerates a Python stub package with
//! one declared attribute per discovered executable, so editors can complete `shhell.ls`,
//! `shhell.git`, `shhell.if_` the same way they complete any other module attribute.
//!
//! The interesting part is name resolution: deciding which raw executable names can be
//! declared verbatim, which need a sanitized alias, and which cannot be represented at
//! all. Everything else is filesystem walking and file writing.
//!
//! ## Panic Policy
//!
//! - **Production code**: use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Generated code**: the emitter writes Python source as string literals; whatever
//!   appears inside those strings is output text, not calls made by this crate.

pub mod cli;
pub mod command;
pub mod emit;
pub mod registry;
pub mod resolver;
pub mod version;

pub use command::{Chain, Command, ExecError, Executable, ExecutionResult, Pipeline};
pub use emit::DeclarationEmitter;
pub use registry::{ExecutableRef, Registry, RegistryReport};
pub use resolver::{resolve, sanitize, Outcome};
