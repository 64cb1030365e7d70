//! Declaration emitter — writes the generated Python stub package.
//!
//! For every direct or aliased executable the registry produced, the emitter writes one
//! stub module under `_executables/` whose only job is to exist: a decorated placeholder
//! function bound to the resolved identifier, so static analysis offers it as a
//! completion. The package `__init__.py` gets a marker-delimited import block that is
//! fully rewritten on every run; anything a human wrote above the marker survives.
//!
//! This is I/O glue around the registry's partitions. The interesting decisions all
//! happened in the resolver.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::registry::{ExecutableRef, Registry};
use crate::version::SHHELL_VERSION;

/// Python runtime shims shipped into the generated package, embedded at compile time.
const COMMAND_PY: &str = include_str!("../../assets/python/_command.py");
const EXECUTABLE_PY: &str = include_str!("../../assets/python/_executable.py");

/// First line of the generated section of `__init__.py`. Everything from this line to
/// the end of the file belongs to the generator and is replaced on every run.
const IMPORTS_MARKER: &str = "# -- shhell generated imports: do not edit below this line --";

/// Error type for emitter failures.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EmitError {
    fn io(path: &Path, source: io::Error) -> EmitError {
        EmitError::Io { path: path.to_path_buf(), source }
    }
}

/// Writes the generated stub package for one registry.
pub struct DeclarationEmitter {
    package_dir: PathBuf,
}

impl DeclarationEmitter {
    /// Target the Python package at `package_dir` (created if missing).
    pub fn new(package_dir: impl AsRef<Path>) -> Self {
        Self { package_dir: package_dir.as_ref().to_path_buf() }
    }

    /// Regenerate the whole package from the registry's partitions.
    ///
    /// Returns the number of stub modules written. Idempotent: running twice over the
    /// same registry produces byte-identical output.
    pub fn emit(&self, registry: &Registry) -> Result<usize, EmitError> {
        let stubs_dir = self.package_dir.join("_executables");
        fs::create_dir_all(&stubs_dir).map_err(|e| EmitError::io(&stubs_dir, e))?;

        self.write(&self.package_dir.join("_command.py"), COMMAND_PY)?;
        self.write(&self.package_dir.join("_executable.py"), EXECUTABLE_PY)?;
        self.write(&stubs_dir.join("__init__.py"), "")?;

        // Sorted for deterministic output across runs.
        let mut declared: Vec<(&String, &ExecutableRef)> =
            registry.direct.iter().chain(registry.aliased.iter()).collect();
        declared.sort_by(|a, b| a.0.cmp(b.0));

        for (ident, exe) in declared.iter().copied() {
            let stub_path = stubs_dir.join(format!("{ident}.py"));
            tracing::debug!(
                executable = %exe.path.display(),
                stub = %stub_path.display(),
                "writing stub module"
            );
            self.write(&stub_path, &render_stub(ident, exe))?;
        }

        self.rewrite_init(registry, &declared)?;
        Ok(declared.len())
    }

    /// Replace the generated section of `__init__.py`, preserving the hand-written
    /// prefix. A missing file gets a default header with the dynamic fallback.
    fn rewrite_init(
        &self,
        registry: &Registry,
        declared: &[(&String, &ExecutableRef)],
    ) -> Result<(), EmitError> {
        let init_path = self.package_dir.join("__init__.py");
        let prefix = match fs::read_to_string(&init_path) {
            Ok(existing) => match existing.find(IMPORTS_MARKER) {
                Some(pos) => existing[..pos].to_string(),
                None => format!("{}\n\n", existing.trim_end()),
            },
            Err(_) => format!("{DEFAULT_INIT_HEADER}\n\n"),
        };

        let idents: Vec<&str> = declared.iter().map(|(ident, _)| ident.as_str()).collect();
        let block = render_init_block(registry, &idents);
        self.write(&init_path, &format!("{prefix}{block}"))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), EmitError> {
        fs::write(path, content).map_err(|e| EmitError::io(path, e))
    }
}

/// Hand-written part of a fresh `__init__.py`: docstring plus the `__getattr__`
/// fallback that keeps undeclarable executables reachable at runtime.
const DEFAULT_INIT_HEADER: &str = r#""""Autocompletion for your whole PATH, one attribute per executable."""
from ._executable import Executable as _Executable


def __getattr__(name):
    """Fall back to a runtime wrapper for names without a static declaration."""
    return _Executable(name)"#;

/// Render one stub module for a declared executable.
pub fn render_stub(ident: &str, exe: &ExecutableRef) -> String {
    format!(
        r#""""This module is generated to provide autocomplete for {raw_name}."""
from .._executable import Executable
from .._command import Command


@Executable.from_dummy
def {ident}(*args, **kwargs) -> Command:
    """{path}"""
"#,
        raw_name = exe.raw_name,
        path = exe.path.display(),
    )
}

/// Render the generated import block for `__init__.py`.
///
/// The imports hide behind `TYPE_CHECKING` so only static analysis ever executes them;
/// the summary rides along as comments for anyone reading the file.
pub fn render_init_block(registry: &Registry, idents: &[&str]) -> String {
    let mut block = String::new();
    block.push_str(IMPORTS_MARKER);
    block.push('\n');
    block.push_str(&format!("# Generated by shhell {SHHELL_VERSION}.\n"));
    for line in registry.report().to_string().lines() {
        block.push_str(&format!("# {line}\n"));
    }
    block.push_str("from typing import TYPE_CHECKING as _TYPE_CHECKING  # noqa\n");
    block.push('\n');
    block.push_str("if _TYPE_CHECKING:\n");
    if idents.is_empty() {
        block.push_str("    pass\n");
    }
    for ident in idents {
        block.push_str(&format!("    from ._executables.{ident} import {ident}  # noqa\n"));
    }
    block
}

// ============================================================================
// Tests
// ============================================================================
