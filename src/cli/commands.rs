//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::{Path, PathBuf};

use crate::emit::DeclarationEmitter;
use crate::registry::{self, Registry};

use super::{CliError, CliResult, ExitCode};

/// Resolve the directory list to scan: an explicit override or `$PATH`.
fn search_path(override_path: Option<&str>) -> CliResult<Vec<PathBuf>> {
    let dirs = match override_path {
        Some(raw) => registry::parse_search_path(raw),
        None => registry::search_path_from_env(),
    };
    if dirs.is_empty() {
        return Err(CliError::failure(
            "Error: no search path (PATH is unset or empty; pass --path to override)",
        ));
    }
    Ok(dirs)
}

/// `shhell generate`: scan, write the stub package, report.
pub fn generate(output_dir: &Path, override_path: Option<&str>) -> CliResult<ExitCode> {
    println!("Generating dummy modules and imports...");

    let registry = Registry::build(&search_path(override_path)?);
    let emitter = DeclarationEmitter::new(output_dir);
    let written = emitter
        .emit(&registry)
        .map_err(|e| CliError::failure(format!("Error writing stub package: {e}")))?;

    println!(
        "Done! You now have autocompletion for {written} executables in {dir} ✨\n\nSome stats:\n{stats}",
        dir = output_dir.display(),
        stats = registry.report(),
    );
    Ok(ExitCode::SUCCESS)
}

/// `shhell list`: scan and report without touching the filesystem output.
pub fn list(override_path: Option<&str>) -> CliResult<ExitCode> {
    let registry = Registry::build(&search_path(override_path)?);

    let mut declared: Vec<(&String, bool)> = registry
        .direct
        .keys()
        .map(|ident| (ident, true))
        .chain(registry.aliased.keys().map(|ident| (ident, false)))
        .collect();
    declared.sort_by(|a, b| a.0.cmp(b.0));

    for (ident, is_direct) in declared {
        let marker = if is_direct { " " } else { "*" };
        println!("{marker} {ident}");
    }
    println!("\n{}", registry.report());
    Ok(ExitCode::SUCCESS)
}
