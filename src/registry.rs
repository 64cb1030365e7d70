//! Executable discovery across the search path.
//!
//! One [`Registry::build`] call walks the search-path directories in order, keeps the
//! first occurrence of every executable name, and classifies each name through the
//! resolver into the three partitions the emitter consumes. The registry is a plain
//! returned value — no module-level state — so the walk is testable against any
//! directory list, not just `$PATH`.
//!
//! Traversal order is an observable contract: it decides which of two same-named
//! executables wins, exactly like shell PATH shadowing.

use std::collections::{HashMap, HashSet};
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::{self, Outcome, ALIAS_TRANSLATIONS};

// ============================================================================
// Data model
// ============================================================================

/// A discovered search-path entry: raw file name plus its first-seen location.
///
/// Owned by the registry for the duration of one generation run; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableRef {
    /// File name as found on disk; not necessarily a valid identifier.
    pub raw_name: String,
    /// First-seen filesystem path across the ordered search path.
    pub path: PathBuf,
    /// Whether the current process may execute the file.
    pub is_executable: bool,
}

impl ExecutableRef {
    fn from_path(path: PathBuf) -> Option<Self> {
        // Lossy decoding is enough: a name that is not valid UTF-8 can never become a
        // Python identifier, so it falls through to the undeclarable partition.
        let raw_name = path.file_name()?.to_string_lossy().into_owned();
        let is_executable = has_exec_permission(&path);
        Some(Self { raw_name, path, is_executable })
    }
}

/// The three pairwise-disjoint partitions produced by one generation run.
///
/// Every discovered executable name lands in exactly one of them.
#[derive(Debug, Default)]
pub struct Registry {
    /// Resolved identifier (== raw name) → first-seen executable.
    pub direct: HashMap<String, ExecutableRef>,
    /// Sanitized alias → first-seen executable.
    pub aliased: HashMap<String, ExecutableRef>,
    /// Raw names that could not be represented, in discovery order.
    pub undeclarable: Vec<String>,
}

// ============================================================================
// Discovery
// ============================================================================

impl Registry {
    /// Walk `search_path` in order and classify every executable found.
    ///
    /// Missing or non-directory entries are skipped silently, as are entries without
    /// execute permission. A raw name seen in an earlier directory shadows all later
    /// occurrences entirely — later duplicates are not merged or overwritten. No
    /// recursion into subdirectories.
    #[tracing::instrument(skip_all, fields(dir_count = search_path.len()))]
    pub fn build(search_path: &[PathBuf]) -> Registry {
        let mut seen: HashSet<String> = HashSet::new();
        let mut discovered: Vec<ExecutableRef> = Vec::new();

        for dir in search_path {
            if !dir.is_dir() {
                tracing::debug!(dir = %dir.display(), "skipping non-directory search-path entry");
                continue;
            }
            let Ok(entries) = fs::read_dir(dir) else {
                tracing::debug!(dir = %dir.display(), "skipping unreadable search-path entry");
                continue;
            };
            for entry in entries.flatten() {
                let Some(exe) = ExecutableRef::from_path(entry.path()) else {
                    continue;
                };
                if !exe.is_executable {
                    continue;
                }
                // First occurrence across the ordered search path wins.
                if !seen.insert(exe.raw_name.clone()) {
                    continue;
                }
                discovered.push(exe);
            }
        }

        let mut registry = Registry::default();
        let reserved = resolver::reserved_attrs();

        // Phase one: claim every direct name before any alias is considered, so alias
        // candidates are checked against the completed direct set.
        let mut pending: Vec<ExecutableRef> = Vec::new();
        for exe in discovered {
            match resolver::resolve(&exe.raw_name, &HashSet::new(), &reserved) {
                Outcome::Direct(ident) => {
                    registry.direct.insert(ident, exe);
                }
                _ => pending.push(exe),
            }
        }

        // Phase two: aliases and failures.
        let claimed: HashSet<String> = registry.direct.keys().cloned().collect();
        for exe in pending {
            match resolver::resolve(&exe.raw_name, &claimed, &reserved) {
                Outcome::Direct(_) => unreachable!("direct names were claimed in phase one"),
                Outcome::Aliased(alias) => {
                    registry.aliased.insert(alias, exe);
                }
                Outcome::Undeclarable => registry.undeclarable.push(exe.raw_name),
            }
        }

        tracing::debug!(
            direct = registry.direct.len(),
            aliased = registry.aliased.len(),
            undeclarable = registry.undeclarable.len(),
            "search path classified"
        );
        registry
    }

    /// Summary counts for the human-readable report.
    pub fn report(&self) -> RegistryReport {
        RegistryReport {
            direct: self.direct.len(),
            aliased: self.aliased.len(),
            undeclarable_count: self.undeclarable.len(),
            undeclarable: self.undeclarable.join(", "),
        }
    }

    /// Total number of declarations (direct + aliased) the emitter will write.
    pub fn declared_count(&self) -> usize {
        self.direct.len() + self.aliased.len()
    }
}

/// Read the search path from the `PATH` environment variable.
pub fn search_path_from_env() -> Vec<PathBuf> {
    env::var_os("PATH")
        .map(|path| env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Split an explicit search-path string using the platform separator.
pub fn parse_search_path(raw: &str) -> Vec<PathBuf> {
    env::split_paths(&OsString::from(raw)).collect()
}

#[cfg(unix)]
fn has_exec_permission(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn has_exec_permission(path: &Path) -> bool {
    path.is_file()
}

// ============================================================================
// Reporting
// ============================================================================

/// Human-readable summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryReport {
    /// Count of names declared verbatim.
    pub direct: usize,
    /// Count of names declared under a sanitized alias.
    pub aliased: usize,
    /// Count of names that could not be represented.
    pub undeclarable_count: usize,
    /// Comma-joined list of undeclarable raw names.
    pub undeclarable: String,
}

impl fmt::Display for RegistryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars: Vec<String> = ALIAS_TRANSLATIONS.iter().map(|(c, _)| c.to_string()).collect();
        writeln!(f, "Created {} 1:1 references", self.direct)?;
        writeln!(
            f,
            "Created {} references, replacing characters like {}",
            self.aliased,
            chars.join(" ")
        )?;
        write!(
            f,
            "Were not able to create {} references: {}",
            self.undeclarable_count, self.undeclarable
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
