//! Deferred command construction and the (placeholder) execution contract.
//!
//! A [`Command`] only records what to run; nothing touches the operating system at
//! construction time. The run entry points are a documented contract gap: no execution
//! backend exists yet, so every one of them fails loudly with
//! [`ExecError::NotImplemented`] instead of pretending to succeed.
//!
//! Awaiting a [`Command`] directly is sugar for the suspendable run path — the
//! `IntoFuture` impl delegates to [`Command::arun`], it does not duplicate its logic.
//! The pipe (`|`) and conditional-chain hooks are reserved for later extension and
//! define no behavior.

use std::collections::BTreeMap;
use std::future::{Future, IntoFuture};
use std::ops::BitOr;
use std::pin::Pin;

use thiserror::Error;

/// Error type for command execution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// No execution backend exists in this core; every run entry point returns this.
    #[error("shhellno: command execution is not implemented")]
    NotImplemented,
}

/// Outcome of a (future) command execution.
///
/// Never constructed in this core — the run entry points fail before producing one —
/// but the shape is part of the public contract the backend will fill in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// The command that produced this result.
    pub command: Command,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

// ============================================================================
// Command
// ============================================================================

/// A deferred, immutable invocation descriptor: executable plus arguments.
///
/// Building the real argv happens (eventually) at execution time, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    executable: String,
    args: Vec<String>,
    kwargs: BTreeMap<String, String>,
}

impl Command {
    /// Record an invocation of `executable` with no arguments yet.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            args: Vec::new(),
            kwargs: BTreeMap::new(),
        }
    }

    /// Append one positional argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several positional arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Record one keyword argument.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }

    /// The executable identifier this command will run.
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Positional arguments, in insertion order.
    pub fn positional(&self) -> &[String] {
        &self.args
    }

    /// Keyword arguments, sorted by key.
    pub fn keyword(&self) -> &BTreeMap<String, String> {
        &self.kwargs
    }

    /// Execute synchronously and return the result.
    ///
    /// # Errors
    ///
    /// Always [`ExecError::NotImplemented`]: there is no execution backend yet.
    pub fn run(&self) -> Result<ExecutionResult, ExecError> {
        Err(ExecError::NotImplemented)
    }

    /// Execute cooperatively (suspendable, resumed by the caller's scheduler).
    ///
    /// # Errors
    ///
    /// Same missing-backend contract as [`Command::run`]. Cancellation semantics are
    /// deliberately undefined until a real backend exists.
    pub async fn arun(self) -> Result<ExecutionResult, ExecError> {
        Err(ExecError::NotImplemented)
    }

    /// Reserved composition hook: run `next` only if this command succeeded
    /// (shell `&&`). No behavior is defined for the chain yet.
    pub fn and_then(self, next: Command) -> Chain {
        Chain { commands: vec![self, next] }
    }
}

impl IntoFuture for Command {
    type Output = Result<ExecutionResult, ExecError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    /// Awaiting a command is sugar for the suspendable run path.
    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.arun())
    }
}

/// Reserved composition hook: `a | b` records a pipe (shell `|`).
/// No behavior is defined for the pipeline yet.
impl BitOr for Command {
    type Output = Pipeline;

    fn bitor(self, rhs: Command) -> Pipeline {
        Pipeline { stages: vec![self, rhs] }
    }
}

impl BitOr<Command> for Pipeline {
    type Output = Pipeline;

    fn bitor(mut self, rhs: Command) -> Pipeline {
        self.stages.push(rhs);
        self
    }
}

/// Placeholder descriptor for `a | b` composition. Shape only, no operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Command>,
}

/// Placeholder descriptor for `a.and_then(b)` composition. Shape only, no operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    commands: Vec<Command>,
}

// ============================================================================
// Executable
// ============================================================================

/// Wrapper bound to one resolved identifier in the generated package.
///
/// The emitter declares one of these per direct or aliased executable; calling it
/// builds a [`Command`] for that executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executable {
    name: String,
}

impl Executable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start a deferred command for this executable.
    pub fn command(&self) -> Command {
        Command::new(&self.name)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_records_without_io() {
        let cmd = Command::new("grep")
            .arg("-r")
            .args(["needle", "."])
            .kwarg("color", "always");

        assert_eq!(cmd.executable(), "grep");
        assert_eq!(cmd.positional(), &["-r", "needle", "."]);
        assert_eq!(cmd.keyword().get("color").map(String::as_str), Some("always"));
    }

    #[test]
    fn sync_run_fails_loudly() {
        let cmd = Command::new("ls");
        assert_eq!(cmd.run(), Err(ExecError::NotImplemented));
        // The command itself is untouched and reusable.
        assert_eq!(cmd.executable(), "ls");
    }

    #[tokio::test]
    async fn suspendable_run_fails_loudly() {
        let err = Command::new("ls").arun().await.unwrap_err();
        assert_eq!(err, ExecError::NotImplemented);
    }

    #[tokio::test]
    async fn awaiting_a_command_delegates_to_arun() {
        let err = Command::new("ls").arg("-la").await.unwrap_err();
        assert_eq!(err, ExecError::NotImplemented);
    }

    #[test]
    fn error_message_is_explicit() {
        assert_eq!(
            ExecError::NotImplemented.to_string(),
            "shhellno: command execution is not implemented"
        );
    }

    #[test]
    fn pipe_and_chain_only_reserve_shape() {
        let pipeline = Command::new("cat").arg("log") | Command::new("grep").arg("ERROR");
        let longer = pipeline | Command::new("wc").arg("-l");
        assert_eq!(longer.stages.len(), 3);

        let chain = Command::new("make").and_then(Command::new("make").arg("install"));
        assert_eq!(chain.commands.len(), 2);
    }

    #[test]
    fn executable_builds_commands() {
        let exe = Executable::new("rg");
        let cmd = exe.command().arg("TODO");
        assert_eq!(cmd.executable(), "rg");
        assert_eq!(exe.name(), "rg");
    }
}
