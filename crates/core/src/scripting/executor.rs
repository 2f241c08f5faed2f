//! Unified script execution interface and shared types.
//!
//! Defines [`ScriptExecutor`], the trait that the runtime executors
//! implement, along with [`CommandInvocation`], [`ScriptOutput`], and
//! [`ScriptError`].

use std::path::PathBuf;
use std::time::Duration;

/// One command to run inside a run directory.
///
/// Arguments are an argument vector handed to the OS as-is. Nothing is ever
/// joined into a shell line, so metacharacters in caller-supplied values are
/// inert.
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    /// Positional arguments following the program.
    pub args: Vec<String>,
    /// Current directory of the child process (the run directory).
    pub working_directory: PathBuf,
    /// Maximum wall-clock time before the process group is killed.
    pub timeout: Duration,
}

impl CommandInvocation {
    /// Invocation with no arguments running in `working_directory`.
    pub fn new(working_directory: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            args: Vec::new(),
            working_directory: working_directory.into(),
            timeout,
        }
    }

    /// Append positional arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// Captured output from a successful execution.
#[derive(Debug, Clone)]
pub struct ScriptOutput {
    /// Stdout captured from the process (truncated at the capture limit).
    pub stdout: String,
    /// Stderr captured from the process (truncated at the capture limit).
    pub stderr: String,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Errors that can occur during script execution.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The script file was not found at the specified path.
    #[error("Script not found: {0}")]
    NotFound(String),

    /// The script file exists but lacks execute permissions.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The process could not be started.
    #[error("Failed to spawn process: {0}")]
    Spawn(#[source] std::io::Error),

    /// The script exceeded its timeout; its process group was killed.
    #[error("Script timed out after {elapsed_ms}ms")]
    Timeout {
        /// Elapsed wall-clock time before the process was killed.
        elapsed_ms: u64,
    },

    /// The script ran but did not exit with status 0.
    #[error("Script failed with exit code {exit_code}: {stderr}")]
    ExecutionFailed {
        /// Process exit code (`-1` if killed by signal).
        exit_code: i32,
        /// Captured stderr output.
        stderr: String,
    },

    /// An I/O error occurred while waiting on the process.
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
}

impl ScriptError {
    /// Short stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::PermissionDenied(_) => "permission_denied",
            Self::Spawn(_) => "spawn",
            Self::Timeout { .. } => "timeout",
            Self::ExecutionFailed { .. } => "execution_failed",
            Self::Io(_) => "io",
        }
    }
}

/// Trait implemented by the script runtime executors (shell, binary).
///
/// Each executor receives a program path and an invocation, spawns the
/// appropriate subprocess, waits for it to exit, and returns the captured
/// output only when the exit status was 0.
pub trait ScriptExecutor: Send + Sync {
    /// Execute the program at `program` with the given `invocation`.
    fn execute(
        &self,
        program: &str,
        invocation: CommandInvocation,
    ) -> impl std::future::Future<Output = Result<ScriptOutput, ScriptError>> + Send;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
