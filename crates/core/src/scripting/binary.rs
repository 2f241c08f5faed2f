//! Binary executable executor.
//!
//! Runs an executable directly (not through a shell). Validates that the
//! file exists and has execute permissions before spawning.

use std::os::unix::fs::PermissionsExt;

use super::executor::{CommandInvocation, ScriptError, ScriptExecutor, ScriptOutput};
use super::subprocess;

/// Executor for executables with their own interpreter line or native code.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryExecutor;

impl ScriptExecutor for BinaryExecutor {
    async fn execute(
        &self,
        binary_path: &str,
        invocation: CommandInvocation,
    ) -> Result<ScriptOutput, ScriptError> {
        let metadata = tokio::fs::metadata(binary_path)
            .await
            .map_err(|_| ScriptError::NotFound(binary_path.to_string()))?;

        let mode = metadata.permissions().mode();
        if !metadata.is_file() || mode & 0o111 == 0 {
            return Err(ScriptError::PermissionDenied(format!(
                "{binary_path} is not executable (mode {mode:#o})"
            )));
        }

        tracing::info!(
            program = binary_path,
            args = ?invocation.args,
            cwd = %invocation.working_directory.display(),
            "Running executable"
        );

        let mut cmd = tokio::process::Command::new(binary_path);
        subprocess::run_command(&mut cmd, invocation).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
