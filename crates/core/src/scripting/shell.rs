//! Shell script executor.
//!
//! Spawns `bash` with the script path followed by the invocation's
//! arguments. The arguments become the script's positional parameters; no
//! shell ever parses them.

use super::executor::{CommandInvocation, ScriptError, ScriptExecutor, ScriptOutput};
use super::subprocess;

/// Executor for shell (bash) scripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

impl ScriptExecutor for ShellExecutor {
    async fn execute(
        &self,
        script_path: &str,
        invocation: CommandInvocation,
    ) -> Result<ScriptOutput, ScriptError> {
        // bash reports a missing script as exit 127; report NotFound instead.
        let metadata = tokio::fs::metadata(script_path)
            .await
            .map_err(|_| ScriptError::NotFound(script_path.to_string()))?;
        if !metadata.is_file() {
            return Err(ScriptError::NotFound(script_path.to_string()));
        }

        tracing::info!(
            script = script_path,
            args = ?invocation.args,
            cwd = %invocation.working_directory.display(),
            "Running shell script"
        );

        let mut cmd = tokio::process::Command::new("bash");
        cmd.arg(script_path);
        subprocess::run_command(&mut cmd, invocation).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
