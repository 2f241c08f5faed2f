//! Central script orchestrator service.
//!
//! Coordinates run directory resolution, executor dispatch, and result file
//! retrieval. Held in [`AppState`](crate::state::AppState) as an
//! `Arc<ScriptOrchestrator>`.

use std::path::PathBuf;

use pfred_core::naming::{validate_file_name, validate_script_arg};
use pfred_core::result_file::read_result_file;
use pfred_core::run_dir::{RemoveOutcome, RunDirectoryManager};
use pfred_core::scripting::executor::{CommandInvocation, ScriptExecutor};
use pfred_core::scripting::shell::ShellExecutor;
use pfred_core::workspace::WorkspaceConfig;

use crate::error::AppResult;

/// Orchestrates script execution inside per-run working directories.
///
/// Manages the full lifecycle of one script-backed request:
/// 1. Validate the run name and every script argument.
/// 2. Resolve (and lazily create) the run directory.
/// 3. Run the library script with the run directory as its cwd.
/// 4. Read the script's declared output file back as the response body.
///
/// Holds no per-run state. Concurrent requests for different runs are
/// independent; concurrent requests for the same run share its directory
/// without any locking.
pub struct ScriptOrchestrator {
    workspace: WorkspaceConfig,
    runs: RunDirectoryManager,
    shell_executor: ShellExecutor,
}

impl ScriptOrchestrator {
    /// Create a new orchestrator over the given workspace.
    pub fn new(workspace: WorkspaceConfig) -> Self {
        Self {
            runs: RunDirectoryManager::new(&workspace.run_dir),
            workspace,
            shell_executor: ShellExecutor,
        }
    }

    /// The workspace configuration this orchestrator was built with.
    pub fn workspace(&self) -> &WorkspaceConfig {
        &self.workspace
    }

    /// Run `script` from the script library in run `run_name` and return the
    /// contents of `output_file` from the run directory.
    ///
    /// `args` are `(query parameter, value)` pairs in the script's positional
    /// order; the parameter name only labels validation errors. The output
    /// file is read only if the script exited with status 0.
    pub async fn run_script(
        &self,
        run_name: &str,
        script: &str,
        args: &[(&str, &str)],
        output_file: &str,
    ) -> AppResult<String> {
        // 1. Validate everything before touching the filesystem.
        for (param, value) in args {
            validate_script_arg(param, value)?;
        }
        validate_file_name(output_file)?;

        // 2. Resolve the run directory.
        let run_dir = self.runs.resolve(run_name).await?;

        // 3. Execute.
        let script_path = self.workspace.scripts_dir.join(script);
        let invocation = CommandInvocation::new(&run_dir, self.workspace.command_timeout)
            .args(args.iter().map(|(_, value)| *value));

        let output = self
            .shell_executor
            .execute(&script_path.to_string_lossy(), invocation)
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    run = run_name,
                    script,
                    kind = e.kind(),
                    error = %e,
                    "Script run failed"
                );
            })?;

        tracing::info!(
            run = run_name,
            script,
            duration_ms = output.duration_ms,
            "Shell command run successfully"
        );

        // 4. Relay the declared output file.
        self.read_output(&run_dir, output_file).await
    }

    /// Read `file_name` from run `run_name` without running anything.
    pub async fn read_run_file(&self, run_name: &str, file_name: &str) -> AppResult<String> {
        validate_file_name(file_name)?;
        let run_dir = self.runs.resolve(run_name).await?;
        self.read_output(&run_dir, file_name).await
    }

    /// Delete run `run_name` and everything in it.
    pub async fn clean_run(&self, run_name: &str) -> AppResult<RemoveOutcome> {
        let outcome = self.runs.remove(run_name).await?;
        if outcome == RemoveOutcome::NothingToRemove {
            tracing::debug!(run = run_name, "Clean requested for run with no directory");
        }
        Ok(outcome)
    }

    /// Copy `file_name` from the script library into run `run_name`, for
    /// scripts that expect model or input files next to them.
    pub async fn stage_library_file(&self, run_name: &str, file_name: &str) -> AppResult<PathBuf> {
        validate_file_name(file_name)?;
        let run_dir = self.runs.resolve(run_name).await?;
        let source = self.workspace.scripts_dir.join(file_name);
        Ok(self.runs.stage_file(&source, &run_dir).await?)
    }

    async fn read_output(&self, run_dir: &std::path::Path, file_name: &str) -> AppResult<String> {
        let path = run_dir.join(file_name);
        Ok(read_result_file(&path, self.workspace.max_result_bytes)
            .await
            .inspect_err(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Could not read result file");
            })?)
    }
}
