//! Process-wide workspace configuration.
//!
//! Loaded once at startup and handed to the components that need it. Both
//! directories must exist before the service accepts requests; a missing
//! variable is a configuration error, never a relative or `null`-rooted path.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::CoreError;

/// Default upper bound on a single script invocation (30 minutes).
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 1800;

/// Default upper bound on a result file relayed to a client (64 MiB).
pub const DEFAULT_MAX_RESULT_BYTES: u64 = 64 * 1024 * 1024;

/// Directories and limits shared by every run.
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    /// Run-workspace root; each run lives at `{run_dir}/{run_name}`.
    pub run_dir: PathBuf,
    /// Script library holding the external scripts and reusable input files.
    pub scripts_dir: PathBuf,
    /// Wall-clock limit applied to every script invocation.
    pub command_timeout: Duration,
    /// Result files larger than this are refused rather than loaded.
    pub max_result_bytes: u64,
    /// Species for which off-target search returns the run's existing result
    /// without executing the script. Empty unless an operator opts in.
    pub precomputed_species: Vec<String>,
}

impl WorkspaceConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                          | Default    |
    /// |----------------------------------|------------|
    /// | `RUN_DIR`                        | (required) |
    /// | `SCRIPTS_DIR`                    | (required) |
    /// | `COMMAND_TIMEOUT_SECS`           | `1800`     |
    /// | `MAX_RESULT_BYTES`               | `67108864` |
    /// | `OFF_TARGET_PRECOMPUTED_SPECIES` | (empty)    |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let run_dir = required_dir(&lookup, "RUN_DIR")?;
        let scripts_dir = required_dir(&lookup, "SCRIPTS_DIR")?;

        let command_timeout_secs =
            parse_or(&lookup, "COMMAND_TIMEOUT_SECS", DEFAULT_COMMAND_TIMEOUT_SECS)?;
        if command_timeout_secs == 0 {
            return Err(CoreError::Config(
                "COMMAND_TIMEOUT_SECS must be greater than zero".into(),
            ));
        }
        let max_result_bytes = parse_or(&lookup, "MAX_RESULT_BYTES", DEFAULT_MAX_RESULT_BYTES)?;

        let precomputed_species = lookup("OFF_TARGET_PRECOMPUTED_SPECIES")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            run_dir,
            scripts_dir,
            command_timeout: Duration::from_secs(command_timeout_secs),
            max_result_bytes,
            precomputed_species,
        })
    }

    /// Returns `true` if off-target search for `species` is configured to
    /// bypass script execution.
    pub fn is_precomputed_species(&self, species: &str) -> bool {
        self.precomputed_species.iter().any(|s| s == species)
    }
}

fn required_dir<F>(lookup: &F, key: &str) -> Result<PathBuf, CoreError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CoreError::Config(format!("{key} must be set")))?;

    let path = PathBuf::from(&value);
    if !path.is_absolute() {
        return Err(CoreError::Config(format!(
            "{key} must be an absolute path, got '{value}'"
        )));
    }
    if !path.is_dir() {
        return Err(CoreError::Config(format!(
            "{key} '{value}' is not an existing directory"
        )));
    }
    Ok(path)
}

fn parse_or<F>(lookup: &F, key: &str, default: u64) -> Result<u64, CoreError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| CoreError::Config(format!("{key} must be a valid u64, got '{raw}'"))),
    }
}
