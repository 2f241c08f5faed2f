//! Per-run working directories under the run-workspace root.
//!
//! A run is a caller-named directory at `{base}/{run_name}`. It is created
//! lazily on first use, mutated by whatever scripts execute inside it, and
//! removed only on explicit request. There is no locking: two requests that
//! name the same run share the same directory, so callers must pick distinct
//! run names per logical job.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::CoreError;
use crate::naming::{validate_file_name, validate_run_name};

/// Result of [`RunDirectoryManager::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The directory existed and was deleted.
    Removed,
    /// There was no directory for this run.
    NothingToRemove,
}

/// Creates, resolves, and deletes run directories.
#[derive(Debug, Clone)]
pub struct RunDirectoryManager {
    base: PathBuf,
}

impl RunDirectoryManager {
    /// Create a manager rooted at `base`. The base directory is expected to
    /// exist already (checked once when the configuration is loaded).
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The run-workspace root.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Map a run name to its directory without touching the filesystem.
    pub fn path_for(&self, run_name: &str) -> Result<PathBuf, CoreError> {
        validate_run_name(run_name)?;
        Ok(self.base.join(run_name))
    }

    /// Map a run name to its directory, creating the directory if absent.
    ///
    /// Idempotent: a directory that already exists is returned as-is.
    pub async fn resolve(&self, run_name: &str) -> Result<PathBuf, CoreError> {
        let path = self.path_for(run_name)?;
        match fs::create_dir(&path).await {
            Ok(()) => {
                tracing::debug!(run = run_name, path = %path.display(), "Created run directory");
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                // A regular file squatting on the run name is not usable.
                let meta = fs::metadata(&path)
                    .await
                    .map_err(|e| CoreError::io(&path, e))?;
                if !meta.is_dir() {
                    return Err(CoreError::io(
                        &path,
                        std::io::Error::new(ErrorKind::AlreadyExists, "not a directory"),
                    ));
                }
            }
            Err(e) => return Err(CoreError::io(&path, e)),
        }
        Ok(path)
    }

    /// Recursively delete a run directory.
    pub async fn remove(&self, run_name: &str) -> Result<RemoveOutcome, CoreError> {
        let path = self.path_for(run_name)?;
        tracing::info!(run = run_name, path = %path.display(), "Removing run directory");
        match fs::remove_dir_all(&path).await {
            Ok(()) => Ok(RemoveOutcome::Removed),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(RemoveOutcome::NothingToRemove),
            Err(e) => Err(CoreError::io(&path, e)),
        }
    }

    /// Copy `source` into `run_dir`, keeping its file name. Returns the
    /// destination path.
    pub async fn stage_file(&self, source: &Path, run_dir: &Path) -> Result<PathBuf, CoreError> {
        let file_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                CoreError::Validation(format!("{} has no usable file name", source.display()))
            })?;
        validate_file_name(file_name)?;

        let dest = run_dir.join(file_name);
        fs::copy(source, &dest).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                CoreError::NotFound {
                    entity: "Staged file",
                    id: source.display().to_string(),
                }
            } else {
                CoreError::io(source, e)
            }
        })?;
        Ok(dest)
    }

    /// Save `contents` as `run_dir/file_name`, replacing any existing file.
    pub async fn write_file(
        &self,
        run_dir: &Path,
        file_name: &str,
        contents: &str,
    ) -> Result<PathBuf, CoreError> {
        validate_file_name(file_name)?;
        let dest = run_dir.join(file_name);
        fs::write(&dest, contents)
            .await
            .map_err(|e| CoreError::io(&dest, e))?;
        Ok(dest)
    }
}
