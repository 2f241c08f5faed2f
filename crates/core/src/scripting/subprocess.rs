//! Shared subprocess management utilities.
//!
//! Provides [`run_command`], the common subprocess execution logic used by
//! the shell and binary executors. Each executor builds a
//! [`tokio::process::Command`] for its runtime and delegates spawn, output
//! draining, exit synchronization, and timeout handling here.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;

use super::executor::{CommandInvocation, ScriptError, ScriptOutput};

/// Maximum stdout or stderr size retained per stream (10 MiB).
///
/// Output beyond this limit is read and discarded so the child never blocks
/// on a full pipe.
const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// How long to wait for the output pipes to close after the child exits.
///
/// Pipes stay open while a background grandchild still holds them; past this
/// grace period the remaining process group is killed.
const STREAM_DRAIN_GRACE: Duration = Duration::from_secs(2);

/// Spawn `cmd` as a child process in `invocation.working_directory`, drain
/// stdout/stderr concurrently, wait for it to exit, and enforce the timeout.
///
/// The caller sets the program (and any leading arguments such as a script
/// path); `invocation.args` are appended here. The child gets its own process
/// group so that a timeout kills every process it started, not just the
/// immediate child. The same happens if the returned future is dropped before
/// it completes. Exit status 0 is success; anything else, including death by
/// signal, is [`ScriptError::ExecutionFailed`].
pub async fn run_command(
    cmd: &mut Command,
    invocation: CommandInvocation,
) -> Result<ScriptOutput, ScriptError> {
    cmd.args(&invocation.args)
        .current_dir(&invocation.working_directory)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    #[cfg(unix)]
    cmd.process_group(0);

    let start = Instant::now();

    let mut child = cmd.spawn().map_err(ScriptError::Spawn)?;
    let pid = child.id();
    // Declared after `child` so it drops first, while the group leader is
    // still unreaped and the pgid cannot have been reused.
    let mut group = ProcessGroupGuard::new(pid);
    tracing::debug!(
        pid,
        cwd = %invocation.working_directory.display(),
        "Spawned child process"
    );

    // Read stdout/stderr in spawned tasks so `child.wait()` can run at the
    // same time; otherwise a chatty child fills its pipe and never exits.
    let stdout_task = tokio::spawn(read_stream(child.stdout.take()));
    let stderr_task = tokio::spawn(read_stream(child.stderr.take()));

    let wait_result = tokio::time::timeout(invocation.timeout, child.wait()).await;

    match wait_result {
        Ok(Ok(status)) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            let (stdout_bytes, stderr_bytes) = match join_streams(stdout_task, stderr_task).await
            {
                Some(streams) => {
                    group.disarm();
                    streams
                }
                None => {
                    tracing::warn!(pid, "Output pipes still open after exit, killing process group");
                    group.kill();
                    (Vec::new(), Vec::new())
                }
            };
            let stdout = String::from_utf8_lossy(&stdout_bytes).into_owned();
            let stderr = String::from_utf8_lossy(&stderr_bytes).into_owned();

            match status.code() {
                Some(0) => Ok(ScriptOutput {
                    stdout,
                    stderr,
                    duration_ms,
                }),
                code => Err(ScriptError::ExecutionFailed {
                    exit_code: code.unwrap_or(-1),
                    stderr,
                }),
            }
        }
        Ok(Err(e)) => {
            group.kill();
            let _ = child.wait().await;
            stdout_task.abort();
            stderr_task.abort();
            Err(ScriptError::Io(e))
        }
        Err(_elapsed) => {
            // Kill the whole group, then reap the child so no zombie is left.
            group.kill();
            let _ = child.start_kill();
            let _ = child.wait().await;
            stdout_task.abort();
            stderr_task.abort();
            Err(ScriptError::Timeout {
                elapsed_ms: start.elapsed().as_millis() as u64,
            })
        }
    }
}

/// Kills the child's process group when dropped, unless disarmed.
///
/// Covers every path out of [`run_command`], including cancellation of the
/// future by a disconnecting client or an outer request timeout.
struct ProcessGroupGuard {
    pgid: Option<u32>,
}

impl ProcessGroupGuard {
    fn new(pgid: Option<u32>) -> Self {
        Self { pgid }
    }

    /// The group has finished on its own; leave it alone.
    fn disarm(&mut self) {
        self.pgid = None;
    }

    /// Kill the group now.
    fn kill(&mut self) {
        if let Some(pgid) = self.pgid.take() {
            kill_process_group(pgid);
        }
    }
}

impl Drop for ProcessGroupGuard {
    fn drop(&mut self) {
        if let Some(pgid) = self.pgid {
            tracing::warn!(pgid, "Command abandoned before completion, killing process group");
        }
        self.kill();
    }
}

/// Wait for both reader tasks, giving up after [`STREAM_DRAIN_GRACE`].
async fn join_streams(
    stdout_task: JoinHandle<Vec<u8>>,
    stderr_task: JoinHandle<Vec<u8>>,
) -> Option<(Vec<u8>, Vec<u8>)> {
    let stdout_abort = stdout_task.abort_handle();
    let stderr_abort = stderr_task.abort_handle();

    let joined = tokio::time::timeout(STREAM_DRAIN_GRACE, async {
        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();
        (stdout, stderr)
    })
    .await;

    match joined {
        Ok(streams) => Some(streams),
        Err(_) => {
            stdout_abort.abort();
            stderr_abort.abort();
            None
        }
    }
}

/// Read an output stream to the end, keeping at most [`MAX_OUTPUT_BYTES`].
async fn read_stream<R: AsyncRead + Unpin>(handle: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        let _ = (&mut h)
            .take(MAX_OUTPUT_BYTES as u64)
            .read_to_end(&mut buf)
            .await;
        // Keep draining past the cap.
        let _ = tokio::io::copy(&mut h, &mut tokio::io::sink()).await;
    }
    buf
}

/// Send SIGKILL to the process group led by `pid`.
#[cfg(unix)]
fn kill_process_group(pid: u32) {
    let Ok(pid) = i32::try_from(pid) else {
        return;
    };
    // SAFETY: `kill` has no memory-safety preconditions; a negative pid
    // addresses the process group created by `process_group(0)`.
    let rc = unsafe { libc::kill(-pid, libc::SIGKILL) };
    if rc != 0 {
        tracing::debug!(
            pgid = pid,
            error = %std::io::Error::last_os_error(),
            "Process group already gone"
        );
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pid: u32) {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
