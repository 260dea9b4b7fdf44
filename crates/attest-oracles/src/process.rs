//! Timeout-bounded subprocess execution
//!
//! Every command-line oracle goes through [`run`]. Spawning, reading both
//! pipes and waiting for exit all happen under one `tokio::time::timeout`,
//! so a descendant that keeps a pipe open cannot outlive the bound. The
//! child is killed when the deadline drops its future.

use once_cell::sync::OnceCell;
use std::ffi::OsStr;
use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tokio::runtime::Runtime;
use tracing::debug;

/// Errors from running an external command
#[derive(Error, Debug)]
pub enum ProcessError {
    /// Executable not found on PATH
    #[error("{program} is not installed")]
    NotFound {
        /// Program name
        program: String,
    },

    /// Spawning or waiting on the child failed
    #[error("failed to run {program}: {source}")]
    Io {
        /// Program name
        program: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Child did not finish within its bound and was killed
    #[error("{program} timed out after {}s", .timeout.as_secs())]
    Timeout {
        /// Program name
        program: String,
        /// Bound that was exceeded
        timeout: Duration,
    },

    /// Child exited unsuccessfully
    #[error("{program} exited with {status}: {}", .stderr.trim())]
    Failed {
        /// Program name
        program: String,
        /// Exit status
        status: ExitStatus,
        /// Captured standard output
        stdout: String,
        /// Captured standard error
        stderr: String,
    },
}

/// Output of a successful command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

/// Runtime shared by every blocking caller in the process
///
/// Built on first use and reused afterwards.
pub fn runtime() -> io::Result<&'static Runtime> {
    static RUNTIME: OnceCell<Runtime> = OnceCell::new();
    RUNTIME.get_or_try_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("attest-oracle")
            .enable_all()
            .build()
    })
}

/// Run `program args...` and wait at most `timeout`
///
/// Returns the captured output when the child exits successfully. A
/// non-zero exit becomes [`ProcessError::Failed`] carrying both streams.
/// Must not be called from inside an async context.
pub fn run<I, S>(program: &str, args: I, timeout: Duration) -> Result<CommandOutput, ProcessError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let io_error = |source: io::Error| ProcessError::Io {
        program: program.to_string(),
        source,
    };

    debug!(program, "spawning oracle command");

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = runtime().map_err(io_error)?.block_on(async {
        let child = command.spawn().map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ProcessError::NotFound {
                program: program.to_string(),
            },
            _ => io_error(source),
        })?;

        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(output) => output.map_err(io_error),
            Err(_) => Err(ProcessError::Timeout {
                program: program.to_string(),
                timeout,
            }),
        }
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if output.status.success() {
        Ok(CommandOutput { stdout, stderr })
    } else {
        Err(ProcessError::Failed {
            program: program.to_string(),
            status: output.status,
            stdout,
            stderr,
        })
    }
}

impl From<ProcessError> for attest_domain::OracleFailure {
    fn from(err: ProcessError) -> Self {
        use attest_domain::OracleFailure;
        match err {
            ProcessError::NotFound { .. } => OracleFailure::Unavailable(err.to_string()),
            ProcessError::Timeout { .. } => OracleFailure::Timeout,
            ProcessError::Io { .. } => OracleFailure::Failed(err.to_string()),
            ProcessError::Failed { ref stderr, .. } if !stderr.trim().is_empty() => {
                OracleFailure::Failed(stderr.trim().to_string())
            }
            ProcessError::Failed { .. } => OracleFailure::Failed(err.to_string()),
        }
    }
}

/// Whether `program` resolves to an executable file on PATH
pub fn is_installed(program: &str) -> bool {
    let path = std::path::Path::new(program);
    if path.components().count() > 1 {
        return path.is_file();
    }
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
        .unwrap_or(false)
}
