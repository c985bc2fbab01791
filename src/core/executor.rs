//! Shell command execution for fix commands and downloads.
//!
//! Commands run through `sh -c` (or `cmd /C` on Windows) with captured output
//! and a hard timeout. A command that outlives its timeout is killed.

use crate::core::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::timeout;

/// Exit code reported for a command that was killed on timeout.
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Default per-command timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Output from a command execution.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code of the command.
    pub exit_code: i32,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
    /// Whether the command was killed due to timeout.
    pub timed_out: bool,
    /// Wall-clock duration.
    pub duration: Duration,
}

impl CommandOutput {
    /// Returns true if the command exited 0 within its timeout.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0 && !self.timed_out
    }

    /// Returns the most useful failure text: stderr, else stdout.
    #[must_use]
    pub fn failure_message(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone)]
pub struct ExecuteOptions {
    /// Working directory for the command.
    pub cwd: Option<PathBuf>,
    /// Timeout for the command.
    pub timeout: Duration,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ExecuteOptions {
    /// Sets the working directory.
    #[must_use]
    pub fn cwd(mut self, path: impl AsRef<Path>) -> Self {
        self.cwd = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the timeout.
    #[must_use]
    pub const fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }
}

/// Runs shell commands.
#[derive(Debug, Default, Clone, Copy)]
pub struct Executor;

impl Executor {
    /// Creates a new executor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes a shell command line.
    ///
    /// A non-zero exit or a timeout is reported in [`CommandOutput`]; only a
    /// failure to start the shell is an error.
    pub async fn execute(&self, command: &str, options: ExecuteOptions) -> Result<CommandOutput> {
        let start = Instant::now();

        let (shell, shell_arg) = if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        };

        let mut cmd = Command::new(shell);
        cmd.arg(shell_arg)
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(ref cwd) = options.cwd {
            cmd.current_dir(cwd);
        }

        let child = cmd.spawn().map_err(|e| Error::CommandSpawn {
            command: command.to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(command, timeout = ?options.timeout, "Spawned command");

        // Dropping the output future on timeout kills the child.
        let Ok(output) = timeout(options.timeout, child.wait_with_output()).await else {
            tracing::warn!(command, timeout = ?options.timeout, "Command timed out");
            return Ok(CommandOutput {
                exit_code: TIMEOUT_EXIT_CODE,
                stdout: String::new(),
                stderr: format!(
                    "Command timed out after {}",
                    humantime::format_duration(options.timeout)
                ),
                timed_out: true,
                duration: start.elapsed(),
            });
        };

        let output = output.map_err(|e| Error::io("wait for command", e))?;

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            timed_out: false,
            duration: start.elapsed(),
        })
    }

    /// Checks if a command exists in PATH.
    #[must_use]
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_execute_simple_command() {
        let output = Executor::new()
            .execute("echo hello", ExecuteOptions::default())
            .await
            .expect("should succeed");
        assert!(output.success());
        assert!(output.stdout.contains("hello"));
    }

    #[tokio::test]
    async fn test_execute_failing_command() {
        let output = Executor::new()
            .execute("echo broken >&2; exit 3", ExecuteOptions::default())
            .await
            .expect("should complete");
        assert!(!output.success());
        assert_eq!(output.exit_code, 3);
        assert_eq!(output.failure_message(), "broken");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_execute_timeout() {
        let output = Executor::new()
            .execute(
                "sleep 10",
                ExecuteOptions::default().timeout(Duration::from_millis(100)),
            )
            .await
            .expect("should complete");
        assert!(output.timed_out);
        assert_eq!(output.exit_code, TIMEOUT_EXIT_CODE);
        assert!(output.duration < Duration::from_secs(5));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_execute_in_cwd() {
        let temp = TempDir::new().expect("create temp dir");
        let output = Executor::new()
            .execute(
                "touch marker && echo hi",
                ExecuteOptions::default().cwd(temp.path()),
            )
            .await
            .expect("should succeed");
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "hi");
        assert!(temp.path().join("marker").exists());
    }

    #[test]
    fn test_failure_message_falls_back_to_stdout() {
        let output = CommandOutput {
            exit_code: 1,
            stdout: "only stdout\n".to_string(),
            stderr: "  \n".to_string(),
            timed_out: false,
            duration: Duration::ZERO,
        };
        assert_eq!(output.failure_message(), "only stdout");
    }

    #[test]
    fn test_command_exists() {
        if cfg!(unix) {
            assert!(Executor::command_exists("sh"));
        }
        assert!(!Executor::command_exists("definitely_not_a_real_command_12345"));
    }
}
