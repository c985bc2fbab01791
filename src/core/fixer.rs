//! Automatic remediation of failed checks.
//!
//! Fix commands run one at a time, in report order, inside the repository
//! root. A failing or timed-out command is reported and the next one runs.

use crate::core::error::Result;
use crate::core::executor::{ExecuteOptions, Executor};
use crate::core::report::RepoReport;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Outcome of one fix command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// Name of the check the fix belongs to.
    pub check: String,
    /// The command that ran.
    pub command: String,
    /// Whether it succeeded.
    pub succeeded: bool,
    /// Failure detail when it did not.
    pub detail: Option<String>,
}

/// Runs the fix command of every failed fixable check in `report`.
///
/// Identical commands (for example one `pre-commit autoupdate` per stale
/// hook) run once.
pub async fn apply_fixes(
    report: &RepoReport,
    executor: &Executor,
    timeout: Duration,
) -> Result<Vec<FixOutcome>> {
    let mut outcomes: Vec<FixOutcome> = Vec::new();

    for check in report.fixable_checks() {
        let Some(command) = check.fix_command.as_deref() else {
            continue;
        };
        if outcomes.iter().any(|o| o.command == command) {
            tracing::debug!(command, check = %check.name, "Fix already applied");
            continue;
        }

        eprintln!("  {} Applying fix: {command}", style("•").cyan());
        tracing::info!(repo = %report.repo_name, command, "Applying fix");

        let result = match missing_program(command) {
            Some(program) => Err(format!("{program} not found in PATH")),
            None => run_fix(executor, command, &report.repo_path, timeout).await,
        };

        match &result {
            Ok(()) => eprintln!("    {} Success", style("✓").green()),
            Err(detail) => eprintln!("    {} Failed: {detail}", style("✗").red()),
        }
        outcomes.push(FixOutcome {
            check: check.name.clone(),
            command: command.to_string(),
            succeeded: result.is_ok(),
            detail: result.err(),
        });
    }

    Ok(outcomes)
}

/// Returns the command's program when it is not installed.
fn missing_program(command: &str) -> Option<&str> {
    let program = command.split_whitespace().next()?;
    (!Executor::command_exists(program)).then_some(program)
}

async fn run_fix(
    executor: &Executor,
    command: &str,
    cwd: &Path,
    timeout: Duration,
) -> std::result::Result<(), String> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .ok()
            .unwrap_or_else(ProgressStyle::default_spinner),
    );
    pb.set_message(format!("Running {command}..."));
    pb.enable_steady_tick(Duration::from_millis(100));

    let options = ExecuteOptions::default().cwd(cwd).timeout(timeout);
    let result = executor.execute(command, options).await;

    pb.finish_and_clear();

    match result {
        Ok(output) if output.success() => Ok(()),
        Ok(output) => Err(output.failure_message()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::detector::Profile;
    use crate::core::report::{CheckResult, Severity};
    use tempfile::TempDir;

    fn report_with(root: &std::path::Path, checks: Vec<CheckResult>) -> RepoReport {
        let mut report = RepoReport::new(root.to_path_buf(), Profile::Python);
        report.extend(checks);
        report
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_fix_in_repo_root() {
        let temp = TempDir::new().expect("create temp dir");
        let report = report_with(
            temp.path(),
            vec![
                CheckResult::fail("x:one", "broken", Severity::Error).with_fix("touch fixed"),
                CheckResult::pass("x:two", "fine").with_fix("touch never"),
            ],
        );

        let outcomes = apply_fixes(&report, &Executor::new(), Duration::from_secs(10))
            .await
            .expect("apply fixes");

        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].succeeded);
        assert!(temp.path().join("fixed").exists());
        assert!(!temp.path().join("never").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_duplicate_commands_run_once() {
        let temp = TempDir::new().expect("create temp dir");
        let report = report_with(
            temp.path(),
            vec![
                CheckResult::fail("v:a", "old", Severity::Warning).with_fix("echo x >> log"),
                CheckResult::fail("v:b", "old", Severity::Warning).with_fix("echo x >> log"),
            ],
        );

        let outcomes = apply_fixes(&report, &Executor::new(), Duration::from_secs(10))
            .await
            .expect("apply fixes");

        assert_eq!(outcomes.len(), 1);
        let log = std::fs::read_to_string(temp.path().join("log")).expect("read log");
        assert_eq!(log.lines().count(), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failure_does_not_stop_later_fixes() {
        let temp = TempDir::new().expect("create temp dir");
        let report = report_with(
            temp.path(),
            vec![
                CheckResult::fail("x:a", "a", Severity::Error).with_fix("echo nope >&2; exit 2"),
                CheckResult::fail("x:b", "b", Severity::Error).with_fix("touch second"),
            ],
        );

        let outcomes = apply_fixes(&report, &Executor::new(), Duration::from_secs(10))
            .await
            .expect("apply fixes");

        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].succeeded);
        assert_eq!(outcomes[0].detail.as_deref(), Some("nope"));
        assert!(outcomes[1].succeeded);
        assert!(temp.path().join("second").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timed_out_fix_is_failure() {
        let temp = TempDir::new().expect("create temp dir");
        let report = report_with(
            temp.path(),
            vec![CheckResult::fail("x:slow", "slow", Severity::Error).with_fix("sleep 10")],
        );

        let outcomes = apply_fixes(&report, &Executor::new(), Duration::from_millis(100))
            .await
            .expect("apply fixes");

        assert!(!outcomes[0].succeeded);
    }

    #[tokio::test]
    async fn test_missing_program_is_failure() {
        let temp = TempDir::new().expect("create temp dir");
        let report = report_with(
            temp.path(),
            vec![CheckResult::fail("x:tool", "tool", Severity::Error)
                .with_fix("definitely-not-installed-tool-12345 install")],
        );

        let outcomes = apply_fixes(&report, &Executor::new(), Duration::from_secs(1))
            .await
            .expect("apply fixes");

        assert!(!outcomes[0].succeeded);
        assert_eq!(
            outcomes[0].detail.as_deref(),
            Some("definitely-not-installed-tool-12345 not found in PATH")
        );
    }

    #[test]
    fn test_missing_program() {
        assert_eq!(
            missing_program("definitely-not-installed-tool-12345 x"),
            Some("definitely-not-installed-tool-12345")
        );
        assert_eq!(missing_program(""), None);
        #[cfg(unix)]
        assert_eq!(missing_program("sh -c true"), None);
    }

    #[tokio::test]
    async fn test_nothing_to_fix() {
        let temp = TempDir::new().expect("create temp dir");
        let report = report_with(temp.path(), vec![CheckResult::pass("x:ok", "ok")]);
        let outcomes = apply_fixes(&report, &Executor::new(), Duration::from_secs(1))
            .await
            .expect("apply fixes");
        assert!(outcomes.is_empty());
    }
}
