//! Check results and per-repository reports.
//!
//! A [`RepoReport`] owns the ordered list of [`CheckResult`]s produced for one
//! repository. Counts, score and compliance are computed on every call and
//! never cached.

use crate::core::detector::Profile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Weight of a failing check. Only [`Severity::Error`] affects compliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks compliance when failing.
    #[default]
    Error,
    /// Advisory.
    Warning,
    /// Informational.
    Info,
}

impl Severity {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of a single compliance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Stable identifier, `<category>:<item>`.
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Severity of the check.
    pub severity: Severity,
    /// Shell command that would remediate this failure.
    pub fix_command: Option<String>,
}

impl CheckResult {
    /// Creates a passing `error`-severity result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: message.into(),
            severity: Severity::Error,
            fix_command: None,
        }
    }

    /// Creates a failing result with the given severity.
    pub fn fail(name: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            name: name.into(),
            passed: false,
            message: message.into(),
            severity,
            fix_command: None,
        }
    }

    /// Sets the severity.
    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Attaches a remediation command.
    #[must_use]
    pub fn with_fix(mut self, command: impl Into<String>) -> Self {
        self.fix_command = Some(command.into());
        self
    }

    /// Returns the category prefix (text before the first `:`).
    #[must_use]
    pub fn category(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(category, _)| category)
    }

    /// Returns true if this is a failure that has a fix command.
    #[must_use]
    pub fn is_fixable(&self) -> bool {
        !self.passed && self.fix_command.is_some()
    }
}

/// Compliance report for a single repository.
#[derive(Debug, Clone)]
pub struct RepoReport {
    /// Resolved repository path.
    pub repo_path: PathBuf,
    /// Repository directory name.
    pub repo_name: String,
    /// Detected profile.
    pub profile: Profile,
    /// Check results in execution order.
    pub checks: Vec<CheckResult>,
}

impl RepoReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new(repo_path: PathBuf, profile: Profile) -> Self {
        let repo_name = repo_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| repo_path.display().to_string());

        Self {
            repo_path,
            repo_name,
            profile,
            checks: Vec::new(),
        }
    }

    /// Appends the output of one check family.
    pub fn extend(&mut self, results: impl IntoIterator<Item = CheckResult>) {
        self.checks.extend(results);
    }

    /// True iff the profile is [`Profile::Python`].
    #[must_use]
    pub fn is_python_project(&self) -> bool {
        self.profile == Profile::Python
    }

    /// Returns the number of passed checks.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Returns the number of failed checks.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    /// Returns the total number of checks.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.checks.len()
    }

    /// Percentage of passed checks, `0.0` for an empty report.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn score_percent(&self) -> f64 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        self.passed_count() as f64 / total as f64 * 100.0
    }

    /// True if every `error`-severity check passed.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.checks
            .iter()
            .filter(|c| c.severity == Severity::Error)
            .all(|c| c.passed)
    }

    /// Returns failed checks that carry a fix command.
    pub fn fixable_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| c.is_fixable())
    }

    /// Groups checks by category, preserving first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<(&str, Vec<&CheckResult>)> {
        let mut groups: Vec<(&str, Vec<&CheckResult>)> = Vec::new();
        for check in &self.checks {
            let category = check.category();
            match groups.iter_mut().find(|(name, _)| *name == category) {
                Some((_, members)) => members.push(check),
                None => groups.push((category, vec![check])),
            }
        }
        groups
    }
}
