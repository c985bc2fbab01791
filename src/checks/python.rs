//! Python project configuration check.

use crate::core::detector::Profile;
use crate::core::report::{CheckResult, Severity};
use crate::policy::files;
use std::path::Path;

/// Checks for `pyproject.toml`, accepting a legacy `setup.py` with a warning.
#[must_use]
pub fn check_project_files(root: &Path, profile: Profile) -> Vec<CheckResult> {
    if profile != Profile::Python {
        return Vec::new();
    }

    let result = if root.join(files::PYPROJECT).exists() {
        CheckResult::pass(
            "python:pyproject.toml",
            "pyproject.toml exists (modern Python project)",
        )
    } else if root.join(files::SETUP_PY).exists() {
        CheckResult::pass("python:setup.py", "setup.py exists (legacy Python project)")
            .with_severity(Severity::Warning)
    } else {
        CheckResult::fail(
            "python:project_config",
            "No pyproject.toml or setup.py found",
            Severity::Error,
        )
    };

    vec![result]
}
