//! Required-file and CI workflow checks.

use crate::core::detector::Profile;
use crate::core::report::{CheckResult, Severity};
use crate::policy::{self, files};
use std::path::Path;

/// Checks that every file the profile requires exists.
#[must_use]
pub fn check_required_files(root: &Path, profile: Profile) -> Vec<CheckResult> {
    policy::policy_for(profile)
        .required_files
        .iter()
        .map(|file| {
            let name = format!("file:{file}");
            if root.join(file).exists() {
                CheckResult::pass(name, format!("{file} exists"))
            } else {
                CheckResult::fail(name, format!("{file} is missing"), Severity::Error)
            }
        })
        .collect()
}

/// Checks that the CI workflow exists, for profiles that require CI.
#[must_use]
pub fn check_ci_workflows(root: &Path, profile: Profile) -> Vec<CheckResult> {
    if !policy::policy_for(profile).ci_required {
        return Vec::new();
    }

    let workflow = files::CI_WORKFLOW;
    let name = format!("ci:{workflow}");
    let result = if root.join(workflow).exists() {
        CheckResult::pass(name, format!("CI workflow {workflow} exists"))
    } else {
        CheckResult::fail(
            name,
            format!("CI workflow {workflow} is missing"),
            Severity::Error,
        )
    };

    vec![result]
}
