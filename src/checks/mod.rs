//! Check executors, one per rule family.
//!
//! Every executor has the shape `(root, profile) -> Vec<CheckResult>` and
//! never fails: absence becomes a failing result, and a read or parse error
//! becomes a single failing result for that family.

pub mod claude_md;
pub mod files;
pub mod license;
pub mod precommit;
pub mod python;

use crate::core::detector::Profile;
use crate::core::report::CheckResult;
use crate::policy::CheckFamily;
use std::path::Path;

/// Runs one check family against a repository.
#[must_use]
pub fn run_family(family: CheckFamily, root: &Path, profile: Profile) -> Vec<CheckResult> {
    let results = match family {
        CheckFamily::RequiredFiles => files::check_required_files(root, profile),
        CheckFamily::License => license::check_license(root, profile),
        CheckFamily::CiWorkflow => files::check_ci_workflows(root, profile),
        CheckFamily::PrecommitConfig => precommit::check_config(root, profile),
        CheckFamily::PrecommitInstalled => precommit::check_installed(root, profile),
        CheckFamily::ClaudeMd => claude_md::check_sections(root, profile),
        CheckFamily::PythonProject => python::check_project_files(root, profile),
    };

    tracing::debug!(
        family = %family,
        results = results.len(),
        failed = results.iter().filter(|r| !r.passed).count(),
        "Ran check family"
    );

    results
}

/// Reads a UTF-8 text file, rendering the failure as a message.
pub(crate) fn read_text(path: &Path) -> std::result::Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| e.to_string())
}
