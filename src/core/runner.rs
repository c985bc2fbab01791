//! Compliance runner.
//!
//! Composes profile detection, the check catalogue and the check executors
//! into a [`RepoReport`] for one repository, and fans that out over a
//! directory of repositories.

use crate::checks;
use crate::core::detector::detect_profile;
use crate::core::error::{Error, Result};
use crate::core::git::is_git_repo;
use crate::core::report::RepoReport;
use crate::policy::applicable_checks;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Runs every applicable check against one repository.
///
/// Never fails: missing paths and unreadable files turn into failing checks.
#[must_use]
pub fn check_repository(path: &Path) -> RepoReport {
    let root = resolve(path);
    let profile = detect_profile(&root);

    let mut report = RepoReport::new(root, profile);
    for family in applicable_checks(profile) {
        let results = checks::run_family(family, &report.repo_path, profile);
        report.extend(results);
    }

    tracing::debug!(
        repo = %report.repo_name,
        profile = %profile,
        passed = report.passed_count(),
        total = report.total_count(),
        compliant = report.is_compliant(),
        "Checked repository"
    );

    report
}

/// Checks every git repository directly under `dir`, in name order.
///
/// Subdirectories without a `.git` entry are skipped. Only a failure to list
/// `dir` itself is an error.
pub fn scan_directory(dir: &Path) -> Result<Vec<RepoReport>> {
    let repos = find_repositories(dir)?;
    tracing::debug!(dir = %dir.display(), count = repos.len(), "Found repositories");
    Ok(repos.iter().map(|repo| check_repository(repo)).collect())
}

/// Lists immediate subdirectories of `dir` that are git repositories.
pub fn find_repositories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut repos = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(Error::ScanDir {
                    path: dir.to_path_buf(),
                    message: e.to_string(),
                });
            },
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable entry");
                continue;
            },
        };

        let path = entry.path();
        if path.is_dir() && is_git_repo(path) {
            repos.push(path.to_path_buf());
        }
    }

    Ok(repos)
}

/// Makes `path` absolute, falling back to the path as given.
fn resolve(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|e| {
        tracing::debug!(path = %path.display(), error = %e, "Could not canonicalize path");
        path.to_path_buf()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::detector::Profile;
    use crate::core::report::Severity;
    use crate::templates;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const GPL3: &str = "GNU GENERAL PUBLIC LICENSE\nVersion 3, 29 June 2007\n";

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, content).expect("write file");
    }

    /// A python repository that satisfies every rule.
    fn compliant_python_repo() -> TempDir {
        let temp = TempDir::new().expect("create temp dir");
        let root = temp.path();
        write(root, "CLAUDE.md", &templates::claude_md("Demo"));
        write(root, "LICENSE", GPL3);
        write(root, "README.md", &templates::readme("Demo"));
        write(root, ".pre-commit-config.yaml", templates::PRECOMMIT_CONFIG_TEMPLATE);
        write(root, ".gitignore", templates::GITIGNORE_TEMPLATE);
        write(root, "pyproject.toml", "[project]\nname = \"demo\"\n");
        write(root, ".github/workflows/ci.yml", templates::CI_WORKFLOW_TEMPLATE);
        write(
            root,
            ".git/hooks/pre-commit",
            "#!/usr/bin/env bash\n# File generated by pre-commit: https://pre-commit.com\n",
        );
        temp
    }

    #[test]
    fn test_compliant_python_repo() {
        let temp = compliant_python_repo();
        let report = check_repository(temp.path());
        assert_eq!(report.profile, Profile::Python);
        assert!(report.is_python_project());
        assert!(report.is_compliant(), "{:#?}", report.checks);
        assert!((report.score_percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_order_python() {
        let temp = compliant_python_repo();
        let report = check_repository(temp.path());
        let categories: Vec<_> = report.categories().iter().map(|(c, _)| *c).collect();
        assert_eq!(
            categories,
            vec!["file", "license", "ci", "precommit", "claude_md", "python"]
        );
    }

    #[test]
    fn test_removing_required_file_breaks_compliance() {
        let temp = compliant_python_repo();
        let before = check_repository(temp.path());
        std::fs::remove_file(temp.path().join(".gitignore")).expect("remove .gitignore");
        let after = check_repository(temp.path());

        assert!(!after.is_compliant());
        assert_eq!(after.total_count(), before.total_count());
        let expected = 100.0 - 100.0 / after.total_count() as f64;
        assert!((after.score_percent() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_documentation_repo_runs_only_files_and_license() {
        let temp = TempDir::new().expect("create temp dir");
        let root = temp.path();
        write(root, "LICENSE", GPL3);
        write(root, "README.md", "# Docs\n");
        write(root, "CLAUDE.md", "no headings\n");
        write(root, ".github/workflows/other.yml", "");
        std::fs::create_dir(root.join(".git")).expect("create .git");

        let report = check_repository(root);
        assert_eq!(report.profile, Profile::Documentation);
        let names: Vec<_> = report.checks.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["file:LICENSE", "file:README.md", "license:gpl3"]);
        assert!(report.is_compliant());
    }

    #[test]
    fn test_python_repo_outside_git_warns() {
        let temp = TempDir::new().expect("create temp dir");
        write(temp.path(), "setup.py", "");
        let report = check_repository(temp.path());
        let git = report
            .checks
            .iter()
            .find(|c| c.name == "git:repository")
            .expect("git check");
        assert_eq!(git.severity, Severity::Warning);
        assert!(!report.checks.iter().any(|c| c.name == "precommit:installed"));
    }

    #[test]
    fn test_check_missing_path_does_not_panic() {
        let temp = TempDir::new().expect("create temp dir");
        let report = check_repository(&temp.path().join("ghost"));
        assert_eq!(report.profile, Profile::Documentation);
        assert_eq!(report.repo_name, "ghost");
        assert!(!report.is_compliant());
    }

    #[test]
    fn test_org_config_repo() {
        let temp = TempDir::new().expect("create temp dir");
        let org = temp.path().join(".github");
        write(&org, "pyproject.toml", "");
        let report = check_repository(&org);
        assert_eq!(report.profile, Profile::OrgConfig);
        assert_eq!(report.total_count(), 2);
    }

    #[test]
    fn test_scan_directory_skips_non_git() {
        let temp = TempDir::new().expect("create temp dir");
        std::fs::create_dir_all(temp.path().join("repo/.git")).expect("create repo");
        std::fs::create_dir_all(temp.path().join("plain")).expect("create plain");
        write(temp.path(), "loose-file", "");

        let reports = scan_directory(temp.path()).expect("scan");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].repo_name, "repo");
    }

    #[test]
    fn test_scan_directory_sorted() {
        let temp = TempDir::new().expect("create temp dir");
        for name in ["zeta", "alpha", "Mid"] {
            std::fs::create_dir_all(temp.path().join(name).join(".git")).expect("create repo");
        }
        let names: Vec<_> = scan_directory(temp.path())
            .expect("scan")
            .into_iter()
            .map(|r| r.repo_name)
            .collect();
        assert_eq!(names, vec!["Mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_scan_missing_directory_is_error() {
        let temp = TempDir::new().expect("create temp dir");
        let result = scan_directory(&temp.path().join("nope"));
        assert!(matches!(result, Err(Error::ScanDir { .. })));
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp = TempDir::new().expect("create temp dir");
        assert!(scan_directory(temp.path()).expect("scan").is_empty());
    }
}
