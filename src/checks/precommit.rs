//! Pre-commit framework policy checks.
//!
//! Two families live here: the configuration check (required hook repos,
//! hook ids and version floors in `.pre-commit-config.yaml`) and the
//! installation check (the git hook script).

use crate::checks::read_text;
use crate::core::detector::Profile;
use crate::core::git::{GitRepo, PRE_COMMIT_HOOK};
use crate::core::report::{CheckResult, Severity};
use crate::core::version;
use crate::policy::{
    self, files, repo_short_name, FIX_AUTOUPDATE, FIX_INSTALL, MIN_HOOK_VERSIONS,
    REQUIRED_PRECOMMIT_HOOKS,
};
use serde::Deserialize;
use std::cmp::Ordering;
use std::path::Path;

/// Path to the pre-commit config file.
pub const PRE_COMMIT_CONFIG: &str = files::PRE_COMMIT_CONFIG;

/// Marker that identifies a hook script written by the pre-commit framework.
pub const HOOK_MARKER: &str = "pre-commit";

/// Shallow view of `.pre-commit-config.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreCommitConfig {
    /// Configured hook repositories.
    #[serde(default)]
    pub repos: Vec<RepoEntry>,
}

/// One entry of the `repos` sequence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoEntry {
    /// Repository URL (or `local` / `meta`).
    #[serde(default)]
    pub repo: String,
    /// Pinned revision. YAML may type it as a number (`rev: 24.1`).
    #[serde(default)]
    pub rev: Option<serde_yaml::Value>,
    /// Enabled hooks.
    #[serde(default)]
    pub hooks: Vec<HookEntry>,
}

impl RepoEntry {
    /// Returns the revision rendered as text, if it is a scalar.
    #[must_use]
    pub fn rev_text(&self) -> Option<String> {
        match self.rev.as_ref()? {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Returns true if a hook with this id is enabled.
    #[must_use]
    pub fn has_hook(&self, id: &str) -> bool {
        self.hooks.iter().any(|h| h.id == id)
    }
}

/// One entry of a repo's `hooks` sequence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookEntry {
    /// Hook id.
    #[serde(default)]
    pub id: String,
}

impl PreCommitConfig {
    /// Finds a repository entry by URL. The last entry wins on duplicates.
    #[must_use]
    pub fn repo(&self, url: &str) -> Option<&RepoEntry> {
        self.repos.iter().rev().find(|r| r.repo == url)
    }
}

/// Why a config could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigProblem {
    /// YAML syntax or shape error.
    Parse(String),
    /// Empty document, or `repos` missing or not a sequence.
    Invalid,
}

/// Parses pre-commit config text.
pub fn parse_config(content: &str) -> std::result::Result<PreCommitConfig, ConfigProblem> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| ConfigProblem::Parse(e.to_string()))?;

    let has_repos = value
        .as_mapping()
        .and_then(|m| m.get("repos"))
        .is_some_and(serde_yaml::Value::is_sequence);
    if !has_repos {
        return Err(ConfigProblem::Invalid);
    }

    serde_yaml::from_value(value).map_err(|e| ConfigProblem::Parse(e.to_string()))
}

/// Checks required hooks and version floors. Runs only for profiles that
/// require pre-commit and only when the config exists.
#[must_use]
pub fn check_config(root: &Path, profile: Profile) -> Vec<CheckResult> {
    if !policy::policy_for(profile).precommit_required {
        return Vec::new();
    }

    let path = root.join(PRE_COMMIT_CONFIG);
    if !path.exists() {
        return Vec::new();
    }

    let content = match read_text(&path) {
        Ok(content) => content,
        Err(e) => {
            return vec![CheckResult::fail(
                "precommit:read",
                format!("Failed to read {PRE_COMMIT_CONFIG}: {e}"),
                Severity::Error,
            )];
        },
    };

    let config = match parse_config(&content) {
        Ok(config) => config,
        Err(ConfigProblem::Parse(e)) => {
            return vec![CheckResult::fail(
                "precommit:parse",
                format!("Failed to parse {PRE_COMMIT_CONFIG}: {e}"),
                Severity::Error,
            )];
        },
        Err(ConfigProblem::Invalid) => {
            return vec![CheckResult::fail(
                "precommit:valid_config",
                format!("{PRE_COMMIT_CONFIG} is empty or invalid"),
                Severity::Error,
            )];
        },
    };

    let mut results = check_required_hooks(&config);
    results.extend(check_min_versions(&config));
    results
}

fn check_required_hooks(config: &PreCommitConfig) -> Vec<CheckResult> {
    let mut results = Vec::new();

    for required in REQUIRED_PRECOMMIT_HOOKS {
        let Some(entry) = config.repo(required.url) else {
            results.push(CheckResult::fail(
                format!("precommit:repo:{}", repo_short_name(required.url)),
                format!("Missing pre-commit repo: {}", required.url),
                Severity::Error,
            ));
            continue;
        };

        for hook in required.hooks {
            let name = format!("precommit:hook:{hook}");
            if entry.has_hook(hook) {
                results.push(CheckResult::pass(name, format!("Hook '{hook}' is configured")));
            } else {
                results.push(CheckResult::fail(
                    name,
                    format!("Hook '{hook}' is not configured"),
                    Severity::Error,
                ));
            }
        }
    }

    results
}

fn check_min_versions(config: &PreCommitConfig) -> Vec<CheckResult> {
    let mut results = Vec::new();

    for floor in MIN_HOOK_VERSIONS {
        let Some(current) = config.repo(floor.url).and_then(RepoEntry::rev_text) else {
            continue;
        };

        let ordering = version::compare(
            version::strip_v_prefix(&current),
            version::strip_v_prefix(floor.min_version),
        );
        let name = format!("precommit:version:{}", repo_short_name(floor.url));

        match ordering {
            Some(Ordering::Greater | Ordering::Equal) => results.push(CheckResult::pass(
                name,
                format!("Version {current} >= {}", floor.min_version),
            )),
            Some(Ordering::Less) => results.push(
                CheckResult::fail(
                    name,
                    format!("Version {current} < {} (update recommended)", floor.min_version),
                    Severity::Warning,
                )
                .with_fix(FIX_AUTOUPDATE),
            ),
            None => tracing::warn!(
                repo = floor.url,
                rev = %current,
                "Skipping version check: no numeric components"
            ),
        }
    }

    results
}

/// Checks that the pre-commit git hook is installed.
#[must_use]
pub fn check_installed(root: &Path, profile: Profile) -> Vec<CheckResult> {
    if !policy::policy_for(profile).precommit_required {
        return Vec::new();
    }

    let Some(repo) = GitRepo::open(root) else {
        return vec![CheckResult::fail(
            "git:repository",
            "Not a git repository",
            Severity::Warning,
        )];
    };

    let hook_path = repo.hook_path(PRE_COMMIT_HOOK);
    if !hook_path.exists() {
        return vec![CheckResult::fail(
            "precommit:installed",
            "Pre-commit hooks not installed",
            Severity::Error,
        )
        .with_fix(FIX_INSTALL)];
    }

    let result = match read_text(&hook_path) {
        Ok(content) if content.contains(HOOK_MARKER) => {
            CheckResult::pass("precommit:installed", "Pre-commit hooks are installed")
        },
        Ok(_) => CheckResult::fail(
            "precommit:installed",
            "Git pre-commit hook exists but is not pre-commit",
            Severity::Warning,
        ),
        Err(_) => CheckResult::fail(
            "precommit:installed",
            "Could not read pre-commit hook",
            Severity::Warning,
        ),
    };

    vec![result]
}
