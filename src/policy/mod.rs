//! Organization policy tables and the per-profile check catalogue.
//!
//! Everything here is static configuration. The values are the policy that an
//! existing fleet of repositories is audited against, so they are reproduced
//! exactly and are not runtime-configurable.

use crate::core::detector::Profile;

/// Well-known file names.
pub mod files {
    /// Agent guidance file.
    pub const CLAUDE_MD: &str = "CLAUDE.md";
    /// License file.
    pub const LICENSE: &str = "LICENSE";
    /// Readme.
    pub const README: &str = "README.md";
    /// Pre-commit framework configuration.
    pub const PRE_COMMIT_CONFIG: &str = ".pre-commit-config.yaml";
    /// Git ignore file.
    pub const GITIGNORE: &str = ".gitignore";
    /// Modern Python project file.
    pub const PYPROJECT: &str = "pyproject.toml";
    /// Legacy Python project file.
    pub const SETUP_PY: &str = "setup.py";
    /// The CI workflow every Python project must carry.
    pub const CI_WORKFLOW: &str = ".github/workflows/ci.yml";
}

/// A family of related checks, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckFamily {
    /// Required files exist.
    RequiredFiles,
    /// LICENSE is GPL-3.0.
    License,
    /// CI workflow exists.
    CiWorkflow,
    /// Pre-commit config has the required hooks at fresh versions.
    PrecommitConfig,
    /// Pre-commit git hook is installed.
    PrecommitInstalled,
    /// CLAUDE.md has the recommended sections.
    ClaudeMd,
    /// pyproject.toml (or legacy setup.py) exists.
    PythonProject,
}

impl CheckFamily {
    /// Returns a stable identifier for the family.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RequiredFiles => "required-files",
            Self::License => "license",
            Self::CiWorkflow => "ci-workflow",
            Self::PrecommitConfig => "precommit-config",
            Self::PrecommitInstalled => "precommit-installed",
            Self::ClaudeMd => "claude-md",
            Self::PythonProject => "python-project",
        }
    }
}

impl std::fmt::Display for CheckFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A CLAUDE.md section and the heading pattern that satisfies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaudeSection {
    /// Section title.
    pub name: &'static str,
    /// Case-insensitive regex searched in the whole file.
    pub pattern: &'static str,
}

impl ClaudeSection {
    /// Result-name slug (`project_overview`).
    #[must_use]
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }
}

const PROJECT_OVERVIEW: ClaudeSection = ClaudeSection {
    name: "Project Overview",
    pattern: r"(?i)#.*project.*overview|#.*overview",
};

const COMMON_COMMANDS: ClaudeSection = ClaudeSection {
    name: "Common Commands",
    pattern: r"(?i)#.*common.*commands|#.*commands",
};

/// Policy that applies to one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfilePolicy {
    /// Files that must exist at the repository root.
    pub required_files: &'static [&'static str],
    /// Whether the CI workflow is mandatory.
    pub ci_required: bool,
    /// Whether pre-commit configuration and installation are mandatory.
    pub precommit_required: bool,
    /// Recommended CLAUDE.md sections.
    pub claude_md_sections: &'static [ClaudeSection],
}

const PYTHON_POLICY: ProfilePolicy = ProfilePolicy {
    required_files: &[
        files::CLAUDE_MD,
        files::LICENSE,
        files::README,
        files::PRE_COMMIT_CONFIG,
        files::GITIGNORE,
    ],
    ci_required: true,
    precommit_required: true,
    claude_md_sections: &[PROJECT_OVERVIEW, COMMON_COMMANDS],
};

const STATIC_SITE_POLICY: ProfilePolicy = ProfilePolicy {
    required_files: &[
        files::CLAUDE_MD,
        files::LICENSE,
        files::README,
        files::GITIGNORE,
    ],
    ci_required: false,
    precommit_required: false,
    claude_md_sections: &[PROJECT_OVERVIEW],
};

const DOCUMENTATION_POLICY: ProfilePolicy = ProfilePolicy {
    required_files: &[files::LICENSE, files::README],
    ci_required: false,
    precommit_required: false,
    claude_md_sections: &[],
};

const ORG_CONFIG_POLICY: ProfilePolicy = ProfilePolicy {
    required_files: &[files::LICENSE, files::README],
    ci_required: false,
    precommit_required: false,
    claude_md_sections: &[],
};

/// Returns the policy for a profile.
#[must_use]
pub const fn policy_for(profile: Profile) -> &'static ProfilePolicy {
    match profile {
        Profile::Python => &PYTHON_POLICY,
        Profile::StaticSite => &STATIC_SITE_POLICY,
        Profile::Documentation => &DOCUMENTATION_POLICY,
        Profile::OrgConfig => &ORG_CONFIG_POLICY,
    }
}

/// Returns the check families that run for a profile, in execution order.
#[must_use]
pub fn applicable_checks(profile: Profile) -> Vec<CheckFamily> {
    let policy = policy_for(profile);
    let mut families = vec![CheckFamily::RequiredFiles, CheckFamily::License];

    if policy.ci_required {
        families.push(CheckFamily::CiWorkflow);
    }
    if policy.precommit_required {
        families.push(CheckFamily::PrecommitConfig);
        families.push(CheckFamily::PrecommitInstalled);
    }
    if !policy.claude_md_sections.is_empty() {
        families.push(CheckFamily::ClaudeMd);
    }
    if profile == Profile::Python {
        families.push(CheckFamily::PythonProject);
    }

    families
}

/// A pre-commit repository and the hook ids it must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredHookRepo {
    /// Repository URL as written in `.pre-commit-config.yaml`.
    pub url: &'static str,
    /// Hook ids that must be enabled from this repository.
    pub hooks: &'static [&'static str],
}

/// Hooks every Python project must configure.
pub const REQUIRED_PRECOMMIT_HOOKS: &[RequiredHookRepo] = &[
    RequiredHookRepo {
        url: "https://github.com/pre-commit/pre-commit-hooks",
        hooks: &[
            "trailing-whitespace",
            "end-of-file-fixer",
            "check-yaml",
            "check-added-large-files",
        ],
    },
    RequiredHookRepo {
        url: "https://github.com/psf/black",
        hooks: &["black"],
    },
    RequiredHookRepo {
        url: "https://github.com/astral-sh/ruff-pre-commit",
        hooks: &["ruff"],
    },
    RequiredHookRepo {
        url: "https://github.com/pre-commit/mirrors-mypy",
        hooks: &["mypy"],
    },
    RequiredHookRepo {
        url: "https://github.com/PyCQA/bandit",
        hooks: &["bandit"],
    },
];

/// A version floor for a pre-commit repository's `rev`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinHookVersion {
    /// Repository URL.
    pub url: &'static str,
    /// Lowest acceptable `rev`.
    pub min_version: &'static str,
}

/// Version floors for critical hooks.
pub const MIN_HOOK_VERSIONS: &[MinHookVersion] = &[
    MinHookVersion {
        url: "https://github.com/psf/black",
        min_version: "24.0.0",
    },
    MinHookVersion {
        url: "https://github.com/astral-sh/ruff-pre-commit",
        min_version: "v0.1.0",
    },
];

/// Expected license identifier.
pub const EXPECTED_LICENSE: &str = "GPL-3.0";

/// Patterns that must all match the LICENSE text. `Version 3,` separates
/// GPL-3.0 from the GPL-2.0 boilerplate.
pub const LICENSE_PATTERNS: &[&str] = &[r"GNU GENERAL PUBLIC LICENSE", r"Version 3,"];

/// Where `init` downloads the license text from.
pub const LICENSE_URL: &str = "https://www.gnu.org/licenses/gpl-3.0.txt";

/// Fix command for stale hook versions.
pub const FIX_AUTOUPDATE: &str = "pre-commit autoupdate";

/// Fix command for a missing pre-commit git hook.
pub const FIX_INSTALL: &str = "pre-commit install";

/// Last path segment of a repository URL (`ruff-pre-commit`).
#[must_use]
pub fn repo_short_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_file_counts() {
        assert_eq!(policy_for(Profile::Python).required_files.len(), 5);
        assert_eq!(policy_for(Profile::StaticSite).required_files.len(), 4);
        assert_eq!(policy_for(Profile::Documentation).required_files.len(), 2);
        assert_eq!(policy_for(Profile::OrgConfig).required_files.len(), 2);
    }

    #[test]
    fn test_only_python_requires_ci_and_precommit() {
        for profile in Profile::ALL {
            let policy = policy_for(profile);
            let is_python = profile == Profile::Python;
            assert_eq!(policy.ci_required, is_python, "{profile}");
            assert_eq!(policy.precommit_required, is_python, "{profile}");
        }
    }

    #[test]
    fn test_claude_md_sections() {
        let names = |p| {
            policy_for(p)
                .claude_md_sections
                .iter()
                .map(|s| s.name)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            names(Profile::Python),
            vec!["Project Overview", "Common Commands"]
        );
        assert_eq!(names(Profile::StaticSite), vec!["Project Overview"]);
        assert!(names(Profile::Documentation).is_empty());
        assert!(names(Profile::OrgConfig).is_empty());
    }

    #[test]
    fn test_applicable_checks_python() {
        assert_eq!(
            applicable_checks(Profile::Python),
            vec![
                CheckFamily::RequiredFiles,
                CheckFamily::License,
                CheckFamily::CiWorkflow,
                CheckFamily::PrecommitConfig,
                CheckFamily::PrecommitInstalled,
                CheckFamily::ClaudeMd,
                CheckFamily::PythonProject,
            ]
        );
    }

    #[test]
    fn test_applicable_checks_static_site() {
        assert_eq!(
            applicable_checks(Profile::StaticSite),
            vec![
                CheckFamily::RequiredFiles,
                CheckFamily::License,
                CheckFamily::ClaudeMd,
            ]
        );
    }

    #[test]
    fn test_applicable_checks_documentation_and_org() {
        let minimal = vec![CheckFamily::RequiredFiles, CheckFamily::License];
        assert_eq!(applicable_checks(Profile::Documentation), minimal);
        assert_eq!(applicable_checks(Profile::OrgConfig), minimal);
    }

    #[test]
    fn test_applicable_checks_is_pure() {
        for profile in Profile::ALL {
            assert_eq!(applicable_checks(profile), applicable_checks(profile));
        }
    }

    #[test]
    fn test_required_hooks_table() {
        assert_eq!(REQUIRED_PRECOMMIT_HOOKS.len(), 5);
        assert_eq!(REQUIRED_PRECOMMIT_HOOKS[0].hooks.len(), 4);
        assert_eq!(MIN_HOOK_VERSIONS.len(), 2);
        for floor in MIN_HOOK_VERSIONS {
            assert!(REQUIRED_PRECOMMIT_HOOKS.iter().any(|r| r.url == floor.url));
        }
    }

    #[test]
    fn test_section_slug() {
        assert_eq!(PROJECT_OVERVIEW.slug(), "project_overview");
        assert_eq!(COMMON_COMMANDS.slug(), "common_commands");
    }

    #[test]
    fn test_section_patterns_compile() {
        for section in [PROJECT_OVERVIEW, COMMON_COMMANDS] {
            assert!(regex::Regex::new(section.pattern).is_ok());
        }
    }

    #[test]
    fn test_repo_short_name() {
        assert_eq!(
            repo_short_name("https://github.com/astral-sh/ruff-pre-commit"),
            "ruff-pre-commit"
        );
        assert_eq!(repo_short_name("black"), "black");
    }
}
