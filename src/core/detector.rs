//! Profile detection for classifying repositories.
//!
//! The detector looks at what sits in the repository root and decides which
//! policy profile applies. Detection is a priority cascade, not a scored
//! classifier: the first rule that matches wins.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// The detected project profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Python projects (pyproject.toml, setup.py, ...).
    Python,
    /// HTML/CSS/JS websites.
    StaticSite,
    /// Documentation-only repositories (fallback).
    #[default]
    Documentation,
    /// Organization config repositories (named `.github`).
    OrgConfig,
}

impl Profile {
    /// All profiles, in detection priority order.
    pub const ALL: [Self; 4] = [
        Self::OrgConfig,
        Self::Python,
        Self::StaticSite,
        Self::Documentation,
    ];

    /// Returns the machine name for the profile.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::StaticSite => "static_site",
            Self::Documentation => "documentation",
            Self::OrgConfig => "org_config",
        }
    }

    /// Returns the title-cased display name (`Static Site`).
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::StaticSite => "Static Site",
            Self::Documentation => "Documentation",
            Self::OrgConfig => "Org Config",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "python" => Ok(Self::Python),
            "static_site" => Ok(Self::StaticSite),
            "documentation" => Ok(Self::Documentation),
            "org_config" => Ok(Self::OrgConfig),
            _ => Err(format!(
                "Invalid profile: {s}. Expected: python, static_site, documentation, or org_config"
            )),
        }
    }
}

/// Reason for profile detection - useful for debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionReason {
    /// The repository directory is named `.github`.
    OrgConfigRepo,
    /// A Python project indicator file exists.
    PythonIndicator(&'static str),
    /// A static site indicator file exists.
    StaticSiteIndicator(&'static str),
    /// Nothing matched.
    Default,
}

impl std::fmt::Display for DetectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrgConfigRepo => write!(f, "repository is named {ORG_CONFIG_REPO_NAME}"),
            Self::PythonIndicator(file) => write!(f, "Python indicator: {file}"),
            Self::StaticSiteIndicator(file) => write!(f, "static site indicator: {file}"),
            Self::Default => write!(f, "Default (no project indicators)"),
        }
    }
}

/// Result of profile detection.
#[derive(Debug, Clone)]
pub struct Detection {
    /// The detected profile.
    pub profile: Profile,
    /// Reason for the detection.
    pub reason: DetectionReason,
}

/// Directory name of organization config repositories.
pub const ORG_CONFIG_REPO_NAME: &str = ".github";

/// Files whose presence marks a Python project, checked in order.
pub const PYTHON_INDICATORS: &[&str] = &[
    "pyproject.toml",
    "setup.py",
    "setup.cfg",
    "requirements.txt",
    "Pipfile",
];

/// Files whose presence marks a static site, checked in order.
pub const STATIC_SITE_INDICATORS: &[&str] = &["index.html", "package.json"];

/// Detector for a single repository root.
#[derive(Debug)]
pub struct Detector<'a> {
    root: &'a Path,
}

impl<'a> Detector<'a> {
    /// Creates a new detector for the given repository root.
    #[must_use]
    pub const fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Detects the profile.
    #[must_use]
    pub fn detect(&self) -> Profile {
        self.detect_with_reason().profile
    }

    /// Detects the profile and reports which rule matched.
    #[must_use]
    pub fn detect_with_reason(&self) -> Detection {
        // Priority 1: organization config repository
        if let Some(detection) = self.check_org_config() {
            return detection;
        }

        // Priority 2: Python project files
        if let Some(file) = self.first_existing(PYTHON_INDICATORS) {
            return Detection {
                profile: Profile::Python,
                reason: DetectionReason::PythonIndicator(file),
            };
        }

        // Priority 3: static site files
        if let Some(file) = self.first_existing(STATIC_SITE_INDICATORS) {
            return Detection {
                profile: Profile::StaticSite,
                reason: DetectionReason::StaticSiteIndicator(file),
            };
        }

        Detection {
            profile: Profile::Documentation,
            reason: DetectionReason::Default,
        }
    }

    fn check_org_config(&self) -> Option<Detection> {
        let name = self.root.file_name()?;
        (name == ORG_CONFIG_REPO_NAME).then_some(Detection {
            profile: Profile::OrgConfig,
            reason: DetectionReason::OrgConfigRepo,
        })
    }

    fn first_existing(&self, candidates: &[&'static str]) -> Option<&'static str> {
        candidates
            .iter()
            .copied()
            .find(|file| self.root.join(file).exists())
    }
}

/// Detects the profile of the repository at `root`.
#[must_use]
pub fn detect_profile(root: &Path) -> Profile {
    let detection = Detector::new(root).detect_with_reason();
    tracing::debug!(
        root = %root.display(),
        profile = %detection.profile,
        reason = %detection.reason,
        "Detected profile"
    );
    detection.profile
}
