//! CLAUDE.md section checks.
//!
//! Existence of CLAUDE.md is a hard requirement (see the required-files
//! check); the sections inside it are advisory, so failures are warnings.

use crate::checks::read_text;
use crate::core::detector::Profile;
use crate::core::report::{CheckResult, Severity};
use crate::policy::{self, files, ClaudeSection};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// Compiled section patterns of every profile, keyed by pattern text.
static SECTION_REGEXES: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    Profile::ALL
        .iter()
        .flat_map(|&profile| policy::policy_for(profile).claude_md_sections)
        .map(|section| {
            let re = Regex::new(section.pattern).expect("section pattern is a valid regex");
            (section.pattern, re)
        })
        .collect()
});

/// Checks CLAUDE.md for the sections the profile recommends.
#[must_use]
pub fn check_sections(root: &Path, profile: Profile) -> Vec<CheckResult> {
    let sections = policy::policy_for(profile).claude_md_sections;
    if sections.is_empty() {
        return Vec::new();
    }

    let path = root.join(files::CLAUDE_MD);
    if !path.exists() {
        return Vec::new();
    }

    let content = match read_text(&path) {
        Ok(content) => content,
        Err(e) => {
            return vec![CheckResult::fail(
                "claude_md:readable",
                format!("Could not read CLAUDE.md: {e}"),
                Severity::Warning,
            )];
        },
    };

    sections
        .iter()
        .map(|section| check_section(&content, section))
        .collect()
}

fn check_section(content: &str, section: &ClaudeSection) -> CheckResult {
    let name = format!("claude_md:{}", section.slug());

    let found = SECTION_REGEXES
        .get(section.pattern)
        .is_some_and(|re| re.is_match(content));

    if found {
        CheckResult::pass(name, format!("CLAUDE.md has '{}' section", section.name))
    } else {
        CheckResult::fail(
            name,
            format!("CLAUDE.md missing '{}' section", section.name),
            Severity::Warning,
        )
    }
}
