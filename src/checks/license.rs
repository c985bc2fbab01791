//! LICENSE identity check.

use crate::checks::read_text;
use crate::core::detector::Profile;
use crate::core::report::{CheckResult, Severity};
use crate::policy::{files, EXPECTED_LICENSE, LICENSE_PATTERNS};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static LICENSE_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    LICENSE_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("license pattern is a valid regex"))
        .collect()
});

/// Checks that LICENSE is GPL-3.0. Runs only when LICENSE exists; its
/// absence is reported by the required-files check.
#[must_use]
pub fn check_license(root: &Path, _profile: Profile) -> Vec<CheckResult> {
    let path = root.join(files::LICENSE);
    if !path.exists() {
        return Vec::new();
    }

    let content = match read_text(&path) {
        Ok(content) => content,
        Err(e) => {
            return vec![CheckResult::fail(
                "license:readable",
                format!("Could not read LICENSE: {e}"),
                Severity::Error,
            )];
        },
    };

    let result = if LICENSE_REGEXES.iter().all(|re| re.is_match(&content)) {
        CheckResult::pass("license:gpl3", format!("LICENSE is {EXPECTED_LICENSE}"))
    } else {
        CheckResult::fail(
            "license:gpl3",
            format!("LICENSE does not appear to be {EXPECTED_LICENSE}"),
            Severity::Error,
        )
    };

    vec![result]
}
