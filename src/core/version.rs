//! Positional numeric version comparison.
//!
//! This is deliberately not SemVer: `1.2.0-rc1` and `1.2.0` compare equal
//! because the `rc1` token is not purely numeric and is dropped. The policy
//! floors it is used against are plain dotted release numbers.

use std::cmp::Ordering;

/// Extracts the numeric components of a version string.
///
/// The string is split on `.` and `-`; tokens made entirely of ASCII digits
/// are kept in order, everything else is ignored.
///
/// ```
/// use repo_compliance::core::version::numeric_components;
///
/// assert_eq!(numeric_components("24.10.0"), vec![24, 10, 0]);
/// assert_eq!(numeric_components("1.2.0-rc1"), vec![1, 2, 0]);
/// assert!(numeric_components("main").is_empty());
/// ```
#[must_use]
pub fn numeric_components(version: &str) -> Vec<u64> {
    version
        .split(['.', '-'])
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|token| token.parse().ok())
        .collect()
}

/// Compares two version strings component by component.
///
/// The shorter sequence is padded with trailing zeros. Returns `None` when
/// either side has no numeric component at all, since such a string carries
/// no ordering information and callers must skip the comparison.
#[must_use]
pub fn compare(a: &str, b: &str) -> Option<Ordering> {
    let left = numeric_components(a);
    let right = numeric_components(b);

    if left.is_empty() || right.is_empty() {
        return None;
    }

    let len = left.len().max(right.len());
    let padded = |parts: &[u64], i: usize| parts.get(i).copied().unwrap_or(0);

    let ordering = (0..len)
        .map(|i| padded(&left, i).cmp(&padded(&right, i)))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal);

    Some(ordering)
}

/// Same as [`compare`] but returns `-1`, `0` or `1`.
#[must_use]
pub fn compare_sign(a: &str, b: &str) -> Option<i8> {
    compare(a, b).map(|ord| match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}

/// Strips the leading `v` of a tag such as `v0.8.0`.
#[must_use]
pub fn strip_v_prefix(version: &str) -> &str {
    version.trim_start_matches('v')
}
