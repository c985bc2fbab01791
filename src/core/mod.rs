//! Core functionality for repo-compliance.
//!
//! - [`detector`]: Repository profile detection
//! - [`runner`]: Per-repository and directory-scan orchestration
//! - [`report`]: Check results, scoring and compliance
//! - [`version`]: Positional numeric version comparison
//! - [`fixer`]: Automatic remediation of failed checks
//! - [`scaffold`]: Writing missing compliance files
//! - [`error`]: Error types and result handling

pub mod detector;
pub mod error;
pub mod executor;
pub mod fixer;
pub mod git;
pub mod report;
pub mod runner;
pub mod scaffold;
pub mod version;
