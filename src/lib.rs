//! # repo-compliance
//!
//! Audits repositories against a fixed organization policy.
//!
//! Each repository is classified into a [`Profile`] (python, static site,
//! documentation, or the org-wide `.github` config repository) and then checked
//! against that profile's rules: required files, a GPL-3.0 LICENSE, the CI
//! workflow, pre-commit hooks and their versions, CLAUDE.md sections and the
//! Python project file. Results are collected into a [`RepoReport`] that
//! derives a score and a compliance verdict.
//!
//! ## Example
//!
//! ```rust,no_run
//! use repo_compliance::check_repository;
//! use std::path::Path;
//!
//! let report = check_repository(Path::new("."));
//! println!(
//!     "{}: {}/{} checks passed",
//!     report.repo_name,
//!     report.passed_count(),
//!     report.total_count()
//! );
//! if !report.is_compliant() {
//!     std::process::exit(1);
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/repo-compliance/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod checks;
pub mod cli;
pub mod config;
pub mod core;
pub mod output;
pub mod policy;
pub mod templates;

// Re-export main types for convenience
pub use config::Config;
pub use core::detector::{detect_profile, Detection, Detector, Profile};
pub use core::error::{Error, Result};
pub use core::report::{CheckResult, RepoReport, Severity};
pub use core::runner::{check_repository, scan_directory};
