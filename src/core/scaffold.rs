//! Repository scaffolding for `repo-compliance init`.
//!
//! Writes every compliance file that is missing and never overwrites an
//! existing one. The LICENSE text is fetched over HTTP; a failed download
//! is recorded and the remaining files are still written.

use crate::core::error::{Error, Result};
use crate::policy::{files, LICENSE_URL};
use crate::templates;
use std::path::Path;
use std::time::Duration;

/// What happened to one scaffold file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Written by this run.
    Created,
    /// Already present; left untouched.
    Skipped,
    /// Could not be produced.
    Failed(String),
}

/// Per-file outcome of a scaffold run, in write order.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldSummary {
    /// `(relative path, status)` pairs.
    pub files: Vec<(&'static str, FileStatus)>,
}

impl ScaffoldSummary {
    /// Number of files created.
    #[must_use]
    pub fn created(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Created))
    }

    /// Number of files skipped because they existed.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Skipped))
    }

    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.files.iter().filter(|(_, s)| pred(s)).count()
    }
}

/// Where a scaffold file's content comes from.
enum Source<'a> {
    Text(String),
    Download(&'a str),
}

/// Writes missing compliance files into `root`, creating it if needed.
///
/// `timeout` bounds the LICENSE download. Filesystem errors abort the run;
/// a failed download does not.
pub async fn init_repository(
    root: &Path,
    project_name: &str,
    timeout: Duration,
) -> Result<ScaffoldSummary> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("repo-compliance/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Internal {
            message: format!("Failed to create HTTP client: {e}"),
        })?;
    scaffold(root, project_name, &client, LICENSE_URL).await
}

async fn scaffold(
    root: &Path,
    project_name: &str,
    client: &reqwest::Client,
    license_url: &str,
) -> Result<ScaffoldSummary> {
    std::fs::create_dir_all(root).map_err(|e| Error::io("create repository directory", e))?;

    let plan: [(&'static str, Source<'_>); 6] = [
        (files::GITIGNORE, Source::Text(templates::GITIGNORE_TEMPLATE.to_string())),
        (files::LICENSE, Source::Download(license_url)),
        (files::README, Source::Text(templates::readme(project_name))),
        (files::CLAUDE_MD, Source::Text(templates::claude_md(project_name))),
        (
            files::PRE_COMMIT_CONFIG,
            Source::Text(templates::PRECOMMIT_CONFIG_TEMPLATE.to_string()),
        ),
        (
            files::CI_WORKFLOW,
            Source::Text(templates::CI_WORKFLOW_TEMPLATE.to_string()),
        ),
    ];

    let mut summary = ScaffoldSummary::default();
    for (name, source) in plan {
        let path = root.join(name);
        if path.exists() {
            tracing::debug!(file = name, "Skipping existing file");
            summary.files.push((name, FileStatus::Skipped));
            continue;
        }

        let status = match source {
            Source::Text(content) => {
                write_file(&path, &content)?;
                FileStatus::Created
            },
            Source::Download(url) => match fetch_text(client, url).await {
                Ok(content) => {
                    write_file(&path, &content)?;
                    FileStatus::Created
                },
                Err(e) => {
                    tracing::warn!(url, error = %e, "License download failed");
                    FileStatus::Failed(e.to_string())
                },
            },
        };
        tracing::info!(file = name, status = ?status, "Scaffolded file");
        summary.files.push((name, status));
    }

    Ok(summary)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io("create directory", e))?;
    }
    std::fs::write(path, content).map_err(|e| Error::io(format!("write {}", path.display()), e))
}

/// GETs `url` and returns the body; non-2xx statuses are errors.
async fn fetch_text(client: &reqwest::Client, url: &str) -> reqwest::Result<String> {
    client.get(url).send().await?.error_for_status()?.text().await
}
