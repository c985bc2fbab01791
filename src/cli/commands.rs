//! CLI command implementations.

use super::CheckArgs;
use crate::config::Config;
use crate::core::detector::{Detector, Profile};
use crate::core::error::{Error, Result};
use crate::core::executor::Executor;
use crate::core::fixer::apply_fixes;
use crate::core::report::RepoReport;
use crate::core::runner::{check_repository, scan_directory};
use crate::core::scaffold::{self, FileStatus};
use crate::output;
use crate::policy::{self, MIN_HOOK_VERSIONS, REQUIRED_PRECOMMIT_HOOKS};
use crate::templates::project_name_from_dir;
use console::style;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Check one repository or a directory of repositories.
pub fn check(args: &CheckArgs) -> Result<ExitCode> {
    let config = Config::load_or_default()?;
    let format = args.format.unwrap_or_else(|| config.output_format());
    let strict = args.strict || config.check.strict;

    if !args.path.exists() {
        return Err(Error::PathNotFound {
            path: absolute(&args.path),
        });
    }

    let mut reports = collect_reports(&args.path, args.scan_dir)?;

    if args.fix {
        run_fixes(&reports, config.fix_timeout())?;
        eprintln!("\n{} Re-running checks...\n", style("•").cyan());
        reports = collect_reports(&args.path, args.scan_dir)?;
    }

    print_stdout(&output::render(&reports, format)?)?;

    if strict && reports.iter().any(|r| !r.is_compliant()) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn collect_reports(path: &Path, scan_dir: bool) -> Result<Vec<RepoReport>> {
    if !scan_dir {
        return Ok(vec![check_repository(path)]);
    }

    let reports = scan_directory(path)?;
    if reports.is_empty() {
        return Err(Error::NoRepositories {
            path: absolute(path),
        });
    }
    Ok(reports)
}

fn run_fixes(reports: &[RepoReport], timeout: std::time::Duration) -> Result<()> {
    eprintln!("{} Applying fixes...", style("•").cyan());

    let executor = Executor::new();
    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("Failed to create runtime: {e}"),
    })?;

    runtime.block_on(async {
        for report in reports {
            eprintln!("\n{}:", style(&report.repo_name).bold());
            let outcomes = apply_fixes(report, &executor, timeout).await?;
            if outcomes.is_empty() {
                eprintln!("  {} Nothing to fix", style("✓").green());
            }
        }
        Ok::<(), Error>(())
    })
}

/// Write missing compliance files, then run a compliance check.
pub fn init(path: &Path, project_name: Option<&str>) -> Result<ExitCode> {
    let root = absolute(path);
    if !root.exists() {
        eprintln!("{} Creating directory: {}", style("•").cyan(), root.display());
    }

    let project_name = project_name.map_or_else(
        || {
            let dir = root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            project_name_from_dir(&dir)
        },
        str::to_string,
    );

    let config = Config::load_or_default()?;

    eprintln!("\nInitializing repository: {}", root.display());
    eprintln!("Project name: {}", style(&project_name).bold());
    eprintln!("{}", "-".repeat(40));

    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("Failed to create runtime: {e}"),
    })?;
    let summary = runtime.block_on(scaffold::init_repository(
        &root,
        &project_name,
        config.fix_timeout(),
    ))?;

    for (file, status) in &summary.files {
        match status {
            FileStatus::Created => eprintln!("  {} Created {file}", style("✓").green()),
            FileStatus::Skipped => {
                eprintln!("  {} Skipped {file} (already exists)", style("-").dim());
            },
            FileStatus::Failed(reason) => {
                eprintln!("  {} Failed to create {file}: {reason}", style("✗").red());
            },
        }
    }

    eprintln!("{}", "-".repeat(40));
    eprintln!("Files created: {}", summary.created());
    eprintln!("Files skipped: {}", summary.skipped());

    if summary.created() > 0 {
        eprintln!("\nNext steps:");
        eprintln!("  1. Review and customize the generated files");
        eprintln!("  2. Run: pip install pre-commit");
        eprintln!("  3. Run: pre-commit install");
        eprintln!("  4. Run: git add . && git commit -m 'Initialize repository'");
    }

    let report = check_repository(&root);
    print_stdout(&output::format_text_report(&report))?;

    if report.is_compliant() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Show the detected profile.
pub fn detect(path: &Path) -> Result<ExitCode> {
    if !path.exists() {
        return Err(Error::PathNotFound {
            path: absolute(path),
        });
    }

    let root = absolute(path);
    let detection = Detector::new(&root).detect_with_reason();

    println!("Detected profile: {}", style(detection.profile.name()).bold());
    println!("Reason: {}", detection.reason);

    Ok(ExitCode::SUCCESS)
}

/// Print the policy tables.
pub fn policy(profile: Option<Profile>) -> Result<ExitCode> {
    let profiles: Vec<Profile> = profile.map_or_else(|| Profile::ALL.to_vec(), |p| vec![p]);

    for profile in profiles {
        let policy = policy::policy_for(profile);
        println!("{}", style(format!("[{}]", profile.name())).bold());
        println!("  Required files: {}", policy.required_files.join(", "));
        println!("  CI workflow required: {}", yes_no(policy.ci_required));
        println!("  Pre-commit required: {}", yes_no(policy.precommit_required));
        let sections: Vec<_> = policy.claude_md_sections.iter().map(|s| s.name).collect();
        if !sections.is_empty() {
            println!("  CLAUDE.md sections: {}", sections.join(", "));
        }
        let families: Vec<_> = policy::applicable_checks(profile)
            .iter()
            .map(|f| f.name())
            .collect();
        println!("  Checks: {}", families.join(", "));
        println!();
    }

    if profile.map_or(true, |p| policy::policy_for(p).precommit_required) {
        println!("{}", style("Required pre-commit hooks").bold());
        for repo in REQUIRED_PRECOMMIT_HOOKS {
            println!("  {} {}", style(repo.url).cyan(), repo.hooks.join(", "));
        }
        println!();
        println!("{}", style("Minimum hook versions").bold());
        for floor in MIN_HOOK_VERSIONS {
            println!("  {} >= {}", style(floor.url).cyan(), floor.min_version);
        }
    }

    Ok(ExitCode::SUCCESS)
}

const fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Generate shell completions.
pub fn completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    clap_complete::generate(
        shell,
        &mut super::Cli::command(),
        "repo-compliance",
        &mut std::io::stdout(),
    );
}

fn print_stdout(text: &str) -> Result<()> {
    let newline = if text.ends_with('\n') { "" } else { "\n" };
    write!(std::io::stdout().lock(), "{text}{newline}").map_err(|e| Error::io("write output", e))
}

/// Absolute form of `path` for messages and naming; canonical when it exists.
fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
