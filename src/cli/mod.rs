//! Command-line interface for repo-compliance.
//!
//! Subcommands:
//! - `check`: Audit a repository or a directory of repositories (default)
//! - `init`: Write missing compliance files
//! - `detect`: Show the detected profile and why
//! - `policy`: Print the policy tables
//! - `completions`: Generate shell completions

mod commands;

use crate::core::detector::Profile;
use crate::core::error::Result;
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Audit repositories against organization policy.
#[derive(Debug, Parser)]
#[command(
    name = "repo-compliance",
    author,
    version,
    about = "Audit repositories against organization policy",
    long_about = r#"
repo-compliance classifies each repository into a profile (python,
static_site, documentation, org_config) and checks it against that
profile's policy: required files, GPL-3.0 license, CI workflow, pre-commit
hooks and versions, and CLAUDE.md sections.

Examples:
  repo-compliance                          Check the current directory
  repo-compliance check /path/to/repo      Check one repository
  repo-compliance check --scan-dir ~/src   Check every repository in a directory
  repo-compliance check --format json      Output as JSON
  repo-compliance check --fix              Apply automatic fixes, then re-check
  repo-compliance init --project-name "My Project"

Configuration is read from the nearest repo-compliance.toml, if any.
"#,
    propagate_version = true,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default `check` command.
    #[command(flatten)]
    pub check: CheckArgs,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use color output.
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Always use color.
    Always,
    /// Auto-detect color support.
    #[default]
    Auto,
    /// Never use color.
    Never,
}

/// Arguments of the `check` command.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Repository, or directory of repositories with --scan-dir.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Treat PATH as a directory containing multiple repositories.
    #[arg(long)]
    pub scan_dir: bool,

    /// Output format [default: text, or output.format from the config file].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Apply automatic fixes for failed checks, then re-check.
    #[arg(long)]
    pub fix: bool,

    /// Exit with status 1 if any repository is non-compliant.
    #[arg(long)]
    pub strict: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check repository compliance.
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// Create missing compliance files, then check the result.
    #[command(visible_alias = "i")]
    Init {
        /// Repository to initialize; created if absent.
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Project name used in README.md and CLAUDE.md [default: from directory name].
        #[arg(long)]
        project_name: Option<String>,
    },

    /// Show the detected profile and the rule that selected it.
    #[command(visible_alias = "d")]
    Detect {
        /// Repository to inspect.
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print the policy tables.
    Policy {
        /// Show a single profile.
        #[arg(long)]
        profile: Option<Profile>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Runs the CLI.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);
    setup_color(cli.color);

    match cli.command {
        Some(Commands::Check(args)) => commands::check(&args),
        Some(Commands::Init { path, project_name }) => {
            commands::init(&path, project_name.as_deref())
        },
        Some(Commands::Detect { path }) => commands::detect(&path),
        Some(Commands::Policy { profile }) => commands::policy(profile),
        Some(Commands::Completions { shell }) => {
            commands::completions(shell);
            Ok(ExitCode::SUCCESS)
        },
        None => commands::check(&cli.check),
    }
}

/// Sets up logging based on verbosity flags.
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Sets up color output.
fn setup_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        },
        ColorChoice::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        },
        ColorChoice::Auto => {
            // Let console crate auto-detect
        },
    }
}
