//! Report rendering: human-readable text and machine-readable JSON.

use crate::core::error::{Error, Result};
use crate::core::report::{CheckResult, RepoReport, Severity};
use console::style;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt::Write as _;

const RULE_WIDTH: usize = 60;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Grouped, human-readable text.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Renders every report in the requested format.
pub fn render(reports: &[RepoReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(reports)),
        OutputFormat::Json => format_json(reports),
    }
}

/// Renders the full text output: banner, per-repository sections and, for
/// more than one repository, an overall summary.
#[must_use]
pub fn format_text(reports: &[RepoReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heavy_rule());
    let _ = writeln!(out, "{}", style("ORGANIZATION COMPLIANCE REPORT").bold());
    let _ = writeln!(out, "{}", heavy_rule());

    for report in reports {
        out.push_str(&format_text_report(report));
    }

    if reports.len() > 1 {
        out.push_str(&format_overall_summary(reports));
    }

    out
}

/// Renders one repository.
#[must_use]
pub fn format_text_report(report: &RepoReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heavy_rule());
    let _ = writeln!(out, "Repository: {}", style(&report.repo_name).bold());
    let _ = writeln!(out, "Path: {}", report.repo_path.display());
    let _ = writeln!(out, "Profile: {}", report.profile.display_name());
    let _ = writeln!(out, "{}", heavy_rule());
    let _ = writeln!(out);

    for (category, checks) in report.categories() {
        let _ = writeln!(out, "[{}]", category.to_uppercase());
        for check in checks {
            write_check_line(&mut out, check);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "Score: {}/{} ({:.0}%)",
        report.passed_count(),
        report.total_count(),
        report.score_percent()
    );
    let status = if report.is_compliant() {
        style("COMPLIANT").green().bold()
    } else {
        style("NON-COMPLIANT").red().bold()
    };
    let _ = writeln!(out, "Status: {status}");

    out
}

fn write_check_line(out: &mut String, check: &CheckResult) {
    let icon = if check.passed {
        style("✓").green()
    } else if check.severity == Severity::Error {
        style("✗").red()
    } else {
        style("✗").yellow()
    };
    let marker = if !check.passed && check.severity == Severity::Warning {
        " (warning)"
    } else {
        ""
    };
    let _ = writeln!(out, "  {icon} {}{marker}", check.message);

    if check.is_fixable() {
        if let Some(ref fix) = check.fix_command {
            let _ = writeln!(out, "      Fix: {}", style(fix).cyan());
        }
    }
}

/// Renders the multi-repository summary block.
#[must_use]
pub fn format_overall_summary(reports: &[RepoReport]) -> String {
    let compliant = compliant_count(reports);
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heavy_rule());
    let _ = writeln!(out, "{}", style("OVERALL SUMMARY").bold());
    let _ = writeln!(out, "{}", heavy_rule());
    let _ = writeln!(out, "Total repositories: {}", reports.len());
    let _ = writeln!(out, "Compliant: {compliant}");
    let _ = writeln!(out, "Non-compliant: {}", reports.len() - compliant);
    out
}

/// Renders all reports as one pretty-printed JSON document.
pub fn format_json(reports: &[RepoReport]) -> Result<String> {
    let document = json_document(reports, &chrono::Utc::now().to_rfc3339());
    serde_json::to_string_pretty(&document).map_err(|e| Error::Internal {
        message: format!("Failed to serialize report: {e}"),
    })
}

/// Builds the JSON value for a set of reports.
#[must_use]
pub fn json_document(reports: &[RepoReport], generated_at: &str) -> Value {
    let compliant = compliant_count(reports);
    json!({
        "reports": reports.iter().map(report_json).collect::<Vec<_>>(),
        "summary": {
            "total_repos": reports.len(),
            "compliant_repos": compliant,
            "non_compliant_repos": reports.len() - compliant,
        },
        "generated_at": generated_at,
    })
}

fn report_json(report: &RepoReport) -> Value {
    json!({
        "repo_path": report.repo_path.display().to_string(),
        "repo_name": report.repo_name,
        "profile": report.profile,
        "is_python_project": report.is_python_project(),
        "checks": report.checks,
        "summary": {
            "passed": report.passed_count(),
            "failed": report.failed_count(),
            "total": report.total_count(),
            "score_percent": round_one_decimal(report.score_percent()),
            "is_compliant": report.is_compliant(),
        },
    })
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn compliant_count(reports: &[RepoReport]) -> usize {
    reports.iter().filter(|r| r.is_compliant()).count()
}

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::detector::Profile;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn sample_report() -> RepoReport {
        let mut report = RepoReport::new(PathBuf::from("/work/my-site"), Profile::StaticSite);
        report.extend(vec![
            CheckResult::pass("file:LICENSE", "LICENSE exists"),
            CheckResult::fail("file:README.md", "README.md is missing", Severity::Error),
            CheckResult::pass("license:gpl3", "LICENSE is GPL-3.0"),
            CheckResult::fail(
                "claude_md:project_overview",
                "CLAUDE.md missing 'Project Overview' section",
                Severity::Warning,
            ),
        ]);
        report
    }

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).into_owned()
    }

    #[test]
    fn test_output_format_deserialize() {
        let json: OutputFormat = serde_json::from_str("\"json\"").expect("json");
        assert_eq!(json, OutputFormat::Json);
        let text: OutputFormat = serde_json::from_str("\"text\"").expect("text");
        assert_eq!(text, OutputFormat::Text);
        assert!(serde_json::from_str::<OutputFormat>("\"xml\"").is_err());
    }

    #[test]
    fn test_text_report_layout() {
        let text = plain(&format_text_report(&sample_report()));
        assert!(text.contains("Repository: my-site"));
        assert!(text.contains("Path: /work/my-site"));
        assert!(text.contains("Profile: Static Site"));
        assert!(text.contains("[FILE]\n  ✓ LICENSE exists\n  ✗ README.md is missing\n"));
        assert!(text.contains("[CLAUDE_MD]"));
        assert!(text.contains("✗ CLAUDE.md missing 'Project Overview' section (warning)"));
        assert!(text.contains("Score: 2/4 (50%)"));
        assert!(text.contains("Status: NON-COMPLIANT"));
    }

    #[test]
    fn test_text_categories_in_first_seen_order() {
        let text = plain(&format_text_report(&sample_report()));
        let file = text.find("[FILE]").expect("file");
        let license = text.find("[LICENSE]").expect("license");
        let claude = text.find("[CLAUDE_MD]").expect("claude");
        assert!(file < license && license < claude);
    }

    #[test]
    fn test_text_fix_line_only_for_failed() {
        let mut report = RepoReport::new(PathBuf::from("/r"), Profile::Python);
        report.extend(vec![
            CheckResult::fail("precommit:installed", "not installed", Severity::Error)
                .with_fix("pre-commit install"),
            CheckResult::pass("precommit:version:black", "ok").with_fix("pre-commit autoupdate"),
        ]);
        let text = plain(&format_text_report(&report));
        assert!(text.contains("      Fix: pre-commit install\n"));
        assert!(!text.contains("autoupdate"));
    }

    #[test]
    fn test_overall_summary_only_for_many() {
        let one = plain(&format_text(&[sample_report()]));
        assert!(!one.contains("OVERALL SUMMARY"));

        let many = plain(&format_text(&[sample_report(), sample_report()]));
        assert!(many.contains("OVERALL SUMMARY"));
        assert!(many.contains("Total repositories: 2\nCompliant: 0\nNon-compliant: 2\n"));
    }

    #[test]
    fn test_json_document_shape() {
        let doc = json_document(&[sample_report()], "2026-01-01T00:00:00+00:00");
        let report = &doc["reports"][0];
        assert_eq!(report["repo_name"], "my-site");
        assert_eq!(report["repo_path"], "/work/my-site");
        assert_eq!(report["profile"], "static_site");
        assert_eq!(report["is_python_project"], false);
        assert_eq!(report["summary"]["passed"], 2);
        assert_eq!(report["summary"]["failed"], 2);
        assert_eq!(report["summary"]["total"], 4);
        assert_eq!(report["summary"]["score_percent"], 50.0);
        assert_eq!(report["summary"]["is_compliant"], false);
        assert_eq!(report["checks"][3]["severity"], "warning");
        assert_eq!(report["checks"][0]["fix_command"], Value::Null);
        assert_eq!(doc["summary"]["total_repos"], 1);
        assert_eq!(doc["summary"]["non_compliant_repos"], 1);
        assert_eq!(doc["generated_at"], "2026-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_json_score_rounding() {
        let mut report = RepoReport::new(PathBuf::from("/r"), Profile::Documentation);
        report.extend(vec![
            CheckResult::pass("a:1", ""),
            CheckResult::fail("a:2", "", Severity::Error),
            CheckResult::fail("a:3", "", Severity::Error),
        ]);
        let doc = json_document(&[report], "now");
        assert_eq!(doc["reports"][0]["summary"]["score_percent"], 33.3);
    }

    #[test]
    fn test_format_json_is_valid() {
        let text = format_json(&[sample_report()]).expect("serialize");
        let parsed: Value = serde_json::from_str(&text).expect("valid json");
        assert!(parsed["generated_at"].as_str().is_some_and(|s| s.contains('T')));
    }
}
