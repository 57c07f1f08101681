//! Console rendering for probe runs
//!
//! Human-readable output mirrors the manual smoke-test transcript: a header
//! naming the target, a numbered banner before each check, the raw status
//! code and body after it, and a closing summary with deployment follow-ups.
//! JSON output renders the full report instead, for machine consumption.

use crate::config::ProbeTarget;
use crate::error::{ProbeError, Result};
use crate::probe::{CheckKind, ProbeOutcome, ProbeReport, ProbeResult};
use clap::ValueEnum;
use colored::Colorize;
use std::io::{self, Write};

/// Output format options
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable transcript with colors
    #[default]
    Table,
    /// Full report as pretty JSON
    Json,
}

/// Print the run header naming the target
pub fn render_header(target: &ProbeTarget) {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", "=== Testing Webhook Deployment ===".cyan().bold()).ok();
    writeln!(stdout, "Target: {}", target.base_url().cyan()).ok();
    writeln!(stdout).ok();
}

/// Print the numbered banner preceding a check
pub fn render_banner(index: usize, kind: CheckKind) {
    println!("{}. Testing {}...", index, kind.label());
}

/// Print the raw outcome of a single check
pub fn render_result(result: &ProbeResult) {
    let mut stdout = io::stdout();

    match &result.outcome {
        ProbeOutcome::Responded { status, body } => {
            let status_colored = if result.success() {
                status.to_string().green()
            } else {
                status.to_string().red()
            };
            writeln!(stdout, "Status Code: {}", status_colored).ok();
            writeln!(stdout, "Response: {}", body).ok();
        }
        ProbeOutcome::Unreachable { reason } => {
            writeln!(stdout, "{} {}", "Error:".red().bold(), reason).ok();
        }
    }
    writeln!(stdout).ok();
}

/// Print the closing summary block with deployment follow-ups
pub fn render_summary(target: &ProbeTarget, report: &ProbeReport) {
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", "=== Test Complete ===".cyan().bold()).ok();
    writeln!(stdout).ok();

    for result in &report.results {
        let icon = if result.success() {
            "+".green()
        } else {
            "x".red()
        };
        writeln!(stdout, "  {} {}", icon, result.check.label()).ok();
    }
    writeln!(stdout).ok();

    let verdict = if report.all_passed {
        format!("{} checks passed", report.passed_count).green().bold()
    } else {
        format!(
            "{} passed, {} failed",
            report.passed_count, report.failed_count
        )
        .red()
        .bold()
    };
    writeln!(stdout, "{} in {} ms", verdict, report.duration_ms).ok();
    writeln!(stdout).ok();

    writeln!(stdout, "{}", "NEXT STEPS:".cyan().bold()).ok();
    writeln!(stdout, "  1. Deploy the updated code").ok();
    writeln!(stdout, "  2. Set up HTTPS with a load balancer + SSL certificate").ok();
    writeln!(stdout, "  3. Update the platform console with the HTTPS URL").ok();
    writeln!(stdout).ok();

    writeln!(stdout, "{}", "CURRENT URLS:".cyan().bold()).ok();
    writeln!(stdout, "  HTTP:  {}", target.webhook_url()).ok();
    writeln!(stdout, "  HTTPS: [not set up yet]").ok();
    writeln!(stdout, "  Verify Token: {}", target.verify_token).ok();

    stdout.flush().ok();
}

/// Print the full report as pretty JSON
pub fn render_json(report: &ProbeReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| ProbeError::Parse(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
