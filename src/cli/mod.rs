//! CLI definitions and dispatch
//!
//! Invoking the binary with no arguments runs the full three-check sequence
//! against the compiled-in default target, matching the original manual
//! smoke test. Flags and env vars override the target; a JSON or YAML file
//! can supply it wholesale, with flags taking precedence over the file.
//!
//! # Exit Codes
//!
//! - `run`: always 0 (diagnostic, not a gate) unless `--strict` is set,
//!   in which case any failed check exits 1
//! - `check`: 0 on a passing check, 1 otherwise

use crate::config::ProbeTarget;
use crate::error::Result;
use crate::probe::{CheckKind, ProbeReport, ProbeRunner};
use crate::report::{self, OutputFormat};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

/// Manual webhook probe CLI
#[derive(Parser, Debug)]
#[command(name = "webhook-probe")]
#[command(about = "Manual webhook probe - sequential smoke checks against a deployed webhook endpoint", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Target host (IP or DNS name)
    #[arg(long, env = "WEBHOOK_PROBE_HOST", global = true)]
    pub host: Option<String>,

    /// Target port
    #[arg(short, long, env = "WEBHOOK_PROBE_PORT", global = true)]
    pub port: Option<u16>,

    /// Shared secret sent as hub.verify_token
    #[arg(long, env = "WEBHOOK_VERIFY_TOKEN", global = true)]
    pub verify_token: Option<String>,

    /// Challenge string sent as hub.challenge
    #[arg(long, env = "WEBHOOK_PROBE_CHALLENGE", global = true)]
    pub challenge: Option<String>,

    /// Path to a target config file (JSON or YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available probe commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run all three checks in order (the default)
    Run {
        /// Exit with code 1 when any check fails
        #[arg(long)]
        strict: bool,
    },

    /// Run a single check
    Check {
        /// Which check to run
        #[arg(value_enum)]
        probe: ProbeArg,
    },
}

/// Single-check selector
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum ProbeArg {
    /// Connectivity ping (GET /ping)
    Ping,
    /// Verification handshake (GET /webhook)
    Verify,
    /// Sample event POST (POST /webhook)
    Post,
}

impl From<ProbeArg> for CheckKind {
    fn from(arg: ProbeArg) -> Self {
        match arg {
            ProbeArg::Ping => CheckKind::Connectivity,
            ProbeArg::Verify => CheckKind::Verification,
            ProbeArg::Post => CheckKind::EventPost,
        }
    }
}

impl Cli {
    /// Resolve the probe target: file values under flag overrides, defaults last
    pub fn resolve_target(&self) -> Result<ProbeTarget> {
        let base = match &self.config {
            Some(path) => ProbeTarget::from_file(path)?,
            None => ProbeTarget::default(),
        };

        ProbeTarget::new(
            self.host.clone().unwrap_or(base.host),
            self.port.unwrap_or(base.port),
            self.verify_token.clone().unwrap_or(base.verify_token),
            self.challenge.clone().unwrap_or(base.challenge),
        )
    }
}

/// Run the CLI, returning the process exit code
pub async fn run_cli(cli: Cli) -> Result<i32> {
    let target = cli.resolve_target()?;
    let runner = ProbeRunner::new(target)?;
    let format = cli.format;

    match cli.command.unwrap_or(Commands::Run { strict: false }) {
        Commands::Run { strict } => {
            let report = run_all(&runner, format).await?;
            if strict && !report.all_passed {
                Ok(1)
            } else {
                Ok(0)
            }
        }

        Commands::Check { probe } => {
            let kind = CheckKind::from(probe);
            let result = runner.check(kind).await;

            match format {
                OutputFormat::Table => {
                    report::render_banner(1, kind);
                    report::render_result(&result);
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
            }

            if result.success() {
                Ok(0)
            } else {
                Ok(1)
            }
        }
    }
}

/// Drive the full sequence, interleaving banners with raw results
async fn run_all(runner: &ProbeRunner, format: OutputFormat) -> Result<ProbeReport> {
    match format {
        OutputFormat::Json => {
            let report = runner.run().await;
            report::render_json(&report)?;
            Ok(report)
        }
        OutputFormat::Table => {
            report::render_header(runner.target());

            let start = Instant::now();
            let mut results = Vec::with_capacity(CheckKind::ORDER.len());

            for (index, kind) in CheckKind::ORDER.into_iter().enumerate() {
                report::render_banner(index + 1, kind);
                let result = runner.check(kind).await;
                report::render_result(&result);
                results.push(result);
            }

            let duration_ms = start.elapsed().as_millis() as u64;
            let report = ProbeReport::from_results(runner.target().base_url(), results)
                .with_duration(duration_ms);

            report::render_summary(runner.target(), &report);
            Ok(report)
        }
    }
}
