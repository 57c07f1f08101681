//! Probe runner
//!
//! Executes the three checks against the configured target, strictly in
//! order and with each check fault-isolated: a transport failure is caught,
//! recorded as an outcome, and never aborts the remaining checks. Non-200
//! statuses are ordinary responses, not errors.

use crate::config::{ProbeOptions, ProbeTarget};
use crate::error::{ProbeError, Result};
use crate::payload::MessageEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

/// The three probe checks, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// GET `{base}/ping`
    Connectivity,
    /// GET `{base}/webhook` with the `hub.*` handshake parameters
    Verification,
    /// POST `{base}/webhook` with the sample event payload
    EventPost,
}

impl CheckKind {
    /// Fixed execution order: connectivity, then verification, then POST
    pub const ORDER: [CheckKind; 3] = [
        CheckKind::Connectivity,
        CheckKind::Verification,
        CheckKind::EventPost,
    ];

    /// Human-readable label used in banners and logs
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::Connectivity => "basic connectivity",
            CheckKind::Verification => "webhook verification (GET /webhook)",
            CheckKind::EventPost => "webhook POST",
        }
    }
}

/// Outcome of a single check
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The server answered; any status code lands here
    Responded { status: u16, body: String },
    /// Transport failure: connection refused, DNS failure, or timeout
    Unreachable { reason: String },
}

/// Result of a single check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    /// Which check produced this result
    pub check: CheckKind,

    /// What happened on the wire
    pub outcome: ProbeOutcome,

    /// Round-trip latency in milliseconds
    pub latency_ms: u64,

    /// Check timestamp
    pub checked_at: DateTime<Utc>,
}

impl ProbeResult {
    /// Create a result for a server that answered
    pub fn responded(check: CheckKind, status: u16, body: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            check,
            outcome: ProbeOutcome::Responded {
                status,
                body: body.into(),
            },
            latency_ms,
            checked_at: Utc::now(),
        }
    }

    /// Create a result for an unreachable server
    pub fn unreachable(check: CheckKind, reason: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            check,
            outcome: ProbeOutcome::Unreachable {
                reason: reason.into(),
            },
            latency_ms,
            checked_at: Utc::now(),
        }
    }

    /// True iff the server answered with status 200
    pub fn success(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Responded { status: 200, .. })
    }
}

/// Aggregate report for one full probe run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Unique run identifier
    pub run_id: Uuid,

    /// Base URL the run targeted
    pub target: String,

    /// Individual check results, in execution order
    pub results: Vec<ProbeResult>,

    /// Checks that reported status 200
    pub passed_count: u32,

    /// Checks that reported a non-200 status or a transport failure
    pub failed_count: u32,

    /// True iff every check passed
    pub all_passed: bool,

    /// Completion timestamp
    pub completed_at: DateTime<Utc>,

    /// Total run duration in milliseconds
    pub duration_ms: u64,
}

impl ProbeReport {
    /// Aggregate a run's results
    pub fn from_results(target: String, results: Vec<ProbeResult>) -> Self {
        let passed = results.iter().filter(|r| r.success()).count() as u32;
        let failed = results.len() as u32 - passed;

        Self {
            run_id: Uuid::new_v4(),
            target,
            passed_count: passed,
            failed_count: failed,
            all_passed: failed == 0,
            results,
            completed_at: Utc::now(),
            duration_ms: 0,
        }
    }

    /// Set total duration
    pub fn with_duration(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }
}

/// Sequential probe runner for one target
pub struct ProbeRunner {
    client: reqwest::Client,
    target: ProbeTarget,
    options: ProbeOptions,
}

impl ProbeRunner {
    /// Create a runner with default options
    pub fn new(target: ProbeTarget) -> Result<Self> {
        Self::with_options(target, ProbeOptions::default())
    }

    /// Create a runner with explicit timeout options
    pub fn with_options(target: ProbeTarget, options: ProbeOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ProbeError::transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            target,
            options,
        })
    }

    /// The configured target
    pub fn target(&self) -> &ProbeTarget {
        &self.target
    }

    /// GET `{base}/ping` with the short ping timeout
    pub async fn check_connectivity(&self) -> ProbeResult {
        let request = self
            .client
            .get(self.target.ping_url())
            .timeout(self.options.ping_timeout());

        self.execute(CheckKind::Connectivity, request).await
    }

    /// GET `{base}/webhook` with exactly the three handshake parameters
    pub async fn check_verification(&self) -> ProbeResult {
        let request = self
            .client
            .get(self.target.webhook_url())
            .query(&[
                ("hub.mode", "subscribe"),
                ("hub.verify_token", self.target.verify_token.as_str()),
                ("hub.challenge", self.target.challenge.as_str()),
            ])
            .timeout(self.options.webhook_timeout());

        self.execute(CheckKind::Verification, request).await
    }

    /// POST `{base}/webhook` with the sample event as a JSON body
    pub async fn check_event_post(&self) -> ProbeResult {
        let request = self
            .client
            .post(self.target.webhook_url())
            .json(&MessageEvent::sample())
            .timeout(self.options.webhook_timeout());

        self.execute(CheckKind::EventPost, request).await
    }

    /// Run a single check by kind
    pub async fn check(&self, kind: CheckKind) -> ProbeResult {
        match kind {
            CheckKind::Connectivity => self.check_connectivity().await,
            CheckKind::Verification => self.check_verification().await,
            CheckKind::EventPost => self.check_event_post().await,
        }
    }

    /// Run all three checks in fixed order, never short-circuiting
    pub async fn run(&self) -> ProbeReport {
        let start = Instant::now();
        let mut results = Vec::with_capacity(CheckKind::ORDER.len());

        for kind in CheckKind::ORDER {
            let result = self.check(kind).await;
            tracing::info!(
                check = kind.label(),
                success = result.success(),
                latency_ms = result.latency_ms,
                "check complete"
            );
            results.push(result);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        ProbeReport::from_results(self.target.base_url(), results).with_duration(duration_ms)
    }

    /// Send a request and fold any transport failure into the outcome
    async fn execute(&self, kind: CheckKind, request: reqwest::RequestBuilder) -> ProbeResult {
        let start = Instant::now();

        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let latency = start.elapsed().as_millis() as u64;

                match response.text().await {
                    Ok(body) => ProbeResult::responded(kind, status, body, latency),
                    Err(e) => {
                        let reason = ProbeError::from(e).to_string();
                        tracing::warn!(check = kind.label(), %reason, "body read failed");
                        ProbeResult::unreachable(kind, reason, latency)
                    }
                }
            }
            Err(e) => {
                let latency = start.elapsed().as_millis() as u64;
                let reason = ProbeError::from(e).to_string();
                tracing::warn!(check = kind.label(), %reason, "request failed");
                ProbeResult::unreachable(kind, reason, latency)
            }
        }
    }
}
