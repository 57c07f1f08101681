//! Manual Webhook Probe
//!
//! Sequential smoke checks against a deployed webhook endpoint: a
//! connectivity ping, the subscription verification handshake, and a
//! sample inbound-event POST.
//!
//! # Design Principles
//! - Diagnostic, not a gate: every check is fault-isolated and the full
//!   sequence always runs to completion
//! - Stateless: each check builds its request fresh and keeps nothing
//!   beyond the printed result
//! - Inspectable: checks return tagged outcomes instead of printing and
//!   swallowing errors

pub mod cli;
pub mod config;
pub mod error;
pub mod payload;
pub mod probe;
pub mod report;

pub use config::{ProbeOptions, ProbeTarget};
pub use error::ProbeError;
pub use probe::{CheckKind, ProbeOutcome, ProbeReport, ProbeResult, ProbeRunner};
