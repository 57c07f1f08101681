//! Probe target configuration
//!
//! The target is immutable once constructed: a base host/port plus the
//! shared verification secret and the challenge string echoed back by the
//! server during the handshake. Defaults reproduce the deployment the
//! probe was originally written against, so running with no arguments
//! still exercises the same endpoint.

use crate::error::{ProbeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default target host
pub const DEFAULT_HOST: &str = "44.204.27.5";

/// Default target port
pub const DEFAULT_PORT: u16 = 8080;

/// Default shared verification secret
pub const DEFAULT_VERIFY_TOKEN: &str = "contamed_webhook_2024_secure";

/// Default challenge string the server must echo back
pub const DEFAULT_CHALLENGE: &str = "test123";

/// The remote endpoint the probe runs against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeTarget {
    /// Target host (IP or DNS name, no scheme)
    #[serde(default = "default_host")]
    pub host: String,

    /// Target port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared secret sent as `hub.verify_token`
    #[serde(default = "default_verify_token")]
    pub verify_token: String,

    /// Arbitrary string sent as `hub.challenge`, echoed by a correct server
    #[serde(default = "default_challenge")]
    pub challenge: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_verify_token() -> String {
    DEFAULT_VERIFY_TOKEN.to_string()
}

fn default_challenge() -> String {
    DEFAULT_CHALLENGE.to_string()
}

impl Default for ProbeTarget {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            verify_token: default_verify_token(),
            challenge: default_challenge(),
        }
    }
}

impl ProbeTarget {
    /// Create a target, validating the host string
    pub fn new(
        host: impl Into<String>,
        port: u16,
        verify_token: impl Into<String>,
        challenge: impl Into<String>,
    ) -> Result<Self> {
        let host = host.into();
        if host.is_empty() {
            return Err(ProbeError::invalid_target("host must not be empty"));
        }
        if host.contains('/') || host.contains(':') {
            return Err(ProbeError::invalid_target(format!(
                "host must be a bare name or address, got '{}'",
                host
            )));
        }
        Ok(Self {
            host,
            port,
            verify_token: verify_token.into(),
            challenge: challenge.into(),
        })
    }

    /// Load a target from a JSON or YAML file, keyed by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        let target: ProbeTarget = if ext == "yaml" || ext == "yml" {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        if target.host.is_empty() {
            return Err(ProbeError::invalid_target("host must not be empty"));
        }
        Ok(target)
    }

    /// Base URL for the target, e.g. `http://44.204.27.5:8080`
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Full URL of the connectivity endpoint
    pub fn ping_url(&self) -> String {
        format!("{}/ping", self.base_url())
    }

    /// Full URL of the webhook endpoint (GET handshake and event POST)
    pub fn webhook_url(&self) -> String {
        format!("{}/webhook", self.base_url())
    }
}

/// Per-check timeout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeOptions {
    /// Timeout for the connectivity ping, in milliseconds
    #[serde(default = "default_ping_timeout")]
    pub ping_timeout_ms: u64,

    /// Timeout for the two webhook checks, in milliseconds
    #[serde(default = "default_webhook_timeout")]
    pub webhook_timeout_ms: u64,
}

fn default_ping_timeout() -> u64 {
    5_000
}

fn default_webhook_timeout() -> u64 {
    10_000
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            ping_timeout_ms: default_ping_timeout(),
            webhook_timeout_ms: default_webhook_timeout(),
        }
    }
}

impl ProbeOptions {
    /// Ping timeout as a [`Duration`]
    pub fn ping_timeout(&self) -> Duration {
        Duration::from_millis(self.ping_timeout_ms)
    }

    /// Webhook timeout as a [`Duration`]
    pub fn webhook_timeout(&self) -> Duration {
        Duration::from_millis(self.webhook_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_target() {
        let target = ProbeTarget::default();
        assert_eq!(target.host, DEFAULT_HOST);
        assert_eq!(target.port, DEFAULT_PORT);
        assert_eq!(target.verify_token, DEFAULT_VERIFY_TOKEN);
        assert_eq!(target.challenge, DEFAULT_CHALLENGE);
    }

    #[test]
    fn test_urls() {
        let target = ProbeTarget::new("10.0.0.1", 9000, "secret", "abc").unwrap();
        assert_eq!(target.base_url(), "http://10.0.0.1:9000");
        assert_eq!(target.ping_url(), "http://10.0.0.1:9000/ping");
        assert_eq!(target.webhook_url(), "http://10.0.0.1:9000/webhook");
    }

    #[test]
    fn test_new_rejects_bad_host() {
        assert!(ProbeTarget::new("", 8080, "t", "c").is_err());
        assert!(ProbeTarget::new("host:8080", 8080, "t", "c").is_err());
        assert!(ProbeTarget::new("http://host", 8080, "t", "c").is_err());
    }

    #[test]
    fn test_from_file_json_partial() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"host": "10.1.2.3"}}"#).unwrap();

        let target = ProbeTarget::from_file(file.path()).unwrap();
        assert_eq!(target.host, "10.1.2.3");
        // Unspecified fields fall back to defaults
        assert_eq!(target.port, DEFAULT_PORT);
        assert_eq!(target.verify_token, DEFAULT_VERIFY_TOKEN);
    }

    #[test]
    fn test_from_file_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "host: probe.example.com\nport: 443\nchallenge: xyz\n").unwrap();

        let target = ProbeTarget::from_file(file.path()).unwrap();
        assert_eq!(target.host, "probe.example.com");
        assert_eq!(target.port, 443);
        assert_eq!(target.challenge, "xyz");
    }

    #[test]
    fn test_from_file_malformed() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "not json at all").unwrap();

        let err = ProbeTarget::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ProbeError::Parse(_)));
    }

    #[test]
    fn test_default_options() {
        let options = ProbeOptions::default();
        assert_eq!(options.ping_timeout(), Duration::from_secs(5));
        assert_eq!(options.webhook_timeout(), Duration::from_secs(10));
    }
}
