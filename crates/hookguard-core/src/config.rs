//! Configuration management for HookGuard.
//!
//! All configuration is driven by environment variables. Values that fail to
//! parse fall back to their defaults with a warning rather than aborting.

use std::env;

use tracing::warn;

use crate::types::SigningSecret;

/// Default replay window, in seconds.
pub const DEFAULT_MAX_AGE_SECS: u64 = 300;

/// Default sender name used to derive the signature header names.
pub const DEFAULT_SENDER: &str = "Slack";

/// Global configuration for HookGuard.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HookGuardConfig {
    /// Shared signing secret. Only ever loaded from the environment.
    #[serde(skip)]
    pub signing_secret: Option<SigningSecret>,
    /// Maximum accepted request age, in seconds.
    pub max_age_secs: u64,
    /// Whether timestamps too far in the future are rejected as well.
    pub reject_future: bool,
    /// Sender name, as in `X-<Sender>-Signature`.
    pub sender: String,
    /// Log level.
    pub log_level: String,
}

impl Default for HookGuardConfig {
    fn default() -> Self {
        Self {
            signing_secret: None,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
            reject_future: false,
            sender: DEFAULT_SENDER.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl HookGuardConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("HOOKGUARD_SIGNING_SECRET") {
            match SigningSecret::new(v) {
                Ok(secret) => config.signing_secret = Some(secret),
                Err(_) => warn!("HOOKGUARD_SIGNING_SECRET is empty, ignoring"),
            }
        }
        if let Some(v) = lookup("HOOKGUARD_MAX_AGE_SECS") {
            match v.trim().parse() {
                Ok(secs) => config.max_age_secs = secs,
                Err(_) => warn!(
                    value = %v,
                    default = DEFAULT_MAX_AGE_SECS,
                    "invalid HOOKGUARD_MAX_AGE_SECS, using default"
                ),
            }
        }
        if let Some(v) = lookup("HOOKGUARD_REJECT_FUTURE") {
            config.reject_future = parse_bool(&v);
        }
        if let Some(v) = lookup("HOOKGUARD_SENDER") {
            if !v.trim().is_empty() {
                config.sender = v.trim().to_owned();
            }
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Name of the header carrying the request timestamp.
    #[must_use]
    pub fn timestamp_header(&self) -> String {
        format!("X-{}-Request-Timestamp", self.sender)
    }

    /// Name of the header carrying the request signature.
    #[must_use]
    pub fn signature_header(&self) -> String {
        format!("X-{}-Signature", self.sender)
    }
}

fn parse_bool(v: &str) -> bool {
    matches!(v, "1" | "true" | "yes" | "TRUE" | "YES")
}
