//! Core types and configuration for HookGuard.
//!
//! This crate provides the building blocks shared by the verifier and the
//! command-line tool: environment-driven configuration, the [`SigningSecret`]
//! value type, and the common error type.

mod config;
mod error;
mod types;

pub use config::{DEFAULT_MAX_AGE_SECS, DEFAULT_SENDER, HookGuardConfig};
pub use error::{HookGuardError, HookGuardResult};
pub use types::SigningSecret;
