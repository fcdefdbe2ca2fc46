//! Error types for the HookGuard core.

/// Core error type for HookGuard construction and configuration.
#[derive(Debug, thiserror::Error)]
pub enum HookGuardError {
    /// A signing secret was supplied but it is empty.
    #[error("signing secret must not be empty")]
    EmptySecret,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for HookGuard operations.
pub type HookGuardResult<T> = Result<T, HookGuardError>;
