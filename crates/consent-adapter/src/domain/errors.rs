//! # Consent Errors
//!
//! Failures raised by the platform collaborator and by configuration loading.
//! Collaborator failures never leave the adapter; they are folded into
//! `AuthenticationResult` / `AvailabilityStatus` at the service boundary.

use thiserror::Error;

/// Errors surfaced by a `ConsentVerifier` implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlatformError {
    /// The platform call failed; the text is the platform's own message
    #[error("{0}")]
    Failure(String),

    /// The call did not complete within the configured bound
    #[error("verification timed out after {ms} ms")]
    Timeout { ms: u64 },

    /// Cancellation was requested before the call produced a result
    #[error("The operation was canceled.")]
    Cancelled,

    /// The collaborator panicked while servicing the call
    #[error("platform call panicked: {0}")]
    Panicked(String),
}

/// Errors from loading or validating `ConsentConfig`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("Timeout out of range for {field}: {ms} ms (must be {min_ms}..={max_ms})")]
    TimeoutOutOfRange {
        field: &'static str,
        ms: u128,
        min_ms: u128,
        max_ms: u128,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_is_verbatim() {
        assert_eq!(PlatformError::Failure("timeout".into()).to_string(), "timeout");
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(
            PlatformError::Timeout { ms: 1500 }.to_string(),
            "verification timed out after 1500 ms"
        );
    }
}
