//! # Domain Entities
//!
//! Requests handed to the adapter and the normalized results it returns.

use serde::{Deserialize, Serialize};

/// Message carried by every secure-value result on this platform.
pub const NOT_IMPLEMENTED_MESSAGE: &str = "Not implemented for the current platform.";

// =============================================================================
// Authentication
// =============================================================================

/// A single consent prompt requested by the caller.
///
/// Immutable once built; consumed by one `authenticate` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationRequest {
    reason: String,
    title: Option<String>,
    allow_alternative_authentication: bool,
}

impl AuthenticationRequest {
    /// Create a request with the reason shown in the consent prompt.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            title: None,
            allow_alternative_authentication: true,
        }
    }

    /// Attach a dialog title. Platforms whose prompt only takes a message ignore it.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether a device credential (PIN/password) may stand in for biometrics.
    pub fn with_alternative_authentication(mut self, allow: bool) -> Self {
        self.allow_alternative_authentication = allow;
        self
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn allows_alternative_authentication(&self) -> bool {
        self.allow_alternative_authentication
    }
}

/// Normalized outcome of an authentication attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthenticationStatus {
    Succeeded,
    NotAvailable,
    TooManyAttempts,
    Cancelled,
    Failed,
    UnknownError,
}

impl AuthenticationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Succeeded => "Succeeded",
            Self::NotAvailable => "NotAvailable",
            Self::TooManyAttempts => "TooManyAttempts",
            Self::Cancelled => "Cancelled",
            Self::Failed => "Failed",
            Self::UnknownError => "UnknownError",
        }
    }
}

impl std::fmt::Display for AuthenticationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one `authenticate` call.
///
/// `error_message` is only populated for `UnknownError`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationResult {
    pub status: AuthenticationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AuthenticationResult {
    /// Result for a status that carries no diagnostic text.
    pub fn from_status(status: AuthenticationStatus) -> Self {
        Self {
            status,
            error_message: None,
        }
    }

    /// `UnknownError` with the failure text preserved.
    pub fn unknown_error(message: impl Into<String>) -> Self {
        Self {
            status: AuthenticationStatus::UnknownError,
            error_message: Some(message.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthenticationStatus::Succeeded
    }
}

// =============================================================================
// Availability
// =============================================================================

/// Whether the device and user configuration support consent verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Available,
    NoSensor,
    NoFingerprint,
    NoPermission,
    Unknown,
}

impl AvailabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::NoSensor => "NoSensor",
            Self::NoFingerprint => "NoFingerprint",
            Self::NoPermission => "NoPermission",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Secure values
// =============================================================================

/// Request to store a credential-protected value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSecureValueRequest {
    pub service_id: String,
    pub key: String,
    pub value: String,
    pub reason: Option<String>,
}

impl std::fmt::Debug for SetSecureValueRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetSecureValueRequest")
            .field("service_id", &self.service_id)
            .field("key", &self.key)
            .field("value", &"[REDACTED]")
            .field("reason", &self.reason)
            .finish()
    }
}

/// Request addressing an existing secure value (get / remove).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecureValueRequest {
    pub service_id: String,
    pub key: String,
    pub reason: Option<String>,
}

/// Result of `set_secure_value` / `remove_secure_value`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecureValueResult {
    pub status: AuthenticationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SecureValueResult {
    pub fn not_implemented() -> Self {
        Self {
            status: AuthenticationStatus::NotAvailable,
            error_message: Some(NOT_IMPLEMENTED_MESSAGE.to_string()),
        }
    }
}

/// Result of `get_secure_value`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSecureValueResult {
    pub status: AuthenticationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl GetSecureValueResult {
    pub fn not_implemented() -> Self {
        Self {
            status: AuthenticationStatus::NotAvailable,
            error_message: Some(NOT_IMPLEMENTED_MESSAGE.to_string()),
            value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = AuthenticationRequest::new("Unlock app");
        assert_eq!(request.reason(), "Unlock app");
        assert_eq!(request.title(), None);
        assert!(request.allows_alternative_authentication());
    }

    #[test]
    fn test_request_builder() {
        let request = AuthenticationRequest::new("Sign in")
            .with_title("Verify")
            .with_alternative_authentication(false);
        assert_eq!(request.title(), Some("Verify"));
        assert!(!request.allows_alternative_authentication());
    }

    #[test]
    fn test_from_status_has_no_message() {
        let result = AuthenticationResult::from_status(AuthenticationStatus::Succeeded);
        assert!(result.is_authenticated());
        assert!(result.error_message.is_none());
    }

    #[test]
    fn test_unknown_error_keeps_message() {
        let result = AuthenticationResult::unknown_error("timeout");
        assert_eq!(result.status, AuthenticationStatus::UnknownError);
        assert_eq!(result.error_message.as_deref(), Some("timeout"));
        assert!(!result.is_authenticated());
    }

    #[test]
    fn test_not_implemented_results() {
        let set = SecureValueResult::not_implemented();
        assert_eq!(set.status, AuthenticationStatus::NotAvailable);
        assert_eq!(set.error_message.as_deref(), Some(NOT_IMPLEMENTED_MESSAGE));

        let get = GetSecureValueResult::not_implemented();
        assert_eq!(get.status, AuthenticationStatus::NotAvailable);
        assert!(get.value.is_none());
    }

    #[test]
    fn test_set_request_debug_redacts_value() {
        let request = SetSecureValueRequest {
            service_id: "svc".into(),
            key: "token".into(),
            value: "hunter2".into(),
            reason: None,
        };
        let rendered = format!("{:?}", request);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_result_serialization_skips_empty_message() {
        let result = AuthenticationResult::from_status(AuthenticationStatus::Cancelled);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"status":"Cancelled"}"#);
    }
}
