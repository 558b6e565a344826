//! # Inbound Ports (Driving Ports / API)
//!
//! The authentication capability exposed to the plugin host.

use async_trait::async_trait;

use crate::domain::cancellation::CancellationToken;
use crate::domain::entities::{
    AuthenticationRequest, AuthenticationResult, AvailabilityStatus, GetSecureValueResult,
    SecureValueRequest, SecureValueResult, SetSecureValueRequest,
};

/// Plugin-facing authentication API.
///
/// Every method returns a typed result; expected platform conditions are
/// never reported as errors or panics. Implementations must be thread-safe
/// (`Send + Sync`).
#[async_trait]
pub trait ConsentApi: Send + Sync {
    /// Prompt the user for consent and report the normalized outcome.
    ///
    /// Failures of the platform call (including cancellation and timeouts)
    /// come back as `AuthenticationStatus::UnknownError` with the failure
    /// text in `error_message`.
    async fn authenticate(
        &self,
        request: AuthenticationRequest,
        cancellation: Option<CancellationToken>,
    ) -> AuthenticationResult;

    /// Query whether consent verification is usable right now. Not cached.
    async fn check_availability(&self) -> AvailabilityStatus;

    /// Shorthand for `check_availability() == Available`.
    async fn is_available(&self) -> bool {
        self.check_availability().await == AvailabilityStatus::Available
    }

    async fn set_secure_value(
        &self,
        request: SetSecureValueRequest,
        cancellation: Option<CancellationToken>,
    ) -> SecureValueResult;

    async fn remove_secure_value(
        &self,
        request: SecureValueRequest,
        cancellation: Option<CancellationToken>,
    ) -> SecureValueResult;

    async fn get_secure_value(
        &self,
        request: SecureValueRequest,
        cancellation: Option<CancellationToken>,
    ) -> GetSecureValueResult;
}
