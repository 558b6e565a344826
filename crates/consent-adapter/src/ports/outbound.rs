//! # Outbound Ports (Driven Ports / SPI)
//!
//! The platform consent service, one method per platform primitive.

use async_trait::async_trait;

use crate::domain::errors::PlatformError;

pub use crate::domain::platform::{VerificationOutcome, VerifierAvailability};

/// Gateway to the operating system's consent service.
///
/// Implementations only translate native values into `VerificationOutcome` /
/// `VerifierAvailability`; normalization and error containment live in
/// `ConsentAdapter`.
#[async_trait]
pub trait ConsentVerifier: Send + Sync {
    /// Show the consent prompt with `reason` and wait for the user.
    ///
    /// # Errors
    /// * `PlatformError::Failure` - the platform rejected or aborted the call
    async fn request_verification(
        &self,
        reason: &str,
    ) -> Result<VerificationOutcome, PlatformError>;

    /// Ask whether the prompt can be shown at all.
    async fn check_availability(&self) -> Result<VerifierAvailability, PlatformError>;
}

#[async_trait]
impl<T: ConsentVerifier + ?Sized> ConsentVerifier for std::sync::Arc<T> {
    async fn request_verification(
        &self,
        reason: &str,
    ) -> Result<VerificationOutcome, PlatformError> {
        (**self).request_verification(reason).await
    }

    async fn check_availability(&self) -> Result<VerifierAvailability, PlatformError> {
        (**self).check_availability().await
    }
}
