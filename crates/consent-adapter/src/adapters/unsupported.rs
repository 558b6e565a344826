//! Fallback verifier for platforms without a consent service.

use async_trait::async_trait;

use crate::domain::errors::PlatformError;
use crate::ports::outbound::{ConsentVerifier, VerificationOutcome, VerifierAvailability};

/// Reports the consent device as absent for every call.
///
/// Through `ConsentAdapter` this surfaces as `NotAvailable` / `NoSensor`,
/// never as an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedPlatformVerifier;

impl UnsupportedPlatformVerifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConsentVerifier for UnsupportedPlatformVerifier {
    async fn request_verification(
        &self,
        _reason: &str,
    ) -> Result<VerificationOutcome, PlatformError> {
        Ok(VerificationOutcome::DeviceNotPresent)
    }

    async fn check_availability(&self) -> Result<VerifierAvailability, PlatformError> {
        Ok(VerifierAvailability::DeviceNotPresent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_device_not_present() {
        let verifier = UnsupportedPlatformVerifier::new();
        assert_eq!(
            tokio_test::block_on(verifier.request_verification("anything")),
            Ok(VerificationOutcome::DeviceNotPresent)
        );
        assert_eq!(
            tokio_test::block_on(verifier.check_availability()),
            Ok(VerifierAvailability::DeviceNotPresent)
        );
    }
}
