//! # Windows Hello Verifier
//!
//! `ConsentVerifier` backed by `Windows.Security.Credentials.UI.UserConsentVerifier`.
//!
//! The WinRT async operations are joined on a blocking-pool thread so the
//! tokio executor is never parked on a COM wait.

use async_trait::async_trait;
use tracing::debug;
use windows::core::HSTRING;
use windows::Security::Credentials::UI::UserConsentVerifier;

use crate::domain::errors::PlatformError;
use crate::ports::outbound::{ConsentVerifier, VerificationOutcome, VerifierAvailability};

/// Consent verifier for Windows 10 and later.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowsHelloVerifier;

impl WindowsHelloVerifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConsentVerifier for WindowsHelloVerifier {
    async fn request_verification(
        &self,
        reason: &str,
    ) -> Result<VerificationOutcome, PlatformError> {
        let message = HSTRING::from(reason);
        let code = run_blocking(move || {
            let result = UserConsentVerifier::RequestVerificationAsync(&message)
                .map_err(|e| PlatformError::Failure(e.message()))?
                .join()
                .map_err(|e| PlatformError::Failure(e.message()))?;
            Ok(result.0)
        })
        .await?;

        debug!(code, "UserConsentVerifier.RequestVerificationAsync returned");
        Ok(VerificationOutcome::from_code(code))
    }

    async fn check_availability(&self) -> Result<VerifierAvailability, PlatformError> {
        let code = run_blocking(|| {
            let availability = UserConsentVerifier::CheckAvailabilityAsync()
                .map_err(|e| PlatformError::Failure(e.message()))?
                .join()
                .map_err(|e| PlatformError::Failure(e.message()))?;
            Ok(availability.0)
        })
        .await?;

        debug!(code, "UserConsentVerifier.CheckAvailabilityAsync returned");
        Ok(VerifierAvailability::from_code(code))
    }
}

/// Join a WinRT operation on the blocking pool.
///
/// Dropping the returned future abandons the wait but not the thread; the
/// join holds its pool thread until the prompt is dismissed. Runtimes that
/// may abandon a prompt must shut down with `Runtime::shutdown_background`
/// or `shutdown_timeout`, or dropping them blocks on that thread.
async fn run_blocking<T, F>(f: F) -> Result<T, PlatformError>
where
    F: FnOnce() -> Result<T, PlatformError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(e) if e.is_panic() => Err(PlatformError::Panicked(e.to_string())),
        Err(e) => Err(PlatformError::Failure(e.to_string())),
    }
}
