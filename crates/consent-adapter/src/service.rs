//! # Consent Adapter Service
//!
//! Application service layer that implements the `ConsentApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`ConsentApi`)
//! - Drives the outbound port (`ConsentVerifier`) exactly once per call
//! - Delegates status translation to `domain::mapping`
//!
//! Every collaborator call goes through `contain_platform_call`, which is the
//! only place errors, timeouts, cancellation and panics are observed.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use futures::FutureExt;
use tracing::{debug, info, warn};

use crate::domain::cancellation::CancellationToken;
use crate::domain::config::ConsentConfig;
use crate::domain::entities::{
    AuthenticationRequest, AuthenticationResult, AuthenticationStatus, AvailabilityStatus,
    GetSecureValueResult, SecureValueRequest, SecureValueResult, SetSecureValueRequest,
};
use crate::domain::errors::{ConfigError, PlatformError};
use crate::domain::mapping;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::inbound::ConsentApi;
use crate::ports::outbound::ConsentVerifier;

/// Consent adapter over a platform `ConsentVerifier`.
///
/// Holds no per-call state; concurrent calls are independent.
pub struct ConsentAdapter<V: ConsentVerifier, R: MetricsRecorder = NoOpMetrics> {
    verifier: V,
    config: ConsentConfig,
    metrics: R,
}

impl<V: ConsentVerifier> ConsentAdapter<V, NoOpMetrics> {
    /// Create an adapter with default configuration and no metrics.
    pub fn new(verifier: V) -> Self {
        Self::with_config(verifier, ConsentConfig::default())
    }

    /// Create an adapter after checking `config` with `ConsentConfig::validate`.
    pub fn try_with_config(verifier: V, config: ConsentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(verifier, config))
    }

    /// Create an adapter with custom configuration.
    ///
    /// The configuration is taken as is; a zero timeout fails every call.
    /// Use `try_with_config` for configuration from outside the program.
    pub fn with_config(verifier: V, config: ConsentConfig) -> Self {
        Self {
            verifier,
            config,
            metrics: NoOpMetrics,
        }
    }
}

impl<V: ConsentVerifier, R: MetricsRecorder> ConsentAdapter<V, R> {
    /// Replace the metrics recorder.
    pub fn with_metrics<M: MetricsRecorder>(self, metrics: M) -> ConsentAdapter<V, M> {
        ConsentAdapter {
            verifier: self.verifier,
            config: self.config,
            metrics,
        }
    }

    pub fn config(&self) -> &ConsentConfig {
        &self.config
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    fn finish(&self, result: AuthenticationResult, started: Instant) -> AuthenticationResult {
        self.metrics
            .record_authentication(result.status, started.elapsed());
        info!(
            status = %result.status,
            error = result.error_message.as_deref().unwrap_or(""),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Consent verification finished"
        );
        result
    }

    /// Query availability, folding platform failures into `Unknown`.
    ///
    /// Only cancellation is returned as an error, so the pre-check in
    /// `authenticate` can abandon the prompt.
    async fn query_availability(
        &self,
        cancellation: Option<&CancellationToken>,
    ) -> Result<AvailabilityStatus, PlatformError> {
        let outcome = contain_platform_call(
            || self.verifier.check_availability(),
            self.config.availability_timeout,
            cancellation,
        )
        .await;

        let status = match outcome {
            Ok(availability) => mapping::availability_status(availability),
            Err(PlatformError::Cancelled) => {
                debug!("Availability query cancelled");
                self.metrics.record_platform_error();
                return Err(PlatformError::Cancelled);
            }
            Err(e) => {
                warn!(error = %e, "Platform availability query failed, reporting Unknown");
                self.metrics.record_platform_error();
                AvailabilityStatus::Unknown
            }
        };

        self.metrics.record_availability(status);
        debug!(%status, "Consent availability checked");
        Ok(status)
    }
}

#[async_trait]
impl<V: ConsentVerifier, R: MetricsRecorder> ConsentApi for ConsentAdapter<V, R> {
    async fn authenticate(
        &self,
        request: AuthenticationRequest,
        cancellation: Option<CancellationToken>,
    ) -> AuthenticationResult {
        let started = Instant::now();

        if cancellation.as_ref().is_some_and(|t| t.is_cancelled()) {
            self.metrics.record_platform_error();
            let result = AuthenticationResult::unknown_error(PlatformError::Cancelled.to_string());
            return self.finish(result, started);
        }

        if self.config.precheck_availability {
            match self.query_availability(cancellation.as_ref()).await {
                Ok(AvailabilityStatus::Available) => {}
                Ok(availability) => {
                    debug!(%availability, "Skipping consent prompt, verifier not available");
                    let result =
                        AuthenticationResult::from_status(AuthenticationStatus::NotAvailable);
                    return self.finish(result, started);
                }
                Err(e) => {
                    let result = AuthenticationResult::unknown_error(e.to_string());
                    return self.finish(result, started);
                }
            }
        }

        let outcome = contain_platform_call(
            || self.verifier.request_verification(request.reason()),
            self.config.verification_timeout,
            cancellation.as_ref(),
        )
        .await;

        let result = match outcome {
            Ok(outcome) => {
                debug!(code = outcome.code(), "Platform verification outcome");
                AuthenticationResult::from_status(mapping::authentication_status(outcome))
            }
            Err(e) => {
                warn!(error = %e, "Platform verification call failed");
                self.metrics.record_platform_error();
                AuthenticationResult::unknown_error(e.to_string())
            }
        };

        self.finish(result, started)
    }

    async fn check_availability(&self) -> AvailabilityStatus {
        self.query_availability(None)
            .await
            .unwrap_or(AvailabilityStatus::Unknown)
    }

    async fn set_secure_value(
        &self,
        request: SetSecureValueRequest,
        _cancellation: Option<CancellationToken>,
    ) -> SecureValueResult {
        debug!(
            service_id = %request.service_id,
            key = %request.key,
            "set_secure_value is not supported on this platform"
        );
        SecureValueResult::not_implemented()
    }

    async fn remove_secure_value(
        &self,
        request: SecureValueRequest,
        _cancellation: Option<CancellationToken>,
    ) -> SecureValueResult {
        debug!(
            service_id = %request.service_id,
            key = %request.key,
            "remove_secure_value is not supported on this platform"
        );
        SecureValueResult::not_implemented()
    }

    async fn get_secure_value(
        &self,
        request: SecureValueRequest,
        _cancellation: Option<CancellationToken>,
    ) -> GetSecureValueResult {
        debug!(
            service_id = %request.service_id,
            key = %request.key,
            "get_secure_value is not supported on this platform"
        );
        GetSecureValueResult::not_implemented()
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Run one collaborator call and fold every way it can go wrong into
/// `PlatformError`.
///
/// The call is not started if `cancellation` is already set. If cancellation
/// fires or `timeout` elapses first, the pending future is dropped and its
/// result is never observed.
async fn contain_platform_call<T, F, Fut>(
    call: F,
    timeout: Option<Duration>,
    cancellation: Option<&CancellationToken>,
) -> Result<T, PlatformError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, PlatformError>>,
{
    if cancellation.is_some_and(|t| t.is_cancelled()) {
        return Err(PlatformError::Cancelled);
    }

    let guarded = AssertUnwindSafe(call()).catch_unwind().map(|caught| match caught {
        Ok(result) => result,
        Err(payload) => Err(PlatformError::Panicked(panic_message(payload.as_ref()))),
    });

    let bounded = async move {
        match timeout {
            Some(limit) => tokio::time::timeout(limit, guarded)
                .await
                .unwrap_or(Err(PlatformError::Timeout {
                    ms: limit.as_millis() as u64,
                })),
            None => guarded.await,
        }
    };

    match cancellation {
        Some(token) => {
            tokio::select! {
                biased;
                _ = token.cancelled() => Err(PlatformError::Cancelled),
                result = bounded => result,
            }
        }
        None => bounded.await,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
