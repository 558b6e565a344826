//! Metrics hooks for consent operations
//!
//! Counts authentication outcomes per normalized status, availability
//! queries and collaborator failures, and tracks prompt latency.
//!
//! ## Usage
//!
//! ```ignore
//! use consent_adapter::{ConsentAdapter, Metrics};
//! use std::sync::Arc;
//!
//! let metrics = Arc::new(Metrics::new());
//! let adapter = ConsentAdapter::new(verifier).with_metrics(metrics.clone());
//! // ...
//! println!("{:?}", metrics.snapshot());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{AuthenticationStatus, AvailabilityStatus};

/// Metrics collector for consent operations
///
/// Thread-safe counters for monitoring prompt outcomes.
#[derive(Default)]
pub struct Metrics {
    pub succeeded: AtomicU64,
    pub not_available: AtomicU64,
    pub too_many_attempts: AtomicU64,
    pub cancelled: AtomicU64,
    pub failed: AtomicU64,
    pub unknown_error: AtomicU64,
    /// Total availability queries
    pub availability_checks: AtomicU64,
    /// Availability queries that reported `Available`
    pub availability_positive: AtomicU64,
    /// Errors, timeouts and panics from the platform collaborator
    pub platform_errors: AtomicU64,
    /// Cumulative prompt time in nanoseconds
    pub verification_time_ns: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one `authenticate` call
    ///
    /// # Arguments
    /// * `status` - Normalized status returned to the caller
    /// * `duration` - Time from call entry to result
    pub fn record_authentication(&self, status: AuthenticationStatus, duration: Duration) {
        let counter = match status {
            AuthenticationStatus::Succeeded => &self.succeeded,
            AuthenticationStatus::NotAvailable => &self.not_available,
            AuthenticationStatus::TooManyAttempts => &self.too_many_attempts,
            AuthenticationStatus::Cancelled => &self.cancelled,
            AuthenticationStatus::Failed => &self.failed,
            AuthenticationStatus::UnknownError => &self.unknown_error,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.verification_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    pub fn record_availability(&self, status: AvailabilityStatus) {
        self.availability_checks.fetch_add(1, Ordering::Relaxed);
        if status == AvailabilityStatus::Available {
            self.availability_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_platform_error(&self) {
        self.platform_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Total authentication calls across every status
    pub fn authentications(&self) -> u64 {
        self.succeeded.load(Ordering::Relaxed)
            + self.not_available.load(Ordering::Relaxed)
            + self.too_many_attempts.load(Ordering::Relaxed)
            + self.cancelled.load(Ordering::Relaxed)
            + self.failed.load(Ordering::Relaxed)
            + self.unknown_error.load(Ordering::Relaxed)
    }

    /// Average time per authentication call in nanoseconds
    pub fn avg_verification_time_ns(&self) -> u64 {
        let total = self.verification_time_ns.load(Ordering::Relaxed);
        let count = self.authentications();
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            succeeded: self.succeeded.load(Ordering::Relaxed),
            not_available: self.not_available.load(Ordering::Relaxed),
            too_many_attempts: self.too_many_attempts.load(Ordering::Relaxed),
            cancelled: self.cancelled.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            unknown_error: self.unknown_error.load(Ordering::Relaxed),
            availability_checks: self.availability_checks.load(Ordering::Relaxed),
            availability_positive: self.availability_positive.load(Ordering::Relaxed),
            platform_errors: self.platform_errors.load(Ordering::Relaxed),
            avg_verification_ns: self.avg_verification_time_ns(),
        }
    }

    pub fn reset(&self) {
        for counter in [
            &self.succeeded,
            &self.not_available,
            &self.too_many_attempts,
            &self.cancelled,
            &self.failed,
            &self.unknown_error,
            &self.availability_checks,
            &self.availability_positive,
            &self.platform_errors,
            &self.verification_time_ns,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct MetricsSnapshot {
    pub succeeded: u64,
    pub not_available: u64,
    pub too_many_attempts: u64,
    pub cancelled: u64,
    pub failed: u64,
    pub unknown_error: u64,
    pub availability_checks: u64,
    pub availability_positive: u64,
    pub platform_errors: u64,
    pub avg_verification_ns: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this trait to forward counts to an external metrics system.
pub trait MetricsRecorder: Send + Sync {
    fn record_authentication(&self, status: AuthenticationStatus, duration: Duration);

    fn record_availability(&self, status: AvailabilityStatus);

    fn record_platform_error(&self);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_authentication(&self, _: AuthenticationStatus, _: Duration) {}
    fn record_availability(&self, _: AvailabilityStatus) {}
    fn record_platform_error(&self) {}
}

impl MetricsRecorder for Metrics {
    fn record_authentication(&self, status: AuthenticationStatus, duration: Duration) {
        Metrics::record_authentication(self, status, duration);
    }

    fn record_availability(&self, status: AvailabilityStatus) {
        Metrics::record_availability(self, status);
    }

    fn record_platform_error(&self) {
        Metrics::record_platform_error(self);
    }
}

impl<T: MetricsRecorder + ?Sized> MetricsRecorder for Arc<T> {
    fn record_authentication(&self, status: AuthenticationStatus, duration: Duration) {
        (**self).record_authentication(status, duration);
    }

    fn record_availability(&self, status: AvailabilityStatus) {
        (**self).record_availability(status);
    }

    fn record_platform_error(&self) {
        (**self).record_platform_error();
    }
}
