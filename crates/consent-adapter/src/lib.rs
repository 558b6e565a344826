//! # Consent Adapter
//!
//! Maps the operating system's user-consent service (Windows Hello on
//! Windows) onto a small plugin-facing authentication API.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Request/result types and the total mapping
//!   tables from platform codes to normalized statuses. No I/O.
//! - **Ports Layer** (`ports/`): `ConsentApi` (driving) and `ConsentVerifier`
//!   (driven, one method per platform primitive).
//! - **Service Layer** (`service.rs`): `ConsentAdapter`, the boundary that
//!   turns every collaborator failure into a typed result.
//! - **Adapters Layer** (`adapters/`): native collaborators selected at
//!   compile time.
//!
//! ## Error Contract
//!
//! `authenticate` never returns an error and never propagates a panic from
//! the collaborator. Platform failures become `AuthenticationStatus::UnknownError`
//! with the failure text preserved. Availability query failures become
//! `AvailabilityStatus::Unknown`.
//!
//! ## Usage Example
//!
//! ```ignore
//! use consent_adapter::{native_verifier, AuthenticationRequest, ConsentAdapter, ConsentApi};
//!
//! let adapter = ConsentAdapter::new(native_verifier());
//! let result = adapter
//!     .authenticate(AuthenticationRequest::new("Unlock app"), None)
//!     .await;
//! if result.is_authenticated() {
//!     // proceed
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{native_verifier, NativeVerifier, UnsupportedPlatformVerifier};
#[cfg(windows)]
pub use adapters::WindowsHelloVerifier;
pub use domain::cancellation::{CancellationSource, CancellationToken};
pub use domain::config::ConsentConfig;
pub use domain::entities::{
    AuthenticationRequest, AuthenticationResult, AuthenticationStatus, AvailabilityStatus,
    GetSecureValueResult, SecureValueRequest, SecureValueResult, SetSecureValueRequest,
    NOT_IMPLEMENTED_MESSAGE,
};
pub use domain::errors::{ConfigError, PlatformError};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::inbound::ConsentApi;
pub use ports::outbound::{ConsentVerifier, VerificationOutcome, VerifierAvailability};
pub use service::ConsentAdapter;
