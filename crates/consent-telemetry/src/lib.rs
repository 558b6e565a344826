//! # Consent Telemetry
//!
//! Structured logging for the consent bridge, built on `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use consent_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     init_logging(&TelemetryConfig::from_env()).expect("Failed to init logging");
//!     tracing::info!("ready");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CONSENT_SERVICE_NAME` | `consent-bridge` | Service name in log lines |
//! | `CONSENT_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `CONSENT_CONSOLE_OUTPUT` | `true` | Write logs to stderr |
//! | `CONSENT_JSON_LOGS` | `false` | JSON formatted logs |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging, service_span};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter {directive:?}: {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}

/// Convenience macro for creating a span with operation context.
///
/// # Example
///
/// ```rust,ignore
/// use consent_telemetry::consent_span;
///
/// let _span = consent_span!("authenticate", reason_len = 10).entered();
/// ```
#[macro_export]
macro_rules! consent_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
