//! Adapter configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use consent_adapter::ConsentConfig;
//! use std::time::Duration;
//!
//! let config = ConsentConfig::default()
//!     .with_verification_timeout(Some(Duration::from_secs(60)))
//!     .with_precheck_availability(true);
//! config.validate()?;
//! ```

use std::env;
use std::time::Duration;

use crate::domain::errors::ConfigError;

/// Smallest timeout accepted for either platform call
pub const MIN_TIMEOUT: Duration = Duration::from_millis(1);

/// Largest timeout accepted for either platform call
pub const MAX_TIMEOUT: Duration = Duration::from_secs(600);

/// Runtime behavior of `ConsentAdapter`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsentConfig {
    /// Upper bound on waiting for the user to answer the prompt (None = wait indefinitely)
    pub verification_timeout: Option<Duration>,
    /// Upper bound on the availability query (None = wait indefinitely)
    pub availability_timeout: Option<Duration>,
    /// Query availability before prompting and short-circuit with NotAvailable
    pub precheck_availability: bool,
}

impl ConsentConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CONSENT_VERIFICATION_TIMEOUT_MS`: prompt timeout, `0` or unset disables it
    /// - `CONSENT_AVAILABILITY_TIMEOUT_MS`: availability timeout, `0` or unset disables it
    /// - `CONSENT_PRECHECK_AVAILABILITY`: `true`/`1` to enable the pre-check (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            verification_timeout: timeout_from_env("CONSENT_VERIFICATION_TIMEOUT_MS")?,
            availability_timeout: timeout_from_env("CONSENT_AVAILABILITY_TIMEOUT_MS")?,
            precheck_availability: flag_from_env("CONSENT_PRECHECK_AVAILABILITY")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_timeout("verification_timeout", self.verification_timeout)?;
        check_timeout("availability_timeout", self.availability_timeout)?;
        Ok(())
    }

    pub fn with_verification_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.verification_timeout = timeout;
        self
    }

    pub fn with_availability_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.availability_timeout = timeout;
        self
    }

    pub fn with_precheck_availability(mut self, enabled: bool) -> Self {
        self.precheck_availability = enabled;
        self
    }
}

fn check_timeout(field: &'static str, timeout: Option<Duration>) -> Result<(), ConfigError> {
    match timeout {
        Some(t) if t < MIN_TIMEOUT || t > MAX_TIMEOUT => Err(ConfigError::TimeoutOutOfRange {
            field,
            ms: t.as_millis(),
            min_ms: MIN_TIMEOUT.as_millis(),
            max_ms: MAX_TIMEOUT.as_millis(),
        }),
        _ => Ok(()),
    }
}

fn timeout_from_env(var: &'static str) -> Result<Option<Duration>, ConfigError> {
    match env::var(var) {
        Ok(raw) => parse_timeout_ms(var, &raw),
        Err(_) => Ok(None),
    }
}

fn flag_from_env(var: &'static str) -> Result<bool, ConfigError> {
    match env::var(var) {
        Ok(raw) => parse_flag(var, &raw),
        Err(_) => Ok(false),
    }
}

pub(crate) fn parse_timeout_ms(
    var: &'static str,
    raw: &str,
) -> Result<Option<Duration>, ConfigError> {
    let ms: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
    })?;
    if ms == 0 {
        Ok(None)
    } else {
        Ok(Some(Duration::from_millis(ms)))
    }
}

pub(crate) fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
        }),
    }
}
