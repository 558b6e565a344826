//! Platform-side status codes reported by the consent service.
//!
//! Raw codes follow the Windows `UserConsentVerificationResult` and
//! `UserConsentVerifierAvailability` numbering. Codes outside the known
//! range are preserved in `Unrecognized` so that newer platform releases
//! still resolve to a normalized status.

/// Outcome of a platform verification prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerificationOutcome {
    Verified,
    DeviceNotPresent,
    NotConfiguredForUser,
    DisabledByPolicy,
    DeviceBusy,
    RetriesExhausted,
    Canceled,
    Unrecognized(i32),
}

impl VerificationOutcome {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Verified,
            1 => Self::DeviceNotPresent,
            2 => Self::NotConfiguredForUser,
            3 => Self::DisabledByPolicy,
            4 => Self::DeviceBusy,
            5 => Self::RetriesExhausted,
            6 => Self::Canceled,
            other => Self::Unrecognized(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Verified => 0,
            Self::DeviceNotPresent => 1,
            Self::NotConfiguredForUser => 2,
            Self::DisabledByPolicy => 3,
            Self::DeviceBusy => 4,
            Self::RetriesExhausted => 5,
            Self::Canceled => 6,
            Self::Unrecognized(code) => *code,
        }
    }
}

/// Availability reported by the platform consent service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerifierAvailability {
    Available,
    DeviceNotPresent,
    NotConfiguredForUser,
    DisabledByPolicy,
    DeviceBusy,
    Unrecognized(i32),
}

impl VerifierAvailability {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Available,
            1 => Self::DeviceNotPresent,
            2 => Self::NotConfiguredForUser,
            3 => Self::DisabledByPolicy,
            4 => Self::DeviceBusy,
            other => Self::Unrecognized(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Available => 0,
            Self::DeviceNotPresent => 1,
            Self::NotConfiguredForUser => 2,
            Self::DisabledByPolicy => 3,
            Self::DeviceBusy => 4,
            Self::Unrecognized(code) => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_verification_codes() {
        for code in 0..=6 {
            let outcome = VerificationOutcome::from_code(code);
            assert!(!matches!(outcome, VerificationOutcome::Unrecognized(_)));
            assert_eq!(outcome.code(), code);
        }
    }

    #[test]
    fn test_unknown_verification_code_is_preserved() {
        assert_eq!(
            VerificationOutcome::from_code(42),
            VerificationOutcome::Unrecognized(42)
        );
        assert_eq!(VerificationOutcome::from_code(-1).code(), -1);
    }

    #[test]
    fn test_known_availability_codes() {
        for code in 0..=4 {
            let availability = VerifierAvailability::from_code(code);
            assert!(!matches!(availability, VerifierAvailability::Unrecognized(_)));
            assert_eq!(availability.code(), code);
        }
        assert_eq!(
            VerifierAvailability::from_code(5),
            VerifierAvailability::Unrecognized(5)
        );
    }
}
