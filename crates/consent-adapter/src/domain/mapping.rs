//! # Status Translation
//!
//! Total lookups from platform codes to normalized statuses. Shared by every
//! platform adapter; unrecognized codes fall into the generic bucket of each
//! table rather than failing.

use crate::domain::entities::{AuthenticationStatus, AvailabilityStatus};
use crate::domain::platform::{VerificationOutcome, VerifierAvailability};

/// Map a verification prompt outcome to an authentication status.
pub fn authentication_status(outcome: VerificationOutcome) -> AuthenticationStatus {
    match outcome {
        VerificationOutcome::Verified => AuthenticationStatus::Succeeded,

        VerificationOutcome::DeviceBusy
        | VerificationOutcome::DeviceNotPresent
        | VerificationOutcome::DisabledByPolicy
        | VerificationOutcome::NotConfiguredForUser => AuthenticationStatus::NotAvailable,

        VerificationOutcome::RetriesExhausted => AuthenticationStatus::TooManyAttempts,
        VerificationOutcome::Canceled => AuthenticationStatus::Cancelled,
        VerificationOutcome::Unrecognized(_) => AuthenticationStatus::Failed,
    }
}

/// Map platform availability to the normalized availability status.
///
/// `DeviceBusy` is transient, so it is reported as `Unknown` rather than
/// as a hardware or policy condition.
pub fn availability_status(availability: VerifierAvailability) -> AvailabilityStatus {
    match availability {
        VerifierAvailability::Available => AvailabilityStatus::Available,
        VerifierAvailability::DeviceNotPresent => AvailabilityStatus::NoSensor,
        VerifierAvailability::NotConfiguredForUser => AvailabilityStatus::NoFingerprint,
        VerifierAvailability::DisabledByPolicy => AvailabilityStatus::NoPermission,
        VerifierAvailability::DeviceBusy | VerifierAvailability::Unrecognized(_) => {
            AvailabilityStatus::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_verification_table() {
        let cases = [
            (VerificationOutcome::Verified, AuthenticationStatus::Succeeded),
            (VerificationOutcome::DeviceBusy, AuthenticationStatus::NotAvailable),
            (VerificationOutcome::DeviceNotPresent, AuthenticationStatus::NotAvailable),
            (VerificationOutcome::DisabledByPolicy, AuthenticationStatus::NotAvailable),
            (VerificationOutcome::NotConfiguredForUser, AuthenticationStatus::NotAvailable),
            (VerificationOutcome::RetriesExhausted, AuthenticationStatus::TooManyAttempts),
            (VerificationOutcome::Canceled, AuthenticationStatus::Cancelled),
            (VerificationOutcome::Unrecognized(99), AuthenticationStatus::Failed),
        ];

        for (outcome, expected) in cases {
            assert_eq!(authentication_status(outcome), expected, "{:?}", outcome);
        }
    }

    #[test]
    fn test_availability_table() {
        let cases = [
            (VerifierAvailability::Available, AvailabilityStatus::Available),
            (VerifierAvailability::DeviceNotPresent, AvailabilityStatus::NoSensor),
            (VerifierAvailability::NotConfiguredForUser, AvailabilityStatus::NoFingerprint),
            (VerifierAvailability::DisabledByPolicy, AvailabilityStatus::NoPermission),
            (VerifierAvailability::DeviceBusy, AvailabilityStatus::Unknown),
            (VerifierAvailability::Unrecognized(7), AvailabilityStatus::Unknown),
        ];

        for (availability, expected) in cases {
            assert_eq!(availability_status(availability), expected, "{:?}", availability);
        }
    }

    proptest! {
        #[test]
        fn prop_codes_past_known_range_map_to_failed(
            code in prop_oneof![i32::MIN..0, 7..i32::MAX]
        ) {
            let outcome = VerificationOutcome::from_code(code);
            prop_assert_eq!(authentication_status(outcome), AuthenticationStatus::Failed);
        }

        #[test]
        fn prop_availability_codes_past_known_range_map_to_unknown(
            code in prop_oneof![i32::MIN..0, 5..i32::MAX]
        ) {
            let availability = VerifierAvailability::from_code(code);
            prop_assert_eq!(availability_status(availability), AvailabilityStatus::Unknown);
        }

        #[test]
        fn prop_only_verified_succeeds(code in any::<i32>()) {
            let status = authentication_status(VerificationOutcome::from_code(code));
            prop_assert_eq!(status == AuthenticationStatus::Succeeded, code == 0);
        }
    }
}
