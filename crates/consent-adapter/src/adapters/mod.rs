//! # Adapters Layer
//!
//! Native `ConsentVerifier` implementations, selected at compile time.

mod unsupported;
#[cfg(windows)]
mod windows_hello;

pub use unsupported::UnsupportedPlatformVerifier;
#[cfg(windows)]
pub use windows_hello::WindowsHelloVerifier;

/// The consent verifier for the target platform.
#[cfg(windows)]
pub type NativeVerifier = WindowsHelloVerifier;

/// The consent verifier for the target platform.
#[cfg(not(windows))]
pub type NativeVerifier = UnsupportedPlatformVerifier;

/// Construct the consent verifier for the target platform.
pub fn native_verifier() -> NativeVerifier {
    NativeVerifier::new()
}
