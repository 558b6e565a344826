//! # Domain Layer
//!
//! Request/result types and status translation with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod cancellation;
pub mod config;
pub mod entities;
pub mod errors;
pub mod mapping;
pub mod platform;
