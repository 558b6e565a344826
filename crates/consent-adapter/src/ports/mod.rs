//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API the plugin host calls
//! - **Outbound (Driven)**: the platform consent service this adapter needs

pub mod inbound;
pub mod outbound;
