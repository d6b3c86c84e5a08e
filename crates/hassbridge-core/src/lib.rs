//! hassbridge core: transport-agnostic request model, tag normalization, and
//! the statsd line encoder.
//!
//! This crate defines the contract between an automation host's untyped
//! service-call payload and the gauge datagram sent to a statsd collector.
//! It carries no runtime or socket dependencies so the same validation can sit
//! behind an HTTP endpoint, a queue consumer, or a CLI.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed payloads
//! surface as `BridgeError` so a bad submission can never take the host down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{BridgeError, Result};
