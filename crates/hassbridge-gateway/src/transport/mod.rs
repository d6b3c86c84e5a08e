//! Transport layer (HTTP service calls).
//!
//! Exposes the service-call endpoint and the codec that turns a request body
//! into a `ServiceCall` before it reaches the dispatcher.

pub mod codec;
pub mod http;
