//! hassbridge gateway library entry.
//!
//! Wires configuration, the statsd client, the service registry, and the
//! HTTP surface into one process. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod ops;
pub mod router;
pub mod services;
pub mod statsd;
pub mod transport;
