//! Dispatcher module exports.
//!
//! Re-exports the service registry and handler trait so downstream consumers
//! can depend on this module directly.

pub mod dispatcher;

pub use dispatcher::{Dispatcher, ServiceHandler};
