//! Top-level facade crate for hassbridge.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use hassbridge_core::*;
}

pub mod gateway {
    pub use hassbridge_gateway::*;
}
