//! Service call envelope handed over by the automation host.

use serde_json::{Map, Value};

/// One invocation of a registered service.
#[derive(Debug, Clone)]
pub struct ServiceCall {
    /// Integration domain (e.g., "rapdev").
    pub domain: String,
    /// Service name within the domain (e.g., "send_to_datadog").
    pub service: String,
    /// Untyped payload, validated by the handler itself.
    pub data: Map<String, Value>,
}

impl ServiceCall {
    pub fn new(domain: impl Into<String>, service: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            domain: domain.into(),
            service: service.into(),
            data,
        }
    }

    /// Registry key, `domain.service`.
    pub fn qualified_name(&self) -> String {
        qualified_name(&self.domain, &self.service)
    }
}

pub fn qualified_name(domain: &str, service: &str) -> String {
    format!("{domain}.{service}")
}
