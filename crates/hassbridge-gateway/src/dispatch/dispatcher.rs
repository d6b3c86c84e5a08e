use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use hassbridge_core::error::{BridgeError, Result};
use hassbridge_core::protocol::call::{qualified_name, ServiceCall};

/// A named entry point the host can invoke with untyped data.
///
/// `call` returns nothing: a handler owns its failures and must never let a
/// single bad payload reach the caller.
#[async_trait]
pub trait ServiceHandler: Send + Sync {
    fn domain(&self) -> &'static str;
    fn service(&self) -> &'static str;
    async fn call(&self, call: ServiceCall);
}

/// Registry of service handlers keyed by `domain.service`.
#[derive(Default)]
pub struct Dispatcher {
    services: DashMap<String, Arc<dyn ServiceHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    pub fn register(&self, handler: Arc<dyn ServiceHandler>) {
        let name = qualified_name(handler.domain(), handler.service());
        if self.services.insert(name.clone(), handler).is_some() {
            tracing::warn!(service = %name, "service re-registered, previous handler replaced");
        } else {
            tracing::info!(service = %name, "service registered");
        }
    }

    pub fn contains(&self, domain: &str, service: &str) -> bool {
        self.services.contains_key(&qualified_name(domain, service))
    }

    /// Registered services grouped by domain, both sorted.
    pub fn registered_services(&self) -> BTreeMap<String, Vec<String>> {
        let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for e in self.services.iter() {
            out.entry(e.value().domain().to_string())
                .or_default()
                .push(e.value().service().to_string());
        }
        for services in out.values_mut() {
            services.sort();
        }
        out
    }

    pub async fn dispatch(&self, call: ServiceCall) -> Result<()> {
        let name = call.qualified_name();
        let handler = self
            .services
            .get(&name)
            .ok_or_else(|| BridgeError::UnknownService(name.clone()))?
            .value()
            .clone();
        handler.call(call).await;
        Ok(())
    }
}
