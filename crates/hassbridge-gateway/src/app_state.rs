//! Shared application state for the bridge.
//!
//! Built once at startup: resolved collector settings, the statsd sink, and a
//! dispatcher with the built-in services registered.

use std::sync::Arc;

use hassbridge_core::error::Result;

use crate::config::{BridgeConfig, ResolvedConfig};
use crate::dispatch::Dispatcher;
use crate::services::DatadogMetricService;
use crate::statsd::{MetricSink, UdpStatsdClient};

#[derive(Clone)]
pub struct AppState {
    statsd: Arc<ResolvedConfig>,
    dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Resolve the collector, connect the UDP client, and register services.
    /// Any failure here is fatal to startup.
    pub async fn new(cfg: &BridgeConfig) -> Result<Self> {
        let resolved = cfg.statsd.resolve()?;
        let client = UdpStatsdClient::connect(&resolved).await?;
        Ok(Self::with_sink(resolved, Arc::new(client)))
    }

    /// Build state around an existing sink.
    pub fn with_sink(resolved: ResolvedConfig, sink: Arc<dyn MetricSink>) -> Self {
        let statsd = Arc::new(resolved);
        let dispatcher = Dispatcher::new();

        dispatcher.register(Arc::new(DatadogMetricService::new(Arc::clone(&statsd), sink)));

        Self {
            statsd,
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub fn statsd(&self) -> &ResolvedConfig {
        &self.statsd
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }
}
