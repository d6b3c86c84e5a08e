//! `rapdev.send_to_datadog`: forward one gauge to the statsd collector.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use hassbridge_core::error::Result;
use hassbridge_core::protocol::call::ServiceCall;
use hassbridge_core::protocol::request::MetricRequest;
use hassbridge_core::protocol::statsd::Gauge;

use crate::config::ResolvedConfig;
use crate::dispatch::ServiceHandler;
use crate::statsd::MetricSink;

pub const DOMAIN: &str = "rapdev";
pub const SERVICE: &str = "send_to_datadog";

pub struct DatadogMetricService {
    cfg: Arc<ResolvedConfig>,
    sink: Arc<dyn MetricSink>,
}

impl DatadogMetricService {
    pub fn new(cfg: Arc<ResolvedConfig>, sink: Arc<dyn MetricSink>) -> Self {
        Self { cfg, sink }
    }

    /// Validate, normalize, and emit. Never fails from the caller's view:
    /// a rejected payload is logged and dropped without sending anything.
    pub fn submit(&self, data: &Map<String, Value>) {
        match prepare(data, &self.cfg) {
            Ok(gauge) => {
                self.sink.emit(&gauge.encode());
                tracing::debug!(
                    metric = %gauge.name,
                    value = gauge.value,
                    tags = ?gauge.tags,
                    "sent metric"
                );
            }
            Err(e) => {
                tracing::warn!(
                    code = e.error_code().as_str(),
                    error = %e,
                    raw = %serde_json::Value::Object(data.clone()),
                    "metric submission dropped"
                );
            }
        }
    }
}

/// Turn a payload into the gauge to send, or the reason it was rejected.
pub fn prepare(data: &Map<String, Value>, cfg: &ResolvedConfig) -> Result<Gauge> {
    MetricRequest::from_data(data)?.into_gauge(&cfg.prefix, cfg.sample_rate)
}

#[async_trait]
impl ServiceHandler for DatadogMetricService {
    fn domain(&self) -> &'static str {
        DOMAIN
    }

    fn service(&self) -> &'static str {
        SERVICE
    }

    async fn call(&self, call: ServiceCall) {
        self.submit(&call.data);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<Vec<u8>>>,
    }

    impl MetricSink for Recorder {
        fn emit(&self, datagram: &[u8]) {
            self.sent.lock().unwrap().push(datagram.to_vec());
        }
    }

    fn service(prefix: &str) -> (DatadogMetricService, Arc<Recorder>) {
        let rec = Arc::new(Recorder::default());
        let cfg = ResolvedConfig {
            host: "localhost".into(),
            port: 8125,
            prefix: prefix.into(),
            sample_rate: 1,
        };
        (DatadogMetricService::new(Arc::new(cfg), rec.clone()), rec)
    }

    fn data(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn valid_payload_sends_exactly_one_datagram() {
        let (svc, rec) = service("hass");
        svc.submit(&data(json!({"metric": "temp", "value": 21.5, "tags": {"room": "kitchen"}})));
        let sent = rec.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], b"hass.temp:21.5|g|#room:kitchen");
    }

    #[test]
    fn rejected_payloads_send_nothing() {
        let (svc, rec) = service("hass");
        svc.submit(&data(json!({"metric": "x", "value": 1, "tags": ["a:1", "bad"]})));
        svc.submit(&data(json!({"metric": "x", "value": "notanumber"})));
        svc.submit(&data(json!({"value": 1})));
        assert!(rec.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn prefix_comes_from_config() {
        let (svc, rec) = service("lab");
        svc.submit(&data(json!({"metric": "humidity", "value": "40"})));
        assert_eq!(rec.sent.lock().unwrap()[0], b"lab.humidity:40|g");
    }
}
