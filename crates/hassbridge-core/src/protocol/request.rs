//! Typed metric request decoded from a service call payload.
//!
//! Decoding only checks shape (required keys present, tags a mapping or a
//! list of strings). Tag format and value coercion run later in
//! [`MetricRequest::into_gauge`], in that order, so the first problem found
//! is the one reported.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{BridgeError, Result};
use crate::protocol::statsd::{find_framing_char, Gauge};
use crate::protocol::tags::TagSet;
use crate::protocol::value::coerce_value;

/// Payload keys recognised by the metric service.
pub const KEY_METRIC: &str = "metric";
pub const KEY_VALUE: &str = "value";
pub const KEY_TAGS: &str = "tags";

/// One metric submission.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRequest {
    /// Metric name without the configured prefix.
    pub metric: String,
    /// Raw value, coerced to `f64` on conversion.
    pub value: Value,
    /// Optional tags.
    pub tags: Option<TagSet>,
}

impl MetricRequest {
    /// Decode from an untyped service call payload.
    pub fn from_data(data: &Map<String, Value>) -> Result<Self> {
        let metric = match data.get(KEY_METRIC) {
            None | Some(Value::Null) => return Err(BridgeError::MissingField(KEY_METRIC)),
            Some(Value::String(s)) if s.is_empty() => {
                return Err(BridgeError::BadRequest("metric must not be empty".into()))
            }
            Some(Value::String(s)) => {
                check_metric(s)?;
                s.clone()
            }
            Some(other) => {
                return Err(BridgeError::BadRequest(format!("metric must be a string, got {other}")))
            }
        };

        let value = match data.get(KEY_VALUE) {
            None | Some(Value::Null) => return Err(BridgeError::MissingField(KEY_VALUE)),
            Some(v) => v.clone(),
        };

        let tags = match data.get(KEY_TAGS) {
            None | Some(Value::Null) => None,
            Some(raw) => Some(decode_tags(raw)?),
        };

        Ok(Self { metric, value, tags })
    }

    /// Validate tags, coerce the value, and build the gauge to send.
    pub fn into_gauge(self, prefix: &str, sample_rate: u32) -> Result<Gauge> {
        let tags = self.tags.unwrap_or_default().normalize()?;
        let value = coerce_value(&self.value)?;
        Ok(Gauge {
            name: metric_name(prefix, &self.metric),
            value,
            tags,
            sample_rate,
        })
    }
}

/// Emitted metric name: `{prefix}.{metric}`.
pub fn metric_name(prefix: &str, metric: &str) -> String {
    format!("{prefix}.{metric}")
}

/// Reject names that would end the name section early or smuggle another line.
fn check_metric(metric: &str) -> Result<()> {
    let bad = if metric.contains(':') {
        Some(':')
    } else {
        find_framing_char(metric)
    };
    match bad {
        Some(c) => Err(BridgeError::BadRequest(format!(
            "metric {metric:?} contains reserved character {c:?}"
        ))),
        None => Ok(()),
    }
}

fn decode_tags(raw: &Value) -> Result<TagSet> {
    match raw {
        Value::Object(map) => {
            let mut out = BTreeMap::new();
            for (k, v) in map {
                let v = match v {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(BridgeError::InvalidTag(format!("{k}: {other}")));
                    }
                };
                out.insert(k.clone(), v);
            }
            Ok(TagSet::Mapping(out))
        }
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    other => return Err(BridgeError::InvalidTag(other.to_string())),
                }
            }
            Ok(TagSet::Sequence(out))
        }
        other => Err(BridgeError::BadRequest(format!(
            "tags must be a mapping or a list of strings, got {other}"
        ))),
    }
}
