//! Built-in services.

pub mod datadog_metric;

pub use datadog_metric::DatadogMetricService;
