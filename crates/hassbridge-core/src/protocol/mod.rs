//! Protocol modules (inbound service call + outbound statsd line).
//!
//! Inbound: the untyped `data` object a host hands to a registered service,
//! decoded into a typed [`request::MetricRequest`].
//! Outbound: a single dogstatsd gauge line per accepted request.
//!
//! Every step is panic-free; a malformed payload is reported as `BridgeError`
//! and the caller decides whether to log and drop it.

pub mod call;
pub mod request;
pub mod statsd;
pub mod tags;
pub mod value;
