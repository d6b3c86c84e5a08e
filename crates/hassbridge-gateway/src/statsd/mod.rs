//! Statsd transport.
//!
//! `MetricSink` is the seam the metric service writes through; the UDP client
//! is the production implementation and tests swap in a recording sink.

pub mod udp;

pub use udp::UdpStatsdClient;

/// Fire-and-forget datagram sink. Must be safe to share across calls.
pub trait MetricSink: Send + Sync {
    /// Attempt to send one datagram. Failures are absorbed by the sink.
    fn emit(&self, datagram: &[u8]);
}
