//! Connected UDP client for a statsd collector.

use std::net::SocketAddr;

use tokio::net::{lookup_host, UdpSocket};

use hassbridge_core::error::{BridgeError, Result};

use super::MetricSink;
use crate::config::ResolvedConfig;

pub struct UdpStatsdClient {
    peer: SocketAddr,
    socket: UdpSocket,
}

impl UdpStatsdClient {
    /// Resolve `host:port` once and connect an ephemeral socket to it.
    pub async fn connect(cfg: &ResolvedConfig) -> Result<Self> {
        let target = format!("{}:{}", cfg.host, cfg.port);
        let peer = lookup_host(&target)
            .await
            .map_err(|e| BridgeError::Config(format!("resolve statsd host {target} failed: {e}")))?
            .next()
            .ok_or_else(|| BridgeError::Config(format!("statsd host {target} has no address")))?;

        let bind: SocketAddr = if peer.is_ipv4() {
            ([0, 0, 0, 0], 0).into()
        } else {
            ([0u16; 8], 0).into()
        };
        let socket = UdpSocket::bind(bind)
            .await
            .map_err(|e| BridgeError::Internal(format!("bind statsd socket failed: {e}")))?;
        socket
            .connect(peer)
            .await
            .map_err(|e| BridgeError::Internal(format!("connect statsd socket failed: {e}")))?;

        tracing::info!(%peer, "statsd client ready");
        Ok(Self { peer, socket })
    }
}

impl MetricSink for UdpStatsdClient {
    fn emit(&self, datagram: &[u8]) {
        // try_send never waits; a full buffer or unreachable collector just drops the datagram.
        if let Err(e) = self.socket.try_send(datagram) {
            tracing::debug!(peer = %self.peer, error = %e, "statsd send failed");
        }
    }
}
