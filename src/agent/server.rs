//! Blocking UDP serving loop for an [`Agent`].

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

use super::Agent;
use crate::protocol::{DEFAULT_PORT, MAX_DATAGRAM_SIZE};
use crate::transport::{SocketBinding, SocketError};

/// Agent configuration options.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,
    /// Receive buffer size; longer datagrams are truncated.
    pub buffer_size: usize,
    /// How often the loop wakes up to check for shutdown.
    pub poll_interval: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            buffer_size: MAX_DATAGRAM_SIZE,
            poll_interval: Duration::from_millis(500),
        }
    }
}

/// An [`Agent`] bound to a UDP socket.
#[derive(Debug)]
pub struct AgentServer {
    agent: Agent,
    socket: SocketBinding,
    buffer: Vec<u8>,
}

impl Agent {
    /// Bind the agent to `config.bind_addr`.
    #[instrument(level = "info", skip(self))]
    pub fn bind(self, config: &AgentConfig) -> Result<AgentServer, SocketError> {
        let socket = SocketBinding::bind(config.bind_addr)?;
        socket.set_read_timeout(Some(config.poll_interval))?;
        info!(addr = %socket.local_addr()?, oids = self.registry().len(), "agent listening");
        for (oid, name) in self.registry().iter() {
            info!(oid, name, "serving OID");
        }
        Ok(AgentServer {
            agent: self,
            socket,
            buffer: vec![0u8; config.buffer_size.max(1)],
        })
    }
}

impl AgentServer {
    /// The wrapped agent.
    #[must_use]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Address the socket is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, SocketError> {
        self.socket.local_addr()
    }

    /// Wait up to one poll interval for a datagram and answer it.
    ///
    /// Returns the peer that was answered, or `None` if nothing arrived.
    #[instrument(level = "trace", skip(self))]
    pub fn serve_once(&mut self) -> Result<Option<SocketAddr>, SocketError> {
        let (len, peer) = match self.socket.recv_from(&mut self.buffer) {
            Ok(received) => received,
            Err(SocketError::TimedOut) => return Ok(None),
            Err(err) => return Err(err),
        };
        let started = Instant::now();
        let metrics = self.agent.metrics();
        metrics.record_received();

        let payload = &self.buffer[..len];
        debug!(%peer, request = %String::from_utf8_lossy(payload).trim(), "received");

        let response = self.agent.handle_datagram(payload);
        let reply = response.to_bytes();
        debug!(%peer, response = %String::from_utf8_lossy(&reply), "sending");

        self.socket.send_to(&reply, peer)?;
        metrics.record_response(response.error_status);
        metrics.record_latency(started.elapsed());
        Ok(Some(peer))
    }

    /// Serve until `shutdown` is set.
    ///
    /// A failure while handling one datagram is logged and the loop continues.
    pub fn serve(&mut self, shutdown: &AtomicBool) {
        while !shutdown.load(Ordering::Relaxed) {
            if let Err(err) = self.serve_once() {
                self.agent.metrics().record_transport_failure();
                warn!(error = %err, "failed to serve datagram");
            }
        }
        let snapshot = self.agent.metrics().snapshot();
        info!(
            received = snapshot.datagrams_received,
            responses = snapshot.responses_sent,
            errors = snapshot.error_responses,
            failures = snapshot.transport_failures,
            avg_latency_us = ?snapshot.avg_handle_latency_us(),
            "agent shutting down"
        );
    }

    /// Serve until the process exits.
    pub fn serve_forever(&mut self) {
        self.serve(&AtomicBool::new(false));
    }
}
