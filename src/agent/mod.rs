//! SNMPv1-style agent
//!
//! [`Agent`] turns one request message into one RESPONSE. It never fails:
//! framing, protocol and lookup problems all become error responses.
//! [`AgentServer`] wraps it in a blocking UDP receive loop.

mod metrics;
mod registry;
mod server;
mod sources;

pub use metrics::{AgentMetrics, MetricsSnapshot};
pub use registry::{OidEntry, OidRegistry};
pub use server::{AgentConfig, AgentServer};
pub use sources::{CpuLoad, SystemName, Uptime, ValueSource};

use tracing::debug;

use crate::protocol::{
    DEFAULT_COMMUNITY, DEFAULT_VERSION, ErrorStatus, PROTOCOL_ID, PduType, RequestId, Response,
    decode,
};

/// Message returned when a request has fewer than six fields.
pub const MALFORMED_MESSAGE: &str = "Malformed message (too few fields)";

/// Message returned when a datagram is not valid UTF-8.
pub const INVALID_UTF8_MESSAGE: &str = "Malformed message (invalid UTF-8)";

/// Request handler backed by an [`OidRegistry`].
#[derive(Debug, Default)]
pub struct Agent {
    registry: OidRegistry,
    metrics: AgentMetrics,
}

impl Agent {
    /// Agent answering for the OIDs in `registry`.
    #[must_use]
    pub fn new(registry: OidRegistry) -> Self {
        Self {
            registry,
            metrics: AgentMetrics::new(),
        }
    }

    /// Agent with the standard systemName/uptime/cpu registry.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(OidRegistry::standard())
    }

    /// Registered OIDs.
    #[must_use]
    pub fn registry(&self) -> &OidRegistry {
        &self.registry
    }

    /// Counters updated by the serving loop.
    #[must_use]
    pub fn metrics(&self) -> &AgentMetrics {
        &self.metrics
    }

    /// Handle one raw request and return the encoded RESPONSE.
    #[must_use]
    pub fn handle_message(&self, raw: &str) -> String {
        self.respond(raw).encode()
    }

    /// Handle one datagram payload.
    ///
    /// Payloads that are not UTF-8 are answered with a generic `genErr`.
    #[must_use]
    pub fn handle_datagram(&self, payload: &[u8]) -> Response {
        match std::str::from_utf8(payload) {
            Ok(raw) => self.respond(raw),
            Err(_) => generic_error(INVALID_UTF8_MESSAGE),
        }
    }

    /// Handle one raw request and return the typed RESPONSE.
    #[must_use]
    pub fn respond(&self, raw: &str) -> Response {
        let fields = decode(raw);
        let [protocol_id, version, community, pdu_type, request_id, oid, ..] = fields[..] else {
            debug!(fields = fields.len(), "request has too few fields");
            return generic_error(MALFORMED_MESSAGE);
        };

        let request_id = request_id.trim().parse::<RequestId>().unwrap_or(0);

        if protocol_id != PROTOCOL_ID {
            return Response::error(
                version,
                community,
                request_id,
                oid,
                ErrorStatus::GenErr,
                0,
                format!("Unsupported protocol: {protocol_id}"),
            );
        }

        match PduType::parse(pdu_type) {
            Some(PduType::Get) => self.get(oid, request_id, version, community),
            _ => Response::error(
                version,
                community,
                request_id,
                oid,
                ErrorStatus::GenErr,
                0,
                format!("Unsupported PDU type: {pdu_type}"),
            ),
        }
    }

    fn get(&self, oid: &str, request_id: RequestId, version: &str, community: &str) -> Response {
        let Some(entry) = self.registry.lookup(oid) else {
            return Response::error(
                version,
                community,
                request_id,
                oid,
                ErrorStatus::NoSuchName,
                1,
                "Unknown OID",
            );
        };

        match entry.read() {
            Some(value) => {
                debug!(oid, name = entry.name(), %value, "GET served");
                Response::success(version, community, request_id, oid, value)
            }
            None => Response::error(
                version,
                community,
                request_id,
                oid,
                ErrorStatus::GenErr,
                1,
                "OID handler not implemented",
            ),
        }
    }
}

/// Error response used when the request header cannot be trusted.
fn generic_error(message: &str) -> Response {
    Response::error(
        DEFAULT_VERSION,
        DEFAULT_COMMUNITY,
        0,
        "0",
        ErrorStatus::GenErr,
        0,
        message,
    )
}
