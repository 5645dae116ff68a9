//! SNMPv1-style manager
//!
//! A [`Manager`] performs one blocking GET round trip per call, on a fresh
//! UDP socket, with a fixed receive timeout. There is no retry.

mod error;
mod menu;
mod request_id;

pub use error::{ManagerError, Result};
pub use menu::run_menu;
pub use request_id::RequestIdCounter;

use std::time::Duration;

use tracing::{debug, instrument};

use crate::protocol::{
    DEFAULT_COMMUNITY, DEFAULT_VERSION, ErrorStatus, GetRequest, MAX_DATAGRAM_SIZE, PROTOCOL_ID,
    PduType, RESPONSE_FIELD_COUNT, RequestId, decode,
};
use crate::transport::{SocketBinding, resolve};

/// Receive timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Manager configuration options.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManagerConfig {
    /// Version string sent in requests.
    pub version: String,
    /// Community string sent in requests.
    pub community: String,
    /// How long to wait for the reply.
    pub timeout: Duration,
    /// Receive buffer size.
    pub buffer_size: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            community: DEFAULT_COMMUNITY.to_string(),
            timeout: DEFAULT_TIMEOUT,
            buffer_size: MAX_DATAGRAM_SIZE,
        }
    }
}

/// GET client owning its request-id counter.
#[derive(Debug, Default)]
pub struct Manager {
    config: ManagerConfig,
    request_ids: RequestIdCounter,
}

impl Manager {
    /// Manager using `config`.
    #[must_use]
    pub fn new(config: ManagerConfig) -> Self {
        Self {
            config,
            request_ids: RequestIdCounter::new(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Allocate the id for the next request.
    pub fn next_request_id(&self) -> RequestId {
        self.request_ids.next()
    }

    /// GET the value of `oid` from the agent at `host:port`.
    ///
    /// Returns the value field on success. Any transport, framing,
    /// validation, or agent-reported error is returned as [`ManagerError`].
    #[instrument(level = "debug", skip(self))]
    pub fn send_get_request(&self, oid: &str, host: &str, port: u16) -> Result<String> {
        let request_id = self.next_request_id();
        let request = GetRequest::new(oid, request_id)
            .with_header(self.config.version.as_str(), self.config.community.as_str());

        let target = resolve(host, port)?;
        let socket = SocketBinding::bind_ephemeral_for(target)?;
        socket.set_read_timeout(Some(self.config.timeout))?;

        let payload = request.to_bytes();
        debug!(%target, request = %request.encode(), "sending GET");
        socket.send_to(&payload, target)?;

        let mut buffer = vec![0u8; self.config.buffer_size.max(1)];
        let (len, from) = socket.recv_from(&mut buffer)?;
        let reply = String::from_utf8_lossy(&buffer[..len]);
        debug!(%from, response = %reply.trim(), "received");

        validate_response(&reply, request_id)
    }
}

/// Validate a raw RESPONSE against the id that was sent and extract its value.
pub fn validate_response(raw: &str, request_id: RequestId) -> Result<String> {
    let fields = decode(raw);
    if fields.len() < RESPONSE_FIELD_COUNT {
        return Err(ManagerError::Malformed {
            fields: fields.into_iter().map(str::to_string).collect(),
        });
    }

    let protocol_id = fields[0];
    let pdu_type = fields[3];
    let reply_id = fields[4];
    let error_status = fields[5];
    let error_index = fields[6];
    let value = fields[8];

    if protocol_id != PROTOCOL_ID {
        return Err(ManagerError::UnexpectedProtocol(protocol_id.to_string()));
    }
    if PduType::parse(pdu_type) != Some(PduType::Response) {
        return Err(ManagerError::UnexpectedPduType(pdu_type.to_string()));
    }

    let got = reply_id
        .trim()
        .parse::<RequestId>()
        .map_err(|_| ManagerError::InvalidRequestId(reply_id.to_string()))?;
    if got != request_id {
        return Err(ManagerError::MismatchedRequestId {
            sent: request_id,
            got,
        });
    }

    if error_status != ErrorStatus::NoError.code().to_string() {
        return Err(ManagerError::Agent {
            status: error_status.to_string(),
            index: error_index.to_string(),
            message: value.to_string(),
        });
    }

    Ok(value.to_string())
}
