//! Manager error types

use thiserror::Error;

use crate::protocol::RequestId;
use crate::transport::SocketError;

/// Reasons a GET round trip can fail. None of these are sent over the wire.
#[derive(Error, Debug)]
pub enum ManagerError {
    /// No reply within the configured timeout
    #[error("Timed out waiting for agent response")]
    Timeout,

    /// Reply had fewer than nine fields
    #[error("Malformed RESPONSE message: {fields:?}")]
    Malformed {
        /// Fields that were received
        fields: Vec<String>,
    },

    /// Reply did not start with the expected protocol id
    #[error("Unexpected protocol: {0}")]
    UnexpectedProtocol(String),

    /// Reply was not a RESPONSE PDU
    #[error("Unexpected PDU type: {0}")]
    UnexpectedPduType(String),

    /// Request-id field was not an integer
    #[error("Invalid request-id in RESPONSE: {0}")]
    InvalidRequestId(String),

    /// Reply answered a different request
    #[error("Mismatched request-id (sent {sent}, got {got})")]
    MismatchedRequestId {
        /// Id the manager sent
        sent: RequestId,
        /// Id found in the reply
        got: RequestId,
    },

    /// Agent answered with a non-zero error status
    #[error("SNMP error (status={status}, index={index}): {message}")]
    Agent {
        /// Raw error-status field
        status: String,
        /// Raw error-index field
        index: String,
        /// Diagnostic from the value field
        message: String,
    },

    /// Socket could not be created, resolved, or used
    #[error("Socket error: {0}")]
    Socket(SocketError),
}

impl From<SocketError> for ManagerError {
    fn from(err: SocketError) -> Self {
        match err {
            SocketError::TimedOut => Self::Timeout,
            other => Self::Socket(other),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ManagerError>;
