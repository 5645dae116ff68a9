//! Text protocol core
//!
//! This module provides the wire constants, PDU and error-status types, the
//! OID name table, and the codec for the pipe-delimited message format.

mod codec;
mod message;
mod oids;
mod types;

pub use codec::{decode, encode_error, encode_get_request, encode_response};
pub use message::{GetRequest, Response};
pub use oids::{STANDARD_OIDS, oid_name};
pub use types::{ErrorStatus, PduType};

/// Protocol identifier carried in the first field of every message
pub const PROTOCOL_ID: &str = "SNMP";

/// Version string sent when the caller does not pick one
pub const DEFAULT_VERSION: &str = "1";

/// Community string sent when the caller does not pick one
pub const DEFAULT_COMMUNITY: &str = "public";

/// Field separator. Literal separators inside a field are not escaped.
pub const FIELD_SEPARATOR: char = '|';

/// Number of fields in a GET request
pub const GET_FIELD_COUNT: usize = 6;

/// Number of fields in a RESPONSE
pub const RESPONSE_FIELD_COUNT: usize = 9;

/// Default agent UDP port
pub const DEFAULT_PORT: u16 = 16100;

/// Receive buffer size used by both endpoints
pub const MAX_DATAGRAM_SIZE: usize = 4096;

/// Request identifier as carried on the wire
pub type RequestId = i64;
