//! Typed GET request and RESPONSE messages

use bytes::Bytes;

use super::{
    DEFAULT_COMMUNITY, DEFAULT_VERSION, ErrorStatus, RequestId, encode_error, encode_get_request,
};

/// Single-OID GET request
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GetRequest {
    /// Protocol version string
    pub version: String,
    /// Community string
    pub community: String,
    /// Identifier echoed back by the agent
    pub request_id: RequestId,
    /// Object identifier to read
    pub oid: String,
}

impl GetRequest {
    /// Create a request with the default version and community
    pub fn new(oid: impl Into<String>, request_id: RequestId) -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            community: DEFAULT_COMMUNITY.to_string(),
            request_id,
            oid: oid.into(),
        }
    }

    /// Override the version and community
    #[must_use]
    pub fn with_header(mut self, version: impl Into<String>, community: impl Into<String>) -> Self {
        self.version = version.into();
        self.community = community.into();
        self
    }

    /// Encode to the wire text
    #[must_use]
    pub fn encode(&self) -> String {
        encode_get_request(&self.oid, self.request_id, &self.version, &self.community)
    }

    /// Encode to a datagram payload
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(self.encode())
    }
}

/// RESPONSE message, either a value or an error diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Response {
    /// Protocol version string
    pub version: String,
    /// Community string
    pub community: String,
    /// Identifier of the request this answers
    pub request_id: RequestId,
    /// Outcome of the request
    pub error_status: ErrorStatus,
    /// 1-based index of the failing variable, 0 when not applicable
    pub error_index: u32,
    /// Object identifier the response refers to
    pub oid: String,
    /// Queried value on success, human-readable message otherwise
    pub value: String,
}

impl Response {
    /// Successful response carrying `value`
    pub fn success(
        version: impl Into<String>,
        community: impl Into<String>,
        request_id: RequestId,
        oid: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            community: community.into(),
            request_id,
            error_status: ErrorStatus::NoError,
            error_index: 0,
            oid: oid.into(),
            value: value.into(),
        }
    }

    /// Error response carrying a diagnostic `message`
    pub fn error(
        version: impl Into<String>,
        community: impl Into<String>,
        request_id: RequestId,
        oid: impl Into<String>,
        error_status: ErrorStatus,
        error_index: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            community: community.into(),
            request_id,
            error_status,
            error_index,
            oid: oid.into(),
            value: message.into(),
        }
    }

    /// Whether the value field holds real data
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error_status.is_success()
    }

    /// Encode to the wire text
    #[must_use]
    pub fn encode(&self) -> String {
        encode_error(
            &self.oid,
            &self.value,
            self.request_id,
            &self.version,
            &self.community,
            self.error_status,
            self.error_index,
        )
    }

    /// Encode to a datagram payload
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::encode_response;

    #[test]
    fn test_get_request_defaults() {
        let request = GetRequest::new("3", 9);
        assert_eq!(request.encode(), "SNMP|1|public|GET|9|3");
        assert_eq!(request.to_bytes().as_ref(), b"SNMP|1|public|GET|9|3");
    }

    #[test]
    fn test_get_request_custom_header() {
        let request = GetRequest::new("1", 2).with_header("2c", "private");
        assert_eq!(request.encode(), "SNMP|2c|private|GET|2|1");
    }

    #[test]
    fn test_success_matches_encode_response() {
        let response = Response::success("1", "public", 5, "2", "120");
        assert!(response.is_success());
        assert_eq!(response.encode(), encode_response("2", "120", 5, "1", "public"));
    }

    #[test]
    fn test_error_response_encoding() {
        let response = Response::error("1", "public", 5, "0", ErrorStatus::GenErr, 0, "boom");
        assert!(!response.is_success());
        assert_eq!(response.encode(), "SNMP|1|public|RESPONSE|5|5|0|0|boom");
    }
}
