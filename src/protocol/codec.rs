//! Message codec (encode/decode)
//!
//! Messages are UTF-8 text with fields joined by `|`:
//!
//! ```text
//! SNMP|<version>|<community>|GET|<request-id>|<OID>
//! SNMP|<version>|<community>|RESPONSE|<request-id>|<error-status>|<error-index>|<OID>|<VALUE>
//! ```
//!
//! Fields are not escaped. A field containing `|` shifts every later field,
//! so callers only get a well-framed message when their inputs avoid it.

use super::{ErrorStatus, FIELD_SEPARATOR, PROTOCOL_ID, PduType, RequestId};

/// Encode a single-OID GET request
///
/// No validation is done on `oid` or `request_id`.
#[must_use]
pub fn encode_get_request(
    oid: &str,
    request_id: RequestId,
    version: &str,
    community: &str,
) -> String {
    format!(
        "{PROTOCOL_ID}|{version}|{community}|{}|{request_id}|{oid}",
        PduType::Get
    )
}

/// Encode a successful RESPONSE (error-status and error-index both `0`)
#[must_use]
pub fn encode_response(
    oid: &str,
    value: &str,
    request_id: RequestId,
    version: &str,
    community: &str,
) -> String {
    encode_error(
        oid,
        value,
        request_id,
        version,
        community,
        ErrorStatus::NoError,
        0,
    )
}

/// Encode a RESPONSE carrying an error status and a diagnostic message
#[must_use]
pub fn encode_error(
    oid: &str,
    message: &str,
    request_id: RequestId,
    version: &str,
    community: &str,
    error_status: ErrorStatus,
    error_index: u32,
) -> String {
    format!(
        "{PROTOCOL_ID}|{version}|{community}|{}|{request_id}|{}|{error_index}|{oid}|{message}",
        PduType::Response,
        error_status.code(),
    )
}

/// Split a raw message into its fields
///
/// Surrounding whitespace is trimmed first. This never fails: an empty input
/// yields a single empty field, so callers must check the field count.
#[must_use]
pub fn decode(raw: &str) -> Vec<&str> {
    raw.trim().split(FIELD_SEPARATOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{DEFAULT_COMMUNITY, DEFAULT_VERSION, GET_FIELD_COUNT, RESPONSE_FIELD_COUNT};

    #[test]
    fn test_encode_get_request() {
        let raw = encode_get_request("1", 42, DEFAULT_VERSION, DEFAULT_COMMUNITY);
        assert_eq!(raw, "SNMP|1|public|GET|42|1");
    }

    #[test]
    fn test_encode_response() {
        let raw = encode_response("1", "my-host", 42, "1", "public");
        assert_eq!(raw, "SNMP|1|public|RESPONSE|42|0|0|1|my-host");
    }

    #[test]
    fn test_encode_error() {
        let raw = encode_error(
            "9",
            "Unknown OID",
            7,
            "1",
            "private",
            ErrorStatus::NoSuchName,
            1,
        );
        assert_eq!(raw, "SNMP|1|private|RESPONSE|7|2|1|9|Unknown OID");
    }

    #[test]
    fn test_decode_trims_whitespace() {
        let fields = decode("  SNMP|1|public|GET|3|2\r\n");
        assert_eq!(fields, ["SNMP", "1", "public", "GET", "3", "2"]);
    }

    #[test]
    fn test_decode_empty_input() {
        assert_eq!(decode(""), [""]);
        assert_eq!(decode("   "), [""]);
    }

    #[test]
    fn test_decode_keeps_empty_fields() {
        let fields = decode("SNMP|1|public|RESPONSE|1|0|0|1|");
        assert_eq!(fields.len(), RESPONSE_FIELD_COUNT);
        assert_eq!(fields[8], "");
    }

    #[test]
    fn test_separator_in_value_shifts_framing() {
        let raw = encode_response("1", "a|b", 1, "1", "public");
        let fields = decode(&raw);
        assert_eq!(fields.len(), RESPONSE_FIELD_COUNT + 1);
        assert_eq!(fields[8], "a");
    }

    #[test]
    fn test_decode_get_field_count() {
        let raw = encode_get_request("1.3.6", -4, "2c", "public");
        let fields = decode(&raw);
        assert_eq!(fields.len(), GET_FIELD_COUNT);
        assert_eq!(fields[4], "-4");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn oid_strategy() -> impl Strategy<Value = String> {
            "[0-9]{1,4}(\\.[0-9]{1,4}){0,6}"
        }

        fn token_strategy() -> impl Strategy<Value = String> {
            "[A-Za-z0-9_.-]{1,12}"
        }

        proptest! {
            /// Property: a GET request decodes to exactly its six fields
            #[test]
            fn prop_get_request_fields(
                oid in oid_strategy(),
                request_id in any::<i64>(),
            ) {
                let raw = encode_get_request(&oid, request_id, DEFAULT_VERSION, DEFAULT_COMMUNITY);
                let rid = request_id.to_string();
                let expected = ["SNMP", "1", "public", "GET", rid.as_str(), oid.as_str()];
                prop_assert_eq!(decode(&raw), expected);
            }

            /// Property: a success response has nine fields, status 0, and the value last
            #[test]
            fn prop_response_fields(
                oid in oid_strategy(),
                value in "[A-Za-z0-9_.-]{0,32}",
                request_id in any::<i64>(),
                version in token_strategy(),
                community in token_strategy(),
            ) {
                let raw = encode_response(&oid, &value, request_id, &version, &community);
                let fields = decode(&raw);
                prop_assert_eq!(fields.len(), RESPONSE_FIELD_COUNT);
                prop_assert_eq!(fields[1], version.as_str());
                prop_assert_eq!(fields[2], community.as_str());
                prop_assert_eq!(fields[5], "0");
                prop_assert_eq!(fields[6], "0");
                prop_assert_eq!(fields[7], oid.as_str());
                prop_assert_eq!(fields[8], value.as_str());
            }

            /// Property: decode never panics and always yields at least one field
            #[test]
            fn prop_decode_total(raw in any::<String>()) {
                let fields = decode(&raw);
                prop_assert!(!fields.is_empty());
            }
        }
    }
}
