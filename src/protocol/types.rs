//! PDU types and SNMPv1 error-status codes

use std::fmt;

/// PDU types understood by this protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PduType {
    /// Single-OID read request
    Get,
    /// Reply to a GET, success or error
    Response,
}

impl PduType {
    /// Wire token for this PDU type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Response => "RESPONSE",
        }
    }

    /// Parse a wire token. Matching is case-sensitive.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "GET" => Some(Self::Get),
            "RESPONSE" => Some(Self::Response),
            _ => None,
        }
    }
}

impl fmt::Display for PduType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SNMPv1 error-status codes (RFC 1157)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ErrorStatus {
    /// Success; the value field holds data
    #[default]
    NoError = 0,
    /// Response would not fit in a message
    TooBig = 1,
    /// OID is not known to the agent
    NoSuchName = 2,
    /// Value has the wrong type or range
    BadValue = 3,
    /// Attempt to write a read-only object
    ReadOnly = 4,
    /// Any other failure
    GenErr = 5,
}

impl ErrorStatus {
    /// Convert from a numeric code
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::NoError),
            1 => Some(Self::TooBig),
            2 => Some(Self::NoSuchName),
            3 => Some(Self::BadValue),
            4 => Some(Self::ReadOnly),
            5 => Some(Self::GenErr),
            _ => None,
        }
    }

    /// Numeric code written to the wire
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether this status signals success
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::NoError)
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoError => "noError",
            Self::TooBig => "tooBig",
            Self::NoSuchName => "noSuchName",
            Self::BadValue => "badValue",
            Self::ReadOnly => "readOnly",
            Self::GenErr => "genErr",
        };
        write!(f, "{name}")
    }
}
