//! Supported OIDs and their human-readable names

/// OIDs served by the standard agent, in listing order
pub const STANDARD_OIDS: &[(&str, &str)] = &[("1", "systemName"), ("2", "uptime"), ("3", "cpu")];

/// Look up the name of a standard OID
#[must_use]
pub fn oid_name(oid: &str) -> Option<&'static str> {
    STANDARD_OIDS
        .iter()
        .find(|(known, _)| *known == oid)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oid_name() {
        assert_eq!(oid_name("1"), Some("systemName"));
        assert_eq!(oid_name("2"), Some("uptime"));
        assert_eq!(oid_name("3"), Some("cpu"));
        assert_eq!(oid_name("4"), None);
        assert_eq!(oid_name(""), None);
    }
}
