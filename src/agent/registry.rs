//! OID registry: maps each OID to its name and value source

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::sources::{CpuLoad, SystemName, Uptime, ValueSource};
use crate::protocol::STANDARD_OIDS;

/// One registered OID.
#[derive(Clone)]
pub struct OidEntry {
    name: String,
    source: Option<Arc<dyn ValueSource>>,
}

impl OidEntry {
    /// Human-readable name, e.g. `systemName`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the current value, or `None` when no source is attached.
    #[must_use]
    pub fn read(&self) -> Option<String> {
        self.source.as_ref().map(|source| source.read())
    }
}

impl fmt::Debug for OidEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OidEntry")
            .field("name", &self.name)
            .field("has_source", &self.source.is_some())
            .finish()
    }
}

/// Fixed set of OIDs an agent answers for. Read-only once serving starts.
#[derive(Debug, Clone, Default)]
pub struct OidRegistry {
    entries: BTreeMap<String, OidEntry>,
}

impl OidRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry for `1` systemName, `2` uptime and `3` cpu.
    ///
    /// Uptime counts from the moment this is called.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for &(oid, name) in STANDARD_OIDS {
            match name {
                "systemName" => registry.register(oid, name, SystemName),
                "uptime" => registry.register(oid, name, Uptime::new()),
                "cpu" => registry.register(oid, name, CpuLoad),
                _ => registry.register_unimplemented(oid, name),
            };
        }
        registry
    }

    /// Register `oid` with a value source, replacing any earlier entry.
    pub fn register(
        &mut self,
        oid: impl Into<String>,
        name: impl Into<String>,
        source: impl ValueSource + 'static,
    ) -> &mut Self {
        self.entries.insert(
            oid.into(),
            OidEntry {
                name: name.into(),
                source: Some(Arc::new(source)),
            },
        );
        self
    }

    /// Register a name for `oid` without a value source.
    ///
    /// GETs for such an OID are answered with `genErr`.
    pub fn register_unimplemented(
        &mut self,
        oid: impl Into<String>,
        name: impl Into<String>,
    ) -> &mut Self {
        self.entries.insert(
            oid.into(),
            OidEntry {
                name: name.into(),
                source: None,
            },
        );
        self
    }

    /// Look up an OID.
    #[must_use]
    pub fn lookup(&self, oid: &str) -> Option<&OidEntry> {
        self.entries.get(oid)
    }

    /// Iterate `(oid, name)` pairs in OID order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(oid, entry)| (oid.as_str(), entry.name()))
    }

    /// Number of registered OIDs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no OIDs are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry() {
        let registry = OidRegistry::standard();
        let listed: Vec<_> = registry.iter().collect();
        assert_eq!(
            listed,
            [("1", "systemName"), ("2", "uptime"), ("3", "cpu")]
        );
        assert!(registry.lookup("2").unwrap().read().is_some());
        assert!(registry.lookup("4").is_none());
    }

    #[test]
    fn test_register_replaces_entry() {
        let mut registry = OidRegistry::new();
        registry
            .register("7", "first", || "a".to_string())
            .register("7", "second", || "b".to_string());

        assert_eq!(registry.len(), 1);
        let entry = registry.lookup("7").unwrap();
        assert_eq!(entry.name(), "second");
        assert_eq!(entry.read().as_deref(), Some("b"));
    }

    #[test]
    fn test_unimplemented_entry_has_no_value() {
        let mut registry = OidRegistry::new();
        registry.register_unimplemented("9", "memory");
        assert!(!registry.is_empty());
        assert_eq!(registry.lookup("9").unwrap().read(), None);
    }
}
