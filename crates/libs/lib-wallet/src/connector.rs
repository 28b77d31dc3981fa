//! # Connectors and the Connector Registry
//!
//! A connector is one installed wallet integration (Phantom, Solflare, ...).
//! The registry enumerates the connectors available to the session; the
//! session treats it as read-only and consults it only at `connect` time.

use serde::{Deserialize, Serialize};

/// One wallet integration point, identified by a unique id with a display
/// label for the UI. Immutable once registered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connector {
    pub id: String,
    pub name: String,
}

impl Connector {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Read-only enumeration of available connectors.
///
/// Implementations must return connectors in a stable order (registration
/// order for [`StaticRegistry`]). The session never mutates the registry.
pub trait ConnectorRegistry: Send + Sync {
    /// All available connectors, in registry order.
    fn connectors(&self) -> Vec<Connector>;

    /// Look up a connector by id.
    fn get(&self, id: &str) -> Option<Connector> {
        self.connectors().into_iter().find(|c| c.id == id)
    }
}

/// A fixed, registration-ordered connector list.
///
/// Covers the common case where the available wallets are known at startup.
/// Duplicate ids are ignored; the first registration wins.
#[derive(Clone, Debug, Default)]
pub struct StaticRegistry {
    connectors: Vec<Connector>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connector, preserving registration order.
    pub fn register(mut self, connector: Connector) -> Self {
        if self.connectors.iter().any(|c| c.id == connector.id) {
            tracing::debug!("Ignoring duplicate connector registration: {}", connector.id);
            return self;
        }
        self.connectors.push(connector);
        self
    }
}

impl ConnectorRegistry for StaticRegistry {
    fn connectors(&self) -> Vec<Connector> {
        self.connectors.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_is_preserved() {
        let registry = StaticRegistry::new()
            .register(Connector::new("phantom", "Phantom"))
            .register(Connector::new("solflare", "Solflare"))
            .register(Connector::new("backpack", "Backpack"));

        let ids: Vec<String> = registry.connectors().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["phantom", "solflare", "backpack"]);
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = StaticRegistry::new()
            .register(Connector::new("phantom", "Phantom"))
            .register(Connector::new("solflare", "Solflare"));

        assert_eq!(
            registry.get("solflare"),
            Some(Connector::new("solflare", "Solflare"))
        );
        assert_eq!(registry.get("ledger"), None);
    }

    #[test]
    fn test_duplicate_id_keeps_first_registration() {
        let registry = StaticRegistry::new()
            .register(Connector::new("phantom", "Phantom"))
            .register(Connector::new("phantom", "Phantom (duplicate)"));

        let connectors = registry.connectors();
        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].name, "Phantom");
    }
}
