//! Built-in catalog of known wallet providers.
//!
//! Supports Phantom, Solflare, Backpack, and Ledger. The catalog only names
//! the providers; whether a given wallet is actually installed is the
//! transport's concern.

use crate::connector::{Connector, StaticRegistry};
use serde::{Deserialize, Serialize};

/// Supported wallet provider types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    Phantom,
    Solflare,
    Backpack,
    Ledger,
}

impl WalletProvider {
    pub const ALL: [WalletProvider; 4] = [
        WalletProvider::Phantom,
        WalletProvider::Solflare,
        WalletProvider::Backpack,
        WalletProvider::Ledger,
    ];

    /// Stable connector id, used as the registry key.
    pub fn id(&self) -> &'static str {
        match self {
            WalletProvider::Phantom => "phantom",
            WalletProvider::Solflare => "solflare",
            WalletProvider::Backpack => "backpack",
            WalletProvider::Ledger => "ledger",
        }
    }

    /// Display label for the UI.
    pub fn name(&self) -> &'static str {
        match self {
            WalletProvider::Phantom => "Phantom",
            WalletProvider::Solflare => "Solflare",
            WalletProvider::Backpack => "Backpack",
            WalletProvider::Ledger => "Ledger",
        }
    }

    pub fn connector(&self) -> Connector {
        Connector::new(self.id(), self.name())
    }
}

/// Registry pre-populated with every known provider, in catalog order.
pub fn builtin_registry() -> StaticRegistry {
    WalletProvider::ALL
        .iter()
        .fold(StaticRegistry::new(), |registry, provider| {
            registry.register(provider.connector())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::ConnectorRegistry;

    #[test]
    fn test_provider_ids_are_unique() {
        let mut ids: Vec<&str> = WalletProvider::ALL.iter().map(|p| p.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), WalletProvider::ALL.len());
    }

    #[test]
    fn test_builtin_registry_contains_all_providers() {
        let registry = builtin_registry();
        assert_eq!(registry.connectors().len(), WalletProvider::ALL.len());
        assert_eq!(
            registry.get("phantom"),
            Some(Connector::new("phantom", "Phantom"))
        );
    }

    #[test]
    fn test_provider_serializes_lowercase() {
        let json = serde_json::to_string(&WalletProvider::Solflare).unwrap();
        assert_eq!(json, "\"solflare\"");
    }
}
