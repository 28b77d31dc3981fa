//! # Connector Transport
//!
//! The seam between the session and the wallet adapter that actually performs
//! the handshake. The session never talks to a wallet extension directly; it
//! drives an implementation of [`ConnectorTransport`] supplied at
//! construction, which keeps the session testable with a mock transport.

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a wallet adapter during handshake or teardown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The user dismissed or rejected the approval prompt.
    #[error("User rejected the connection request")]
    Rejected,

    /// The handshake did not resolve within the configured timeout.
    #[error("Handshake timed out")]
    Timeout,

    /// The wallet adapter for this connector could not be reached (extension
    /// not installed, locked, or unavailable).
    #[error("Wallet adapter not available: {0}")]
    AdapterUnavailable(String),

    /// Any other adapter failure (network error, malformed response).
    #[error("Transport failure: {0}")]
    Failed(String),
}

/// Per-connector handshake and teardown, implemented by the wallet SDK
/// boundary.
///
/// `open` and `close` are the only operations in this crate that may suspend
/// awaiting an external response (the approval popup, an account lookup).
/// `open` must eventually resolve or be bounded by the session's configured
/// timeout.
#[async_trait]
pub trait ConnectorTransport: Send + Sync {
    /// Perform the handshake for `connector_id` and return the account
    /// address it authorized.
    async fn open(&self, connector_id: &str) -> std::result::Result<String, TransportError>;

    /// Tear down the active connection for `connector_id`.
    async fn close(&self, connector_id: &str) -> std::result::Result<(), TransportError>;
}
