//! # Connection Session
//!
//! Owns the lifecycle of the wallet connection: which connector is active,
//! what state the connection is in, and what account is bound.
//!
//! ## State machine
//!
//! ```text
//! disconnected --connect(id)--> connecting --success--> connected
//!       ^                           |                       |
//!       +--------- failure ---------+                       |
//!       +---------------- disconnect() ---------------------+
//! ```
//!
//! The machine is cyclic and reusable for the lifetime of the process. There
//! is exactly one session per process; `connect` and `disconnect` are the
//! only mutating entry points and the state-machine guard serializes them.
//! A call arriving while a handshake is outstanding is rejected immediately,
//! never queued.
//!
//! ## Observers
//!
//! State is published through a `tokio::sync::watch` channel. The session
//! moves to connecting *before* awaiting the handshake, so subscribers (the
//! UI) can disable further input while the wallet popup is open.

use crate::config::SessionConfig;
use crate::connector::{Connector, ConnectorRegistry};
use crate::error::{Result, SessionError};
use crate::transport::{ConnectorTransport, TransportError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::timeout;

/// Wallet connection status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Not connected
    Disconnected,
    /// Handshake in flight
    Connecting,
    /// Connected with a bound account
    Connected,
}

/// Snapshot of the session published to observers.
///
/// Invariants, enforced by the private constructors:
/// - `account` is present iff `status == Connected`
/// - `active_connector_id` is present iff `status != Disconnected`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub status: SessionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_connector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            status: SessionStatus::Disconnected,
            active_connector_id: None,
            account: None,
        }
    }
}

impl SessionState {
    fn connecting(connector_id: String) -> Self {
        Self {
            status: SessionStatus::Connecting,
            active_connector_id: Some(connector_id),
            account: None,
        }
    }

    fn connected(connector_id: String, account: String) -> Self {
        Self {
            status: SessionStatus::Connected,
            active_connector_id: Some(connector_id),
            account: Some(account),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status == SessionStatus::Connected
    }

    /// Bound account address, if connected.
    pub fn address(&self) -> Option<&str> {
        self.account.as_deref()
    }
}

/// The single mutable record of current wallet-connection state.
///
/// Composes a read-only [`ConnectorRegistry`] with a [`ConnectorTransport`];
/// the enclosing UI only reads the observable state and invokes
/// [`connect`](ConnectionSession::connect) /
/// [`disconnect`](ConnectionSession::disconnect).
pub struct ConnectionSession {
    registry: Arc<dyn ConnectorRegistry>,
    transport: Arc<dyn ConnectorTransport>,
    config: SessionConfig,
    state: watch::Sender<SessionState>,
}

impl ConnectionSession {
    /// Create a session in the disconnected state.
    pub fn new(
        registry: Arc<dyn ConnectorRegistry>,
        transport: Arc<dyn ConnectorTransport>,
        config: SessionConfig,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            registry,
            transport,
            config,
            state,
        }
    }

    /// The registry's current offering, in registry order. Side-effect free.
    pub fn list_connectors(&self) -> Vec<Connector> {
        self.registry.connectors()
    }

    /// Current state snapshot.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Subscribe to state transitions. Every transition is visible to
    /// receivers; the receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Connect through the named connector.
    ///
    /// Fails with [`SessionError::UnknownConnector`] if the id is not in the
    /// registry and [`SessionError::SessionBusy`] if the session is not
    /// disconnected; both leave the state untouched. Otherwise the session
    /// moves to connecting, the transport handshake runs (bounded by the
    /// configured timeout), and the session ends either connected with the
    /// returned account or fully reverted to disconnected with
    /// [`SessionError::ConnectionFailed`].
    pub async fn connect(&self, connector_id: &str) -> Result<()> {
        let connector = self
            .registry
            .get(connector_id)
            .ok_or_else(|| SessionError::UnknownConnector(connector_id.to_string()))?;

        // Atomic check-and-transition: claims the session or rejects the
        // caller without blocking. Once we hold Connecting, no other connect
        // or disconnect can pass its guard until we publish a final state.
        let claimed = self.state.send_if_modified(|state| {
            if state.status == SessionStatus::Disconnected {
                *state = SessionState::connecting(connector.id.clone());
                true
            } else {
                false
            }
        });
        if !claimed {
            return Err(SessionError::SessionBusy);
        }

        tracing::debug!("Opening handshake for connector '{}'", connector.id);

        let opened = match self.config.connect_timeout {
            Some(limit) => match timeout(limit, self.transport.open(&connector.id)).await {
                Ok(result) => result,
                Err(_) => Err(TransportError::Timeout),
            },
            None => self.transport.open(&connector.id).await,
        };

        match opened {
            Ok(account) => {
                tracing::info!("Connector '{}' connected as {}", connector.id, account);
                self.state
                    .send_replace(SessionState::connected(connector.id, account));
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Handshake with '{}' failed: {}", connector.id, err);
                self.state.send_replace(SessionState::default());
                Err(SessionError::ConnectionFailed(err))
            }
        }
    }

    /// Disconnect the active wallet.
    ///
    /// Fails with [`SessionError::NotConnected`] outside the connected state.
    /// Otherwise the session resets to disconnected unconditionally and the
    /// transport teardown runs; a teardown failure is logged and reported as
    /// [`SessionError::DisconnectFailed`] after the reset, never leaving the
    /// session stuck on an unusable transport.
    pub async fn disconnect(&self) -> Result<()> {
        let mut active = None;
        let released = self.state.send_if_modified(|state| {
            if state.status == SessionStatus::Connected {
                active = state.active_connector_id.take();
                *state = SessionState::default();
                true
            } else {
                false
            }
        });
        if !released {
            return Err(SessionError::NotConnected);
        }

        // Invariant: the connected state always carries a connector id.
        let connector_id = match active {
            Some(id) => id,
            None => return Ok(()),
        };

        if let Err(err) = self.transport.close(&connector_id).await {
            tracing::warn!(
                "Teardown for '{}' failed after session reset: {}",
                connector_id,
                err
            );
            return Err(SessionError::DisconnectFailed(err));
        }

        tracing::info!("Connector '{}' disconnected", connector_id);
        Ok(())
    }
}
