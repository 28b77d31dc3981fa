//! # Centralized Error Handling
//!
//! This module defines the error type [`SessionError`] used across the wallet
//! session crate. It follows the `thiserror` pattern for ergonomic error
//! handling.
//!
//! ## Error Categories
//!
//! 1. **Caller Errors** - Bad input or a call made in the wrong state
//!    - [`UnknownConnector`](SessionError::UnknownConnector) - the id names no
//!      registered connector
//!    - [`SessionBusy`](SessionError::SessionBusy) - `connect` while a
//!      handshake is in flight or a wallet is already connected
//!    - [`NotConnected`](SessionError::NotConnected) - `disconnect` outside
//!      the connected state
//!
//! 2. **Transport Errors** - Failures reported by the wallet adapter
//!    - [`ConnectionFailed`](SessionError::ConnectionFailed) - handshake
//!      failure, user rejection, or timeout; the session has already reverted
//!      to disconnected
//!    - [`DisconnectFailed`](SessionError::DisconnectFailed) - teardown
//!      failure; reported only after the session has been reset, so the
//!      caller may safely ignore it
//!
//! 3. **Startup Errors**
//!    - [`Config`](SessionError::Config) - invalid environment configuration
//!
//! Every error resolves to a well-defined session state. Nothing in this
//! crate is fatal to the process.

use crate::transport::TransportError;
use thiserror::Error;

/// Convenience type alias for `Result<T, SessionError>`.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Error type covering every failure mode of the wallet session.
///
/// Each variant carries enough context to render a user-facing message. The
/// `#[error]` attribute from `thiserror` provides the `Display`
/// implementation.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The connector id passed to `connect` is not in the registry.
    #[error("Unknown connector: {0}")]
    UnknownConnector(String),

    /// A connection attempt is already in flight, or a wallet is already
    /// connected. At most one attempt may be outstanding; calls are rejected
    /// immediately rather than queued.
    #[error("Session busy: a connection attempt is in flight or a wallet is already connected")]
    SessionBusy,

    /// The transport handshake failed. The session has reverted to
    /// disconnected before this error is returned.
    #[error("Connection failed: {0}")]
    ConnectionFailed(TransportError),

    /// `disconnect` was called while no wallet was connected.
    #[error("No wallet connected")]
    NotConnected,

    /// The transport teardown failed. The session was reset to disconnected
    /// regardless; this error is informational.
    #[error("Disconnect failed: {0}")]
    DisconnectFailed(TransportError),
}
