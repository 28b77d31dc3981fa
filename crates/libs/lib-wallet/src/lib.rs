//! # lib-wallet
//!
//! Wallet-connector session management for the Predmarket app.
//!
//! The UI reads one observable state and dispatches two commands; everything
//! between those commands and the wallet adapters lives here:
//!
//! - [`session::ConnectionSession`] - the single session per process: state
//!   machine, transition guards, and the watch channel observers subscribe to
//! - [`connector`] - connector identity and the read-only registry seam
//! - [`transport`] - the handshake/teardown seam implemented by the wallet
//!   SDK boundary
//! - [`providers`] - built-in catalog of known wallet providers
//! - [`config`] - environment-driven configuration (handshake timeout)
//! - [`error`] - crate-wide error type
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lib_wallet::config::SessionConfig;
//! use lib_wallet::providers::builtin_registry;
//! use lib_wallet::session::ConnectionSession;
//! # use lib_wallet::transport::{ConnectorTransport, TransportError};
//! # struct SdkTransport;
//! # #[async_trait::async_trait]
//! # impl ConnectorTransport for SdkTransport {
//! #     async fn open(&self, _: &str) -> Result<String, TransportError> { unimplemented!() }
//! #     async fn close(&self, _: &str) -> Result<(), TransportError> { unimplemented!() }
//! # }
//!
//! # async fn run() -> lib_wallet::error::Result<()> {
//! let session = ConnectionSession::new(
//!     Arc::new(builtin_registry()),
//!     Arc::new(SdkTransport),
//!     SessionConfig::from_env()?,
//! );
//!
//! let mut updates = session.subscribe();
//! session.connect("phantom").await?;
//! println!("connected as {:?}", session.state().address());
//! session.disconnect().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod connector;
pub mod error;
pub mod providers;
pub mod session;
pub mod transport;

pub use config::SessionConfig;
pub use connector::{Connector, ConnectorRegistry, StaticRegistry};
pub use error::{Result, SessionError};
pub use providers::WalletProvider;
pub use session::{ConnectionSession, SessionState, SessionStatus};
pub use transport::{ConnectorTransport, TransportError};
