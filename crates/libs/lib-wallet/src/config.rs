//! # Session Configuration
//!
//! Configuration loaded from environment variables, validated on startup to
//! fail fast if misconfigured.
//!
//! One knob is exposed: `WALLET_CONNECT_TIMEOUT_SECS` bounds the handshake.
//! When unset, a handshake that never resolves leaves the session in the
//! connecting state indefinitely.

use crate::error::{Result, SessionError};
use std::env;
use std::time::Duration;

/// Session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Optional bound on the connect handshake. On expiry the attempt fails
    /// with a timeout reason and the session reverts to disconnected.
    pub connect_timeout: Option<Duration>,
}

impl SessionConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `WALLET_CONNECT_TIMEOUT_SECS`; absent means no timeout.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let connect_timeout = match env::var("WALLET_CONNECT_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|e| {
                    SessionError::Config(format!(
                        "WALLET_CONNECT_TIMEOUT_SECS must be a valid number: {}",
                        e
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        let config = Self { connect_timeout };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.connect_timeout {
            let secs = timeout.as_secs();
            if !(1..=600).contains(&secs) {
                return Err(SessionError::Config(
                    "WALLET_CONNECT_TIMEOUT_SECS must be between 1 and 600".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        let config = SessionConfig::default();
        assert_eq!(config.connect_timeout, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = SessionConfig {
            connect_timeout: Some(Duration::from_secs(0)),
        };
        assert!(matches!(
            config.validate(),
            Err(SessionError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_excessive_timeout() {
        let config = SessionConfig {
            connect_timeout: Some(Duration::from_secs(601)),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_in_range_timeout() {
        let config = SessionConfig {
            connect_timeout: Some(Duration::from_secs(60)),
        };
        assert!(config.validate().is_ok());
    }
}
