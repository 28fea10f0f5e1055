//! Aurum Configuration Module
//!
//! This module provides the RLPx wire constants and the configuration types shared by
//! the network crate and the node binary.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Size of a handshake nonce in bytes
pub const NONCE_LEN: usize = 32;
/// Size of an uncompressed secp256k1 public key without the SEC1 tag (node id)
pub const PUBKEY_LEN: usize = 64;
/// Size of a recoverable ECDSA signature (r || s || v)
pub const SIGNATURE_LEN: usize = 65;
/// Size of an ECDH shared secret (X coordinate)
pub const SHARED_SECRET_LEN: usize = 32;
/// Size of a Keccak-256 digest
pub const HASH_SIZE: usize = 32;

/// Handshake version advertised in auth and ack messages
pub const HANDSHAKE_VERSION: u64 = 4;
/// Largest sealed handshake packet accepted, excluding the 2-byte size prefix
pub const MAX_HANDSHAKE_PACKET: usize = 2048;
/// Minimum amount of zero padding appended to sealed handshake messages
pub const MIN_HANDSHAKE_PADDING: usize = 100;
/// Exclusive upper bound of the zero padding appended to sealed handshake messages
pub const MAX_HANDSHAKE_PADDING: usize = 200;

/// Frame sizes are carried in a 24-bit header field
pub const MAX_FRAME_SIZE: usize = 0xFF_FFFF;

/// Default timeouts
pub const DEFAULT_HANDSHAKE_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_WRITE_TIMEOUT_SECS: u64 = 20;

/// Default listen address of the node
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:30303";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config: failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config: invalid toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config: {0}")]
    Invalid(String),
}

/// RLPx session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RlpxConfig {
    /// Upper bound for the complete auth/ack exchange
    pub handshake_timeout_secs: u64,

    /// Upper bound for reading one frame once the session is established
    pub read_timeout_secs: u64,

    /// Upper bound for writing one frame
    pub write_timeout_secs: u64,

    /// Largest frame body (message code plus payload) accepted or sent
    pub max_frame_size: usize,
}

impl Default for RlpxConfig {
    fn default() -> Self {
        Self {
            handshake_timeout_secs: DEFAULT_HANDSHAKE_TIMEOUT_SECS,
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
            write_timeout_secs: DEFAULT_WRITE_TIMEOUT_SECS,
            max_frame_size: MAX_FRAME_SIZE,
        }
    }
}

impl RlpxConfig {
    /// Creates a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the handshake timeout. Timeouts are kept in whole seconds and a partial
    /// second rounds up, so only `Duration::ZERO` yields an invalid configuration.
    pub fn with_handshake_timeout(mut self, timeout: Duration) -> Self {
        self.handshake_timeout_secs = whole_secs(timeout);
        self
    }

    /// Sets the frame read timeout
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout_secs = whole_secs(timeout);
        self
    }

    /// Sets the frame write timeout
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout_secs = whole_secs(timeout);
        self
    }

    /// Sets the maximum frame size
    pub fn with_max_frame_size(mut self, size: usize) -> Self {
        self.max_frame_size = size;
        self
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.handshake_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.handshake_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "handshake_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.read_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "read_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.write_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "write_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.max_frame_size == 0 || self.max_frame_size > MAX_FRAME_SIZE {
            return Err(ConfigError::Invalid(format!(
                "max_frame_size must be within 1..={MAX_FRAME_SIZE}"
            )));
        }

        Ok(())
    }
}

fn whole_secs(timeout: Duration) -> u64 {
    timeout
        .as_secs()
        .saturating_add(u64::from(timeout.subsec_nanos() > 0))
}

/// Node configuration, usually loaded from a TOML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Listen socket address, like "0.0.0.0:30303"
    pub listen: String,

    /// Hex encoded secp256k1 node key. A fresh key is generated when absent.
    pub node_key: Option<String>,

    /// Log filter directive (trace, debug, info, warn, error)
    pub log_level: String,

    pub rlpx: RlpxConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN_ADDR.to_string(),
            node_key: None,
            log_level: "info".to_string(),
            rlpx: RlpxConfig::default(),
        }
    }
}

impl NodeConfig {
    /// Parses and validates a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: NodeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listen.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "listen is not a socket address: {}",
                self.listen
            )));
        }
        self.rlpx.validate()
    }
}
