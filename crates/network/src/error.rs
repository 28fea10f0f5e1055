//! Error types for RLPx operations.

use std::time::Duration;

use aurum_config::ConfigError;
use aurum_cryptography::CryptoError;
use thiserror::Error;

use crate::handshake::HandshakeState;

/// Errors raised while exchanging or processing the auth/ack packets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandshakeError {
    /// Envelope, key or signature failure.
    #[error("handshake: {0}")]
    Crypto(#[from] CryptoError),

    #[error("handshake: rlp decode failed: {0}")]
    Rlp(#[from] alloy_rlp::Error),

    #[error("handshake: invalid {kind} packet: {reason}")]
    InvalidPacket {
        kind: &'static str,
        reason: &'static str,
    },

    #[error("handshake: packet of {size} bytes exceeds limit of {max}")]
    PacketTooLarge { size: usize, max: usize },

    #[error("handshake: unexpected {operation} in state {state}")]
    Unexpected {
        operation: &'static str,
        state: HandshakeState,
    },

    #[error("handshake: already failed")]
    Failed,
}

impl HandshakeError {
    pub(crate) fn invalid_packet(kind: &'static str, reason: &'static str) -> Self {
        Self::InvalidPacket { kind, reason }
    }
}

/// Errors raised by the frame codec once the session is established.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame: header mac mismatch")]
    HeaderMacMismatch,

    #[error("frame: body mac mismatch")]
    BodyMacMismatch,

    #[error("frame: size {size} exceeds limit of {max}")]
    TooLarge { size: usize, max: usize },

    #[error("frame: invalid message code: {0}")]
    InvalidMessageCode(alloy_rlp::Error),

    /// A previous frame failed; the cipher and MAC streams are out of sync.
    #[error("frame: session poisoned by an earlier failure")]
    Poisoned,
}

/// Errors that can occur during RLPx operations.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error(transparent)]
    Handshake(#[from] HandshakeError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error("rlpx: {operation} timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    #[error("rlpx: connection closed by peer")]
    Closed,

    #[error("rlpx: io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("rlpx: {0}")]
    Config(#[from] ConfigError),
}

impl NetworkError {
    pub(crate) fn timeout(operation: &'static str, timeout: Duration) -> Self {
        Self::Timeout { operation, timeout }
    }

    /// True for integrity failures: envelope tags, signatures and frame MACs.
    pub fn is_crypto_failure(&self) -> bool {
        matches!(
            self,
            NetworkError::Handshake(HandshakeError::Crypto(_))
                | NetworkError::Frame(FrameError::HeaderMacMismatch | FrameError::BodyMacMismatch)
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, NetworkError::Timeout { .. })
    }
}

/// Result type for RLPx operations.
pub type NetworkResult<T> = std::result::Result<T, NetworkError>;
