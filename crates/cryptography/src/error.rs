// Copyright @ 2023 - 2024, Aurum Developers
// All Rights Reserved

/// Errors returned by key handling, signature recovery and the ECIES envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    #[error("crypto: invalid private key")]
    InvalidPrivateKey,

    #[error("crypto: invalid public key")]
    InvalidPublicKey,

    #[error("crypto: invalid signature")]
    InvalidSignature,

    /// Envelope too short or tag mismatch.
    #[error("ecies: invalid message")]
    InvalidMessage,

    #[error("crypto: invalid hex: {0}")]
    InvalidHex(String),
}

pub type CryptoResult<T> = Result<T, CryptoError>;

impl From<hex::FromHexError> for CryptoError {
    fn from(err: hex::FromHexError) -> Self {
        CryptoError::InvalidHex(err.to_string())
    }
}
