// Copyright @ 2023 - 2024, Aurum Developers
// All Rights Reserved

//! Cryptographic primitives for the Aurum RLPx transport.
//!
//! secp256k1 keys with ECDH and recoverable signatures, the hash functions used by
//! the handshake, the NIST SP 800-56 concatenation KDF and the ECIES sealed envelope
//! that protects handshake messages.

pub mod ecies;
pub mod error;
pub mod hash;
pub mod kdf;
pub mod key;

pub use ecies::{seal, unseal, ECIES_OVERHEAD};
pub use error::{CryptoError, CryptoResult};
pub use hash::{keccak256, keccak256_concat, sha256};
pub use kdf::concat_kdf;
pub use key::{
    KeyAgreement, KeyPair, PrivateKey, PublicKey, RecoverableSignature, SharedSecret, Signer,
};
