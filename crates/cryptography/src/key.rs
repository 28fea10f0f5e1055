// Copyright @ 2023 - 2024, Aurum Developers
// All Rights Reserved

use std::fmt;
use std::str::FromStr;

use rand::{rngs::OsRng, CryptoRng, RngCore};
use secp256k1::{
    ecdh,
    ecdsa::{RecoverableSignature as Secp256k1Recoverable, RecoveryId},
    Message, SecretKey, SECP256K1,
};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{CryptoError, CryptoResult};

pub const PRIVATE_KEY_SIZE: usize = 32;
/// Uncompressed public key without the 0x04 SEC1 tag.
pub const NODE_ID_SIZE: usize = 64;
pub const SEC1_UNCOMPRESSED_SIZE: usize = 65;
pub const SHARED_SECRET_SIZE: usize = 32;
pub const RECOVERABLE_SIGNATURE_SIZE: usize = 65;

/// Elliptic-curve Diffie-Hellman over the local private key.
pub trait KeyAgreement {
    fn public_key(&self) -> PublicKey;

    /// X coordinate of `private * remote`.
    fn agree(&self, remote: &PublicKey) -> SharedSecret;
}

/// Recoverable ECDSA signing over 32-byte digests.
pub trait Signer {
    fn sign_recoverable(&self, digest: &[u8; 32]) -> RecoverableSignature;
}

/// A secp256k1 private key. The scalar is erased when dropped.
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Generates a key from the operating system RNG.
    pub fn random() -> Self {
        Self::random_with(&mut OsRng)
    }

    pub fn random_with<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut buf = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        loop {
            rng.fill_bytes(&mut buf[..]);
            // Rejects zero and scalars not below the curve order, both negligible.
            if let Ok(key) = SecretKey::from_slice(&buf[..]) {
                return Self(key);
            }
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(CryptoError::InvalidPrivateKey);
        }
        SecretKey::from_slice(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidPrivateKey)
    }

    pub fn from_hex(text: &str) -> CryptoResult<Self> {
        let bytes = Zeroizing::new(hex::decode(text.trim().trim_start_matches("0x"))?);
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        Zeroizing::new(self.0.secret_bytes())
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.public_key(SECP256K1))
    }

    pub fn ecdh(&self, remote: &PublicKey) -> SharedSecret {
        let mut point = ecdh::shared_secret_point(&remote.0, &self.0);
        let mut secret = [0u8; SHARED_SECRET_SIZE];
        secret.copy_from_slice(&point[..SHARED_SECRET_SIZE]);
        point.zeroize();
        SharedSecret(secret)
    }

    pub fn sign_recoverable(&self, digest: &[u8; 32]) -> RecoverableSignature {
        let message = Message::from_digest(*digest);
        let (id, compact) = SECP256K1
            .sign_ecdsa_recoverable(&message, &self.0)
            .serialize_compact();

        let mut out = [0u8; RECOVERABLE_SIGNATURE_SIZE];
        out[..64].copy_from_slice(&compact);
        out[64] = id.to_i32() as u8;
        RecoverableSignature(out)
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.0.non_secure_erase();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"<redacted>").finish()
    }
}

impl KeyAgreement for PrivateKey {
    fn public_key(&self) -> PublicKey {
        PrivateKey::public_key(self)
    }

    fn agree(&self, remote: &PublicKey) -> SharedSecret {
        self.ecdh(remote)
    }
}

impl Signer for PrivateKey {
    fn sign_recoverable(&self, digest: &[u8; 32]) -> RecoverableSignature {
        PrivateKey::sign_recoverable(self, digest)
    }
}

/// A secp256k1 public key.
///
/// On the wire it appears as a 64-byte node id (X || Y); the sealed envelope embeds
/// the 65-byte SEC1 uncompressed form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(secp256k1::PublicKey);

impl PublicKey {
    pub fn from_node_id(id: &[u8]) -> CryptoResult<Self> {
        if id.len() != NODE_ID_SIZE {
            return Err(CryptoError::InvalidPublicKey);
        }
        let mut sec1 = [0u8; SEC1_UNCOMPRESSED_SIZE];
        sec1[0] = 0x04;
        sec1[1..].copy_from_slice(id);
        Self::from_sec1(&sec1)
    }

    /// Parses a compressed (33 bytes) or uncompressed (65 bytes) SEC1 encoding.
    pub fn from_sec1(bytes: &[u8]) -> CryptoResult<Self> {
        secp256k1::PublicKey::from_slice(bytes)
            .map(Self)
            .map_err(|_| CryptoError::InvalidPublicKey)
    }

    pub fn to_node_id(&self) -> [u8; NODE_ID_SIZE] {
        let full = self.0.serialize_uncompressed();
        let mut id = [0u8; NODE_ID_SIZE];
        id.copy_from_slice(&full[1..]);
        id
    }

    pub fn to_sec1_uncompressed(&self) -> [u8; SEC1_UNCOMPRESSED_SIZE] {
        self.0.serialize_uncompressed()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_node_id()))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({self})")
    }
}

impl FromStr for PublicKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim().trim_start_matches("0x"))?;
        Self::from_node_id(&bytes)
    }
}

/// Private key together with its public key.
#[derive(Debug)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    pub fn random() -> Self {
        Self::from_private(PrivateKey::random())
    }

    pub fn from_private(private: PrivateKey) -> Self {
        let public = private.public_key();
        Self { private, public }
    }

    pub fn private(&self) -> &PrivateKey {
        &self.private
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }
}

impl KeyAgreement for KeyPair {
    fn public_key(&self) -> PublicKey {
        self.public
    }

    fn agree(&self, remote: &PublicKey) -> SharedSecret {
        self.private.ecdh(remote)
    }
}

impl Signer for KeyPair {
    fn sign_recoverable(&self, digest: &[u8; 32]) -> RecoverableSignature {
        self.private.sign_recoverable(digest)
    }
}

/// ECDH output. Wiped when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; SHARED_SECRET_SIZE]);

impl SharedSecret {
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedSecret").field(&"<redacted>").finish()
    }
}

/// Recoverable ECDSA signature laid out as r (32) || s (32) || v (1), v in 0..=3.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RecoverableSignature([u8; RECOVERABLE_SIGNATURE_SIZE]);

impl RecoverableSignature {
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let bytes: [u8; RECOVERABLE_SIGNATURE_SIZE] =
            bytes.try_into().map_err(|_| CryptoError::InvalidSignature)?;
        if bytes[64] > 3 {
            return Err(CryptoError::InvalidSignature);
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; RECOVERABLE_SIGNATURE_SIZE] {
        &self.0
    }

    /// Recovers the public key that produced this signature over `digest`.
    pub fn recover(&self, digest: &[u8; 32]) -> CryptoResult<PublicKey> {
        let id = RecoveryId::from_i32(i32::from(self.0[64]))
            .map_err(|_| CryptoError::InvalidSignature)?;
        let signature = Secp256k1Recoverable::from_compact(&self.0[..64], id)
            .map_err(|_| CryptoError::InvalidSignature)?;
        SECP256K1
            .recover_ecdsa(&Message::from_digest(*digest), &signature)
            .map(PublicKey)
            .map_err(|_| CryptoError::InvalidSignature)
    }
}

impl fmt::Debug for RecoverableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecoverableSignature({})", hex::encode(self.0))
    }
}
