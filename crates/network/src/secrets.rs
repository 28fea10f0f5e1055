// Copyright @ 2023 - 2024, Aurum Developers
// All Rights Reserved

use std::fmt;

use aurum_config::NONCE_LEN;
use aurum_cryptography::{keccak256_concat, PublicKey, SharedSecret};
use sha3::{Digest, Keccak256};
use zeroize::Zeroize;

use crate::handshake::HandshakeRole;

pub const SECRET_LEN: usize = 32;

/// Session secrets produced by a completed handshake.
///
/// `egress_mac` and `ingress_mac` are running Keccak-256 states already seeded with
/// the handshake transcript. They must mirror the peer's ingress and egress states.
pub struct Secrets {
    pub remote_id: PublicKey,
    pub aes: [u8; SECRET_LEN],
    pub mac: [u8; SECRET_LEN],
    pub egress_mac: Keccak256,
    pub ingress_mac: Keccak256,
}

impl Secrets {
    /// Derives the session secrets from the ephemeral ECDH secret, both nonces and the
    /// auth and ack packets exactly as they crossed the wire.
    pub(crate) fn derive(
        role: HandshakeRole,
        remote_id: PublicKey,
        ephemeral_shared: &SharedSecret,
        initiator_nonce: &[u8; NONCE_LEN],
        responder_nonce: &[u8; NONCE_LEN],
        auth_wire: &[u8],
        ack_wire: &[u8],
    ) -> Self {
        let es = &ephemeral_shared.as_bytes()[..];
        let nonce_hash = keccak256_concat(&[&responder_nonce[..], &initiator_nonce[..]]);
        let mut shared = keccak256_concat(&[es, &nonce_hash[..]]);
        let aes = keccak256_concat(&[es, &shared[..]]);
        let mac = keccak256_concat(&[es, &aes[..]]);
        shared.zeroize();

        let mut auth_mac = Keccak256::new();
        auth_mac.update(xor(&mac, responder_nonce));
        auth_mac.update(auth_wire);

        let mut ack_mac = Keccak256::new();
        ack_mac.update(xor(&mac, initiator_nonce));
        ack_mac.update(ack_wire);

        let (egress_mac, ingress_mac) = match role {
            HandshakeRole::Initiator => (auth_mac, ack_mac),
            HandshakeRole::Responder => (ack_mac, auth_mac),
        };

        Self {
            remote_id,
            aes,
            mac,
            egress_mac,
            ingress_mac,
        }
    }
}

pub(crate) fn xor(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        *o = x ^ y;
    }
    out
}

impl Drop for Secrets {
    fn drop(&mut self) {
        self.aes.zeroize();
        self.mac.zeroize();
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("remote_id", &self.remote_id)
            .finish_non_exhaustive()
    }
}
