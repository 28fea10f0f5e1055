// Copyright @ 2023 - 2024, Aurum Developers
// All Rights Reserved

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::Aes256;
use sha3::{Digest, Keccak256};

pub const MAC_LEN: usize = 16;

/// Running frame MAC for one direction of a session.
///
/// Wraps the Keccak-256 state seeded by the handshake and the AES-256 block cipher
/// keyed with the MAC secret. Every header and body updates the state. Not `Clone`.
pub struct HashMac {
    cipher: Aes256,
    hash: Keccak256,
}

impl HashMac {
    pub fn new(mac_secret: &[u8; 32], hash: Keccak256) -> Self {
        Self {
            cipher: Aes256::new(GenericArray::from_slice(mac_secret)),
            hash,
        }
    }

    /// Current digest of the running state.
    pub fn digest(&self) -> [u8; 32] {
        self.hash.clone().finalize().into()
    }

    /// MAC over an encrypted 16-byte frame header.
    pub fn compute_header(&mut self, header: &[u8]) -> [u8; MAC_LEN] {
        let sum = self.digest();
        self.compute(&sum, header)
    }

    /// MAC over an encrypted frame body.
    pub fn compute_frame(&mut self, body: &[u8]) -> [u8; MAC_LEN] {
        self.hash.update(body);
        let seed = self.digest();
        self.compute(&seed, &seed[..MAC_LEN])
    }

    fn compute(&mut self, sum: &[u8; 32], seed: &[u8]) -> [u8; MAC_LEN] {
        let mut block = GenericArray::clone_from_slice(&sum[..MAC_LEN]);
        self.cipher.encrypt_block(&mut block);
        for (b, s) in block.iter_mut().zip(seed) {
            *b ^= s;
        }
        self.hash.update(block);

        let mut out = [0u8; MAC_LEN];
        out.copy_from_slice(&self.digest()[..MAC_LEN]);
        out
    }
}
