// Copyright @ 2023 - 2024, Aurum Developers
// All Rights Reserved

//! Auth and ack messages in the RLP (EIP-8) and legacy fixed-size layouts.

use alloy_rlp::{Decodable, Encodable, Header};
use aurum_config::{HANDSHAKE_VERSION, HASH_SIZE, NONCE_LEN, PUBKEY_LEN, SIGNATURE_LEN};
use bytes::{BufMut, Bytes};

use crate::HandshakeError;

/// Legacy auth plaintext: signature, ephemeral key hash, public key, nonce, version byte.
pub const AUTH_LEGACY_LEN: usize = SIGNATURE_LEN + HASH_SIZE + PUBKEY_LEN + NONCE_LEN + 1;
/// Legacy ack plaintext: ephemeral public key, nonce, version byte.
pub const ACK_LEGACY_LEN: usize = PUBKEY_LEN + NONCE_LEN + 1;

/// Initiator to responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthMessage {
    /// Recoverable signature by the initiator's ephemeral key over
    /// `static_shared XOR nonce`.
    pub signature: [u8; SIGNATURE_LEN],
    pub initiator_id: [u8; PUBKEY_LEN],
    pub nonce: [u8; NONCE_LEN],
    pub version: u64,
    /// Trailing list elements kept as raw RLP items, in order.
    pub rest: Vec<Bytes>,
}

/// Responder to initiator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AckMessage {
    pub ephemeral_id: [u8; PUBKEY_LEN],
    pub nonce: [u8; NONCE_LEN],
    pub version: u64,
    pub rest: Vec<Bytes>,
}

impl AuthMessage {
    pub fn new(
        signature: [u8; SIGNATURE_LEN],
        initiator_id: [u8; PUBKEY_LEN],
        nonce: [u8; NONCE_LEN],
    ) -> Self {
        Self {
            signature,
            initiator_id,
            nonce,
            version: HANDSHAKE_VERSION,
            rest: Vec::new(),
        }
    }

    /// Appends the RLP list `[signature, initiator_id, nonce, version, rest..]`.
    pub fn encode_rlp(&self, out: &mut dyn BufMut) {
        let payload_length = self.signature.length()
            + self.initiator_id.length()
            + self.nonce.length()
            + self.version.length()
            + raw_length(&self.rest);

        Header {
            list: true,
            payload_length,
        }
        .encode(out);
        self.signature.encode(out);
        self.initiator_id.encode(out);
        self.nonce.encode(out);
        self.version.encode(out);
        put_raw(&self.rest, out);
    }

    /// Decodes the RLP list, ignoring any bytes after it (EIP-8 padding).
    pub fn decode_rlp(buf: &[u8]) -> Result<Self, HandshakeError> {
        let mut payload = list_payload(buf)?;
        let signature = <[u8; SIGNATURE_LEN]>::decode(&mut payload)?;
        let initiator_id = <[u8; PUBKEY_LEN]>::decode(&mut payload)?;
        let nonce = <[u8; NONCE_LEN]>::decode(&mut payload)?;
        let version = u64::decode(&mut payload)?;

        Ok(Self {
            signature,
            initiator_id,
            nonce,
            version,
            rest: split_raw_items(payload)?,
        })
    }

    /// Fixed-size legacy layout. The ephemeral key hash is not part of the message
    /// and is supplied by the caller.
    pub fn encode_legacy(&self, ephemeral_hash: &[u8; HASH_SIZE]) -> Vec<u8> {
        let mut out = Vec::with_capacity(AUTH_LEGACY_LEN);
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(ephemeral_hash);
        out.extend_from_slice(&self.initiator_id);
        out.extend_from_slice(&self.nonce);
        out.push(0x00);
        out
    }

    /// Legacy messages always decode as version 4 with no trailing elements.
    pub fn decode_legacy(buf: &[u8]) -> Result<Self, HandshakeError> {
        if buf.len() != AUTH_LEGACY_LEN {
            return Err(HandshakeError::invalid_packet("auth", "legacy size mismatch"));
        }

        let (signature, buf) = buf.split_at(SIGNATURE_LEN);
        let (_ephemeral_hash, buf) = buf.split_at(HASH_SIZE);
        let (initiator_id, buf) = buf.split_at(PUBKEY_LEN);
        let nonce = &buf[..NONCE_LEN];

        Ok(Self {
            signature: copy_array(signature),
            initiator_id: copy_array(initiator_id),
            nonce: copy_array(nonce),
            version: HANDSHAKE_VERSION,
            rest: Vec::new(),
        })
    }
}

impl AckMessage {
    pub fn new(ephemeral_id: [u8; PUBKEY_LEN], nonce: [u8; NONCE_LEN]) -> Self {
        Self {
            ephemeral_id,
            nonce,
            version: HANDSHAKE_VERSION,
            rest: Vec::new(),
        }
    }

    /// Appends the RLP list `[ephemeral_id, nonce, version, rest..]`.
    pub fn encode_rlp(&self, out: &mut dyn BufMut) {
        let payload_length = self.ephemeral_id.length()
            + self.nonce.length()
            + self.version.length()
            + raw_length(&self.rest);

        Header {
            list: true,
            payload_length,
        }
        .encode(out);
        self.ephemeral_id.encode(out);
        self.nonce.encode(out);
        self.version.encode(out);
        put_raw(&self.rest, out);
    }

    pub fn decode_rlp(buf: &[u8]) -> Result<Self, HandshakeError> {
        let mut payload = list_payload(buf)?;
        let ephemeral_id = <[u8; PUBKEY_LEN]>::decode(&mut payload)?;
        let nonce = <[u8; NONCE_LEN]>::decode(&mut payload)?;
        let version = u64::decode(&mut payload)?;

        Ok(Self {
            ephemeral_id,
            nonce,
            version,
            rest: split_raw_items(payload)?,
        })
    }

    pub fn encode_legacy(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(ACK_LEGACY_LEN);
        out.extend_from_slice(&self.ephemeral_id);
        out.extend_from_slice(&self.nonce);
        out.push(0x00);
        out
    }

    pub fn decode_legacy(buf: &[u8]) -> Result<Self, HandshakeError> {
        if buf.len() != ACK_LEGACY_LEN {
            return Err(HandshakeError::invalid_packet("ack", "legacy size mismatch"));
        }

        let (ephemeral_id, buf) = buf.split_at(PUBKEY_LEN);
        Ok(Self {
            ephemeral_id: copy_array(ephemeral_id),
            nonce: copy_array(&buf[..NONCE_LEN]),
            version: HANDSHAKE_VERSION,
            rest: Vec::new(),
        })
    }
}

fn copy_array<const N: usize>(src: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(src);
    out
}

/// Returns the payload of the leading RLP list in `buf`.
fn list_payload(buf: &[u8]) -> Result<&[u8], alloy_rlp::Error> {
    let mut rest = buf;
    let header = Header::decode(&mut rest)?;
    if !header.list {
        return Err(alloy_rlp::Error::UnexpectedString);
    }
    if rest.len() < header.payload_length {
        return Err(alloy_rlp::Error::InputTooShort);
    }
    Ok(&rest[..header.payload_length])
}

/// Splits a list payload into its raw items, header bytes included.
fn split_raw_items(mut payload: &[u8]) -> Result<Vec<Bytes>, alloy_rlp::Error> {
    let mut items = Vec::new();
    while !payload.is_empty() {
        let start = payload;
        // Single bytes below 0x80 are their own header and are not consumed here.
        let header = Header::decode(&mut payload)?;
        let total = (start.len() - payload.len()) + header.payload_length;
        if total > start.len() {
            return Err(alloy_rlp::Error::InputTooShort);
        }
        items.push(Bytes::copy_from_slice(&start[..total]));
        payload = &start[total..];
    }
    Ok(items)
}

fn raw_length(items: &[Bytes]) -> usize {
    items.iter().map(Bytes::len).sum()
}

fn put_raw(items: &[Bytes], out: &mut dyn BufMut) {
    for item in items {
        out.put_slice(item);
    }
}
