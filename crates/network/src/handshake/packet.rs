// Copyright @ 2023 - 2024, Aurum Developers
// All Rights Reserved

//! Sealing, reading and opening of auth/ack packets.
//!
//! EIP-8 packets are `size (u16 BE) || ecies(body, s2 = size)`. Legacy packets are a
//! bare ECIES envelope of a fixed-size plaintext, with no prefix.

use std::fmt;

use aurum_config::{MAX_HANDSHAKE_PACKET, MAX_HANDSHAKE_PADDING, MIN_HANDSHAKE_PADDING};
use aurum_cryptography::{ecies, KeyAgreement, PublicKey, ECIES_OVERHEAD};
use rand::Rng;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::trace;

use super::message::{ACK_LEGACY_LEN, AUTH_LEGACY_LEN};
use crate::{HandshakeError, NetworkResult};

const SIZE_PREFIX_LEN: usize = 2;

/// Which of the two handshake packets is being handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketKind {
    Auth,
    Ack,
}

impl PacketKind {
    /// On-wire size of the sealed legacy form.
    pub fn legacy_size(self) -> usize {
        match self {
            PacketKind::Auth => AUTH_LEGACY_LEN + ECIES_OVERHEAD,
            PacketKind::Ack => ACK_LEGACY_LEN + ECIES_OVERHEAD,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PacketKind::Auth => "auth",
            PacketKind::Ack => "ack",
        }
    }
}

impl fmt::Display for PacketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire layout of a handshake packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandshakeFormat {
    /// Size-prefixed RLP body with padding.
    #[default]
    Eip8,
    /// Pre-EIP-8 fixed-size plaintext.
    Legacy,
}

/// Plaintext recovered from a packet, tagged with the layout it used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenedPacket {
    /// RLP list followed by padding.
    Eip8(Vec<u8>),
    /// Fixed-size legacy plaintext.
    Legacy(Vec<u8>),
}

impl OpenedPacket {
    pub fn format(&self) -> HandshakeFormat {
        match self {
            OpenedPacket::Eip8(_) => HandshakeFormat::Eip8,
            OpenedPacket::Legacy(_) => HandshakeFormat::Legacy,
        }
    }
}

/// Pads `body` with 100..=199 zero bytes and seals it to `remote` in EIP-8 layout.
pub fn seal_eip8(mut body: Vec<u8>, remote: &PublicKey) -> Result<Vec<u8>, HandshakeError> {
    let padding = rand::thread_rng().gen_range(MIN_HANDSHAKE_PADDING..MAX_HANDSHAKE_PADDING);
    body.resize(body.len() + padding, 0);

    let size = body.len() + ECIES_OVERHEAD;
    if size > MAX_HANDSHAKE_PACKET {
        return Err(HandshakeError::PacketTooLarge {
            size,
            max: MAX_HANDSHAKE_PACKET,
        });
    }

    let prefix = (size as u16).to_be_bytes();
    let sealed = ecies::seal(remote, &body, &[], &prefix)?;

    let mut packet = Vec::with_capacity(SIZE_PREFIX_LEN + sealed.len());
    packet.extend_from_slice(&prefix);
    packet.extend_from_slice(&sealed);
    Ok(packet)
}

pub fn seal_legacy(plain: &[u8], remote: &PublicKey) -> Result<Vec<u8>, HandshakeError> {
    Ok(ecies::seal(remote, plain, &[], &[])?)
}

/// Size announced by an EIP-8 prefix, prefix included.
fn declared_size(raw: &[u8]) -> Option<usize> {
    match raw {
        [hi, lo, ..] => Some(SIZE_PREFIX_LEN + usize::from(u16::from_be_bytes([*hi, *lo]))),
        _ => None,
    }
}

/// Decrypts a raw packet, trying the EIP-8 layout first.
///
/// The legacy layout is only tried when the EIP-8 layout does not apply or fails and
/// the packet has exactly the legacy sealed size.
pub fn open_packet<K>(
    raw: &[u8],
    kind: PacketKind,
    key: &K,
) -> Result<OpenedPacket, HandshakeError>
where
    K: KeyAgreement + ?Sized,
{
    let legacy_sized = raw.len() == kind.legacy_size();

    if declared_size(raw) == Some(raw.len()) {
        let (prefix, sealed) = raw.split_at(SIZE_PREFIX_LEN);
        match ecies::unseal(key, sealed, &[], prefix) {
            Ok(plain) => return Ok(OpenedPacket::Eip8(plain)),
            Err(err) if !legacy_sized => return Err(err.into()),
            Err(_) => {}
        }
    }

    if !legacy_sized {
        return Err(HandshakeError::invalid_packet(kind.as_str(), "size mismatch"));
    }
    let plain = ecies::unseal(key, raw, &[], &[])?;
    Ok(OpenedPacket::Legacy(plain))
}

/// Reads one handshake packet off `reader` and returns its raw bytes.
///
/// The size prefix is read first. A packet announcing at most the legacy sealed size
/// is read exactly. A larger announcement may be the first bytes of an uncompressed
/// legacy key, so the legacy sealed size is read and tried with `key` before
/// waiting for the remainder.
pub async fn read_packet<R, K>(reader: &mut R, kind: PacketKind, key: &K) -> NetworkResult<Vec<u8>>
where
    R: AsyncRead + Unpin,
    K: KeyAgreement + ?Sized,
{
    let mut raw = vec![0u8; SIZE_PREFIX_LEN];
    reader.read_exact(&mut raw).await?;

    let legacy_size = kind.legacy_size();
    let declared = declared_size(&raw).unwrap_or(SIZE_PREFIX_LEN);
    if declared <= legacy_size {
        raw.resize(declared, 0);
        reader.read_exact(&mut raw[SIZE_PREFIX_LEN..]).await?;
        trace!(%kind, size = declared, "eip-8 handshake packet");
        return Ok(raw);
    }

    raw.resize(legacy_size, 0);
    reader.read_exact(&mut raw[SIZE_PREFIX_LEN..]).await?;
    if raw[0] == 0x04 && open_packet(&raw, kind, key).is_ok() {
        trace!(%kind, "legacy handshake packet");
        return Ok(raw);
    }

    if declared - SIZE_PREFIX_LEN > MAX_HANDSHAKE_PACKET {
        return Err(HandshakeError::PacketTooLarge {
            size: declared - SIZE_PREFIX_LEN,
            max: MAX_HANDSHAKE_PACKET,
        }
        .into());
    }

    raw.resize(declared, 0);
    reader.read_exact(&mut raw[legacy_size..]).await?;
    trace!(%kind, size = declared, "eip-8 handshake packet");
    Ok(raw)
}
