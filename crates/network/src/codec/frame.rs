// Copyright @ 2023 - 2024, Aurum Developers
// All Rights Reserved

use std::mem;

use aes::cipher::{generic_array::GenericArray, KeyIvInit, StreamCipher};
use aes::Aes256;
use alloy_rlp::{Decodable, Encodable};
use aurum_config::MAX_FRAME_SIZE;
use bytes::{Buf, Bytes, BytesMut};
use subtle::ConstantTimeEq;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{trace, warn};

use super::mac::{HashMac, MAC_LEN};
use crate::{FrameError, NetworkError, Secrets};

type AesCtr = ctr::Ctr128BE<Aes256>;

pub const HEADER_LEN: usize = 16;
const BLOCK_LEN: usize = 16;

/// Header data after the body size: an RLP list of two empty strings.
const HEADER_DATA: [u8; 3] = [0xc2, 0x80, 0x80];

/// One application message carried by a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub code: u64,
    pub payload: Bytes,
}

impl Frame {
    pub fn new(code: u64, payload: impl Into<Bytes>) -> Self {
        Self {
            code,
            payload: payload.into(),
        }
    }

    fn body_len(&self) -> usize {
        self.code.length() + self.payload.len()
    }
}

/// Encrypting and authenticating codec for an established RLPx session.
///
/// The encrypt and decrypt key streams and both MAC states advance with every frame,
/// so a frame that fails verification leaves the codec out of sync with the peer.
/// After the first error every call fails with [`FrameError::Poisoned`].
pub struct RlpxCodec {
    enc: AesCtr,
    dec: AesCtr,
    egress: HashMac,
    ingress: HashMac,
    max_frame_size: usize,
    /// Body size of a frame whose header was already consumed.
    pending: Option<usize>,
    poisoned: bool,
}

impl RlpxCodec {
    pub fn new(mut secrets: Secrets) -> Self {
        let key = GenericArray::from_slice(&secrets.aes);
        let iv = GenericArray::from_slice(&[0u8; BLOCK_LEN]);

        Self {
            enc: AesCtr::new(key, iv),
            dec: AesCtr::new(key, iv),
            egress: HashMac::new(&secrets.mac, mem::take(&mut secrets.egress_mac)),
            ingress: HashMac::new(&secrets.mac, mem::take(&mut secrets.ingress_mac)),
            max_frame_size: MAX_FRAME_SIZE,
            pending: None,
            poisoned: false,
        }
    }

    /// Caps the body size accepted and produced. Values above the 24-bit header
    /// limit are clamped.
    pub fn with_max_frame_size(mut self, size: usize) -> Self {
        self.max_frame_size = size.min(MAX_FRAME_SIZE);
        self
    }

    pub fn max_frame_size(&self) -> usize {
        self.max_frame_size
    }

    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    fn poison_on_err<T>(&mut self, result: Result<T, FrameError>) -> Result<T, NetworkError> {
        if let Err(err) = &result {
            warn!(error = %err, "rlpx frame failed, session poisoned");
            self.poisoned = true;
        }
        result.map_err(NetworkError::from)
    }

    fn read_header(&mut self, src: &mut BytesMut) -> Result<Option<usize>, FrameError> {
        if src.len() < HEADER_LEN + MAC_LEN {
            return Ok(None);
        }

        let mut header = src.split_to(HEADER_LEN + MAC_LEN);
        let (header, mac) = header.split_at_mut(HEADER_LEN);
        let expected = self.ingress.compute_header(header);
        if !bool::from(expected[..].ct_eq(mac)) {
            return Err(FrameError::HeaderMacMismatch);
        }

        self.dec.apply_keystream(header);
        let size = u32::from_be_bytes([0, header[0], header[1], header[2]]) as usize;
        if size > self.max_frame_size {
            return Err(FrameError::TooLarge {
                size,
                max: self.max_frame_size,
            });
        }
        Ok(Some(size))
    }

    fn read_body(&mut self, size: usize, src: &mut BytesMut) -> Result<Option<Frame>, FrameError> {
        let padded = padded_len(size);
        if src.len() < padded + MAC_LEN {
            src.reserve(padded + MAC_LEN - src.len());
            return Ok(None);
        }

        let mut body = src.split_to(padded);
        let mac = src.split_to(MAC_LEN);
        let expected = self.ingress.compute_frame(&body);
        if !bool::from(expected[..].ct_eq(&mac[..])) {
            return Err(FrameError::BodyMacMismatch);
        }

        self.dec.apply_keystream(&mut body);
        body.truncate(size);

        let mut rest = &body[..];
        let code = u64::decode(&mut rest).map_err(FrameError::InvalidMessageCode)?;
        let consumed = size - rest.len();
        body.advance(consumed);

        trace!(code, size, "rlpx frame received");
        Ok(Some(Frame {
            code,
            payload: body.freeze(),
        }))
    }

    fn write_frame(&mut self, frame: &Frame, dst: &mut BytesMut) {
        let size = frame.body_len();
        let padded = padded_len(size);
        dst.reserve(HEADER_LEN + MAC_LEN + padded + MAC_LEN);

        let mut header = [0u8; HEADER_LEN];
        header[..3].copy_from_slice(&(size as u32).to_be_bytes()[1..]);
        header[3..6].copy_from_slice(&HEADER_DATA);
        self.enc.apply_keystream(&mut header);
        let header_mac = self.egress.compute_header(&header);
        dst.extend_from_slice(&header);
        dst.extend_from_slice(&header_mac);

        let start = dst.len();
        frame.code.encode(dst);
        dst.extend_from_slice(&frame.payload);
        dst.resize(start + padded, 0);
        self.enc.apply_keystream(&mut dst[start..]);
        let body_mac = self.egress.compute_frame(&dst[start..]);
        dst.extend_from_slice(&body_mac);

        trace!(code = frame.code, size, "rlpx frame sent");
    }
}

fn padded_len(size: usize) -> usize {
    size.div_ceil(BLOCK_LEN) * BLOCK_LEN
}

impl Decoder for RlpxCodec {
    type Item = Frame;
    type Error = NetworkError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if self.poisoned {
            return Err(FrameError::Poisoned.into());
        }

        let size = match self.pending {
            Some(size) => size,
            None => match self.read_header(src) {
                Ok(Some(size)) => {
                    self.pending = Some(size);
                    size
                }
                Ok(None) => return Ok(None),
                Err(err) => return self.poison_on_err(Err(err)),
            },
        };

        let result = self.read_body(size, src);
        if matches!(result, Ok(Some(_))) {
            self.pending = None;
        }
        self.poison_on_err(result)
    }
}

impl Encoder<Frame> for RlpxCodec {
    type Error = NetworkError;

    fn encode(&mut self, frame: Frame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        if self.poisoned {
            return Err(FrameError::Poisoned.into());
        }
        // An oversized frame is rejected before any stream state moves.
        let size = frame.body_len();
        if size > self.max_frame_size {
            return Err(FrameError::TooLarge {
                size,
                max: self.max_frame_size,
            }
            .into());
        }
        self.write_frame(&frame, dst);
        Ok(())
    }
}

impl std::fmt::Debug for RlpxCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RlpxCodec")
            .field("max_frame_size", &self.max_frame_size)
            .field("pending", &self.pending)
            .field("poisoned", &self.poisoned)
            .finish_non_exhaustive()
    }
}
