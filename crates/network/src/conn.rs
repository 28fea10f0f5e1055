// Copyright @ 2023 - 2024, Aurum Developers
// All Rights Reserved

//! RLPx connection over an ordered byte stream.

use std::fmt;
use std::sync::Arc;

use aurum_config::RlpxConfig;
use aurum_cryptography::{KeyAgreement, PublicKey, Signer};
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tokio_util::codec::Framed;
use tracing::{debug, info};

use crate::codec::{Frame, RlpxCodec};
use crate::handshake::{read_packet, HandshakeFormat, HandshakeMachine, HandshakeRole};
use crate::{HandshakeError, NetworkError, NetworkResult, Secrets};

/// An established RLPx session.
///
/// Reads and writes take `&mut self`; the cipher streams and MAC states live in the
/// codec and are never shared with another connection.
pub struct Conn<S> {
    framed: Framed<S, RlpxCodec>,
    remote_id: PublicKey,
    config: RlpxConfig,
}

impl<S> Conn<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Dials `remote_id` over `stream` with a sealed auth packet.
    pub async fn handshake_initiator<K>(
        stream: S,
        key: Arc<K>,
        remote_id: PublicKey,
        config: RlpxConfig,
    ) -> NetworkResult<Self>
    where
        K: KeyAgreement + Signer,
    {
        Self::handshake_initiator_with_format(stream, key, remote_id, HandshakeFormat::Eip8, config)
            .await
    }

    pub async fn handshake_initiator_with_format<K>(
        stream: S,
        key: Arc<K>,
        remote_id: PublicKey,
        format: HandshakeFormat,
        config: RlpxConfig,
    ) -> NetworkResult<Self>
    where
        K: KeyAgreement + Signer,
    {
        let machine = HandshakeMachine::initiator(key.clone(), remote_id).with_format(format);
        Self::handshake(stream, machine, key, config).await
    }

    /// Accepts a handshake from an unknown peer over `stream`.
    pub async fn handshake_responder<K>(
        stream: S,
        key: Arc<K>,
        config: RlpxConfig,
    ) -> NetworkResult<Self>
    where
        K: KeyAgreement + Signer,
    {
        let machine = HandshakeMachine::responder(key.clone());
        Self::handshake(stream, machine, key, config).await
    }

    async fn handshake<K>(
        mut stream: S,
        mut machine: HandshakeMachine<K>,
        key: Arc<K>,
        config: RlpxConfig,
    ) -> NetworkResult<Self>
    where
        K: KeyAgreement + Signer,
    {
        config.validate()?;
        let role = machine.role();
        let limit = config.handshake_timeout();
        let secrets = timeout(limit, drive(&mut stream, &mut machine, &*key))
            .await
            .map_err(|_| NetworkError::timeout("handshake", limit))??;

        let remote_id = secrets.remote_id;
        info!(
            ?role,
            remote = %remote_id,
            version = ?machine.remote_version(),
            "rlpx session established"
        );

        let codec = RlpxCodec::new(secrets).with_max_frame_size(config.max_frame_size);
        Ok(Self {
            framed: Framed::new(stream, codec),
            remote_id,
            config,
        })
    }

    pub fn remote_id(&self) -> &PublicKey {
        &self.remote_id
    }

    pub fn config(&self) -> &RlpxConfig {
        &self.config
    }

    /// Reads the next message. A partially received frame stays buffered when the
    /// read times out.
    pub async fn read_msg(&mut self) -> NetworkResult<(u64, Bytes)> {
        let limit = self.config.read_timeout();
        match timeout(limit, self.framed.next()).await {
            Err(_) => Err(NetworkError::timeout("read", limit)),
            Ok(None) => Err(NetworkError::Closed),
            Ok(Some(frame)) => {
                let frame = frame?;
                Ok((frame.code, frame.payload))
            }
        }
    }

    pub async fn write_msg(&mut self, code: u64, payload: &[u8]) -> NetworkResult<()> {
        let limit = self.config.write_timeout();
        let frame = Frame::new(code, Bytes::copy_from_slice(payload));
        debug!(code, size = payload.len(), "writing rlpx message");
        timeout(limit, self.framed.send(frame))
            .await
            .map_err(|_| NetworkError::timeout("write", limit))?
    }

    /// Flushes pending frames and shuts down the write half of the stream.
    pub async fn close(&mut self) -> NetworkResult<()> {
        let limit = self.config.write_timeout();
        timeout(limit, SinkExt::<Frame>::close(&mut self.framed))
            .await
            .map_err(|_| NetworkError::timeout("close", limit))?
    }

    /// Stream and sink of [`Frame`]s for callers that prefer `futures` combinators.
    pub fn into_framed(self) -> Framed<S, RlpxCodec> {
        self.framed
    }
}

impl<S> fmt::Debug for Conn<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conn")
            .field("remote_id", &self.remote_id)
            .field("codec", self.framed.codec())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

async fn drive<S, K>(
    stream: &mut S,
    machine: &mut HandshakeMachine<K>,
    key: &K,
) -> NetworkResult<Secrets>
where
    S: AsyncRead + AsyncWrite + Unpin,
    K: KeyAgreement + Signer,
{
    if let Some(auth) = machine.start()? {
        stream.write_all(&auth).await?;
        stream.flush().await?;
    }

    while !machine.is_complete() {
        let kind = machine.expected_packet().ok_or(HandshakeError::Unexpected {
            operation: "read",
            state: machine.state(),
        })?;
        let raw = read_packet(stream, kind, key).await?;
        if let Some(ack) = machine.on_packet(&raw)? {
            stream.write_all(&ack).await?;
            stream.flush().await?;
        }
    }

    if machine.role() == HandshakeRole::Responder {
        debug!(format = ?machine.format(), "answered rlpx auth");
    }
    Ok(machine.establish()?)
}
