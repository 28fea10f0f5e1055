// Copyright @ 2023 - 2024, Aurum Developers
// All Rights Reserved

//! RLPx transport for the Aurum node.
//!
//! Two peers run the auth/ack handshake in [`handshake`] to agree on session
//! [`Secrets`], then exchange encrypted, MAC-authenticated frames through
//! [`RlpxCodec`]. [`Conn`] ties both together over any ordered byte stream.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use aurum_config::RlpxConfig;
//! use aurum_cryptography::{KeyPair, PublicKey};
//! use aurum_network::Conn;
//! use tokio::net::TcpStream;
//!
//! # async fn dial(remote: PublicKey) -> aurum_network::NetworkResult<()> {
//! let stream = TcpStream::connect("127.0.0.1:30303").await?;
//! let key = Arc::new(KeyPair::random());
//! let mut conn = Conn::handshake_initiator(stream, key, remote, RlpxConfig::default()).await?;
//! conn.write_msg(0x02, &[0xc0]).await?;
//! let (code, payload) = conn.read_msg().await?;
//! # let _ = (code, payload);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod conn;
pub mod error;
pub mod handshake;
pub mod secrets;

pub use codec::{Frame, HashMac, RlpxCodec};
pub use conn::Conn;
pub use error::{FrameError, HandshakeError, NetworkError, NetworkResult};
pub use handshake::{
    AckMessage, AuthMessage, HandshakeFormat, HandshakeMachine, HandshakeRole, HandshakeState,
    PacketKind,
};
pub use secrets::Secrets;
