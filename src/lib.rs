//! # Aurum: RLPx secure transport
//!
//! The peer-to-peer transport layer of the Aurum node: the RLPx auth/ack handshake
//! and the authenticated, encrypted framing that follows it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use aurum::prelude::*;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let key = Arc::new(KeyPair::random());
//!     let listener = TcpListener::bind("0.0.0.0:30303").await?;
//!     let (stream, _) = listener.accept().await?;
//!
//!     let mut conn = Conn::handshake_responder(stream, key, RlpxConfig::default()).await?;
//!     let (code, payload) = conn.read_msg().await?;
//!     conn.write_msg(code, &payload).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - wire constants, RLPx timeouts and node configuration
//! - [`crypto`] - secp256k1 keys, hashes, the concatenation KDF and ECIES
//! - [`network`] - handshake state machine, session secrets, frame codec and `Conn`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use aurum_config as config;
pub use aurum_cryptography as crypto;
pub use aurum_network as network;

/// Common imports for RLPx peers
pub mod prelude {
    pub use crate::config::{NodeConfig, RlpxConfig};
    pub use crate::crypto::{KeyPair, PrivateKey, PublicKey};
    pub use crate::network::{
        Conn, Frame, HandshakeFormat, HandshakeMachine, NetworkError, NetworkResult, RlpxCodec,
    };
}

/// Aurum library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// RLPx handshake version announced in auth and ack messages
pub const HANDSHAKE_VERSION: u64 = aurum_config::HANDSHAKE_VERSION;
