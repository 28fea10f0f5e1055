//! Aurum node - RLPx peer-to-peer endpoint
//!
//! Generates node keys, accepts peers with the responder handshake and echoes their
//! frames, or dials a peer and checks that a ping frame comes back intact.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use aurum_config::{NodeConfig, RlpxConfig};
use aurum_cryptography::{KeyPair, PrivateKey};
use aurum_network::{Conn, NetworkError, NetworkResult};
use clap::Parser;
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod args;
mod peer;

use args::{CliArgs, Command};
use peer::PeerUrl;

/// Message code of the frame sent by `dial`.
const PING_CODE: u64 = 0x02;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => NodeConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => NodeConfig::default(),
    };

    let level = args
        .log_level
        .map(|level| level.as_str().to_string())
        .unwrap_or_else(|| config.log_level.clone());
    init_tracing(&level);

    match args.command {
        Command::Keygen => keygen(),
        Command::Listen { addr, key } => {
            let addr = match addr {
                Some(addr) => addr,
                None => config
                    .listen
                    .parse()
                    .with_context(|| format!("invalid listen address {}", config.listen))?,
            };
            let key = node_key(key.as_deref(), &config)?;
            listen(addr, key, config.rlpx).await
        }
        Command::Dial { peer, key } => {
            let key = node_key(key.as_deref(), &config)?;
            dial(peer, key, config.rlpx).await
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn keygen() -> Result<()> {
    let key = KeyPair::random();
    println!("key: {}", hex::encode(&key.private().to_bytes()[..]));
    println!("id:  {}", key.public());
    Ok(())
}

/// Node key from the command line, then the configuration file, else a fresh one.
fn node_key(cli_key: Option<&str>, config: &NodeConfig) -> Result<Arc<KeyPair>> {
    let key = match cli_key.or(config.node_key.as_deref()) {
        Some(text) => {
            let private = PrivateKey::from_hex(text).context("invalid node key")?;
            KeyPair::from_private(private)
        }
        None => {
            warn!("no node key configured, using an ephemeral identity");
            KeyPair::random()
        }
    };
    Ok(Arc::new(key))
}

async fn listen(addr: SocketAddr, key: Arc<KeyPair>, rlpx: RlpxConfig) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, id = %key.public(), "listening for rlpx peers");

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, remote) = accepted.context("failed to accept connection")?;
                let key = key.clone();
                let rlpx = rlpx.clone();
                tokio::spawn(async move {
                    if let Err(err) = echo(stream, key, rlpx).await {
                        warn!(%remote, error = %err, "peer session ended");
                    }
                });
            }
            _ = signal::ctrl_c() => {
                info!("received shutdown signal");
                return Ok(());
            }
        }
    }
}

async fn echo(stream: TcpStream, key: Arc<KeyPair>, rlpx: RlpxConfig) -> NetworkResult<()> {
    let mut conn = Conn::handshake_responder(stream, key, rlpx).await?;
    let remote = *conn.remote_id();
    info!(%remote, "peer connected");

    loop {
        let (code, payload) = match conn.read_msg().await {
            Ok(msg) => msg,
            Err(NetworkError::Closed) => {
                info!(%remote, "peer disconnected");
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        debug!(%remote, code, size = payload.len(), "echoing frame");
        conn.write_msg(code, &payload).await?;
    }
}

async fn dial(peer: PeerUrl, key: Arc<KeyPair>, rlpx: RlpxConfig) -> Result<()> {
    let address = peer.address();
    let stream = TcpStream::connect(&address)
        .await
        .with_context(|| format!("failed to connect to {address}"))?;
    let mut conn = Conn::handshake_initiator(stream, key, peer.id, rlpx)
        .await
        .with_context(|| format!("handshake with {peer} failed"))?;
    info!(remote = %conn.remote_id(), "session established");

    let ping = rand::random::<u64>().to_be_bytes();
    let started = Instant::now();
    conn.write_msg(PING_CODE, &ping).await.context("failed to send ping")?;
    let (code, payload) = conn.read_msg().await.context("no echo from peer")?;
    ensure!(
        code == PING_CODE && payload[..] == ping[..],
        "peer echoed an unexpected frame (code {code:#x}, {} bytes)",
        payload.len()
    );
    info!(rtt = ?started.elapsed(), "ping echoed");

    conn.close().await.context("failed to close session")?;
    Ok(())
}
