use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::peer::PeerUrl;

/// Command-line arguments for the Aurum node
#[derive(Parser, Debug, Clone)]
#[command(
    name = "aurum-node",
    version = env!("CARGO_PKG_VERSION"),
    about = "RLPx peer-to-peer node: accept peers, dial peers, manage node keys"
)]
pub struct CliArgs {
    /// Node configuration file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log level; RUST_LOG takes precedence when set
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print a fresh node key and its node id
    Keygen,

    /// Accept peers and echo every frame back to the sender
    Listen {
        /// Listen address, overrides the configuration file
        #[arg(long, value_name = "ADDR")]
        addr: Option<SocketAddr>,

        /// Hex encoded node key
        #[arg(long, value_name = "HEX", env = "AURUM_NODE_KEY", hide_env_values = true)]
        key: Option<String>,
    },

    /// Connect to a peer, send a ping frame and wait for the echo
    Dial {
        /// Peer as <node-id>@<host:port>
        peer: PeerUrl,

        /// Hex encoded node key
        #[arg(long, value_name = "HEX", env = "AURUM_NODE_KEY", hide_env_values = true)]
        key: Option<String>,
    },
}

/// Log level enumeration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
