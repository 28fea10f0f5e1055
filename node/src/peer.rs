use std::fmt;
use std::str::FromStr;

use aurum_cryptography::{CryptoError, PublicKey};
use thiserror::Error;

const SCHEME: &str = "enode://";

#[derive(Error, Debug)]
pub enum PeerUrlError {
    #[error("expected <node-id>@<host:port>")]
    MissingSeparator,

    #[error("invalid node id: {0}")]
    InvalidId(#[from] CryptoError),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Remote peer given as `<node-id>@<host:port>`, optionally prefixed with `enode://`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerUrl {
    pub id: PublicKey,
    pub host: String,
    pub port: u16,
}

impl PeerUrl {
    /// Address in a form accepted by `TcpStream::connect`.
    pub fn address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl FromStr for PeerUrl {
    type Err = PeerUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(SCHEME).unwrap_or(s);
        let (id, address) = s.split_once('@').ok_or(PeerUrlError::MissingSeparator)?;
        let id = PublicKey::from_str(id)?;

        let (host, port) = address
            .rsplit_once(':')
            .ok_or_else(|| PeerUrlError::InvalidAddress(address.to_string()))?;
        let host = host.trim_start_matches('[').trim_end_matches(']');
        if host.is_empty() {
            return Err(PeerUrlError::InvalidAddress(address.to_string()));
        }
        let port = port
            .parse::<u16>()
            .map_err(|_| PeerUrlError::InvalidAddress(address.to_string()))?;

        Ok(Self {
            id,
            host: host.to_string(),
            port,
        })
    }
}

impl fmt::Display for PeerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}{}@{}", self.id, self.address())
    }
}
