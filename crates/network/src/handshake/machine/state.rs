use std::fmt;

/// Progress of one handshake attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    NotStarted,
    /// Initiator sent its auth packet and waits for the ack.
    AuthSent,
    /// Responder waits for the auth packet.
    AwaitingAuth,
    AckReceived,
    AuthReceived,
    /// Session secrets are ready to be taken.
    SecretsDerived,
    /// Secrets were handed over to the session; the machine is spent.
    Established,
    Failed,
}

impl HandshakeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandshakeState::NotStarted => "not-started",
            HandshakeState::AuthSent => "auth-sent",
            HandshakeState::AwaitingAuth => "awaiting-auth",
            HandshakeState::AckReceived => "ack-received",
            HandshakeState::AuthReceived => "auth-received",
            HandshakeState::SecretsDerived => "secrets-derived",
            HandshakeState::Established => "established",
            HandshakeState::Failed => "failed",
        }
    }
}

impl fmt::Display for HandshakeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
