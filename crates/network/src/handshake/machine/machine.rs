use std::sync::Arc;

use aurum_config::{HANDSHAKE_VERSION, NONCE_LEN};
use aurum_cryptography::{keccak256, KeyAgreement, KeyPair, PublicKey, RecoverableSignature, Signer};
use rand::{rngs::OsRng, RngCore};
use tracing::{debug, warn};

use super::state::HandshakeState;
use crate::handshake::message::{AckMessage, AuthMessage};
use crate::handshake::packet::{
    open_packet, seal_eip8, seal_legacy, HandshakeFormat, OpenedPacket, PacketKind,
};
use crate::secrets::{xor, Secrets};
use crate::HandshakeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeRole {
    Initiator,
    Responder,
}

/// Sans-IO RLPx handshake.
///
/// The caller writes the packets returned by [`start`](Self::start) and
/// [`on_packet`](Self::on_packet), feeds back the raw packet it reads, and takes the
/// secrets with [`establish`](Self::establish) once [`is_complete`](Self::is_complete).
/// Every failure is terminal; a retry needs a new machine with fresh ephemeral keys
/// and nonce.
///
/// The static identity `K` only needs key agreement and recoverable signing, so it
/// can live outside the process.
#[derive(Debug)]
pub struct HandshakeMachine<K = KeyPair> {
    role: HandshakeRole,
    state: HandshakeState,
    format: HandshakeFormat,
    key: Arc<K>,
    ephemeral: KeyPair,
    nonce: [u8; NONCE_LEN],
    remote_id: Option<PublicKey>,
    remote_version: Option<u64>,
    auth_wire: Vec<u8>,
    ack_wire: Vec<u8>,
    secrets: Option<Secrets>,
}

impl<K> HandshakeMachine<K>
where
    K: KeyAgreement + Signer,
{
    pub fn initiator(key: Arc<K>, remote_id: PublicKey) -> Self {
        Self::new(HandshakeRole::Initiator, key, Some(remote_id))
    }

    pub fn responder(key: Arc<K>) -> Self {
        Self::new(HandshakeRole::Responder, key, None)
    }

    fn new(role: HandshakeRole, key: Arc<K>, remote_id: Option<PublicKey>) -> Self {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);

        Self {
            role,
            state: HandshakeState::NotStarted,
            format: HandshakeFormat::Eip8,
            key,
            ephemeral: KeyPair::random(),
            nonce,
            remote_id,
            remote_version: None,
            auth_wire: Vec::new(),
            ack_wire: Vec::new(),
            secrets: None,
        }
    }

    /// Wire format of the auth packet sent by an initiator. A responder always
    /// answers in the format of the auth it received.
    pub fn with_format(mut self, format: HandshakeFormat) -> Self {
        self.format = format;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_ephemeral(mut self, ephemeral: KeyPair, nonce: [u8; NONCE_LEN]) -> Self {
        self.ephemeral = ephemeral;
        self.nonce = nonce;
        self
    }

    pub fn role(&self) -> HandshakeRole {
        self.role
    }

    pub fn state(&self) -> HandshakeState {
        self.state
    }

    pub fn format(&self) -> HandshakeFormat {
        self.format
    }

    /// Static public key of the peer, known upfront for an initiator and after the
    /// auth packet for a responder.
    pub fn remote_id(&self) -> Option<&PublicKey> {
        self.remote_id.as_ref()
    }

    /// Handshake version announced by the peer.
    pub fn remote_version(&self) -> Option<u64> {
        self.remote_version
    }

    pub fn is_complete(&self) -> bool {
        matches!(
            self.state,
            HandshakeState::SecretsDerived | HandshakeState::Established
        )
    }

    /// The packet the machine waits for, if any.
    pub fn expected_packet(&self) -> Option<PacketKind> {
        match (self.role, self.state) {
            (HandshakeRole::Initiator, HandshakeState::AuthSent) => Some(PacketKind::Ack),
            (HandshakeRole::Responder, HandshakeState::AwaitingAuth) => Some(PacketKind::Auth),
            _ => None,
        }
    }

    /// Starts the handshake. Returns the auth packet for an initiator.
    pub fn start(&mut self) -> Result<Option<Vec<u8>>, HandshakeError> {
        self.ensure_state("start", HandshakeState::NotStarted)?;

        match self.role {
            HandshakeRole::Initiator => {
                let result = self.send_auth();
                self.fail_on_err(result).map(Some)
            }
            HandshakeRole::Responder => {
                self.state = HandshakeState::AwaitingAuth;
                Ok(None)
            }
        }
    }

    /// Processes the raw packet read from the peer. Returns the ack packet for a
    /// responder.
    pub fn on_packet(&mut self, raw: &[u8]) -> Result<Option<Vec<u8>>, HandshakeError> {
        let result = match self.role {
            HandshakeRole::Initiator => {
                self.ensure_state("ack", HandshakeState::AuthSent)?;
                self.receive_ack(raw).map(|()| None)
            }
            HandshakeRole::Responder => {
                self.ensure_state("auth", HandshakeState::AwaitingAuth)?;
                self.receive_auth(raw).map(Some)
            }
        };
        self.fail_on_err(result)
    }

    /// Hands over the session secrets. Succeeds exactly once.
    pub fn establish(&mut self) -> Result<Secrets, HandshakeError> {
        self.ensure_state("establish", HandshakeState::SecretsDerived)?;
        let secrets = self.secrets.take().ok_or(HandshakeError::Unexpected {
            operation: "establish",
            state: self.state,
        })?;
        self.state = HandshakeState::Established;
        Ok(secrets)
    }

    fn ensure_state(
        &self,
        operation: &'static str,
        expected: HandshakeState,
    ) -> Result<(), HandshakeError> {
        match self.state {
            HandshakeState::Failed => Err(HandshakeError::Failed),
            state if state == expected => Ok(()),
            state => Err(HandshakeError::Unexpected { operation, state }),
        }
    }

    fn fail_on_err<T>(
        &mut self,
        result: Result<T, HandshakeError>,
    ) -> Result<T, HandshakeError> {
        if let Err(err) = &result {
            warn!(role = ?self.role, state = %self.state, error = %err, "rlpx handshake failed");
            self.state = HandshakeState::Failed;
            self.secrets = None;
        }
        result
    }

    fn send_auth(&mut self) -> Result<Vec<u8>, HandshakeError> {
        let remote_id = self.remote_id.ok_or(HandshakeError::Unexpected {
            operation: "start",
            state: self.state,
        })?;

        let static_shared = self.key.agree(&remote_id);
        let signature = self
            .ephemeral
            .sign_recoverable(&xor(static_shared.as_bytes(), &self.nonce));
        let auth = AuthMessage::new(
            *signature.as_bytes(),
            self.key.public_key().to_node_id(),
            self.nonce,
        );

        let packet = match self.format {
            HandshakeFormat::Eip8 => {
                let mut body = Vec::new();
                auth.encode_rlp(&mut body);
                seal_eip8(body, &remote_id)?
            }
            HandshakeFormat::Legacy => {
                let ephemeral_hash = keccak256(&self.ephemeral.public().to_node_id());
                seal_legacy(&auth.encode_legacy(&ephemeral_hash), &remote_id)?
            }
        };

        debug!(remote = %remote_id, format = ?self.format, size = packet.len(), "sent auth");
        self.auth_wire = packet.clone();
        self.state = HandshakeState::AuthSent;
        Ok(packet)
    }

    fn receive_ack(&mut self, raw: &[u8]) -> Result<(), HandshakeError> {
        let ack = match open_packet(raw, PacketKind::Ack, &*self.key)? {
            OpenedPacket::Eip8(plain) => AckMessage::decode_rlp(&plain)?,
            OpenedPacket::Legacy(plain) => AckMessage::decode_legacy(&plain)?,
        };
        self.ack_wire = raw.to_vec();
        self.state = HandshakeState::AckReceived;
        self.note_version(ack.version);

        let remote_ephemeral = PublicKey::from_node_id(&ack.ephemeral_id)?;
        let remote_id = self.remote_id.ok_or(HandshakeError::Unexpected {
            operation: "ack",
            state: self.state,
        })?;

        let ephemeral_shared = self.ephemeral.agree(&remote_ephemeral);
        self.secrets = Some(Secrets::derive(
            self.role,
            remote_id,
            &ephemeral_shared,
            &self.nonce,
            &ack.nonce,
            &self.auth_wire,
            &self.ack_wire,
        ));
        self.state = HandshakeState::SecretsDerived;
        debug!(remote = %remote_id, "received ack, secrets derived");
        Ok(())
    }

    fn receive_auth(&mut self, raw: &[u8]) -> Result<Vec<u8>, HandshakeError> {
        let opened = open_packet(raw, PacketKind::Auth, &*self.key)?;
        self.format = opened.format();
        let auth = match opened {
            OpenedPacket::Eip8(plain) => AuthMessage::decode_rlp(&plain)?,
            OpenedPacket::Legacy(plain) => AuthMessage::decode_legacy(&plain)?,
        };
        self.auth_wire = raw.to_vec();
        self.state = HandshakeState::AuthReceived;
        self.note_version(auth.version);

        let remote_id = PublicKey::from_node_id(&auth.initiator_id)?;
        let static_shared = self.key.agree(&remote_id);
        let remote_ephemeral = RecoverableSignature::from_bytes(&auth.signature)?
            .recover(&xor(static_shared.as_bytes(), &auth.nonce))?;
        self.remote_id = Some(remote_id);

        let ack = AckMessage::new(self.ephemeral.public().to_node_id(), self.nonce);
        let packet = match self.format {
            HandshakeFormat::Eip8 => {
                let mut body = Vec::new();
                ack.encode_rlp(&mut body);
                seal_eip8(body, &remote_id)?
            }
            HandshakeFormat::Legacy => seal_legacy(&ack.encode_legacy(), &remote_id)?,
        };
        self.ack_wire = packet.clone();

        let ephemeral_shared = self.ephemeral.agree(&remote_ephemeral);
        self.secrets = Some(Secrets::derive(
            self.role,
            remote_id,
            &ephemeral_shared,
            &auth.nonce,
            &self.nonce,
            &self.auth_wire,
            &self.ack_wire,
        ));
        self.state = HandshakeState::SecretsDerived;
        debug!(remote = %remote_id, format = ?self.format, size = packet.len(), "sent ack, secrets derived");
        Ok(packet)
    }

    fn note_version(&mut self, version: u64) {
        if version != HANDSHAKE_VERSION {
            debug!(version, "peer announced a different handshake version");
        }
        self.remote_version = Some(version);
    }
}
