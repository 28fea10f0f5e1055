//! RLPx handshake: auth/ack codec, packet framing and the handshake state machine.

pub mod machine;
pub mod message;
pub mod packet;

#[cfg(test)]
pub(crate) mod test_vectors;

pub use machine::{HandshakeMachine, HandshakeRole, HandshakeState};
pub use message::{AckMessage, AuthMessage};
pub use packet::{open_packet, read_packet, HandshakeFormat, OpenedPacket, PacketKind};
