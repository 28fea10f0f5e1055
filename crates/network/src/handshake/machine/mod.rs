#[allow(clippy::module_inception)]
mod machine;
mod state;


pub use machine::{HandshakeMachine, HandshakeRole};
pub use state::HandshakeState;
