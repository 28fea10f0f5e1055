// Copyright @ 2023 - 2024, Aurum Developers
// All Rights Reserved

//! Authenticated RLPx framing.

mod frame;
mod mac;

pub use frame::{Frame, RlpxCodec, HEADER_LEN};
pub use mac::{HashMac, MAC_LEN};
