//! NIST SP 800-56 concatenation KDF.

use sha2::Digest;

/// Derives `kd_len` bytes from the shared secret `z` and the optional shared info `s1`.
///
/// Each block is `H(counter || z || s1)` with a 32-bit big-endian counter starting at 1.
/// The blocks are concatenated and truncated to exactly `kd_len` bytes.
pub fn concat_kdf<D: Digest>(z: &[u8], s1: &[u8], kd_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(kd_len + <D as Digest>::output_size());
    let mut counter: u32 = 1;

    while out.len() < kd_len {
        let mut hasher = D::new();
        hasher.update(counter.to_be_bytes());
        hasher.update(z);
        hasher.update(s1);
        out.extend_from_slice(&hasher.finalize());
        counter = counter.wrapping_add(1);
    }

    out.truncate(kd_len);
    out
}
