// Copyright @ 2023 - 2024, Aurum Developers
// All Rights Reserved

//! ECIES sealed envelope over secp256k1, AES-128-CTR and HMAC-SHA256.
//!
//! Layout: `R (65, SEC1 uncompressed) || iv (16) || ciphertext || tag (32)`.


use aes::cipher::{generic_array::GenericArray, KeyIvInit, StreamCipher};
use hmac::{Hmac, Mac};
use rand::{rngs::OsRng, RngCore};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::{
    concat_kdf, key::SEC1_UNCOMPRESSED_SIZE, sha256, CryptoError, CryptoResult, KeyAgreement,
    PrivateKey, PublicKey, SharedSecret,
};

type Aes128Ctr = ctr::Ctr128BE<aes::Aes128>;
type HmacSha256 = Hmac<Sha256>;

pub const ECIES_KEY_SIZE: usize = 16;
pub const ECIES_IV_SIZE: usize = 16;
pub const ECIES_TAG_SIZE: usize = 32;

/// Bytes added to a message by [`seal`].
pub const ECIES_OVERHEAD: usize = SEC1_UNCOMPRESSED_SIZE + ECIES_IV_SIZE + ECIES_TAG_SIZE;

/// Encrypts `message` to `remote`.
///
/// `s1` is mixed into the key derivation and `s2` is authenticated by the tag; both
/// must be supplied again to [`unseal`].
pub fn seal(remote: &PublicKey, message: &[u8], s1: &[u8], s2: &[u8]) -> CryptoResult<Vec<u8>> {
    let ephemeral = PrivateKey::random();
    let mut iv = [0u8; ECIES_IV_SIZE];
    OsRng.fill_bytes(&mut iv);
    seal_with(&ephemeral, iv, remote, message, s1, s2)
}

pub(crate) fn seal_with(
    ephemeral: &PrivateKey,
    iv: [u8; ECIES_IV_SIZE],
    remote: &PublicKey,
    message: &[u8],
    s1: &[u8],
    s2: &[u8],
) -> CryptoResult<Vec<u8>> {
    let (ke, km) = derive_keys(&ephemeral.ecdh(remote), s1);

    let mut out = Vec::with_capacity(message.len() + ECIES_OVERHEAD);
    out.extend_from_slice(&ephemeral.public_key().to_sec1_uncompressed());
    out.extend_from_slice(&iv);

    let body_start = out.len();
    out.extend_from_slice(message);
    Aes128Ctr::new(GenericArray::from_slice(&ke[..]), GenericArray::from_slice(&iv))
        .apply_keystream(&mut out[body_start..]);

    let tag = message_tag(&km, &out[SEC1_UNCOMPRESSED_SIZE..], s2)?;
    out.extend_from_slice(&tag);
    Ok(out)
}

/// Decrypts an envelope produced by [`seal`] with the recipient's key.
pub fn unseal<K>(key: &K, data: &[u8], s1: &[u8], s2: &[u8]) -> CryptoResult<Vec<u8>>
where
    K: KeyAgreement + ?Sized,
{
    let key_len = match data.first() {
        None => return Err(CryptoError::InvalidMessage),
        Some(2) | Some(3) => 33,
        Some(4) => SEC1_UNCOMPRESSED_SIZE,
        Some(_) => return Err(CryptoError::InvalidPublicKey),
    };
    if data.len() < key_len + ECIES_IV_SIZE + ECIES_TAG_SIZE {
        return Err(CryptoError::InvalidMessage);
    }

    let remote = PublicKey::from_sec1(&data[..key_len])?;
    let (ke, km) = derive_keys(&key.agree(&remote), s1);

    let tag_start = data.len() - ECIES_TAG_SIZE;
    let sealed = &data[key_len..tag_start];
    let expected = message_tag(&km, sealed, s2)?;
    if !bool::from(expected.as_slice().ct_eq(&data[tag_start..])) {
        return Err(CryptoError::InvalidMessage);
    }

    let (iv, ciphertext) = sealed.split_at(ECIES_IV_SIZE);
    let mut plain = ciphertext.to_vec();
    Aes128Ctr::new(GenericArray::from_slice(&ke[..]), GenericArray::from_slice(iv))
        .apply_keystream(&mut plain);
    Ok(plain)
}

/// Splits the KDF output into the AES key and the SHA-256 hashed MAC key.
fn derive_keys(
    z: &SharedSecret,
    s1: &[u8],
) -> (Zeroizing<[u8; ECIES_KEY_SIZE]>, Zeroizing<[u8; 32]>) {
    let material = Zeroizing::new(concat_kdf::<Sha256>(z.as_bytes(), s1, 2 * ECIES_KEY_SIZE));

    let mut ke = Zeroizing::new([0u8; ECIES_KEY_SIZE]);
    ke.copy_from_slice(&material[..ECIES_KEY_SIZE]);
    let km = Zeroizing::new(sha256(&material[ECIES_KEY_SIZE..]));
    (ke, km)
}

fn message_tag(km: &[u8; 32], iv_and_ciphertext: &[u8], s2: &[u8]) -> CryptoResult<[u8; 32]> {
    let mut mac =
        <HmacSha256 as Mac>::new_from_slice(km).map_err(|_| CryptoError::InvalidMessage)?;
    mac.update(iv_and_ciphertext);
    mac.update(s2);
    Ok(mac.finalize().into_bytes().into())
}
