//! Payload format v1.
//!
//! All byte fields are base64 (standard alphabet, padded). Raw sizes:
//! salt 16, nonce 12, tag 16; ciphertext is unbounded and may be empty.

use super::{DecodedPayload, EncryptedPayload};
use crate::crypto::{MIN_ITERATIONS, NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::error::{CryptoError, Result};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Payload format version 1.
pub const VERSION_V1: u8 = 1;

pub(crate) fn assemble(
    salt: [u8; SALT_LEN],
    nonce: [u8; NONCE_LEN],
    ciphertext: &[u8],
    tag: [u8; TAG_LEN],
    iterations: u32,
) -> EncryptedPayload {
    EncryptedPayload {
        version: VERSION_V1,
        salt: STANDARD.encode(salt),
        nonce: STANDARD.encode(nonce),
        ciphertext: STANDARD.encode(ciphertext),
        tag: STANDARD.encode(tag),
        iterations,
    }
}

/// Decode and validate a v1 payload.
///
/// Every structural problem surfaces here, before any key derivation or
/// cipher work, and is distinguishable from an authentication failure.
pub(crate) fn decode(payload: &EncryptedPayload) -> Result<DecodedPayload> {
    if payload.iterations == 0 {
        return Err(CryptoError::MalformedPayload("missing or zero iteration count"));
    }
    if payload.iterations < MIN_ITERATIONS {
        return Err(CryptoError::MalformedPayload("iteration count below the configured minimum"));
    }

    let salt = decode_fixed::<SALT_LEN>(&payload.salt, "missing or invalid salt")?;
    let nonce = decode_fixed::<NONCE_LEN>(&payload.nonce, "missing or invalid nonce")?;
    let tag = decode_fixed::<TAG_LEN>(&payload.tag, "missing or invalid tag")?;

    let ciphertext = STANDARD
        .decode(&payload.ciphertext)
        .map_err(|_| CryptoError::MalformedPayload("ciphertext is not valid base64"))?;

    Ok(DecodedPayload {
        salt,
        nonce,
        ciphertext,
        tag,
        iterations: payload.iterations,
    })
}

/// Base64-decode a field that must yield exactly `N` bytes.
fn decode_fixed<const N: usize>(field: &str, err: &'static str) -> Result<[u8; N]> {
    STANDARD
        .decode(field)
        .ok()
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(CryptoError::MalformedPayload(err))
}
