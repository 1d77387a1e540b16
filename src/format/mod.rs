//! Wire format for encrypted payloads.
//!
//! The payload is the only entity that leaves this crate: a JSON-friendly
//! struct whose byte fields travel base64-encoded. Decoding is version-aware
//! and rejects anything it does not recognise.

use crate::crypto::{NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::error::{CryptoError, Result};
use serde::{Deserialize, Serialize};

pub mod v1;

/// Latest payload format version.
pub const CURRENT_VERSION: u8 = v1::VERSION_V1;

/// A self-describing encrypted payload.
///
/// Carries everything decryption needs besides the password: the salt and
/// iteration count to reproduce the key, the nonce, the ciphertext, and the
/// authentication tag. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedPayload {
    /// Schema discriminator, reserved for algorithm migration.
    #[serde(default = "default_version")]
    pub version: u8,
    /// Key-derivation salt, base64.
    #[serde(default)]
    pub salt: String,
    /// GCM nonce, base64.
    #[serde(default)]
    pub nonce: String,
    /// Ciphertext, base64. Decoded length equals the plaintext length.
    #[serde(default)]
    pub ciphertext: String,
    /// GCM authentication tag, base64.
    #[serde(default)]
    pub tag: String,
    /// PBKDF2 iteration count used for this payload.
    #[serde(default)]
    pub iterations: u32,
}

fn default_version() -> u8 {
    CURRENT_VERSION
}

/// Validated raw parts of a payload, ready for key derivation and
/// decryption.
pub(crate) struct DecodedPayload {
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LEN],
    pub iterations: u32,
}

/// Assemble a payload at the current version from raw parts.
pub(crate) fn assemble(
    salt: [u8; SALT_LEN],
    nonce: [u8; NONCE_LEN],
    ciphertext: &[u8],
    tag: [u8; TAG_LEN],
    iterations: u32,
) -> EncryptedPayload {
    v1::assemble(salt, nonce, ciphertext, tag, iterations)
}

/// Structurally validate and decode a payload.
///
/// Dispatches on the version field. An unknown version is rejected rather
/// than guessed at.
pub(crate) fn decode(payload: &EncryptedPayload) -> Result<DecodedPayload> {
    match payload.version {
        v1::VERSION_V1 => v1::decode(payload),
        v => Err(CryptoError::UnsupportedVersion(v)),
    }
}
