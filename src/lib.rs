//! Password-based authenticated encryption core for Roznamcha.
//!
//! Derives a 256-bit key from a password with PBKDF2-HMAC-SHA-256, seals
//! plaintext with AES-256-GCM, and emits a self-describing
//! [`EncryptedPayload`] whose byte fields are base64-encoded for transport
//! across process boundaries. Also exposes a one-shot SHA-256 content hash.
//!
//! Every operation is a stateless function; the only per-call state is the
//! derived key, which is zeroed before the call returns. Callers own
//! scheduling: key derivation is deliberately slow, so invoke encrypt and
//! decrypt off any interactive thread.

mod crypto;
mod error;
mod format;

pub use crate::crypto::{DEFAULT_ITERATIONS, MIN_ITERATIONS};
pub use crate::error::{CryptoError, Result};
pub use crate::format::{CURRENT_VERSION, EncryptedPayload};

use crate::crypto::{aead, digest, kdf, random};
use base64::{Engine, engine::general_purpose::STANDARD};
use zeroize::Zeroizing;

/// Generate a fresh 16-byte key-derivation salt, base64-encoded.
pub fn generate_salt() -> Result<String> {
    Ok(STANDARD.encode(random::generate_salt()?))
}

/// Encrypt a string under a password with the default work factor.
pub fn encrypt(plaintext: &str, password: &str) -> Result<EncryptedPayload> {
    encrypt_bytes(plaintext.as_bytes(), password)
}

/// Encrypt a string under a password with an explicit iteration count.
pub fn encrypt_with_iterations(
    plaintext: &str,
    password: &str,
    iterations: u32,
) -> Result<EncryptedPayload> {
    encrypt_bytes_with_iterations(plaintext.as_bytes(), password, iterations)
}

/// Encrypt an opaque byte payload under a password.
pub fn encrypt_bytes(plaintext: &[u8], password: &str) -> Result<EncryptedPayload> {
    encrypt_bytes_with_iterations(plaintext, password, DEFAULT_ITERATIONS)
}

/// Encrypt bytes under a password with an explicit PBKDF2 iteration count.
///
/// Salt and nonce are generated fresh per call. The iteration count is
/// recorded in the payload so decryption reproduces the key exactly even
/// if the default work factor changes later; counts below
/// [`MIN_ITERATIONS`] are rejected before any derivation work.
pub fn encrypt_bytes_with_iterations(
    plaintext: &[u8],
    password: &str,
    iterations: u32,
) -> Result<EncryptedPayload> {
    kdf::validate_iterations(iterations)?;

    let salt = random::generate_salt()?;
    let key = kdf::derive_key(password, &salt, iterations)?;

    let (ciphertext, nonce, tag) = aead::seal(&key, plaintext)?;

    Ok(format::assemble(salt, nonce, &ciphertext, tag, iterations))
}

/// Decrypt a payload back to the original string.
pub fn decrypt(payload: &EncryptedPayload, password: &str) -> Result<String> {
    let plaintext = decrypt_bytes(payload, password)?;
    let text = std::str::from_utf8(&plaintext)
        .map_err(|_| CryptoError::MalformedPayload("plaintext is not valid UTF-8"))?;
    Ok(text.to_owned())
}

/// Decrypt a payload to its raw bytes.
///
/// Structural validation runs first and fails with
/// [`CryptoError::MalformedPayload`] (or
/// [`CryptoError::UnsupportedVersion`]) before any key derivation. A tag
/// mismatch, whether from a wrong password or any corrupted field, fails
/// with [`CryptoError::AuthenticationFailed`] and yields no plaintext.
/// Failed decryptions are never retried here; re-prompting is the
/// caller's business.
pub fn decrypt_bytes(payload: &EncryptedPayload, password: &str) -> Result<Zeroizing<Vec<u8>>> {
    let decoded = format::decode(payload)?;
    let key = kdf::derive_key(password, &decoded.salt, decoded.iterations)?;
    aead::open(&key, &decoded.nonce, &decoded.ciphertext, &decoded.tag)
}

/// SHA-256 content hash, lowercase hex.
///
/// For identifying or integrity-checking blobs. Not for password storage;
/// passwords only ever go through the key-derivation path.
pub fn hash(data: impl AsRef<[u8]>) -> String {
    digest::sha256_hex(data.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_decrypt_round_trip() {
        let payload = encrypt_with_iterations("a short note", "pw", MIN_ITERATIONS).unwrap();
        assert_eq!(payload.version, CURRENT_VERSION);
        assert_eq!(payload.iterations, MIN_ITERATIONS);

        assert_eq!(decrypt(&payload, "pw").unwrap(), "a short note");
    }

    #[test]
    fn wrong_password_fails_closed() {
        let payload = encrypt_with_iterations("note", "correct", MIN_ITERATIONS).unwrap();

        assert!(matches!(
            decrypt(&payload, "wrong"),
            Err(CryptoError::AuthenticationFailed)
        ));
    }

    #[test]
    fn bytes_round_trip() {
        let data = [0u8, 159, 146, 150, 255];
        let payload = encrypt_bytes_with_iterations(&data, "pw", MIN_ITERATIONS).unwrap();

        assert_eq!(&*decrypt_bytes(&payload, "pw").unwrap(), &data);
    }

    #[test]
    fn encrypt_rejects_weak_iterations() {
        assert!(matches!(
            encrypt_with_iterations("note", "pw", MIN_ITERATIONS - 1),
            Err(CryptoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn generated_salts_are_base64_and_unique() {
        let a = generate_salt().unwrap();
        let b = generate_salt().unwrap();

        assert_ne!(a, b);
        assert_eq!(STANDARD.decode(&a).unwrap().len(), 16);
    }
}
