use sha2::{Digest, Sha256};

/// One-shot SHA-256 of arbitrary input, hex-encoded lowercase.
///
/// For identifying or integrity-checking blobs only; password hashing goes
/// through the key-derivation path, never through a bare digest.
pub fn sha256_hex(input: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hex::encode(hasher.finalize())
}
