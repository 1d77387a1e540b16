//! Cryptographic primitives for the encryption core.
//!
//! Key derivation, authenticated encryption, content hashing, and the
//! secure random source behind salts and nonces.

pub mod aead;
pub mod digest;
pub mod kdf;
pub mod random;

pub use kdf::{DEFAULT_ITERATIONS, DerivedKey, MIN_ITERATIONS, derive_key};
pub use random::{generate_nonce, generate_salt};

/// Length of the key-derivation salt (16 bytes).
pub const SALT_LEN: usize = 16;
/// Length of the nonce (12 bytes for AES-GCM).
pub const NONCE_LEN: usize = 12;
/// Length of the encryption key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// Length of the GCM authentication tag (16 bytes).
pub const TAG_LEN: usize = 16;
