use thiserror::Error;

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Failures surfaced by the encryption core.
///
/// Wrong-password and tampered-data cases are deliberately collapsed into
/// the single [`CryptoError::AuthenticationFailed`] variant so callers
/// cannot be used as a corruption oracle. Passwords and key material never
/// appear in any message.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("malformed payload: {0}")]
    MalformedPayload(&'static str),

    #[error("unsupported payload version: {0}")]
    UnsupportedVersion(u8),

    #[error("decryption failed")]
    AuthenticationFailed,

    #[error("OS random generator unavailable")]
    EntropyUnavailable,

    #[error("encryption failed")]
    EncryptionFailure,
}
