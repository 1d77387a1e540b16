use super::{NONCE_LEN, TAG_LEN, random};
use crate::crypto::kdf::DerivedKey;
use crate::error::{CryptoError, Result};
use aes_gcm::{
    Aes256Gcm, Key, Nonce, Tag,
    aead::{AeadInPlace, KeyInit},
};
use zeroize::Zeroizing;

/// Encrypt plaintext with AES-256-GCM, returning ciphertext, nonce, and tag.
///
/// The nonce is always generated here, fresh per call from the OS CSPRNG.
/// There is no caller-supplied variant: nonce reuse under one key breaks
/// GCM, so the API keeps it structurally impossible.
pub fn seal(
    key: &DerivedKey,
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; NONCE_LEN], [u8; TAG_LEN])> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    let nonce = random::generate_nonce()?;

    let mut buf = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&nonce), b"", &mut buf)
        .map_err(|_| CryptoError::EncryptionFailure)?;

    Ok((buf, nonce, tag.into()))
}

/// Decrypt ciphertext with AES-256-GCM, verifying the detached tag.
///
/// Any mismatch, whether from a wrong key or a modified byte anywhere in
/// the inputs, yields [`CryptoError::AuthenticationFailed`] and no
/// plaintext.
pub fn open(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
) -> Result<Zeroizing<Vec<u8>>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    let mut buf = Zeroizing::new(ciphertext.to_vec());
    cipher
        .decrypt_in_place_detached(Nonce::from_slice(nonce), b"", &mut buf, Tag::from_slice(tag))
        .map_err(|_| CryptoError::AuthenticationFailed)?;

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{SALT_LEN, kdf};

    fn test_key() -> DerivedKey {
        kdf::derive_key("test-password", &[9u8; SALT_LEN], kdf::MIN_ITERATIONS).unwrap()
    }

    #[test]
    fn seal_open_round_trip() {
        let key = test_key();
        let (ciphertext, nonce, tag) = seal(&key, b"secret data").unwrap();

        assert_eq!(ciphertext.len(), b"secret data".len());

        let plaintext = open(&key, &nonce, &ciphertext, &tag).unwrap();
        assert_eq!(&*plaintext, b"secret data");
    }

    #[test]
    fn fresh_nonce_per_call() {
        let key = test_key();
        let (c1, n1, _) = seal(&key, b"same input").unwrap();
        let (c2, n2, _) = seal(&key, b"same input").unwrap();

        assert_ne!(n1, n2);
        assert_ne!(c1, c2);
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let key = test_key();
        let (mut ciphertext, nonce, tag) = seal(&key, b"tamper me").unwrap();
        ciphertext[0] ^= 0x01;

        assert!(matches!(
            open(&key, &nonce, &ciphertext, &tag),
            Err(CryptoError::AuthenticationFailed)
        ));
    }

    #[test]
    fn tampered_tag_fails() {
        let key = test_key();
        let (ciphertext, nonce, mut tag) = seal(&key, b"tamper me").unwrap();
        tag[TAG_LEN - 1] ^= 0x80;

        assert!(matches!(
            open(&key, &nonce, &ciphertext, &tag),
            Err(CryptoError::AuthenticationFailed)
        ));
    }

    #[test]
    fn wrong_key_fails() {
        let key = test_key();
        let other = kdf::derive_key("other-password", &[9u8; SALT_LEN], kdf::MIN_ITERATIONS).unwrap();

        let (ciphertext, nonce, tag) = seal(&key, b"secret").unwrap();
        assert!(open(&other, &nonce, &ciphertext, &tag).is_err());
    }

    #[test]
    fn empty_plaintext_round_trips() {
        let key = test_key();
        let (ciphertext, nonce, tag) = seal(&key, b"").unwrap();

        assert!(ciphertext.is_empty());
        assert_eq!(&*open(&key, &nonce, &ciphertext, &tag).unwrap(), b"");
    }
}
