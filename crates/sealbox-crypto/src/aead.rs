//! AES-256-GCM authenticated encryption.
//!
//! Provides AEAD encryption with 256-bit keys and 96-bit nonces. The
//! authentication tag is appended to the tail of the ciphertext.
//!
//! ## Security Notes
//!
//! - Keys are zeroized on drop
//! - The nonce is an explicit parameter; callers MUST supply a fresh
//!   random nonce for every encryption under a given key
//! - Decryption rejects tampered or truncated input outright, never
//!   returning partial plaintext

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{CryptoError, Result};

/// Size of a symmetric key in bytes (256 bits).
pub const KEY_SIZE: usize = 32;

/// Size of a nonce in bytes (96 bits).
pub const NONCE_SIZE: usize = 12;

/// Size of the authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// A 256-bit symmetric key for AES-GCM encryption.
///
/// The key is automatically zeroized when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct AeadKey {
    bytes: [u8; KEY_SIZE],
}

impl AeadKey {
    /// Generate a new random symmetric key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Create a key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; KEY_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Get the key as a byte slice.
    ///
    /// # Security
    ///
    /// Be careful with this - avoid logging or persisting the returned bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl PartialEq for AeadKey {
    fn eq(&self, other: &Self) -> bool {
        // Constant-time comparison; keys are secret material
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for AeadKey {}

impl std::fmt::Debug for AeadKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AeadKey([REDACTED])")
    }
}

/// A 96-bit nonce for AES-GCM.
#[derive(Clone, Serialize, Deserialize)]
pub struct AeadNonce {
    bytes: [u8; NONCE_SIZE],
}

impl AeadNonce {
    /// Generate a new random nonce.
    pub fn generate() -> Self {
        let mut bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Create a nonce from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 12 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != NONCE_SIZE {
            return Err(CryptoError::InvalidNonceLength {
                expected: NONCE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; NONCE_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Get the nonce as a byte slice.
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for AeadNonce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AeadNonce({:02x}{:02x}..)", self.bytes[0], self.bytes[1])
    }
}

/// Encrypted payload carrying its nonce.
///
/// Format: `[nonce (12 bytes)][ciphertext + tag]`
#[derive(Clone, Serialize, Deserialize)]
pub struct EncryptedData {
    /// The nonce used for encryption.
    pub nonce: AeadNonce,
    /// The ciphertext with authentication tag appended.
    pub ciphertext: Vec<u8>,
}

impl EncryptedData {
    /// Get the total serialized size.
    pub fn len(&self) -> usize {
        NONCE_SIZE + self.ciphertext.len()
    }

    /// Check if the ciphertext body is empty.
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }

    /// Serialize to bytes (nonce || ciphertext).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.len());
        result.extend_from_slice(self.nonce.as_bytes());
        result.extend_from_slice(&self.ciphertext);
        result
    }

    /// Deserialize from bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is too short to contain a nonce and tag.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CryptoError::AuthenticationFailure);
        }
        let nonce = AeadNonce::from_bytes(&bytes[..NONCE_SIZE])?;
        let ciphertext = bytes[NONCE_SIZE..].to_vec();
        Ok(Self { nonce, ciphertext })
    }
}

/// Encrypt plaintext using AES-256-GCM under an explicit nonce.
///
/// Returns the ciphertext with the 16-byte authentication tag appended.
/// Associated data is empty.
///
/// # Security
///
/// The nonce MUST be freshly random for every call under the same key;
/// this function does not enforce that.
///
/// # Example
///
/// ```
/// use sealbox_crypto::aead::{decrypt, encrypt, AeadKey, AeadNonce};
///
/// let key = AeadKey::generate();
/// let nonce = AeadNonce::generate();
/// let sealed = encrypt(&key, &nonce, b"Hello, sealbox!").unwrap();
/// let opened = decrypt(&key, &nonce, &sealed).unwrap();
///
/// assert_eq!(opened.as_slice(), b"Hello, sealbox!");
/// ```
pub fn encrypt(key: &AeadKey, nonce: &AeadNonce, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: key.as_bytes().len(),
        })?;
    cipher
        .encrypt(Nonce::from_slice(nonce.as_bytes()), plaintext)
        .map_err(|_| CryptoError::Encryption("AES-GCM encryption failed".into()))
}

/// Decrypt ciphertext (with trailing tag) using AES-256-GCM.
///
/// # Errors
///
/// Returns `CryptoError::AuthenticationFailure` if:
/// - The ciphertext or tag has been tampered with
/// - The wrong key or nonce is used
/// - The input is truncated below the tag size
pub fn decrypt(key: &AeadKey, nonce: &AeadNonce, ciphertext_with_tag: &[u8]) -> Result<Vec<u8>> {
    if ciphertext_with_tag.len() < TAG_SIZE {
        return Err(CryptoError::AuthenticationFailure);
    }
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| CryptoError::AuthenticationFailure)?;
    cipher
        .decrypt(Nonce::from_slice(nonce.as_bytes()), ciphertext_with_tag)
        .map_err(|_| CryptoError::AuthenticationFailure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let key = AeadKey::generate();
        let nonce = AeadNonce::generate();
        let plaintext = b"Hello, sealbox!";

        let sealed = encrypt(&key, &nonce, plaintext).unwrap();
        let opened = decrypt(&key, &nonce, &sealed).unwrap();

        assert_eq!(plaintext.as_slice(), opened.as_slice());
    }

    #[test]
    fn test_tag_is_appended() {
        let key = AeadKey::generate();
        let nonce = AeadNonce::generate();
        let plaintext = b"payload";

        let sealed = encrypt(&key, &nonce, plaintext).unwrap();
        assert_eq!(sealed.len(), plaintext.len() + TAG_SIZE);
    }

    #[test]
    fn test_decrypt_fails_with_wrong_key() {
        let key1 = AeadKey::generate();
        let key2 = AeadKey::generate();
        let nonce = AeadNonce::generate();

        let sealed = encrypt(&key1, &nonce, b"Secret message").unwrap();
        let result = decrypt(&key2, &nonce, &sealed);

        assert!(matches!(result, Err(CryptoError::AuthenticationFailure)));
    }

    #[test]
    fn test_decrypt_fails_with_wrong_nonce() {
        let key = AeadKey::generate();
        let nonce1 = AeadNonce::generate();
        let nonce2 = AeadNonce::generate();

        let sealed = encrypt(&key, &nonce1, b"Secret message").unwrap();
        let result = decrypt(&key, &nonce2, &sealed);

        assert!(matches!(result, Err(CryptoError::AuthenticationFailure)));
    }

    #[test]
    fn test_decrypt_fails_with_tampered_ciphertext() {
        let key = AeadKey::generate();
        let nonce = AeadNonce::generate();

        let mut sealed = encrypt(&key, &nonce, b"Secret message").unwrap();
        sealed[0] ^= 0xFF;
        let result = decrypt(&key, &nonce, &sealed);

        assert!(matches!(result, Err(CryptoError::AuthenticationFailure)));
    }

    #[test]
    fn test_decrypt_fails_with_truncated_input() {
        let key = AeadKey::generate();
        let nonce = AeadNonce::generate();

        let sealed = encrypt(&key, &nonce, b"Secret message").unwrap();
        let result = decrypt(&key, &nonce, &sealed[..TAG_SIZE - 1]);

        assert!(matches!(result, Err(CryptoError::AuthenticationFailure)));
    }

    #[test]
    fn test_empty_plaintext() {
        let key = AeadKey::generate();
        let nonce = AeadNonce::generate();

        let sealed = encrypt(&key, &nonce, b"").unwrap();
        assert_eq!(sealed.len(), TAG_SIZE);

        let opened = decrypt(&key, &nonce, &sealed).unwrap();
        assert!(opened.is_empty());
    }

    #[test]
    fn test_large_plaintext() {
        let key = AeadKey::generate();
        let nonce = AeadNonce::generate();
        let plaintext = vec![0x42u8; 1024 * 1024];

        let sealed = encrypt(&key, &nonce, &plaintext).unwrap();
        let opened = decrypt(&key, &nonce, &sealed).unwrap();

        assert_eq!(plaintext, opened);
    }

    #[test]
    fn test_encrypted_data_serialization() {
        let key = AeadKey::generate();
        let nonce = AeadNonce::generate();
        let sealed = encrypt(&key, &nonce, b"Test serialization").unwrap();

        let data = EncryptedData {
            nonce: nonce.clone(),
            ciphertext: sealed,
        };
        let bytes = data.to_bytes();
        let restored = EncryptedData::from_bytes(&bytes).unwrap();

        assert_eq!(data.nonce.as_bytes(), restored.nonce.as_bytes());
        assert_eq!(data.ciphertext, restored.ciphertext);

        let opened = decrypt(&key, &restored.nonce, &restored.ciphertext).unwrap();
        assert_eq!(opened.as_slice(), b"Test serialization");
    }

    #[test]
    fn test_encrypted_data_from_short_input() {
        let result = EncryptedData::from_bytes(&[0u8; NONCE_SIZE + TAG_SIZE - 1]);
        assert!(matches!(result, Err(CryptoError::AuthenticationFailure)));
    }

    #[test]
    fn test_key_from_bytes_invalid_length() {
        let result = AeadKey::from_bytes(&[0u8; 16]);
        assert!(matches!(
            result,
            Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: 16
            })
        ));
    }

    #[test]
    fn test_nonce_from_bytes_invalid_length() {
        let result = AeadNonce::from_bytes(&[0u8; 24]);
        assert!(matches!(
            result,
            Err(CryptoError::InvalidNonceLength {
                expected: NONCE_SIZE,
                actual: 24
            })
        ));
    }

    #[test]
    fn test_key_debug_redacted() {
        let key = AeadKey::generate();
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
    }
}
