//! Error types for cryptographic operations.

use thiserror::Error;

/// Errors that can occur during cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Key material is not a valid key for the configured primitive.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Invalid key length.
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length.
        expected: usize,
        /// Actual key length.
        actual: usize,
    },

    /// Invalid nonce length.
    #[error("Invalid nonce length: expected {expected}, got {actual}")]
    InvalidNonceLength {
        /// Expected nonce length.
        expected: usize,
        /// Actual nonce length.
        actual: usize,
    },

    /// AEAD tag verification failed (tampering, wrong key, or wrong nonce).
    #[error("Authentication failure: ciphertext rejected")]
    AuthenticationFailure,

    /// RSA-OAEP decryption failed (padding check or key mismatch).
    #[error("Decryption failed")]
    DecryptionFailure,

    /// Plaintext exceeds the capacity of direct RSA encryption.
    #[error("Unsupported size: maximum {max} bytes, got {actual}")]
    UnsupportedSize {
        /// Maximum payload the primitive accepts.
        max: usize,
        /// Actual payload length.
        actual: usize,
    },

    /// Text input is not valid base64.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Encryption failed.
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Key derivation failed (bad parameters or output length).
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    /// Key generation failed.
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),
}

/// Result type for cryptographic operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
