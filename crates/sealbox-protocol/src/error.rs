//! Error types for protocol operations.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Cryptographic operation failed.
    #[error("Crypto error: {0}")]
    Crypto(#[from] sealbox_crypto::CryptoError),

    /// Ciphertext does not match the wire format (wrong field count,
    /// empty field, undecodable or wrong-length field).
    #[error("Malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    /// Structured record serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
