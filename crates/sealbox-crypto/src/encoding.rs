//! Base64 text encoding of binary fields.
//!
//! All wire-format fields are standard-alphabet base64. Centralizing the
//! engine choice here keeps the alphabet a single protocol-wide decision.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::{CryptoError, Result};

/// Encode bytes as standard-alphabet base64.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard-alphabet base64 text.
///
/// # Errors
///
/// Returns `CryptoError::InvalidEncoding` for any malformed input.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))
}
