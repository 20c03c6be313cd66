//! RSA envelope encryption.
//!
//! Seals a message of any size for the holder of an RSA private key: a
//! fresh random AES-256 session key encrypts the message body, and only
//! that fixed-size key passes through RSA-OAEP. This sidesteps RSA's
//! payload ceiling entirely.
//!
//! ## Wire format
//!
//! ```text
//! base64(rsa_wrapped_key) __n__ base64(nonce || sealed_message)
//! ```
//!
//! The wrapped key comes first; the order is a wire-format contract.

use zeroize::Zeroize;

use sealbox_crypto::aead::{self, AeadKey, AeadNonce, EncryptedData};
use sealbox_crypto::encoding;
use sealbox_crypto::{RsaPrivateKey, RsaPublicKey};

use crate::error::{ProtocolError, Result};
use crate::params::{ENVELOPE_FIELD_COUNT, ENVELOPE_KEY_SIZE, FIELD_SEPARATOR};

/// Encrypt a message of any size under an RSA public key.
///
/// Performs the complete envelope encryption process:
///
/// 1. Generates a fresh random AES-256 session key - no key agreement
/// 2. Seals the message under the session key with a fresh nonce
/// 3. Wraps the raw session key bytes with RSA-OAEP
/// 4. Joins `wrapped_key` and `nonce || sealed_message` as base64 fields
///
/// # Errors
///
/// Returns `ProtocolError::Crypto` if RSA wrapping or AEAD sealing fails.
pub fn encrypt(recipient: &RsaPublicKey, message: &[u8]) -> Result<String> {
    let session_key = AeadKey::generate();
    let nonce = AeadNonce::generate();

    let sealed = aead::encrypt(&session_key, &nonce, message)?;
    let sealed_message = EncryptedData {
        nonce,
        ciphertext: sealed,
    }
    .to_bytes();

    let wrapped_key = recipient.encrypt(session_key.as_bytes())?;

    Ok([
        encoding::encode(&wrapped_key),
        encoding::encode(&sealed_message),
    ]
    .join(FIELD_SEPARATOR))
}

/// Decrypt an envelope produced by [`encrypt`].
///
/// Format validation runs before any cryptographic operation: the input
/// must split into exactly two non-empty base64 fields.
///
/// # Errors
///
/// - `ProtocolError::MalformedCiphertext` for a wrong field count, empty
///   field, undecodable field, or a session key that is not 32 bytes
/// - `ProtocolError::Crypto` carrying `DecryptionFailure` when RSA
///   unwrapping fails, or `AuthenticationFailure` when the message body
///   was tampered with
pub fn decrypt(private: &RsaPrivateKey, envelope: &str) -> Result<Vec<u8>> {
    let parts: Vec<&str> = envelope.split(FIELD_SEPARATOR).collect();
    if parts.len() != ENVELOPE_FIELD_COUNT {
        return Err(ProtocolError::MalformedCiphertext(format!(
            "expected {} fields, got {}",
            ENVELOPE_FIELD_COUNT,
            parts.len()
        )));
    }
    if let Some(index) = parts.iter().position(|part| part.is_empty()) {
        return Err(ProtocolError::MalformedCiphertext(format!(
            "field {index} is empty"
        )));
    }

    let wrapped_key = encoding::decode(parts[0])
        .map_err(|e| ProtocolError::MalformedCiphertext(e.to_string()))?;
    let sealed_message = encoding::decode(parts[1])
        .map_err(|e| ProtocolError::MalformedCiphertext(e.to_string()))?;

    let mut key_bytes = private.decrypt(&wrapped_key)?;
    if key_bytes.len() != ENVELOPE_KEY_SIZE {
        key_bytes.zeroize();
        return Err(ProtocolError::MalformedCiphertext(format!(
            "session key must be {} bytes, got {}",
            ENVELOPE_KEY_SIZE,
            key_bytes.len()
        )));
    }
    let session_key = AeadKey::from_bytes(&key_bytes)?;
    key_bytes.zeroize();

    let data = EncryptedData::from_bytes(&sealed_message)?;
    Ok(aead::decrypt(&session_key, &data.nonce, &data.ciphertext)?)
}
