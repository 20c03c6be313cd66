//! Elliptic-curve integrated encryption (ECIES).
//!
//! Single-shot asymmetric encryption to the holder of an X25519 private
//! key: a fresh ephemeral key pair performs Diffie-Hellman with the
//! recipient's public key, HKDF-SHA256 turns the shared secret into an
//! AES-256-GCM key, and the sealed message is framed as four fields.
//!
//! ## Wire format
//!
//! ```text
//! base64(ephemeral_public_key) __n__ base64(nonce) __n__ base64(ciphertext) __n__ base64(mac)
//! ```
//!
//! The ciphertext field is empty when the plaintext was empty; the other
//! three fields are always non-empty. A structured record form and a
//! length-prefixed binary form are also available, bypassing the
//! separator-joined framing entirely.
//!
//! ## Security Notes
//!
//! - A fresh ephemeral key pair and nonce are used per message, so two
//!   encryptions of the same plaintext never produce the same wire value
//! - The ephemeral public key doubles as the HKDF salt, binding the
//!   derived key to this specific message instance
//! - Derived keys are zeroized as soon as the AEAD call returns

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use sealbox_crypto::aead::{self, AeadKey, AeadNonce, TAG_SIZE};
use sealbox_crypto::encoding;
use sealbox_crypto::kdf::derive_hkdf_key;
use sealbox_crypto::{X25519EphemeralKeyPair, X25519PrivateKey, X25519PublicKey};

use crate::error::{ProtocolError, Result};
use crate::params::{
    DERIVED_KEY_SIZE, ECIES_FIELD_COUNT, ECIES_HKDF_INFO, FIELD_SEPARATOR, MAX_RECORD_SIZE,
};

/// Output representation of an ECIES encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EciesFormat {
    /// Four base64 fields joined by the reserved separator (the default).
    #[default]
    Base64,
    /// Length-prefixed binary record.
    Bytes,
    /// Structured record, no framing applied.
    Record,
}

/// An ECIES ciphertext produced by one encryption call.
///
/// Constructed fresh per encrypt call and consumed exactly once by the
/// matching decrypt call; never mutated.
#[derive(Clone, Serialize, Deserialize)]
pub struct EciesCiphertext {
    /// Single-use ephemeral public key for this message.
    pub ephemeral_public_key: X25519PublicKey,
    /// AEAD nonce for this message.
    pub nonce: AeadNonce,
    /// Ciphertext body; same length as the plaintext, possibly empty.
    pub ciphertext: Vec<u8>,
    /// AEAD authentication tag.
    pub mac: [u8; TAG_SIZE],
}

impl EciesCiphertext {
    /// Encode as the separator-joined base64 wire string.
    ///
    /// Field order is fixed: ephemeral public key, nonce, ciphertext, mac.
    pub fn encode(&self) -> String {
        [
            encoding::encode(self.ephemeral_public_key.as_bytes()),
            encoding::encode(self.nonce.as_bytes()),
            encoding::encode(&self.ciphertext),
            encoding::encode(&self.mac),
        ]
        .join(FIELD_SEPARATOR)
    }

    /// Parse a separator-joined base64 wire string.
    ///
    /// Validation happens before any cryptographic operation: the string
    /// must split into exactly four fields, only the ciphertext field may
    /// be empty, every field must decode as base64, and the fixed-length
    /// fields must have their exact sizes.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::MalformedCiphertext` on any violation.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split(FIELD_SEPARATOR).collect();
        if parts.len() != ECIES_FIELD_COUNT {
            return Err(ProtocolError::MalformedCiphertext(format!(
                "expected {} fields, got {}",
                ECIES_FIELD_COUNT,
                parts.len()
            )));
        }
        // The ciphertext field (index 2) is empty for empty plaintexts;
        // the key, nonce and mac fields must never be.
        for (index, part) in parts.iter().enumerate() {
            if part.is_empty() && index != 2 {
                return Err(ProtocolError::MalformedCiphertext(format!(
                    "field {index} is empty"
                )));
            }
        }

        let decoded: Vec<Vec<u8>> = parts
            .iter()
            .map(|part| {
                encoding::decode(part).map_err(|e| ProtocolError::MalformedCiphertext(e.to_string()))
            })
            .collect::<Result<_>>()?;

        let ephemeral_public_key = X25519PublicKey::from_bytes(&decoded[0])?;
        let nonce = AeadNonce::from_bytes(&decoded[1])?;
        let ciphertext = decoded[2].clone();
        if decoded[3].len() != TAG_SIZE {
            return Err(ProtocolError::MalformedCiphertext(format!(
                "mac must be {} bytes, got {}",
                TAG_SIZE,
                decoded[3].len()
            )));
        }
        let mut mac = [0u8; TAG_SIZE];
        mac.copy_from_slice(&decoded[3]);

        Ok(Self {
            ephemeral_public_key,
            nonce,
            ciphertext,
            mac,
        })
    }

    /// Serialize as a length-prefixed binary record.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| ProtocolError::Serialization(e.to_string()))
    }

    /// Deserialize from a length-prefixed binary record.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::MalformedCiphertext` if the input exceeds
    /// [`MAX_RECORD_SIZE`], or `ProtocolError::Serialization` if it does
    /// not decode as a record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MAX_RECORD_SIZE {
            return Err(ProtocolError::MalformedCiphertext(format!(
                "record of {} bytes exceeds maximum {}",
                bytes.len(),
                MAX_RECORD_SIZE
            )));
        }
        bincode::deserialize(bytes).map_err(|e| ProtocolError::Serialization(e.to_string()))
    }
}

impl std::fmt::Debug for EciesCiphertext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EciesCiphertext")
            .field("ephemeral_public_key", &self.ephemeral_public_key)
            .field("nonce", &self.nonce)
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

/// A sealed ECIES message in one of the supported representations.
///
/// The representation is carried as an explicit variant tag rather than
/// being inferred from a call-site type.
#[derive(Debug, Clone)]
pub enum EciesOutput {
    /// Separator-joined base64 wire string.
    Base64(String),
    /// Length-prefixed binary record.
    Bytes(Vec<u8>),
    /// Structured record.
    Record(EciesCiphertext),
}

/// Encrypt a message to the holder of an X25519 private key.
///
/// Performs the complete ECIES encryption process:
///
/// 1. Generates an ephemeral key pair, discarded after this call
/// 2. Performs Diffie-Hellman with the recipient's public key
/// 3. Derives the AEAD key with HKDF-SHA256, salted by the ephemeral
///    public key bytes under the fixed protocol label
/// 4. Generates a fresh 12-byte nonce
/// 5. Seals the message and splits the result into body and tag
///
/// # Errors
///
/// Returns `ProtocolError::Crypto` if the recipient key is invalid or
/// encryption fails.
pub fn encrypt(recipient: &X25519PublicKey, message: &[u8]) -> Result<EciesCiphertext> {
    let ephemeral = X25519EphemeralKeyPair::generate();
    let ephemeral_public = ephemeral.public_key().clone();

    let shared_secret = ephemeral.diffie_hellman(recipient)?;

    let mut key_bytes = derive_hkdf_key(
        shared_secret.as_bytes(),
        ephemeral_public.as_bytes(),
        ECIES_HKDF_INFO,
        DERIVED_KEY_SIZE,
    )?;
    let key = AeadKey::from_bytes(&key_bytes)?;
    key_bytes.zeroize();

    let nonce = AeadNonce::generate();
    let sealed = aead::encrypt(&key, &nonce, message)?;

    let body_len = sealed.len() - TAG_SIZE;
    let mut mac = [0u8; TAG_SIZE];
    mac.copy_from_slice(&sealed[body_len..]);

    Ok(EciesCiphertext {
        ephemeral_public_key: ephemeral_public,
        nonce,
        ciphertext: sealed[..body_len].to_vec(),
        mac,
    })
}

/// Encrypt a message and emit the requested representation.
pub fn encrypt_with_format(
    recipient: &X25519PublicKey,
    message: &[u8],
    format: EciesFormat,
) -> Result<EciesOutput> {
    let sealed = encrypt(recipient, message)?;
    Ok(match format {
        EciesFormat::Base64 => EciesOutput::Base64(sealed.encode()),
        EciesFormat::Bytes => EciesOutput::Bytes(sealed.to_bytes()?),
        EciesFormat::Record => EciesOutput::Record(sealed),
    })
}

/// Decrypt an ECIES ciphertext record.
///
/// Reverses [`encrypt`]: Diffie-Hellman with the ephemeral public key,
/// the same HKDF derivation, then AEAD-opens the recombined body and tag.
///
/// # Errors
///
/// Returns `ProtocolError::Crypto` carrying `AuthenticationFailure`
/// unchanged when the tag does not verify (tampering, wrong recipient
/// key, or truncation).
pub fn decrypt(private: &X25519PrivateKey, sealed: &EciesCiphertext) -> Result<Vec<u8>> {
    let shared_secret = private.diffie_hellman(&sealed.ephemeral_public_key)?;

    let mut key_bytes = derive_hkdf_key(
        shared_secret.as_bytes(),
        sealed.ephemeral_public_key.as_bytes(),
        ECIES_HKDF_INFO,
        DERIVED_KEY_SIZE,
    )?;
    let key = AeadKey::from_bytes(&key_bytes)?;
    key_bytes.zeroize();

    let mut combined = Vec::with_capacity(sealed.ciphertext.len() + TAG_SIZE);
    combined.extend_from_slice(&sealed.ciphertext);
    combined.extend_from_slice(&sealed.mac);

    Ok(aead::decrypt(&key, &sealed.nonce, &combined)?)
}

/// Parse and decrypt a separator-joined base64 wire string.
///
/// Format validation runs before any cryptographic operation.
pub fn decrypt_str(private: &X25519PrivateKey, input: &str) -> Result<Vec<u8>> {
    let sealed = EciesCiphertext::parse(input)?;
    decrypt(private, &sealed)
}

/// Decrypt any [`EciesOutput`] representation.
pub fn decrypt_output(private: &X25519PrivateKey, output: &EciesOutput) -> Result<Vec<u8>> {
    match output {
        EciesOutput::Base64(text) => decrypt_str(private, text),
        EciesOutput::Bytes(bytes) => decrypt(private, &EciesCiphertext::from_bytes(bytes)?),
        EciesOutput::Record(record) => decrypt(private, record),
    }
}
