//! RSA-OAEP asymmetric encryption.
//!
//! Wraps short payloads (a symmetric session key) under an RSA public
//! key using OAEP with SHA-256. Keys use the fixed public exponent 65537
//! and export as SPKI / PKCS#8 DER.
//!
//! A fresh random 12-byte nonce is prepended to the OAEP ciphertext
//! (`nonce || oaep_ct`), matching the framing used by the curve-based
//! scheme. Interoperating implementations must reproduce this framing
//! exactly.

use ::rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use ::rsa::traits::PublicKeyParts;
use ::rsa::Oaep;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

use crate::aead::NONCE_SIZE;
use crate::{CryptoError, Result};

/// Default RSA modulus size in bits.
pub const DEFAULT_MODULUS_BITS: usize = 4096;

/// RSA public exponent (F4).
pub const PUBLIC_EXPONENT: u64 = 65537;

/// OAEP overhead for SHA-256: two hash blocks plus two bytes.
const OAEP_OVERHEAD: usize = 2 * 32 + 2;

/// RSA public key for wrapping session keys.
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    inner: ::rsa::RsaPublicKey,
}

impl RsaPublicKey {
    /// Parse from SPKI DER bytes.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let inner = ::rsa::RsaPublicKey::from_public_key_der(der)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Export as SPKI DER bytes.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        Ok(self
            .inner
            .to_public_key_der()
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?
            .into_vec())
    }

    /// Modulus size in bytes.
    pub fn modulus_size(&self) -> usize {
        self.inner.size()
    }

    /// Largest payload this key can encrypt directly.
    pub fn max_message_len(&self) -> usize {
        self.modulus_size() - OAEP_OVERHEAD
    }

    /// Encrypt a short payload with RSA-OAEP(SHA-256).
    ///
    /// Output framing is `nonce (12 bytes) || oaep_ciphertext`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::UnsupportedSize` when the payload exceeds
    /// the OAEP capacity for this modulus; oversized input is the
    /// envelope scheme's job, never chunked here.
    pub fn encrypt(&self, message: &[u8]) -> Result<Vec<u8>> {
        let max = self.max_message_len();
        if message.len() > max {
            return Err(CryptoError::UnsupportedSize {
                max,
                actual: message.len(),
            });
        }

        let sealed = self
            .inner
            .encrypt(&mut OsRng, Oaep::new::<Sha256>(), message)
            .map_err(|e| CryptoError::Encryption(e.to_string()))?;

        let mut nonce = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce);

        let mut out = Vec::with_capacity(NONCE_SIZE + sealed.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&sealed);
        Ok(out)
    }
}

impl std::fmt::Debug for RsaPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RsaPublicKey({} bits)", self.inner.n().bits())
    }
}

/// RSA private key held by the decrypting party.
///
/// The underlying key material is zeroized on drop by the `rsa` crate.
pub struct RsaPrivateKey {
    inner: ::rsa::RsaPrivateKey,
}

impl RsaPrivateKey {
    /// Parse from PKCS#8 DER bytes.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let inner = ::rsa::RsaPrivateKey::from_pkcs8_der(der)
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Export as PKCS#8 DER bytes.
    ///
    /// # Security
    ///
    /// Handle with care - this exposes the private key.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        Ok(self
            .inner
            .to_pkcs8_der()
            .map_err(|e| CryptoError::InvalidKey(e.to_string()))?
            .as_bytes()
            .to_vec())
    }

    /// Re-derive the corresponding public key.
    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey {
            inner: self.inner.to_public_key(),
        }
    }

    /// Decrypt a payload produced by [`RsaPublicKey::encrypt`].
    ///
    /// Strips the 12-byte nonce prefix, then OAEP-decrypts the remainder.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::DecryptionFailure` on OAEP padding failure,
    /// key mismatch, or input shorter than the nonce prefix.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() <= NONCE_SIZE {
            return Err(CryptoError::DecryptionFailure);
        }
        self.inner
            .decrypt(Oaep::new::<Sha256>(), &ciphertext[NONCE_SIZE..])
            .map_err(|_| CryptoError::DecryptionFailure)
    }
}

impl std::fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RsaPrivateKey([REDACTED])")
    }
}

// Clone intentionally NOT implemented for RsaPrivateKey to avoid
// accidental duplication of secret material in memory.

/// An RSA key pair.
#[derive(Debug)]
pub struct RsaKeyPair {
    /// The public half, safe to distribute.
    pub public: RsaPublicKey,
    /// The private half.
    pub private: RsaPrivateKey,
}

impl RsaKeyPair {
    /// Generate a key pair with the given modulus size.
    ///
    /// Long-running for large moduli (hundreds of milliseconds and up);
    /// callers in latency-sensitive contexts should offload this to a
    /// blocking-capable executor.
    pub fn generate(modulus_bits: usize) -> Result<Self> {
        let inner = ::rsa::RsaPrivateKey::new(&mut OsRng, modulus_bits)
            .map_err(|e| CryptoError::KeyGeneration(e.to_string()))?;
        let public = RsaPublicKey {
            inner: inner.to_public_key(),
        };
        Ok(Self {
            public,
            private: RsaPrivateKey { inner },
        })
    }

    /// Generate a key pair with the default 4096-bit modulus.
    pub fn generate_default() -> Result<Self> {
        Self::generate(DEFAULT_MODULUS_BITS)
    }
}
