//! X25519 Diffie-Hellman key agreement.
//!
//! Recipient identities are X25519 key pairs; the ECIES scheme pairs a
//! fresh ephemeral key with the recipient's static public key.
//!
//! ## Security Notes
//!
//! - Private keys are zeroized on drop
//! - Uses OsRng for key generation
//! - Shared secrets are zeroized after use and rejected when the peer
//!   point has low order (all-zero Diffie-Hellman output)

use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use x25519_dalek::{EphemeralSecret, PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{CryptoError, Result};

/// Size of an X25519 public key in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of an X25519 private key in bytes.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of a shared secret in bytes.
pub const SHARED_SECRET_SIZE: usize = 32;

/// X25519 public key identifying a recipient.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct X25519PublicKey {
    bytes: [u8; PUBLIC_KEY_SIZE],
}

impl X25519PublicKey {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; PUBLIC_KEY_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Get the key as bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.bytes
    }

    /// Convert to byte array.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.bytes
    }
}

impl std::fmt::Debug for X25519PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X25519PublicKey({:02x}{:02x}..)",
            self.bytes[0], self.bytes[1]
        )
    }
}

impl From<PublicKey> for X25519PublicKey {
    fn from(key: PublicKey) -> Self {
        Self {
            bytes: key.to_bytes(),
        }
    }
}

impl From<&X25519PublicKey> for PublicKey {
    fn from(key: &X25519PublicKey) -> Self {
        PublicKey::from(key.bytes)
    }
}

/// X25519 private key held by the decrypting party.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct X25519PrivateKey {
    bytes: [u8; PRIVATE_KEY_SIZE],
}

impl X25519PrivateKey {
    /// Generate a new random private key.
    pub fn generate() -> Self {
        let secret = StaticSecret::random_from_rng(OsRng);
        Self {
            bytes: secret.to_bytes(),
        }
    }

    /// Create from raw bytes.
    ///
    /// # Security
    ///
    /// Only use bytes from a secure source.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: PRIVATE_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; PRIVATE_KEY_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Re-derive the corresponding public key.
    pub fn public_key(&self) -> X25519PublicKey {
        let secret = StaticSecret::from(self.bytes);
        let public = PublicKey::from(&secret);
        X25519PublicKey::from(public)
    }

    /// Perform Diffie-Hellman key agreement with a peer's public key.
    ///
    /// Commutative: `a.diffie_hellman(&b_pub) == b.diffie_hellman(&a_pub)`
    /// for any valid pair of key pairs.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKey` if the peer key is a low-order
    /// point, which would yield an all-zero shared secret.
    pub fn diffie_hellman(&self, peer_public: &X25519PublicKey) -> Result<SharedSecret> {
        let secret = StaticSecret::from(self.bytes);
        let peer = PublicKey::from(peer_public);
        let shared = secret.diffie_hellman(&peer);
        if !shared.was_contributory() {
            return Err(CryptoError::InvalidKey("low-order public key".into()));
        }
        Ok(SharedSecret {
            bytes: shared.to_bytes(),
        })
    }

    /// Get raw bytes (for serialization).
    ///
    /// # Security
    ///
    /// Handle with care - this exposes the private key.
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for X25519PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X25519PrivateKey([REDACTED])")
    }
}

// Clone intentionally NOT implemented for X25519PrivateKey to avoid
// accidental duplication of secret material in memory.

/// Generate a fresh recipient key pair.
pub fn generate_key_pair() -> (X25519PublicKey, X25519PrivateKey) {
    let private = X25519PrivateKey::generate();
    let public = private.public_key();
    (public, private)
}

/// X25519 ephemeral key pair for single-use key agreement.
///
/// Used for per-message encryption where the private key is discarded
/// immediately after deriving the shared secret.
pub struct X25519EphemeralKeyPair {
    secret: EphemeralSecret,
    public: X25519PublicKey,
}

impl X25519EphemeralKeyPair {
    /// Generate a new ephemeral key pair.
    pub fn generate() -> Self {
        let secret = EphemeralSecret::random_from_rng(OsRng);
        let public_key = PublicKey::from(&secret);
        Self {
            secret,
            public: X25519PublicKey::from(public_key),
        }
    }

    /// Get the public key.
    pub fn public_key(&self) -> &X25519PublicKey {
        &self.public
    }

    /// Perform Diffie-Hellman and consume the ephemeral key.
    ///
    /// The private key is destroyed after this operation.
    pub fn diffie_hellman(self, peer_public: &X25519PublicKey) -> Result<SharedSecret> {
        let peer = PublicKey::from(peer_public);
        let shared = self.secret.diffie_hellman(&peer);
        if !shared.was_contributory() {
            return Err(CryptoError::InvalidKey("low-order public key".into()));
        }
        Ok(SharedSecret {
            bytes: shared.to_bytes(),
        })
    }
}

impl std::fmt::Debug for X25519EphemeralKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X25519EphemeralKeyPair {{ public: {:?} }}", self.public)
    }
}

/// Shared secret derived from Diffie-Hellman key agreement.
///
/// This should be used as input to a KDF, not directly as an encryption key.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    bytes: [u8; SHARED_SECRET_SIZE],
}

impl SharedSecret {
    /// Get the shared secret as bytes.
    ///
    /// # Security
    ///
    /// Use this to derive actual encryption keys via a KDF.
    /// Don't use directly as an encryption key.
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        &self.bytes
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        // Constant-time comparison; shared secrets are secret material
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for SharedSecret {}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SharedSecret([REDACTED])")
    }
}
