//! # sealbox-crypto
//!
//! Cryptographic primitive composition for the sealbox hybrid encryption
//! schemes.
//!
//! This crate provides the typed building blocks the protocol layer
//! composes:
//! - **X25519** key agreement for ECIES recipients
//! - **AES-256-GCM** authenticated encryption
//! - **HKDF-SHA256**, **PBKDF2** and **Argon2id** key derivation
//! - **RSA-OAEP (SHA-256)** session-key wrapping
//! - **base64** text encoding of wire fields
//!
//! ## Security
//!
//! All secret data uses `zeroize` for secure memory cleanup. Private key
//! types are not cloneable and redact their `Debug` output.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aead;
pub mod encoding;
pub mod error;
pub mod kdf;
pub mod rsa;
pub mod x25519;

#[cfg(test)]
mod proptests;

pub use aead::{AeadKey, AeadNonce, EncryptedData, KEY_SIZE, NONCE_SIZE, TAG_SIZE};
pub use error::{CryptoError, Result};
pub use kdf::{derive_argon2id_key, derive_hkdf_key, derive_pbkdf2_key};
pub use rsa::{RsaKeyPair, RsaPrivateKey, RsaPublicKey, DEFAULT_MODULUS_BITS};
pub use x25519::{
    generate_key_pair, SharedSecret, X25519EphemeralKeyPair, X25519PrivateKey, X25519PublicKey,
    PUBLIC_KEY_SIZE,
};
