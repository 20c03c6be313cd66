//! Key derivation functions.
//!
//! HKDF-SHA256 turns Diffie-Hellman shared secrets into AEAD keys for the
//! hybrid schemes. PBKDF2 and Argon2id cover password-based derivation for
//! key-storage use cases; they are peer operations with the same shape
//! (input material, salt, parameters, output length) but are not used by
//! the hybrid schemes themselves.

use argon2::{Algorithm, Argon2, Params, Version};
use hkdf::Hkdf;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::{CryptoError, Result};

/// Derive key material with HKDF-SHA256 (extract-then-expand).
///
/// Deterministic: identical inputs always produce identical output.
/// Empty `salt` and `info` are valid.
///
/// # Errors
///
/// Fails only when `output_len` exceeds the HKDF expansion ceiling
/// (255 times the hash length).
///
/// # Example
///
/// ```
/// use sealbox_crypto::kdf::derive_hkdf_key;
///
/// let key = derive_hkdf_key(b"input keying material", b"salt", b"context", 32).unwrap();
/// assert_eq!(key.len(), 32);
/// ```
pub fn derive_hkdf_key(ikm: &[u8], salt: &[u8], info: &[u8], output_len: usize) -> Result<Vec<u8>> {
    let hk = Hkdf::<Sha256>::new(Some(salt), ikm);
    let mut okm = vec![0u8; output_len];
    hk.expand(info, &mut okm)
        .map_err(|_| CryptoError::KeyDerivation(format!("invalid HKDF output length {output_len}")))?;
    Ok(okm)
}

/// Derive key material with PBKDF2-HMAC-SHA256.
///
/// Deterministic for fixed inputs; `iterations` controls the work factor.
pub fn derive_pbkdf2_key(password: &[u8], salt: &[u8], iterations: u32, output_len: usize) -> Vec<u8> {
    let mut okm = vec![0u8; output_len];
    pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut okm);
    okm
}

/// Derive key material with Argon2id.
///
/// `memory_cost` is in KiB, `time_cost` in passes, `parallelism` in lanes.
///
/// # Errors
///
/// Returns `CryptoError::KeyDerivation` when the parameter set or salt is
/// rejected by Argon2 (e.g. salt shorter than 8 bytes).
pub fn derive_argon2id_key(
    password: &[u8],
    salt: &[u8],
    time_cost: u32,
    memory_cost: u32,
    parallelism: u32,
    output_len: usize,
) -> Result<Vec<u8>> {
    let params = Params::new(memory_cost, time_cost, parallelism, Some(output_len))
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut okm = vec![0u8; output_len];
    argon2
        .hash_password_into(password, salt, &mut okm)
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;
    Ok(okm)
}
