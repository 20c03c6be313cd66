//! Property-based tests for cryptographic primitives.
//!
//! These tests verify primitive-layer invariants hold for arbitrary
//! inputs:
//!
//! - Roundtrip properties (encrypt/decrypt, encode/decode)
//! - Commutativity of key agreement
//! - Determinism of key derivation
//! - Rejection of tampered or wrong-key input

use proptest::prelude::*;

use crate::aead::{decrypt, encrypt, AeadKey, AeadNonce, TAG_SIZE};
use crate::encoding;
use crate::kdf::derive_hkdf_key;
use crate::x25519::generate_key_pair;

proptest! {
    /// Encryption followed by decryption returns the original plaintext.
    #[test]
    fn aead_roundtrip(plaintext: Vec<u8>) {
        let key = AeadKey::generate();
        let nonce = AeadNonce::generate();
        let sealed = encrypt(&key, &nonce, &plaintext).unwrap();
        let opened = decrypt(&key, &nonce, &sealed).unwrap();
        prop_assert_eq!(plaintext, opened);
    }

    /// Ciphertext length is always plaintext length plus the tag.
    #[test]
    fn aead_length_overhead(plaintext in prop::collection::vec(any::<u8>(), 0..2048)) {
        let key = AeadKey::generate();
        let nonce = AeadNonce::generate();
        let sealed = encrypt(&key, &nonce, &plaintext).unwrap();
        prop_assert_eq!(sealed.len(), plaintext.len() + TAG_SIZE);
    }

    /// Decryption with a different key always fails.
    #[test]
    fn aead_wrong_key_fails(plaintext in prop::collection::vec(any::<u8>(), 0..256)) {
        let key1 = AeadKey::generate();
        let key2 = AeadKey::generate();
        let nonce = AeadNonce::generate();

        let sealed = encrypt(&key1, &nonce, &plaintext).unwrap();
        prop_assert!(decrypt(&key2, &nonce, &sealed).is_err());
    }

    /// Flipping any single bit of the sealed output is detected.
    #[test]
    fn aead_bit_flip_detected(
        plaintext in prop::collection::vec(any::<u8>(), 0..256),
        flip_byte in any::<prop::sample::Index>(),
        flip_bit in 0u8..8,
    ) {
        let key = AeadKey::generate();
        let nonce = AeadNonce::generate();

        let mut sealed = encrypt(&key, &nonce, &plaintext).unwrap();
        let idx = flip_byte.index(sealed.len());
        sealed[idx] ^= 1 << flip_bit;

        prop_assert!(decrypt(&key, &nonce, &sealed).is_err());
    }

    /// Key agreement commutes for independently generated key pairs.
    #[test]
    fn x25519_commutes(_seed in any::<u64>()) {
        let (a_public, a_private) = generate_key_pair();
        let (b_public, b_private) = generate_key_pair();

        let ab = a_private.diffie_hellman(&b_public).unwrap();
        let ba = b_private.diffie_hellman(&a_public).unwrap();
        prop_assert_eq!(ab.as_bytes(), ba.as_bytes());
    }

    /// HKDF is a pure function of its inputs.
    #[test]
    fn hkdf_deterministic(
        ikm in prop::collection::vec(any::<u8>(), 1..64),
        salt in prop::collection::vec(any::<u8>(), 0..64),
        info in prop::collection::vec(any::<u8>(), 0..64),
        len in 1usize..128,
    ) {
        let k1 = derive_hkdf_key(&ikm, &salt, &info, len).unwrap();
        let k2 = derive_hkdf_key(&ikm, &salt, &info, len).unwrap();
        prop_assert_eq!(&k1, &k2);
        prop_assert_eq!(k1.len(), len);
    }

    /// Base64 roundtrips arbitrary bytes.
    #[test]
    fn base64_roundtrip(data: Vec<u8>) {
        let text = encoding::encode(&data);
        prop_assert_eq!(encoding::decode(&text).unwrap(), data);
    }
}
