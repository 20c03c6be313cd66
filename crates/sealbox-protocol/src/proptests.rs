//! Property-based tests for the hybrid encryption schemes.
//!
//! These tests verify protocol invariants hold for arbitrary inputs:
//!
//! - Roundtrips preserve message content for both schemes
//! - Ciphertexts are unique per call; plaintexts are not
//! - Any single-character mutation of a wire string is rejected
//! - Format validation rejects malformed strings before any crypto

use std::sync::OnceLock;

use proptest::prelude::*;

use sealbox_crypto::{generate_key_pair, RsaKeyPair};

use crate::ecies::{self, EciesCiphertext};
use crate::envelope;
use crate::error::ProtocolError;
use crate::params::FIELD_SEPARATOR;

/// One RSA key pair shared across envelope cases; generation dominates
/// the runtime otherwise.
fn rsa_pair() -> &'static RsaKeyPair {
    static PAIR: OnceLock<RsaKeyPair> = OnceLock::new();
    PAIR.get_or_init(|| RsaKeyPair::generate(2048).unwrap())
}

/// Replace the character at `index` with a different one.
fn mutate_char(wire: &str, index: usize) -> String {
    let mut chars: Vec<char> = wire.chars().collect();
    chars[index] = if chars[index] == 'A' { 'B' } else { 'A' };
    chars.into_iter().collect()
}

proptest! {
    /// ECIES roundtrips arbitrary byte strings, including empty ones.
    #[test]
    fn ecies_roundtrip(message: Vec<u8>) {
        let (public, private) = generate_key_pair();
        let sealed = ecies::encrypt(&public, &message).unwrap();
        prop_assert_eq!(ecies::decrypt(&private, &sealed).unwrap(), message);
    }

    /// The wire-string form roundtrips as well.
    #[test]
    fn ecies_wire_roundtrip(message in prop::collection::vec(any::<u8>(), 0..2048)) {
        let (public, private) = generate_key_pair();
        let wire = ecies::encrypt(&public, &message).unwrap().encode();
        prop_assert_eq!(ecies::decrypt_str(&private, &wire).unwrap(), message);
    }

    /// Two encryptions of the same message never share a wire value,
    /// yet both decrypt to the same plaintext.
    #[test]
    fn ecies_nondeterministic(message in prop::collection::vec(any::<u8>(), 0..256)) {
        let (public, private) = generate_key_pair();
        let wire1 = ecies::encrypt(&public, &message).unwrap().encode();
        let wire2 = ecies::encrypt(&public, &message).unwrap().encode();

        prop_assert_ne!(&wire1, &wire2);
        prop_assert_eq!(ecies::decrypt_str(&private, &wire1).unwrap(), message.clone());
        prop_assert_eq!(ecies::decrypt_str(&private, &wire2).unwrap(), message);
    }

    /// Decryption with any other private key fails.
    #[test]
    fn ecies_wrong_key_fails(message in prop::collection::vec(any::<u8>(), 0..256)) {
        let (public, _) = generate_key_pair();
        let (_, wrong_private) = generate_key_pair();

        let sealed = ecies::encrypt(&public, &message).unwrap();
        prop_assert!(ecies::decrypt(&wrong_private, &sealed).is_err());
    }

    /// Changing any single character of an ECIES wire string makes
    /// decryption fail - never silently yields a wrong plaintext.
    #[test]
    fn ecies_wire_mutation_rejected(
        message in prop::collection::vec(any::<u8>(), 0..256),
        index in any::<prop::sample::Index>(),
    ) {
        let (public, private) = generate_key_pair();
        let wire = ecies::encrypt(&public, &message).unwrap().encode();

        let mutated = mutate_char(&wire, index.index(wire.len()));
        prop_assert!(ecies::decrypt_str(&private, &mutated).is_err());
    }

    /// The structured binary record roundtrips.
    #[test]
    fn ecies_record_roundtrip(message in prop::collection::vec(any::<u8>(), 0..1024)) {
        let (public, private) = generate_key_pair();
        let sealed = ecies::encrypt(&public, &message).unwrap();

        let restored = EciesCiphertext::from_bytes(&sealed.to_bytes().unwrap()).unwrap();
        prop_assert_eq!(ecies::decrypt(&private, &restored).unwrap(), message);
    }

    /// Strings without exactly four fields are rejected as malformed
    /// before any cryptographic operation sees them.
    #[test]
    fn ecies_wrong_field_count_rejected(
        fields in prop::collection::vec("[A-Za-z0-9+/=]{1,24}", 1..8),
    ) {
        prop_assume!(fields.len() != 4);
        let input = fields.join(FIELD_SEPARATOR);
        let result = EciesCiphertext::parse(&input);
        prop_assert!(matches!(result, Err(ProtocolError::MalformedCiphertext(_))));
    }

    /// The envelope scheme roundtrips arbitrary byte strings.
    #[test]
    fn envelope_roundtrip(message in prop::collection::vec(any::<u8>(), 0..4096)) {
        let pair = rsa_pair();
        let sealed = envelope::encrypt(&pair.public, &message).unwrap();
        prop_assert_eq!(envelope::decrypt(&pair.private, &sealed).unwrap(), message);
    }

    /// Changing any single character of an envelope wire string makes
    /// decryption fail.
    #[test]
    fn envelope_wire_mutation_rejected(
        message in prop::collection::vec(any::<u8>(), 0..512),
        index in any::<prop::sample::Index>(),
    ) {
        let pair = rsa_pair();
        let sealed = envelope::encrypt(&pair.public, &message).unwrap();

        let mutated = mutate_char(&sealed, index.index(sealed.len()));
        prop_assert!(envelope::decrypt(&pair.private, &mutated).is_err());
    }
}
