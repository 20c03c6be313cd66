//! Protocol parameters and wire-format constants.
//!
//! These are fixed for the lifetime of the protocol version. Changing any
//! of them breaks wire compatibility with existing ciphertexts.

/// Separator between base64 fields in the concatenated wire formats.
///
/// `_` is outside the standard base64 alphabet, so this token can never
/// occur inside a validly encoded field and needs no escaping.
pub const FIELD_SEPARATOR: &str = "__n__";

/// HKDF info label binding derived keys to the ECIES scheme.
pub const ECIES_HKDF_INFO: &[u8] = b"sealbox-ecies-v1";

/// Length of the AEAD key derived for each message, in bytes.
pub const DERIVED_KEY_SIZE: usize = 32;

/// Number of fields in the ECIES wire format.
pub const ECIES_FIELD_COUNT: usize = 4;

/// Number of fields in the envelope wire format.
pub const ENVELOPE_FIELD_COUNT: usize = 2;

/// Length of the random session key wrapped by the envelope scheme.
pub const ENVELOPE_KEY_SIZE: usize = 32;

/// Maximum size of a serialized ECIES record accepted for decoding.
///
/// Pre-deserialization size validation prevents crafted input from
/// forcing excessive allocation during bincode deserialization.
pub const MAX_RECORD_SIZE: usize = 64 * 1024 * 1024;
