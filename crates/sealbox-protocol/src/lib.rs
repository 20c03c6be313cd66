//! # sealbox-protocol
//!
//! Hybrid public-key encryption schemes over the `sealbox-crypto`
//! primitives.
//!
//! Two independent schemes solve the same problem - confidential,
//! authenticated delivery of a message to the holder of a specific
//! private key - with different asymmetric primitives:
//!
//! - **ECIES** ([`ecies`]): X25519 ephemeral key agreement + HKDF-SHA256
//!   + AES-256-GCM, with fixed small overhead per message
//! - **RSA envelope** ([`envelope`]): a random AES-256 session key
//!   wrapped under RSA-OAEP, supporting messages of unbounded size and
//!   RSA-keyed counterparties
//!
//! Both emit text-safe wire strings of base64 fields joined by a
//! reserved separator (see [`params`]). All operations are synchronous,
//! pure transformations with no shared mutable state; any call may run
//! concurrently with any other.
//!
//! ## Example
//!
//! ```
//! use sealbox_crypto::generate_key_pair;
//! use sealbox_protocol::ecies;
//!
//! let (public, private) = generate_key_pair();
//! let sealed = ecies::encrypt(&public, b"Hello, world!").unwrap();
//! let opened = ecies::decrypt(&private, &sealed).unwrap();
//! assert_eq!(opened.as_slice(), b"Hello, world!");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecies;
pub mod envelope;
pub mod error;
pub mod params;

#[cfg(test)]
mod proptests;

pub use ecies::{EciesCiphertext, EciesFormat, EciesOutput};
pub use error::{ProtocolError, Result};
