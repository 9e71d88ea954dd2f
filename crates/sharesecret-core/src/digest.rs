//! # Content-Addressed Secret Digests
//!
//! [`SecretDigest`] is the opaque identifier handed to the producer of a
//! secret. It is the lowercase hex MD5 of the plaintext's UTF-8 bytes: a
//! fixed 32-character string.
//!
//! ## Scope
//!
//! The digest only has to keep distinct payloads from sharing an identifier
//! in practice. It is not a security primitive; nothing relies on preimage
//! or collision resistance.

use serde::Serialize;

/// Identifier of a stored secret, derived solely from its plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SecretDigest(String);

impl SecretDigest {
    /// Length of every digest in hex characters.
    pub const HEX_LEN: usize = 32;

    /// Compute the digest of a plaintext payload.
    ///
    /// Pure and infallible, including for the empty string.
    pub fn of(plaintext: &str) -> Self {
        Self(format!("{:x}", md5::compute(plaintext.as_bytes())))
    }

    /// Return the digest as a lowercase hex string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the digest, returning the owned hex string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SecretDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SecretDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for SecretDigest {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
