#![deny(missing_docs)]

//! # sharesecret-core — Foundational Types for sharesecret
//!
//! Defines the types every other crate in the workspace depends on. It has
//! no internal crate dependencies — only `serde`, `serde_json`, `thiserror`
//! and `md5` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Identifiers are derived, never assigned.** A [`SecretDigest`] can only
//!    be produced from plaintext via [`SecretDigest::of`]. Identical plaintext
//!    always yields the identical identifier.
//!
//! 2. **One error taxonomy.** [`BackendError`] covers the durable image
//!    (I/O and decode failures); [`StoreError`] layers the burn-after-read
//!    outcomes (`NotFound`, `Persistence`) on top. No `Box<dyn Error>`, no
//!    `.unwrap()` outside tests.

pub mod digest;
pub mod error;

pub use digest::SecretDigest;
pub use error::{BackendError, StoreError};
