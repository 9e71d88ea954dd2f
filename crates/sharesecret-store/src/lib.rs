//! # sharesecret-store — Burn-After-Read Secret Store
//!
//! The store maps [`SecretDigest`](sharesecret_core::SecretDigest)s to
//! plaintext. A secret is added under the digest of its own content and is
//! erased by the first read that returns it.
//!
//! - **[`SecretStore`]** — the single serialization point for all
//!   mutations. Every `add`/`get` runs its reload → mutate → save sequence
//!   under one lock.
//! - **[`Backend`]** — the durable image of the mapping. [`FileBackend`]
//!   keeps it in one JSON file; [`MemoryBackend`] keeps it in process.
//!
//! ## Consistency
//!
//! The backend is the source of truth. The in-memory image is a cache that
//! is reloaded inside the critical section before every operation and only
//! reflects a mutation once the backend has accepted it.

pub mod backend;
pub mod file;
pub mod memory;
pub mod store;

pub use backend::{Backend, Image};
pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use store::SecretStore;
