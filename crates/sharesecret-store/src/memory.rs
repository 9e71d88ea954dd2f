//! # In-Memory Backend
//!
//! Holds the serialized image in process. It goes through the same
//! encode/decode path as [`FileBackend`](crate::FileBackend), so a store
//! built on it behaves identically apart from durability.

use parking_lot::Mutex;
use sharesecret_core::BackendError;

use crate::backend::{decode_image, encode_image, Backend, Image};

/// Non-durable backend that keeps the encoded image in memory.
#[derive(Default)]
pub struct MemoryBackend {
    bytes: Mutex<Vec<u8>>,
}

impl std::fmt::Debug for MemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBackend")
            .field("len", &self.bytes.try_lock().map(|bytes| bytes.len()))
            .finish()
    }
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend seeded with raw serialized content.
    ///
    /// The content is not validated until the first `load`.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Mutex::new(bytes.into()),
        }
    }
}

impl Backend for MemoryBackend {
    fn load(&self) -> Result<Image, BackendError> {
        decode_image(&self.bytes.lock())
    }

    fn save(&self, image: &Image) -> Result<(), BackendError> {
        let encoded = encode_image(image)?;
        *self.bytes.lock() = encoded;
        Ok(())
    }
}
