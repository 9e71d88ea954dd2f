//! # Persistence Backend
//!
//! The [`Backend`] trait is the seam between the store and its durable
//! image. An image is a flat `digest → plaintext` map serialized as a single
//! JSON object followed by a newline. There is no schema version: format
//! changes are breaking.

use std::collections::BTreeMap;

use sharesecret_core::BackendError;

/// The full mapping of digest to plaintext.
pub type Image = BTreeMap<String, String>;

/// Durable storage for the store image.
///
/// `save` always replaces the whole image; there is no incremental mode.
pub trait Backend: Send + Sync + std::fmt::Debug {
    /// Read the current durable image.
    fn load(&self) -> Result<Image, BackendError>;

    /// Replace the durable image with `image`.
    fn save(&self, image: &Image) -> Result<(), BackendError>;
}

/// Decode a serialized image.
///
/// Empty or whitespace-only content is an empty image, not a decode error.
pub fn decode_image(bytes: &[u8]) -> Result<Image, BackendError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Image::new());
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode an image into its on-disk representation.
pub fn encode_image(image: &Image) -> Result<Vec<u8>, BackendError> {
    let mut bytes = serde_json::to_vec(image)?;
    bytes.push(b'\n');
    Ok(bytes)
}
