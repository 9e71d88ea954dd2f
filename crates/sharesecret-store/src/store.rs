//! # Secret Store
//!
//! [`SecretStore`] owns the `digest → plaintext` image and its backend.
//!
//! ## Critical Section
//!
//! `add` and `get` each hold the store lock for the whole
//! reload → mutate → save sequence. Two concurrent `get`s on one digest
//! therefore cannot both observe it, and two concurrent `add`s cannot lose
//! each other's write. The lock is a blocking `parking_lot::Mutex`; async
//! callers must run store operations on a blocking thread.
//!
//! ## Commit Rule
//!
//! The in-memory image only keeps a mutation once `Backend::save` has
//! succeeded. On a failed save the mutation is undone before the error is
//! returned, and `get` never returns plaintext whose deletion was not
//! persisted.

use parking_lot::Mutex;
use sharesecret_core::{SecretDigest, StoreError};

use crate::backend::{Backend, Image};
use crate::file::FileBackend;

/// Content-addressed, burn-after-read secret store.
pub struct SecretStore {
    backend: Box<dyn Backend>,
    image: Mutex<Image>,
}

impl std::fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretStore")
            .field("backend", &self.backend)
            .field("records", &self.image.try_lock().map(|image| image.len()))
            .finish()
    }
}

impl SecretStore {
    /// Open a store over `backend`, loading its current image.
    pub fn open(backend: impl Backend + 'static) -> Result<Self, StoreError> {
        let image = backend.load()?;
        tracing::debug!(records = image.len(), "secret store opened");
        Ok(Self {
            backend: Box::new(backend),
            image: Mutex::new(image),
        })
    }

    /// Open a store backed by the JSON file at `path`, creating it if absent.
    pub fn open_file(path: impl Into<std::path::PathBuf>) -> Result<Self, StoreError> {
        Self::open(FileBackend::open(path)?)
    }

    /// Store `plaintext` and return its digest.
    ///
    /// Idempotent: if the digest is already present, it is returned without
    /// writing to the backend.
    pub fn add(&self, plaintext: &str) -> Result<SecretDigest, StoreError> {
        let digest = SecretDigest::of(plaintext);
        let mut image = self.image.lock();
        *image = self.backend.load()?;

        if image.contains_key(digest.as_str()) {
            tracing::debug!(%digest, "secret already stored");
            return Ok(digest);
        }

        image.insert(digest.to_string(), plaintext.to_owned());
        if let Err(err) = self.backend.save(&image) {
            image.remove(digest.as_str());
            tracing::warn!(%digest, error = %err, "add rolled back");
            return Err(StoreError::Persistence(err));
        }

        tracing::debug!(%digest, records = image.len(), "secret stored");
        Ok(digest)
    }

    /// Return the plaintext stored under `id` and erase it.
    ///
    /// The image is reloaded from the backend first, so records added or
    /// consumed through the same backing file by another store are seen.
    pub fn get(&self, id: &str) -> Result<String, StoreError> {
        let mut image = self.image.lock();
        *image = self.backend.load()?;

        let Some(plaintext) = image.remove(id) else {
            tracing::debug!(digest = id, "secret not found");
            return Err(StoreError::NotFound(id.to_owned()));
        };

        if let Err(err) = self.backend.save(&image) {
            image.insert(id.to_owned(), plaintext);
            tracing::warn!(digest = id, error = %err, "burn rolled back");
            return Err(StoreError::Persistence(err));
        }

        tracing::debug!(digest = id, records = image.len(), "secret revealed and burned");
        Ok(plaintext)
    }

    /// Number of records in the cached image as of the last operation.
    pub fn len(&self) -> usize {
        self.image.lock().len()
    }

    /// Whether the cached image is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
