//! # File Backend
//!
//! Keeps the store image in a single JSON file.
//!
//! ## Atomic Replacement
//!
//! [`save`](FileBackend::save) writes the full image to a temporary file in
//! the same directory, syncs it, and renames it over the target. A crash
//! mid-write leaves the previous image intact instead of a truncated file.
//! The replacement file is created with owner-only permissions.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use sharesecret_core::BackendError;
use tempfile::NamedTempFile;

use crate::backend::{decode_image, encode_image, Backend, Image};

/// Store image persisted as one JSON document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Open the backing file, creating it empty if it does not exist.
    ///
    /// An existing file is never truncated. The parent directory must
    /// already exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BackendError> {
        let path = path.into();
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        tracing::debug!(path = %path.display(), "opened store file");
        Ok(Self { path })
    }

    /// Return the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl Backend for FileBackend {
    fn load(&self) -> Result<Image, BackendError> {
        let bytes = fs::read(&self.path)?;
        decode_image(&bytes)
    }

    fn save(&self, image: &Image) -> Result<(), BackendError> {
        let bytes = encode_image(image)?;
        let mut tmp = NamedTempFile::new_in(self.dir())?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| BackendError::Io(e.error))?;
        Ok(())
    }
}
