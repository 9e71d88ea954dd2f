//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The secret store is blocking: its lock is held across file I/O. Handlers
//! never touch it directly on an async worker; they go through
//! [`AppState::with_store`], which runs the operation on Tokio's blocking
//! pool.

use std::sync::Arc;
use std::time::Duration;

use sharesecret_core::StoreError;
use sharesecret_store::SecretStore;

use crate::error::AppError;

/// Largest accepted request body (1 MiB).
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// HTTP-layer settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Requests running longer than this are answered with 408.
    pub request_timeout: Duration,
    /// Requests with larger bodies are answered with 413.
    pub body_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(15),
            body_limit: MAX_BODY_BYTES,
        }
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The burn-after-read store.
    pub secrets: Arc<SecretStore>,
    /// HTTP-layer settings.
    pub config: AppConfig,
}

impl AppState {
    /// Create state around `store` with default settings.
    pub fn new(store: SecretStore) -> Self {
        Self::with_config(store, AppConfig::default())
    }

    /// Create state around `store` with explicit settings.
    pub fn with_config(store: SecretStore, config: AppConfig) -> Self {
        Self {
            secrets: Arc::new(store),
            config,
        }
    }

    /// Run a store operation on the blocking pool.
    ///
    /// The operation runs to completion even if the calling request is
    /// dropped, so a timed-out request never leaves a half-applied mutation.
    pub async fn with_store<R, F>(&self, op: F) -> Result<R, AppError>
    where
        F: FnOnce(&SecretStore) -> Result<R, StoreError> + Send + 'static,
        R: Send + 'static,
    {
        let store = Arc::clone(&self.secrets);
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| AppError::Internal(format!("store task failed: {e}")))?
            .map_err(AppError::from)
    }
}
