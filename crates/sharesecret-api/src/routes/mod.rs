//! # Route Modules
//!
//! Each module exposes a `router()` returning `Router<AppState>`; the
//! routers are merged in [`crate::app`].

pub mod secrets;
