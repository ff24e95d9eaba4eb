//! ---
//! vk_section: "04-offline-cache"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Offline resource caching with versioned purge."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
pub mod manifest;
pub mod policy;
pub mod store;
pub mod worker;

pub use manifest::AssetManifest;
pub use policy::FetchPolicy;
pub use store::{CacheStore, CachedResource};
pub use worker::{CacheWorker, FetchResponse, Fetcher, ServedFrom, WorkerMessage};

/// Result alias used throughout the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Error type for the cache subsystem.
///
/// Fetch-path failures never surface here: they degrade through cache
/// fallback to a synthesized response instead. Only install-time precache
/// failures are reported.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("network fetch failed for {path}: {reason}")]
    Network { path: String, reason: String },
    #[error("install failed while precaching {path}")]
    InstallFailed { path: String },
}
