//! ---
//! vk_section: "04-offline-cache"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Offline resource caching with versioned purge."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::manifest::AssetManifest;
use crate::policy::FetchPolicy;
use crate::store::{CacheStore, CachedResource};
use crate::{CacheError, Result};

/// Minimum interval between periodic stale-cache sweeps.
fn purge_interval() -> Duration {
    Duration::days(1)
}

/// Network access abstraction injected into the worker.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a resource over the network.
    async fn fetch(&self, path: &str) -> Result<CachedResource>;
}

/// Where a fetch response was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServedFrom {
    Network,
    Cache,
    /// Neither network nor cache could produce the resource; the body is a
    /// synthesized unavailable notice.
    Synthesized,
}

/// Response handed back to the requesting context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub resource: CachedResource,
    pub served_from: ServedFrom,
}

impl FetchResponse {
    fn network(resource: CachedResource) -> Self {
        Self {
            status: 200,
            resource,
            served_from: ServedFrom::Network,
        }
    }

    fn cached(resource: CachedResource) -> Self {
        Self {
            status: 200,
            resource,
            served_from: ServedFrom::Cache,
        }
    }

    fn unavailable(path: &str) -> Self {
        Self {
            status: 503,
            resource: CachedResource::new(
                format!("resource unavailable offline: {path}"),
                "text/plain",
            ),
            served_from: ServedFrom::Synthesized,
        }
    }
}

/// Message handed over from the calculator context. Message passing is the
/// only channel between the two contexts; no memory is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// A freshly computed calculation payload to cache opportunistically.
    CachePayload {
        path: String,
        resource: CachedResource,
    },
}

/// Offline cache worker with an install/activate/fetch lifecycle.
#[derive(Debug)]
pub struct CacheWorker {
    manifest: AssetManifest,
    store: CacheStore,
    last_purge: Option<DateTime<Utc>>,
}

impl CacheWorker {
    pub fn new(manifest: AssetManifest) -> Self {
        Self::with_store(manifest, CacheStore::new())
    }

    /// Build a worker over an existing cache store, as a new worker version
    /// does when it takes over the caches of its predecessor.
    pub fn with_store(manifest: AssetManifest, store: CacheStore) -> Self {
        Self {
            manifest,
            store,
            last_purge: None,
        }
    }

    /// Give up the underlying cache store, typically to hand it to a
    /// successor worker.
    pub fn into_store(self) -> CacheStore {
        self.store
    }

    /// Eagerly cache every manifest member. A failed precache fetch fails the
    /// install, leaving any previous caches in place.
    pub async fn install(&mut self, fetcher: &dyn Fetcher) -> Result<()> {
        let cache = self.manifest.static_cache_name();
        for path in self.manifest.precache().to_vec() {
            let resource = fetcher.fetch(&path).await.map_err(|err| {
                warn!(path = path.as_str(), error = %err, "precache fetch failed");
                CacheError::InstallFailed { path: path.clone() }
            })?;
            self.store.put(&cache, &path, resource);
        }
        info!(
            cache = cache.as_str(),
            assets = self.manifest.precache().len(),
            "install complete"
        );
        Ok(())
    }

    /// Purge caches whose names mismatch the current version tag. Runs on
    /// activation and records the sweep time for the daily follow-ups.
    pub fn activate(&mut self, now: DateTime<Utc>) -> usize {
        let purged = self.store.purge_except(&self.manifest.current_cache_names());
        self.last_purge = Some(now);
        info!(purged, "activation sweep complete");
        purged
    }

    /// Re-run the stale sweep when at least a day has elapsed since the last
    /// one. Driven by the host clock rather than an internal timer.
    pub fn maybe_daily_purge(&mut self, now: DateTime<Utc>) -> usize {
        let due = match self.last_purge {
            Some(last) => now - last >= purge_interval(),
            None => true,
        };
        if due {
            self.activate(now)
        } else {
            0
        }
    }

    /// Resolve a path per its policy: cache-first for manifest members,
    /// network-first with cache fallback for everything else. Never fails;
    /// the worst case is a synthesized unavailable response.
    pub async fn fetch(&mut self, path: &str, fetcher: &dyn Fetcher) -> FetchResponse {
        match FetchPolicy::for_path(&self.manifest, path) {
            FetchPolicy::CacheFirst => {
                let cache = self.manifest.static_cache_name();
                if let Some(resource) = self.store.get(&cache, path) {
                    debug!(path, "cache-first hit");
                    return FetchResponse::cached(resource.clone());
                }
                match fetcher.fetch(path).await {
                    Ok(resource) => {
                        self.store.put(&cache, path, resource.clone());
                        FetchResponse::network(resource)
                    }
                    Err(err) => {
                        warn!(path, error = %err, "cache-first miss and network down");
                        FetchResponse::unavailable(path)
                    }
                }
            }
            FetchPolicy::NetworkFirst => match fetcher.fetch(path).await {
                Ok(resource) => {
                    let cache = self.manifest.dynamic_cache_name();
                    self.store.put(&cache, path, resource.clone());
                    FetchResponse::network(resource)
                }
                Err(err) => {
                    debug!(path, error = %err, "network-first falling back to cache");
                    let caches = self.manifest.current_cache_names();
                    match self.store.get_any(&caches, path) {
                        Some(resource) => FetchResponse::cached(resource.clone()),
                        None => FetchResponse::unavailable(path),
                    }
                }
            },
        }
    }

    /// Apply a message from the calculator context.
    pub fn handle_message(&mut self, message: WorkerMessage) {
        match message {
            WorkerMessage::CachePayload { path, resource } => {
                let cache = self.manifest.dynamic_cache_name();
                debug!(path = path.as_str(), "caching handed-over payload");
                self.store.put(&cache, &path, resource);
            }
        }
    }

    /// Drain the message channel until the sending context closes it.
    pub async fn run(mut self, mut messages: mpsc::Receiver<WorkerMessage>) -> Self {
        while let Some(message) = messages.recv().await {
            self.handle_message(message);
        }
        self
    }

    /// Read access for assertions and host inspection.
    pub fn store(&self) -> &CacheStore {
        &self.store
    }
}
