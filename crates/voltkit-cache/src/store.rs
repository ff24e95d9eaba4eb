//! ---
//! vk_section: "04-offline-cache"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Offline resource caching with versioned purge."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A cached response body with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResource {
    pub body: Vec<u8>,
    pub content_type: String,
    pub stored_at: DateTime<Utc>,
}

impl CachedResource {
    pub fn new(body: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: content_type.into(),
            stored_at: Utc::now(),
        }
    }
}

/// Named caches keyed by resource path, mirroring the browser cache storage
/// the offline layer is patterned on.
#[derive(Debug, Default)]
pub struct CacheStore {
    caches: HashMap<String, HashMap<String, CachedResource>>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a resource under `path` in the named cache, creating the cache
    /// on first use.
    pub fn put(&mut self, cache: &str, path: &str, resource: CachedResource) {
        self.caches
            .entry(cache.to_owned())
            .or_default()
            .insert(path.to_owned(), resource);
    }

    /// Look up a resource in the named cache.
    pub fn get(&self, cache: &str, path: &str) -> Option<&CachedResource> {
        self.caches.get(cache).and_then(|c| c.get(path))
    }

    /// Look up a resource across the given caches in order.
    pub fn get_any<'a>(&'a self, caches: &[String], path: &str) -> Option<&'a CachedResource> {
        caches.iter().find_map(|cache| self.get(cache, path))
    }

    /// Delete every cache whose name is not in `keep`. Returns the number of
    /// caches purged.
    pub fn purge_except(&mut self, keep: &[String]) -> usize {
        let before = self.caches.len();
        self.caches.retain(|name, _| keep.contains(name));
        let purged = before - self.caches.len();
        if purged > 0 {
            debug!(purged, "stale caches purged");
        }
        purged
    }

    /// Names of all caches currently held.
    pub fn cache_names(&self) -> Vec<String> {
        self.caches.keys().cloned().collect()
    }
}
