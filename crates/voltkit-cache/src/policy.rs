//! ---
//! vk_section: "04-offline-cache"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Offline resource caching with versioned purge."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

use crate::manifest::AssetManifest;

/// How a fetched path is resolved against cache and network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchPolicy {
    /// Serve from cache when present, hitting the network only on a miss.
    /// Applied to manifest members: static assets change only with the
    /// version tag.
    CacheFirst,
    /// Try the network, falling back to any cached copy. Applied to
    /// everything else, including the calculation payload.
    NetworkFirst,
}

impl FetchPolicy {
    /// Select the policy for a path.
    pub fn for_path(manifest: &AssetManifest, path: &str) -> FetchPolicy {
        if manifest.is_member(path) {
            FetchPolicy::CacheFirst
        } else {
            FetchPolicy::NetworkFirst
        }
    }
}
