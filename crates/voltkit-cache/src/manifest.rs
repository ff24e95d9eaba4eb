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

/// Fixed manifest of static resources cached eagerly on install, tagged with
/// the cache version the assets belong to. Bumping the tag invalidates every
/// previously named cache on activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
    version_tag: String,
    precache: Vec<String>,
}

impl AssetManifest {
    pub fn new(version_tag: impl Into<String>, precache: Vec<String>) -> Self {
        Self {
            version_tag: version_tag.into(),
            precache,
        }
    }

    /// Name of the cache holding precached static assets.
    pub fn static_cache_name(&self) -> String {
        format!("{}-static", self.version_tag)
    }

    /// Name of the cache holding opportunistically stored responses.
    pub fn dynamic_cache_name(&self) -> String {
        format!("{}-dynamic", self.version_tag)
    }

    /// Cache names considered current; everything else is stale.
    pub fn current_cache_names(&self) -> [String; 2] {
        [self.static_cache_name(), self.dynamic_cache_name()]
    }

    /// Whether a path belongs to the precache manifest.
    pub fn is_member(&self, path: &str) -> bool {
        self.precache.iter().any(|p| p == path)
    }

    /// Paths cached eagerly on install.
    pub fn precache(&self) -> &[String] {
        &self.precache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_exact_path_match() {
        let manifest = AssetManifest::new(
            "calc-v2",
            vec!["/index.html".into(), "/chart.min.js".into()],
        );
        assert!(manifest.is_member("/index.html"));
        assert!(!manifest.is_member("/index"));
        assert!(!manifest.is_member("/api/calculation"));
    }

    #[test]
    fn cache_names_carry_the_version_tag() {
        let manifest = AssetManifest::new("calc-v2", vec![]);
        assert_eq!(manifest.static_cache_name(), "calc-v2-static");
        assert_eq!(manifest.dynamic_cache_name(), "calc-v2-dynamic");
    }
}
