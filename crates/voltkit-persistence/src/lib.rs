//! ---
//! vk_section: "02-persistence"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Local storage abstractions for history and preferences."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
#![warn(missing_docs)]

/// Result alias used throughout the persistence crate.
pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Error type for the persistence subsystem.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// Wrapper for IO errors encountered while reading/writing storage files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Wrapper for JSON serialization issues.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub mod history;
pub mod store;
pub mod theme;

pub use history::{HistoryEntry, HistoryLog, HISTORY_CAP, HISTORY_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use theme::{Theme, THEME_KEY};
