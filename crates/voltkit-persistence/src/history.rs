//! ---
//! vk_section: "02-persistence"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Local storage abstractions for history and preferences."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use voltkit_calc_engine::{Derivation, Reading};

use crate::store::KeyValueStore;
use crate::Result;

/// Maximum number of entries retained in the history log.
pub const HISTORY_CAP: usize = 10;

/// Storage key the serialized history log lives under.
pub const HISTORY_KEY: &str = "history";

/// Immutable record of one successful derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Timestamp when the derivation was recorded.
    pub timestamp: DateTime<Utc>,
    /// The normalized reading the derivation was computed from.
    pub reading: Reading,
    /// The computed output snapshot.
    pub derivation: Derivation,
}

/// Bounded recent-history log, newest entry first.
///
/// Single-writer by contract: operations are synchronous and total-ordered by
/// call sequence. Every mutation persists the full log.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    /// Restore the log from storage. Absent or corrupt state yields an empty
    /// log rather than an error.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let entries = match store.get(HISTORY_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
                Ok(entries) => entries.into(),
                Err(err) => {
                    warn!(error = %err, "history log unreadable, starting empty");
                    VecDeque::new()
                }
            },
            None => VecDeque::new(),
        };
        debug!(entries = entries.len(), "history log loaded");
        Self { entries }
    }

    /// Append an entry stamped with the current time, evict the oldest entry
    /// beyond the cap, and persist the full log.
    pub fn record(
        &mut self,
        store: &dyn KeyValueStore,
        reading: Reading,
        derivation: Derivation,
    ) -> Result<()> {
        self.entries.push_front(HistoryEntry {
            timestamp: Utc::now(),
            reading,
            derivation,
        });
        self.entries.truncate(HISTORY_CAP);
        self.persist(store)
    }

    /// Drop all entries and persist the empty log.
    pub fn clear(&mut self, store: &dyn KeyValueStore) -> Result<()> {
        self.entries.clear();
        self.persist(store)
    }

    fn persist(&self, store: &dyn KeyValueStore) -> Result<()> {
        let serialized = serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())?;
        store.put(HISTORY_KEY, &serialized)
    }

    /// Entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
