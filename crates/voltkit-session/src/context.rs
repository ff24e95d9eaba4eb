//! ---
//! vk_section: "03-session"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Session context, command dispatch, and presentation."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use tracing::info;

use voltkit_calc_engine::{Derivation, RawInput, Reading, UnitSelection};
use voltkit_persistence::{HistoryLog, KeyValueStore, Theme};

/// Process-wide session state, initialized once at startup and passed
/// explicitly into every operation. There is exactly one logical writer
/// (the command dispatch loop); nothing here is ambient.
#[derive(Debug)]
pub struct SessionContext<S: KeyValueStore> {
    /// Raw field strings as currently held by the host surface.
    pub input: RawInput,
    /// Active display unit per input field.
    pub units: UnitSelection,
    /// Last normalized reading, refreshed on every recompute.
    pub reading: Reading,
    /// Last computed derivation; cleared when the reading is unusable.
    pub derivation: Derivation,
    /// Bounded recent-history log.
    pub history: HistoryLog,
    /// Host surface theme preference.
    pub theme: Theme,
    store: S,
}

impl<S: KeyValueStore> SessionContext<S> {
    /// Build the session context, restoring theme and history from storage.
    pub fn initialize(store: S) -> Self {
        let theme = Theme::load(&store);
        let history = HistoryLog::load(&store);
        info!(%theme, history_entries = history.len(), "session initialized");
        Self {
            input: RawInput::default(),
            units: UnitSelection::default(),
            reading: Reading::default(),
            derivation: Derivation::cleared(),
            history,
            theme,
            store,
        }
    }

    /// Access the injected storage backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a history entry for a successful derivation and persist the log.
    pub fn record_history(
        &mut self,
        reading: Reading,
        derivation: Derivation,
    ) -> voltkit_persistence::Result<()> {
        self.history.record(&self.store, reading, derivation)
    }

    /// Drop all history entries and persist the empty log.
    pub fn clear_history(&mut self) -> voltkit_persistence::Result<()> {
        self.history.clear(&self.store)
    }
}
