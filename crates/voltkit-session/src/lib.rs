//! ---
//! vk_section: "03-session"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Session context, command dispatch, and presentation."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
pub mod command;
pub mod context;
pub mod debounce;
pub mod export;
pub mod logging;
pub mod present;

pub use command::{dispatch, Command, Outcome};
pub use context::SessionContext;
pub use debounce::{Debouncer, DEBOUNCE_WINDOW};
pub use present::{chart_series, field_validity, output_slots, ChartSeries, OutputSlot};

/// Result alias used throughout the session crate.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Error type for session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("persistence error: {0}")]
    Persistence(#[from] voltkit_persistence::PersistenceError),
    #[error("csv export error: {0}")]
    Csv(#[from] csv::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
