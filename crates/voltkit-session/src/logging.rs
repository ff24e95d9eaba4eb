//! ---
//! vk_section: "03-session"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Session context, command dispatch, and presentation."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

/// Initialize a baseline tracing subscriber suitable for embedding hosts.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = Registry::default()
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(subscriber_fmt::layer())
        .try_init();
}
