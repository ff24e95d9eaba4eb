//! ---
//! vk_section: "03-session"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Session context, command dispatch, and presentation."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Quiet window after the last edit before a recompute fires.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Cancellable delayed-execution primitive: each trigger replaces any pending
/// timer, so a burst of edits yields at most one signal after the quiet
/// window. Stale pending work is simply superseded, never awaited.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    signal: mpsc::Sender<()>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer emitting on `signal` after [`DEBOUNCE_WINDOW`].
    pub fn new(signal: mpsc::Sender<()>) -> Self {
        Self {
            window: DEBOUNCE_WINDOW,
            signal,
            pending: None,
        }
    }

    /// Override the quiet window (tests, hosts with different input rates).
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Arm the timer, replacing any pending one.
    pub fn trigger(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let signal = self.signal.clone();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            sleep(window).await;
            let _ = signal.send(()).await;
        }));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
