//! ---
//! vk_section: "03-session"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Session context, command dispatch, and presentation."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use std::path::PathBuf;

use tracing::debug;

use voltkit_calc_engine::{derive, rescale, Derivation, Field, Unit};
use voltkit_persistence::KeyValueStore;

use crate::context::SessionContext;
use crate::{export, present, Result};

/// One named operation per host UI action. No behavior depends on host
/// traversal order; dispatch order alone defines the outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A field's raw text changed; recomputation follows after the debounce
    /// window, not per keystroke.
    FieldEdited { field: Field, raw: String },
    /// The unit toggle for a field was activated.
    UnitToggled { field: Field },
    /// Recompute the derivation from the current input (debounced trigger).
    Recompute,
    /// Flip the theme preference.
    ThemeToggled,
    /// Drop all history entries.
    ClearHistory,
    /// Write the current reading and derivation as CSV.
    ExportCsv { path: PathBuf },
    /// Write the current chart series as JSON for an external renderer.
    ExportChart { path: PathBuf },
}

/// Report of what a dispatched command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Input updated; a recompute is expected after the quiet window.
    Edited,
    /// Derivation refreshed. `recorded` is true when a history entry was
    /// appended (usable reading).
    Recomputed { recorded: bool, determined: usize },
    /// Display unit switched; the field's displayed value was rescaled.
    UnitChanged { field: Field, unit: Unit },
    /// Theme flipped and persisted.
    ThemeChanged(voltkit_persistence::Theme),
    /// History log emptied.
    HistoryCleared,
    /// Export written to the given path.
    Exported { path: PathBuf },
}

/// Apply a command to the session context.
pub fn dispatch<S: KeyValueStore>(
    ctx: &mut SessionContext<S>,
    command: Command,
) -> Result<Outcome> {
    match command {
        Command::FieldEdited { field, raw } => {
            ctx.input.set(field, raw);
            Ok(Outcome::Edited)
        }
        Command::UnitToggled { field } => {
            let (from, to) = ctx.units.toggle(field);
            if let Ok(value) = ctx.input.get(field).trim().parse::<f64>() {
                ctx.input.set(field, format!("{}", rescale(value, from, to)));
            }
            // A unit toggle recomputes immediately, no debounce.
            recompute(ctx)?;
            Ok(Outcome::UnitChanged { field, unit: to })
        }
        Command::Recompute => {
            let recorded = recompute(ctx)?;
            Ok(Outcome::Recomputed {
                recorded,
                determined: ctx.derivation.determined_count(),
            })
        }
        Command::ThemeToggled => {
            ctx.theme = ctx.theme.toggled();
            ctx.theme.persist(ctx.store())?;
            Ok(Outcome::ThemeChanged(ctx.theme))
        }
        Command::ClearHistory => {
            ctx.clear_history()?;
            Ok(Outcome::HistoryCleared)
        }
        Command::ExportCsv { path } => {
            export::write_csv(&path, &ctx.reading, &ctx.derivation)?;
            Ok(Outcome::Exported { path })
        }
        Command::ExportChart { path } => {
            let series = present::chart_series(&ctx.derivation);
            export::write_chart_series(&path, &series)?;
            Ok(Outcome::Exported { path })
        }
    }
}

/// Parse, normalize, and derive. Returns true when a history entry was
/// recorded; an unusable reading clears the prior derivation instead and
/// records nothing.
fn recompute<S: KeyValueStore>(ctx: &mut SessionContext<S>) -> Result<bool> {
    let reading = ctx.input.parse().normalized(&ctx.units);
    ctx.reading = reading;
    if reading.is_usable() {
        ctx.derivation = derive(&reading);
        ctx.record_history(reading, ctx.derivation)?;
        Ok(true)
    } else {
        debug!("reading not usable, clearing derivation");
        ctx.derivation = Derivation::cleared();
        Ok(false)
    }
}
