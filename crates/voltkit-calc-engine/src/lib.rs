//! ---
//! vk_section: "01-calc-core"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Reading collection and quantity derivation for VoltKit."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
pub mod collector;
pub mod engine;
pub mod model;
pub mod units;

pub use collector::{field_meets_minimum, RawInput};
pub use engine::derive;
pub use model::{Derivation, Field, Quantity, Reading};
pub use units::{rescale, Unit, UnitSelection};

/// Parse raw host-surface strings, normalize to base units, and derive.
///
/// Returns the normalized reading together with its derivation; an unusable
/// reading (fewer than two positive fields) yields [`Derivation::cleared`]
/// without invoking the engine.
pub fn evaluate(input: &RawInput, units: &UnitSelection) -> (Reading, Derivation) {
    let reading = input.parse().normalized(units);
    if reading.is_usable() {
        let derivation = engine::derive(&reading);
        (reading, derivation)
    } else {
        (reading, Derivation::cleared())
    }
}
