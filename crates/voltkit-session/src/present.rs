//! ---
//! vk_section: "03-session"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Session context, command dispatch, and presentation."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use serde::Serialize;

use voltkit_calc_engine::{field_meets_minimum, Derivation, Field, Quantity, RawInput};

/// Placeholder rendered for undetermined quantities.
pub const UNDETERMINED: &str = "-";

/// One labeled output slot for the host surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSlot {
    pub quantity: Quantity,
    pub value: Option<f64>,
    /// Rendered value or the undetermined placeholder.
    pub display: String,
    pub unit: &'static str,
}

/// Build the five output slots from a derivation, in display order.
pub fn output_slots(derivation: &Derivation) -> Vec<OutputSlot> {
    Quantity::ALL
        .iter()
        .map(|quantity| {
            let value = derivation.get(*quantity);
            OutputSlot {
                quantity: *quantity,
                value,
                display: value.map_or_else(|| UNDETERMINED.to_owned(), format_value),
                unit: quantity.unit_symbol(),
            }
        })
        .collect()
}

/// Chart payload: labels and values for the determined quantities only.
/// Rendering (and image rasterization) belongs to the external charting host.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Build the chart series from a derivation.
pub fn chart_series(derivation: &Derivation) -> ChartSeries {
    let mut series = ChartSeries::default();
    for quantity in Quantity::ALL {
        if let Some(value) = derivation.get(quantity) {
            series.labels.push(quantity.label().to_owned());
            series.values.push(value);
        }
    }
    series
}

/// Per-field validity marking for the host surface: the raw text parses and
/// the value is at least `minimum` (typically zero).
pub fn field_validity(input: &RawInput, minimum: f64) -> Vec<(Field, bool)> {
    Field::ALL
        .iter()
        .map(|field| (*field, field_meets_minimum(input.get(*field), minimum)))
        .collect()
}

/// Round to two decimals for display, trimming a trailing ".00".
pub fn format_value(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_owned()
    }
}
