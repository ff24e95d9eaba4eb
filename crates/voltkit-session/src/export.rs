//! ---
//! vk_section: "03-session"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Session context, command dispatch, and presentation."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use std::fs;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use voltkit_calc_engine::{Derivation, Field, Quantity, Reading, Unit};

use crate::present::ChartSeries;
use crate::Result;

/// CSV column header shared with downstream tooling. Fixed: consumers parse
/// by position.
pub const CSV_HEADER: [&str; 4] = ["Timestamp", "Parameter", "Value", "Unit"];

/// Write the current reading and derivation as CSV.
///
/// One row per present input field (base units) followed by one row per
/// determined quantity, all stamped with a single export timestamp.
pub fn write_csv(path: &Path, reading: &Reading, derivation: &Derivation) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;

    let timestamp = Utc::now().to_rfc3339();
    for field in Field::ALL {
        if let Some(value) = reading.get(field) {
            let value = value.to_string();
            writer.write_record([
                timestamp.as_str(),
                field.label(),
                value.as_str(),
                Unit::base_for(field).symbol(),
            ])?;
        }
    }
    for quantity in Quantity::ALL {
        if let Some(value) = derivation.get(quantity) {
            let value = value.to_string();
            writer.write_record([
                timestamp.as_str(),
                quantity.label(),
                value.as_str(),
                quantity.unit_symbol(),
            ])?;
        }
    }

    writer.flush()?;
    info!(path = %path.display(), "csv export written");
    Ok(())
}

/// Write the chart series as JSON for an external renderer to snapshot.
pub fn write_chart_series(path: &Path, series: &ChartSeries) -> Result<()> {
    let serialized = serde_json::to_string_pretty(series)?;
    fs::write(path, serialized)?;
    info!(path = %path.display(), "chart series written");
    Ok(())
}
