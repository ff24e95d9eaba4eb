//! ---
//! vk_section: "01-calc-core"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Reading collection and quantity derivation for VoltKit."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

use crate::model::{Field, Reading};

/// Raw field strings exactly as held by a host input surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInput {
    #[serde(default)]
    pub voltage: String,
    #[serde(default)]
    pub current: String,
    #[serde(default)]
    pub power: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub tariff: String,
}

impl RawInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Voltage => &self.voltage,
            Field::Current => &self.current,
            Field::Power => &self.power,
            Field::Time => &self.time,
            Field::Tariff => &self.tariff,
        }
    }

    pub fn set(&mut self, field: Field, raw: impl Into<String>) {
        let raw = raw.into();
        match field {
            Field::Voltage => self.voltage = raw,
            Field::Current => self.current = raw,
            Field::Power => self.power = raw,
            Field::Time => self.time = raw,
            Field::Tariff => self.tariff = raw,
        }
    }

    /// Parse every field into a [`Reading`].
    ///
    /// A field that is empty or fails to parse maps to absent rather than an
    /// error; non-finite values are discarded the same way.
    pub fn parse(&self) -> Reading {
        let mut reading = Reading::default();
        for field in Field::ALL {
            reading.set(field, parse_field(self.get(field)));
        }
        reading
    }
}

fn parse_field(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Per-field validity check used by host surfaces to mark invalid inputs:
/// the field parses and the value is at least the configured minimum.
pub fn field_meets_minimum(raw: &str, minimum: f64) -> bool {
    parse_field(raw).is_some_and(|v| v >= minimum)
}
