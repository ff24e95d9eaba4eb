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

/// The five raw input fields a host surface can supply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Field {
    Voltage,
    Current,
    Power,
    Time,
    Tariff,
}

impl Field {
    /// All input fields in display order.
    pub const ALL: [Field; 5] = [
        Field::Voltage,
        Field::Current,
        Field::Power,
        Field::Time,
        Field::Tariff,
    ];

    /// Human-readable label used by presentation surfaces and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Voltage => "Voltage",
            Field::Current => "Current",
            Field::Power => "Power",
            Field::Time => "Time",
            Field::Tariff => "Tariff",
        }
    }
}

/// Raw input snapshot: five optional numeric fields, in base units.
///
/// Absent means the host field was empty or failed to parse. Created fresh on
/// every recompute trigger and never mutated by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(default)]
    pub voltage: Option<f64>,
    #[serde(default)]
    pub current: Option<f64>,
    #[serde(default)]
    pub power: Option<f64>,
    #[serde(default)]
    pub time: Option<f64>,
    #[serde(default)]
    pub tariff: Option<f64>,
}

impl Reading {
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Voltage => self.voltage,
            Field::Current => self.current,
            Field::Power => self.power,
            Field::Time => self.time,
            Field::Tariff => self.tariff,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        match field {
            Field::Voltage => self.voltage = value,
            Field::Current => self.current = value,
            Field::Power => self.power = value,
            Field::Time => self.time = value,
            Field::Tariff => self.tariff = value,
        }
    }

    /// Value of the field when present and strictly positive.
    pub fn positive(&self, field: Field) -> Option<f64> {
        self.get(field).filter(|v| *v > 0.0)
    }

    /// A reading is usable when at least two fields are present and strictly
    /// greater than zero, the minimum needed to attempt any derivation.
    pub fn is_usable(&self) -> bool {
        Field::ALL
            .iter()
            .filter(|f| self.positive(**f).is_some())
            .count()
            >= 2
    }
}

/// The five derived output quantities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Quantity {
    Power,
    Current,
    Voltage,
    Energy,
    Cost,
}

impl Quantity {
    /// All derived quantities in display order.
    pub const ALL: [Quantity; 5] = [
        Quantity::Power,
        Quantity::Current,
        Quantity::Voltage,
        Quantity::Energy,
        Quantity::Cost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Quantity::Power => "Power",
            Quantity::Current => "Current",
            Quantity::Voltage => "Voltage",
            Quantity::Energy => "Energy",
            Quantity::Cost => "Cost",
        }
    }

    /// Unit symbol the quantity is reported in.
    pub fn unit_symbol(&self) -> &'static str {
        match self {
            Quantity::Power => "W",
            Quantity::Current => "A",
            Quantity::Voltage => "V",
            Quantity::Energy => "kWh",
            Quantity::Cost => "",
        }
    }
}

/// Computed output snapshot: each quantity is either derived or undetermined.
///
/// A field is `None` exactly when its defining inputs were not available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Derivation {
    #[serde(default)]
    pub power: Option<f64>,
    #[serde(default)]
    pub current: Option<f64>,
    #[serde(default)]
    pub voltage: Option<f64>,
    #[serde(default)]
    pub energy: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
}

impl Derivation {
    /// The all-undetermined derivation used when a reading is not usable.
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Power => self.power,
            Quantity::Current => self.current,
            Quantity::Voltage => self.voltage,
            Quantity::Energy => self.energy,
            Quantity::Cost => self.cost,
        }
    }

    /// True when every quantity is undetermined.
    pub fn is_cleared(&self) -> bool {
        Quantity::ALL.iter().all(|q| self.get(*q).is_none())
    }

    /// Count of determined quantities.
    pub fn determined_count(&self) -> usize {
        Quantity::ALL.iter().filter(|q| self.get(**q).is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_requires_two_positive_fields() {
        let mut reading = Reading::default();
        assert!(!reading.is_usable());

        reading.voltage = Some(230.0);
        assert!(!reading.is_usable());

        reading.current = Some(2.0);
        assert!(reading.is_usable());
    }

    #[test]
    fn zero_fields_do_not_count_toward_usability() {
        let reading = Reading {
            voltage: Some(0.0),
            current: Some(0.0),
            ..Reading::default()
        };
        assert!(!reading.is_usable());
        assert!(reading.positive(Field::Voltage).is_none());
    }

    #[test]
    fn cleared_derivation_reports_cleared() {
        let derivation = Derivation::cleared();
        assert!(derivation.is_cleared());
        assert_eq!(derivation.determined_count(), 0);
    }

    #[test]
    fn reading_field_accessors_round_trip() {
        let mut reading = Reading::default();
        reading.set(Field::Tariff, Some(8.5));
        assert_eq!(reading.get(Field::Tariff), Some(8.5));
        assert_eq!(reading.tariff, Some(8.5));
    }
}
