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

/// A display unit for one of the four convertible input fields.
///
/// Each field supports exactly one alternate unit next to its base unit;
/// tariff has no alternate and always reports a factor of one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Unit {
    Volt,
    Kilovolt,
    Ampere,
    Milliampere,
    Watt,
    Kilowatt,
    Hour,
    Minute,
    PerKilowattHour,
}

impl Unit {
    /// Multiplier converting a displayed value in this unit to base units.
    pub fn factor_to_base(&self) -> f64 {
        match self {
            Unit::Volt | Unit::Ampere | Unit::Watt | Unit::Hour | Unit::PerKilowattHour => 1.0,
            Unit::Kilovolt | Unit::Kilowatt => 1000.0,
            Unit::Milliampere => 1.0 / 1000.0,
            Unit::Minute => 1.0 / 60.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Volt => "V",
            Unit::Kilovolt => "kV",
            Unit::Ampere => "A",
            Unit::Milliampere => "mA",
            Unit::Watt => "W",
            Unit::Kilowatt => "kW",
            Unit::Hour => "h",
            Unit::Minute => "min",
            Unit::PerKilowattHour => "/kWh",
        }
    }

    /// Base unit for a field.
    pub fn base_for(field: Field) -> Unit {
        match field {
            Field::Voltage => Unit::Volt,
            Field::Current => Unit::Ampere,
            Field::Power => Unit::Watt,
            Field::Time => Unit::Hour,
            Field::Tariff => Unit::PerKilowattHour,
        }
    }

    /// The alternate unit, when the field has one.
    pub fn alternate(&self) -> Option<Unit> {
        match self {
            Unit::Volt => Some(Unit::Kilovolt),
            Unit::Kilovolt => Some(Unit::Volt),
            Unit::Ampere => Some(Unit::Milliampere),
            Unit::Milliampere => Some(Unit::Ampere),
            Unit::Watt => Some(Unit::Kilowatt),
            Unit::Kilowatt => Some(Unit::Watt),
            Unit::Hour => Some(Unit::Minute),
            Unit::Minute => Some(Unit::Hour),
            Unit::PerKilowattHour => None,
        }
    }
}

/// Rescale a displayed value when toggling between two units of one field.
pub fn rescale(value: f64, from: Unit, to: Unit) -> f64 {
    value * from.factor_to_base() / to.factor_to_base()
}

/// The active display unit per input field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitSelection {
    pub voltage: Unit,
    pub current: Unit,
    pub power: Unit,
    pub time: Unit,
}

impl Default for UnitSelection {
    fn default() -> Self {
        Self {
            voltage: Unit::Volt,
            current: Unit::Ampere,
            power: Unit::Watt,
            time: Unit::Hour,
        }
    }
}

impl UnitSelection {
    pub fn unit(&self, field: Field) -> Unit {
        match field {
            Field::Voltage => self.voltage,
            Field::Current => self.current,
            Field::Power => self.power,
            Field::Time => self.time,
            Field::Tariff => Unit::PerKilowattHour,
        }
    }

    /// Switch a field to its alternate unit and return (previous, active).
    /// Tariff has no alternate and is returned unchanged.
    pub fn toggle(&mut self, field: Field) -> (Unit, Unit) {
        let previous = self.unit(field);
        let next = previous.alternate().unwrap_or(previous);
        match field {
            Field::Voltage => self.voltage = next,
            Field::Current => self.current = next,
            Field::Power => self.power = next,
            Field::Time => self.time = next,
            Field::Tariff => {}
        }
        (previous, next)
    }
}

impl Reading {
    /// Convert a reading holding displayed values into base units before it
    /// reaches the derivation engine. Display-layer transform only.
    pub fn normalized(&self, units: &UnitSelection) -> Reading {
        let mut normalized = Reading::default();
        for field in Field::ALL {
            let factor = units.unit(field).factor_to_base();
            normalized.set(field, self.get(field).map(|v| v * factor));
        }
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_rescales_displayed_voltage() {
        let mut units = UnitSelection::default();
        let (from, to) = units.toggle(Field::Voltage);
        assert_eq!((from, to), (Unit::Volt, Unit::Kilovolt));
        assert_eq!(rescale(230.0, from, to), 0.23);

        let (from, to) = units.toggle(Field::Voltage);
        assert_eq!(rescale(0.23, from, to), 230.0);
    }

    #[test]
    fn sub_unit_toggles_multiply_the_displayed_value() {
        // 1 A reads as 1000 mA; 1 h reads as 60 min.
        assert_eq!(rescale(1.0, Unit::Ampere, Unit::Milliampere), 1000.0);
        assert_eq!(rescale(1.5, Unit::Hour, Unit::Minute), 90.0);
    }

    #[test]
    fn tariff_toggle_is_a_no_op() {
        let mut units = UnitSelection::default();
        let (from, to) = units.toggle(Field::Tariff);
        assert_eq!(from, to);
        assert_eq!(units.unit(Field::Tariff), Unit::PerKilowattHour);
    }

    #[test]
    fn normalization_converts_displayed_values_to_base_units() {
        let units = UnitSelection {
            voltage: Unit::Kilovolt,
            current: Unit::Milliampere,
            power: Unit::Watt,
            time: Unit::Minute,
        };
        let displayed = Reading {
            voltage: Some(0.23),
            current: Some(2000.0),
            power: None,
            time: Some(30.0),
            tariff: Some(8.5),
        };
        let base = displayed.normalized(&units);
        assert_eq!(base.voltage, Some(230.0));
        assert_eq!(base.current, Some(2.0));
        assert_eq!(base.time, Some(0.5));
        assert_eq!(base.tariff, Some(8.5));
    }
}
