//! ---
//! vk_section: "01-calc-core"
//! vk_subsection: "module"
//! vk_type: "source"
//! vk_scope: "code"
//! vk_description: "Reading collection and quantity derivation for VoltKit."
//! vk_version: "v0.1.0-alpha"
//! vk_owner: "tbd"
//! ---
use tracing::debug;

use crate::model::{Derivation, Field, Reading};

/// Compute the maximal consistent set of derived quantities for a reading.
///
/// Pure and idempotent: the same reading always yields a bit-identical
/// derivation, and no state is carried between calls. Each of power, current,
/// and voltage prefers the value reconstructable from the other two supplied
/// quantities (P = V x I and its inversions) over a directly typed field, so
/// the three stay mutually consistent whenever enough information is present.
/// Energy and cost are strictly downstream. Division is only attempted when
/// both operands are strictly positive, so missing, zero, and negative inputs
/// all resolve to undetermined rather than an error.
///
/// Callers are expected to gate on [`Reading::is_usable`] and substitute
/// [`Derivation::cleared`] for unusable readings.
pub fn derive(reading: &Reading) -> Derivation {
    let voltage_in = reading.positive(Field::Voltage);
    let current_in = reading.positive(Field::Current);
    let power_in = reading.positive(Field::Power);
    let time_in = reading.positive(Field::Time);
    let tariff_in = reading.positive(Field::Tariff);

    let power = match (voltage_in, current_in) {
        (Some(v), Some(i)) => Some(v * i),
        _ => power_in,
    };

    let current = match (power_in, voltage_in) {
        (Some(p), Some(v)) => Some(p / v),
        _ => current_in,
    };

    let voltage = match (power_in, current_in) {
        (Some(p), Some(i)) => Some(p / i),
        _ => voltage_in,
    };

    // Effective power: the derived value when determined, else the raw field.
    let effective_power = power.or(power_in).filter(|p| *p > 0.0);

    let energy = match (effective_power, time_in) {
        (Some(p), Some(t)) => Some(p * t / 1000.0),
        _ => None,
    };

    let cost = match (energy, tariff_in) {
        (Some(e), Some(r)) => Some(e * r),
        _ => None,
    };

    let derivation = Derivation {
        power,
        current,
        voltage,
        energy,
        cost,
    };
    debug!(
        determined = derivation.determined_count(),
        "derivation computed"
    );
    derivation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(
        voltage: Option<f64>,
        current: Option<f64>,
        power: Option<f64>,
        time: Option<f64>,
        tariff: Option<f64>,
    ) -> Reading {
        Reading {
            voltage,
            current,
            power,
            time,
            tariff,
        }
    }

    #[test]
    fn voltage_and_current_determine_power() {
        let d = derive(&reading(Some(230.0), Some(2.0), None, None, None));
        assert_eq!(d.power, Some(460.0));
        assert_eq!(d.voltage, Some(230.0));
        assert_eq!(d.current, Some(2.0));
        assert_eq!(d.energy, None);
        assert_eq!(d.cost, None);
    }

    #[test]
    fn prefers_derived_power_over_direct_field() {
        // Contradictory direct power is overridden by V x I; the direct
        // field still feeds the current/voltage inversions unchanged.
        let d = derive(&reading(Some(100.0), Some(2.0), Some(999.0), None, None));
        assert_eq!(d.power, Some(200.0));
        assert_eq!(d.current, Some(999.0 / 100.0));
        assert_eq!(d.voltage, Some(999.0 / 2.0));
    }

    #[test]
    fn power_and_voltage_determine_current() {
        let d = derive(&reading(Some(250.0), None, Some(500.0), None, None));
        assert_eq!(d.current, Some(2.0));
        assert_eq!(d.power, Some(500.0));
        assert_eq!(d.voltage, Some(250.0));
    }

    #[test]
    fn power_and_current_determine_voltage() {
        let d = derive(&reading(None, Some(4.0), Some(1000.0), None, None));
        assert_eq!(d.voltage, Some(250.0));
        assert_eq!(d.power, Some(1000.0));
        assert_eq!(d.current, Some(4.0));
    }

    #[test]
    fn power_and_time_determine_energy() {
        let d = derive(&reading(None, None, Some(1000.0), Some(5.0), None));
        assert_eq!(d.power, Some(1000.0));
        assert_eq!(d.energy, Some(5.0));
        assert_eq!(d.current, None);
        assert_eq!(d.voltage, None);
        assert_eq!(d.cost, None);
    }

    #[test]
    fn tariff_prices_the_energy() {
        let d = derive(&reading(None, None, Some(1000.0), Some(5.0), Some(8.5)));
        assert_eq!(d.energy, Some(5.0));
        assert_eq!(d.cost, Some(42.5));
    }

    #[test]
    fn energy_uses_derived_power_when_available() {
        let d = derive(&reading(Some(230.0), Some(2.0), None, Some(2.0), None));
        assert_eq!(d.power, Some(460.0));
        assert_eq!(d.energy, Some(460.0 * 2.0 / 1000.0));
    }

    #[test]
    fn energy_undetermined_without_positive_time() {
        let d = derive(&reading(None, None, Some(1000.0), Some(0.0), Some(8.5)));
        assert_eq!(d.energy, None);
        assert_eq!(d.cost, None);
    }

    #[test]
    fn cost_undetermined_without_positive_tariff() {
        let d = derive(&reading(None, None, Some(1000.0), Some(5.0), Some(0.0)));
        assert_eq!(d.energy, Some(5.0));
        assert_eq!(d.cost, None);
    }

    #[test]
    fn zero_inputs_yield_undetermined_everything() {
        let d = derive(&reading(Some(0.0), Some(0.0), None, None, None));
        assert!(d.is_cleared());
    }

    #[test]
    fn derivation_is_idempotent() {
        let r = reading(Some(230.0), Some(2.0), Some(460.0), Some(3.0), Some(4.2));
        assert_eq!(derive(&r), derive(&r));
    }
}
