// Quantities and the unit table used by the chart channels
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("cannot convert {from} to {to}: incompatible dimensions")]
    Incompatible { from: Unit, to: Unit },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
    Watts,
    RevolutionsPerMinute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Speed,
    Power,
    Cadence,
}

impl Unit {
    fn dimension(&self) -> Dimension {
        match self {
            Unit::MetersPerSecond | Unit::KilometersPerHour | Unit::MilesPerHour => {
                Dimension::Speed
            }
            Unit::Watts => Dimension::Power,
            Unit::RevolutionsPerMinute => Dimension::Cadence,
        }
    }

    /// Base units per one of this unit (speed base is m/s).
    fn base_factor(&self) -> f64 {
        match self {
            Unit::MetersPerSecond => 1.0,
            Unit::KilometersPerHour => 1.0 / 3.6,
            Unit::MilesPerHour => 0.44704,
            Unit::Watts => 1.0,
            Unit::RevolutionsPerMinute => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::MetersPerSecond => "m/s",
            Unit::KilometersPerHour => "km/h",
            Unit::MilesPerHour => "mph",
            Unit::Watts => "W",
            Unit::RevolutionsPerMinute => "rpm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A measured value tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Value expressed in `unit`. Fails when the units measure different
    /// dimensions (watts cannot become miles per hour).
    pub fn value_in(&self, unit: Unit) -> Result<f64, UnitError> {
        if self.unit.dimension() != unit.dimension() {
            return Err(UnitError::Incompatible {
                from: self.unit,
                to: unit,
            });
        }
        Ok(self.value * self.unit.base_factor() / unit.base_factor())
    }
}

/// Quantity kinds the external statistics source understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    CyclingSpeed,
    CyclingPower,
    CyclingCadence,
}

impl QuantityKind {
    /// Unit samples of this kind are aggregated in.
    pub fn base_unit(&self) -> Unit {
        match self {
            QuantityKind::CyclingSpeed => Unit::MetersPerSecond,
            QuantityKind::CyclingPower => Unit::Watts,
            QuantityKind::CyclingCadence => Unit::RevolutionsPerMinute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_conversions() {
        let q = Quantity::new(10.0, Unit::MetersPerSecond);
        let mph = q.value_in(Unit::MilesPerHour).unwrap();
        assert!((mph - 22.369_362_9).abs() < 1e-6);

        let kmh = q.value_in(Unit::KilometersPerHour).unwrap();
        assert!((kmh - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_unit_is_identity() {
        let q = Quantity::new(250.0, Unit::Watts);
        assert_eq!(q.value_in(Unit::Watts).unwrap(), 250.0);
    }

    #[test]
    fn test_incompatible_dimensions() {
        let q = Quantity::new(250.0, Unit::Watts);
        assert_eq!(
            q.value_in(Unit::MilesPerHour),
            Err(UnitError::Incompatible {
                from: Unit::Watts,
                to: Unit::MilesPerHour,
            })
        );
    }
}
