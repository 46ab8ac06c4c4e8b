// Chart data domain models
use super::quantity::{QuantityKind, Unit};
use super::workout::WorkoutRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One plotted value. Immutable once constructed; points are ordered by
/// `time` and the pipeline never deduplicates equal timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub category: String,
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(category: impl Into<String>, time: DateTime<Utc>, value: f64) -> Self {
        Self {
            category: category.into(),
            time,
            value,
        }
    }
}

/// The three telemetry channels charted for a cycling workout. Each channel
/// fixes its category label, the quantity kind requested upstream, and the
/// display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Speed,
    Power,
    Cadence,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Speed, Channel::Power, Channel::Cadence];

    pub fn category(&self) -> &'static str {
        match self {
            Channel::Speed => "Speed",
            Channel::Power => "Power",
            Channel::Cadence => "Cadence",
        }
    }

    pub fn quantity_kind(&self) -> QuantityKind {
        match self {
            Channel::Speed => QuantityKind::CyclingSpeed,
            Channel::Power => QuantityKind::CyclingPower,
            Channel::Cadence => QuantityKind::CyclingCadence,
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            Channel::Speed => Unit::MilesPerHour,
            Channel::Power => Unit::Watts,
            Channel::Cadence => Unit::RevolutionsPerMinute,
        }
    }
}

/// The published view state: three point series plus the workout that
/// produced them. Replaced wholesale on every refresh and reset to empty
/// when the bound workout becomes absent, so the three series always
/// describe the same workout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSnapshot {
    pub workout: Option<WorkoutRef>,
    pub speed: Vec<ChartPoint>,
    pub power: Vec<ChartPoint>,
    pub cadence: Vec<ChartPoint>,
}

impl SeriesSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self, channel: Channel) -> &[ChartPoint] {
        match channel {
            Channel::Speed => &self.speed,
            Channel::Power => &self.power,
            Channel::Cadence => &self.cadence,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.workout.is_none()
            && self.speed.is_empty()
            && self.power.is_empty()
            && self.cadence.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_table() {
        assert_eq!(Channel::Speed.quantity_kind(), QuantityKind::CyclingSpeed);
        assert_eq!(Channel::Speed.unit(), Unit::MilesPerHour);
        assert_eq!(Channel::Power.unit(), Unit::Watts);
        assert_eq!(Channel::Cadence.unit(), Unit::RevolutionsPerMinute);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = SeriesSnapshot::empty();
        assert!(snapshot.is_empty());
        for channel in Channel::ALL {
            assert!(snapshot.points(channel).is_empty());
        }
    }
}
