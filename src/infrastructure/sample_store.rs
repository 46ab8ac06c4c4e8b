// In-memory sample store - Buckets raw quantity samples into interval statistics
use crate::application::statistics_repository::{
    Aggregation, IntervalStatistic, StatisticsRepository,
};
use crate::domain::quantity::{Quantity, QuantityKind};
use crate::domain::workout::WorkoutRef;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// One raw measurement recorded during a workout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuantitySample {
    pub time: DateTime<Utc>,
    pub quantity: Quantity,
}

/// On-disk fixture shape: an array of these, one per workout and kind.
#[derive(Debug, Deserialize)]
struct SampleFixture {
    workout_id: String,
    kind: QuantityKind,
    #[serde(default)]
    samples: Vec<QuantitySample>,
}

/// Statistics source backed by samples loaded up front (recorded workouts,
/// test fixtures). Samples are grouped into fixed-width intervals anchored
/// at the workout start and aggregated on demand; the store is read-only
/// once shared with the refresh service.
pub struct SampleStore {
    interval: Duration,
    samples: HashMap<(String, QuantityKind), Vec<QuantitySample>>,
}

impl SampleStore {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            samples: HashMap::new(),
        }
    }

    pub fn insert(
        &mut self,
        workout_id: impl Into<String>,
        kind: QuantityKind,
        sample: QuantitySample,
    ) {
        self.samples
            .entry((workout_id.into(), kind))
            .or_default()
            .push(sample);
    }

    /// Build a store from a JSON fixture.
    pub fn from_json(interval: Duration, reader: impl std::io::Read) -> Result<Self> {
        let fixtures: Vec<SampleFixture> =
            serde_json::from_reader(reader).context("Failed to parse sample fixture")?;

        let mut store = Self::new(interval);
        for fixture in fixtures {
            for sample in fixture.samples {
                store.insert(&fixture.workout_id, fixture.kind, sample);
            }
        }
        Ok(store)
    }
}

#[async_trait]
impl StatisticsRepository for SampleStore {
    async fn interval_statistics(
        &self,
        workout: &WorkoutRef,
        kind: QuantityKind,
        aggregation: Aggregation,
    ) -> Result<Vec<IntervalStatistic>> {
        let Some(samples) = self.samples.get(&(workout.id().to_string(), kind)) else {
            return Ok(Vec::new());
        };

        let base_unit = kind.base_unit();
        let interval_secs = self.interval.num_seconds().max(1);

        // Bucket index -> sample values in the kind's base unit. BTreeMap
        // keeps the output ordered by interval end.
        let mut buckets: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
        for sample in samples {
            let offset = (sample.time - workout.started_at()).num_seconds();
            if offset < 0 {
                continue;
            }
            // Samples carrying a unit from another dimension are skipped.
            let Ok(value) = sample.quantity.value_in(base_unit) else {
                continue;
            };
            buckets.entry(offset / interval_secs).or_default().push(value);
        }

        tracing::debug!(
            "Aggregated {} samples into {} intervals for workout {}",
            samples.len(),
            buckets.len(),
            workout.id()
        );

        Ok(buckets
            .into_iter()
            .map(|(index, values)| {
                let start = workout.started_at() + Duration::seconds(index * interval_secs);
                let value = Quantity::new(aggregate(&values, aggregation), base_unit);
                IntervalStatistic {
                    start,
                    end: start + self.interval,
                    value: Some(value),
                }
            })
            .collect())
    }
}

fn aggregate(values: &[f64], aggregation: Aggregation) -> f64 {
    match aggregation {
        Aggregation::Average => values.iter().sum::<f64>() / values.len() as f64,
        Aggregation::Minimum => values.iter().copied().fold(f64::INFINITY, f64::min),
        Aggregation::Maximum => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}
