// Repository trait for workout statistics access
use crate::domain::quantity::{Quantity, QuantityKind};
use crate::domain::workout::WorkoutRef;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Aggregation applied over each statistics interval. The chart pipeline
/// always requests `Average`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Average,
    Minimum,
    Maximum,
}

/// One pre-aggregated statistics interval produced by the upstream store.
/// `value` is the requested aggregate and is absent when the interval holds
/// no usable samples.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalStatistic {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub value: Option<Quantity>,
}

#[async_trait]
pub trait StatisticsRepository: Send + Sync {
    /// Per-interval statistics for one workout and quantity kind, ordered by
    /// interval end time. Idempotent and side-effect free as far as callers
    /// are concerned; bucketing happens upstream.
    async fn interval_statistics(
        &self,
        workout: &WorkoutRef,
        kind: QuantityKind,
        aggregation: Aggregation,
    ) -> anyhow::Result<Vec<IntervalStatistic>>;
}
