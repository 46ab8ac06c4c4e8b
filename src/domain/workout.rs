// Workout domain model
use chrono::{DateTime, Duration, Utc};

/// Reference to a completed workout session owned by the external health
/// store. This crate only ever holds the reference; the workout itself is
/// created and destroyed elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRef {
    id: String,
    started_at: DateTime<Utc>,
    ended_at: DateTime<Utc>,
}

impl WorkoutRef {
    pub fn new(id: impl Into<String>, started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            started_at,
            ended_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ended_at(&self) -> DateTime<Utc> {
        self.ended_at
    }

    /// Elapsed time, for the summary panel.
    pub fn duration(&self) -> Duration {
        self.ended_at - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duration() {
        let start = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 14, 10, 30, 0).unwrap();
        let workout = WorkoutRef::new("morning_ride", start, end);

        assert_eq!(workout.duration(), Duration::minutes(90));
        assert_eq!(workout.id(), "morning_ride");
    }
}
