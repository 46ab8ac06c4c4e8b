// Mapper from interval statistics to chart points
use crate::application::statistics_repository::IntervalStatistic;
use crate::domain::quantity::Unit;
use crate::domain::telemetry::ChartPoint;

/// Convert interval statistics into chart points expressed in `unit`.
/// Intervals without a usable aggregate (value absent, or a unit from
/// another dimension) are dropped rather than mapped to zero. Input order
/// is preserved; no sorting, deduplication, or resampling happens here -
/// the upstream aggregation window defines the series granularity.
pub fn map_to_points(
    statistics: &[IntervalStatistic],
    unit: Unit,
    category: &str,
) -> Vec<ChartPoint> {
    statistics
        .iter()
        .filter_map(|stat| {
            let value = stat.value.as_ref()?.value_in(unit).ok()?;
            Some(ChartPoint::new(category, stat.end, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quantity::Quantity;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn interval_end(minute: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap() + Duration::minutes(minute)
    }

    fn stat(minute: i64, value: Option<Quantity>) -> IntervalStatistic {
        IntervalStatistic {
            start: interval_end(minute) - Duration::minutes(1),
            end: interval_end(minute),
            value,
        }
    }

    #[test]
    fn test_missing_average_is_dropped() {
        let statistics = vec![
            stat(1, Some(Quantity::new(10.0, Unit::MilesPerHour))),
            stat(2, None),
            stat(3, Some(Quantity::new(20.0, Unit::MilesPerHour))),
        ];

        let points = map_to_points(&statistics, Unit::MilesPerHour, "Speed");

        assert_eq!(
            points,
            vec![
                ChartPoint::new("Speed", interval_end(1), 10.0),
                ChartPoint::new("Speed", interval_end(3), 20.0),
            ]
        );
    }

    #[test]
    fn test_incompatible_unit_is_dropped() {
        let statistics = vec![
            stat(1, Some(Quantity::new(90.0, Unit::RevolutionsPerMinute))),
            stat(2, Some(Quantity::new(250.0, Unit::Watts))),
        ];

        let points = map_to_points(&statistics, Unit::Watts, "Power");

        assert_eq!(points, vec![ChartPoint::new("Power", interval_end(2), 250.0)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(map_to_points(&[], Unit::MilesPerHour, "Speed").is_empty());
    }

    #[test]
    fn test_unit_conversion_applied() {
        // 4.4704 m/s is exactly 10 mph
        let statistics = vec![stat(1, Some(Quantity::new(4.4704, Unit::MetersPerSecond)))];

        let points = map_to_points(&statistics, Unit::MilesPerHour, "Speed");

        assert_eq!(points.len(), 1);
        assert!((points[0].value - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_label_is_independent_of_data() {
        let statistics = vec![
            stat(1, Some(Quantity::new(90.0, Unit::RevolutionsPerMinute))),
            stat(2, Some(Quantity::new(95.0, Unit::RevolutionsPerMinute))),
        ];

        let as_cadence = map_to_points(&statistics, Unit::RevolutionsPerMinute, "Cadence");
        let relabeled = map_to_points(&statistics, Unit::RevolutionsPerMinute, "Warmup");

        assert_eq!(as_cadence.len(), relabeled.len());
        for (a, b) in as_cadence.iter().zip(&relabeled) {
            assert_eq!(a.category, "Cadence");
            assert_eq!(b.category, "Warmup");
            assert_eq!(a.time, b.time);
            assert_eq!(a.value, b.value);
        }
    }
}
