// View models handed to the host chart surface
use crate::domain::telemetry::{ChartPoint, SeriesSnapshot};
use crate::domain::workout::WorkoutRef;
use crate::infrastructure::config::ChartsConfig;

/// One renderable line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub title: String,
    pub unit_label: String,
    pub color: Option<String>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub fraction_digits: Option<i32>,
    pub points: Vec<ChartPoint>,
}

/// Everything the chart surface renders for one snapshot: the configured
/// line charts plus the workout for the summary sub-panel. The surface
/// renders each chart independently; this crate has no further control once
/// the model is handed over.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSurfaceModel {
    pub workout: Option<WorkoutRef>,
    pub charts: Vec<ChartModel>,
}

pub fn build_surface_model(snapshot: &SeriesSnapshot, config: &ChartsConfig) -> ChartSurfaceModel {
    let charts = config
        .charts
        .iter()
        .map(|style| ChartModel {
            title: style.title.clone(),
            unit_label: style.unit_label.clone(),
            color: style.color.clone(),
            y_min: style.y_min,
            y_max: style.y_max,
            fraction_digits: style.fraction_digits,
            points: snapshot.points(style.channel).to_vec(),
        })
        .collect();

    ChartSurfaceModel {
        workout: snapshot.workout.clone(),
        charts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::Channel;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_build_surface_model() {
        let start = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
        let workout = WorkoutRef::new("ride", start, start + Duration::hours(1));
        let snapshot = SeriesSnapshot {
            workout: Some(workout.clone()),
            speed: vec![ChartPoint::new("Speed", start, 18.5)],
            power: vec![ChartPoint::new("Power", start, 250.0)],
            cadence: Vec::new(),
        };

        let model = build_surface_model(&snapshot, &ChartsConfig::default());

        assert_eq!(model.workout, Some(workout));
        assert_eq!(model.charts.len(), Channel::ALL.len());
        assert_eq!(model.charts[0].title, "Speed");
        assert_eq!(model.charts[0].points, snapshot.speed);
        assert_eq!(model.charts[1].unit_label, "W");
        assert!(model.charts[2].points.is_empty());
    }
}
