// Workout chart telemetry - selection-driven refresh pipeline for workout charts
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::refresh_service::ChartRefreshService;
pub use application::series_mapper::map_to_points;
pub use application::statistics_repository::{Aggregation, IntervalStatistic, StatisticsRepository};
pub use domain::quantity::{Quantity, QuantityKind, Unit, UnitError};
pub use domain::telemetry::{Channel, ChartPoint, SeriesSnapshot};
pub use domain::workout::WorkoutRef;
pub use infrastructure::config::{ChartStyle, ChartsConfig, load_charts_config};
pub use infrastructure::sample_store::{QuantitySample, SampleStore};
pub use presentation::view_model::{ChartModel, ChartSurfaceModel, build_surface_model};
