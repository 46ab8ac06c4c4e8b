// Domain layer - Core data models
pub mod quantity;
pub mod telemetry;
pub mod workout;
