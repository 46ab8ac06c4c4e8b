// Infrastructure layer - Configuration and concrete data sources
pub mod config;
pub mod sample_store;
