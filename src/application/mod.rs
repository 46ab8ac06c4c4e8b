// Application layer - Use cases and ports
pub mod refresh_service;
pub mod series_mapper;
pub mod statistics_repository;
