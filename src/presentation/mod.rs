// Presentation layer - Models for the host chart surface
pub mod view_model;
