//! Explainable laptop recommendations from free-form product text.

pub mod analysis;
pub mod config;
pub mod error;
pub mod retrieval;
pub mod telemetry;
