//! RIASEC/Holland interest inventory engine and assessment session service.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
