//! Error type for construction-time validation and configuration loading.
//!
//! Stepping the simulation never fails; only building its inputs can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("ball weight must be greater than zero")]
    ZeroWeight,
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PhysicsError>;
