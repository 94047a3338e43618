//! Error types for motor setup and configuration.

use thiserror::Error;

/// Errors raised while configuring a [`CharacterMotor`](crate::CharacterMotor).
///
/// Motion itself never fails; these only surface at setup time.
#[derive(Debug, Error)]
pub enum MotorError {
    #[error("invalid box shape: size {width}x{height} must be finite and positive")]
    InvalidShape { width: f32, height: f32 },

    #[error("invalid box offset ({x}, {y}): must be finite")]
    InvalidOffset { x: f32, y: f32 },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MotorError>;
