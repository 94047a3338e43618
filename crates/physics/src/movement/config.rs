//! Motor configuration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::collision::{BoxShape, LayerMask};
use crate::error::Result;

/// Configuration for a [`CharacterMotor`](super::CharacterMotor).
///
/// Supplied once at setup; the motor never changes these values afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorConfig {
    /// Layers that block the motor.
    pub collision_layer_mask: LayerMask,

    /// Box carried by the body. A unit box is provisioned when unset.
    pub shape: Option<BoxShape>,

    /// Facing direction before the first non-zero move.
    pub initial_facing: Vec2,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            collision_layer_mask: LayerMask::MASK_CHARACTER_SOLID,
            shape: None,
            initial_facing: Vec2::X,
        }
    }
}

impl MotorConfig {
    /// Default config with an explicit box.
    pub fn with_shape(shape: BoxShape) -> Self {
        Self {
            shape: Some(shape),
            ..Default::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
