//! The box shape carried by a moving body.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{MotorError, Result};

/// An axis-aligned box attached to a body.
///
/// The box centre sits at `body position + offset`. Rotation is always zero:
/// the motor only moves axis-aligned boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    /// Full width and height.
    pub size: Vec2,
    /// Local offset of the box centre from the body position.
    #[serde(default)]
    pub offset: Vec2,
}

impl BoxShape {
    /// Unit box centred on the body, used when no shape is configured.
    pub const UNIT: Self = Self {
        size: Vec2::ONE,
        offset: Vec2::ZERO,
    };

    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            offset: Vec2::ZERO,
        }
    }

    pub fn with_offset(size: Vec2, offset: Vec2) -> Self {
        Self { size, offset }
    }

    /// Half-size in each axis.
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    /// World-space centre of the box for a body at `position`.
    #[inline]
    pub fn origin(&self, position: Vec2) -> Vec2 {
        position + self.offset
    }

    /// Check that the box can take part in collision queries.
    ///
    /// Size must be finite and strictly positive on both axes, and the
    /// offset must be finite.
    pub fn validate(&self) -> Result<()> {
        let size_ok = self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0;
        if !size_ok {
            return Err(MotorError::InvalidShape {
                width: self.size.x,
                height: self.size.y,
            });
        }
        if !self.offset.is_finite() {
            return Err(MotorError::InvalidOffset {
                x: self.offset.x,
                y: self.offset.y,
            });
        }
        Ok(())
    }
}

impl Default for BoxShape {
    fn default() -> Self {
        Self::UNIT
    }
}
