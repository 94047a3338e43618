//! Player input handling.
//!
//! Converts digital direction keys into the raw axis vector the motor
//! consumes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Direction key states for a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementInput {
    pub const NONE: Self = Self {
        left: false,
        right: false,
        up: false,
        down: false,
    };

    /// Raw axis values, `-1`, `0` or `1` per axis.
    ///
    /// Diagonals are left unnormalized; the motor normalizes the direction
    /// itself. Opposing keys cancel out.
    pub fn axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.right {
            axis.x += 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if self.up {
            axis.y += 1.0;
        }
        if self.down {
            axis.y -= 1.0;
        }
        axis
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.axis() == Vec2::ZERO
    }
}
