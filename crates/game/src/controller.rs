//! Input-driven controller for a single character.

use glam::Vec2;
use motor2d_physics::{BodyTransform, CharacterMotor, CollisionQuery, MotorStep};
use serde::{Deserialize, Serialize};

use crate::input::MovementInput;

/// Forwards the frame's input axis to a motor at a fixed speed.
///
/// Idle frames are forwarded too; the motor treats a zero direction as "no
/// intent" and keeps the previous facing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleController {
    /// Movement speed (units/second).
    pub speed: f32,

    #[serde(skip)]
    last_input: Vec2,
}

impl Default for ExampleController {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ExampleController {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            last_input: Vec2::ZERO,
        }
    }

    /// Axis read on the most recent update.
    #[inline]
    pub fn last_input(&self) -> Vec2 {
        self.last_input
    }

    /// Read the input and move the body for one frame.
    pub fn update<B, Q>(
        &mut self,
        input: &MovementInput,
        motor: &mut CharacterMotor,
        body: &mut B,
        world: &Q,
        delta_time: f32,
    ) -> MotorStep
    where
        B: BodyTransform + ?Sized,
        Q: CollisionQuery + ?Sized,
    {
        self.last_input = input.axis();
        motor.move_body(body, world, self.last_input, self.speed, delta_time)
    }
}
