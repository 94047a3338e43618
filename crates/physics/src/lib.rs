//! motor2d Physics
//!
//! A kinematic "move and slide" motor for axis-aligned boxes in a 2D world.
//! Given a desired direction and speed, the motor computes a displacement
//! that stops at obstacles instead of tunneling through them, while still
//! sliding along the free axis.
//!
//! # Architecture
//!
//! The crate is split into two systems:
//!
//! - **Collision**: Casts boxes through the world and measures rest-pose gaps
//! - **Movement**: Uses those queries to clamp motion one axis at a time
//!
//! The motor only depends on the [`CollisionQuery`] trait, so a host that
//! already owns a physics engine can plug it in. [`CollisionWorld`] is the
//! bundled implementation.

pub mod collision;
pub mod error;
pub mod movement;

// Re-export commonly used types
pub use collision::{
    BoxShape, CastHit, ColliderHandle, CollisionQuery, CollisionWorld, LayerMask, QueryFilter,
    Separation,
};
pub use error::MotorError;
pub use movement::{AxisHit, Body, BodyTransform, CharacterMotor, MotorConfig, MotorStep};
