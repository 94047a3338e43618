//! Character movement over the collision world.
//!
//! This module implements an axis-separated "move and slide" motor:
//!
//! - The desired displacement is split into its X and Y components
//! - Each component is swept through the world on its own
//! - A blocked component is clamped to the gap in front of the body
//! - The free component is kept, so the body slides along walls
//!
//! # Design
//!
//! The [`CharacterMotor`] borrows a [`BodyTransform`] and a
//! [`CollisionQuery`](crate::CollisionQuery) for the duration of a call and
//! translates the body in place. The only state it keeps between calls is the
//! last facing direction.

mod body;
mod config;
mod motor;

pub use body::{Body, BodyTransform};
pub use config::MotorConfig;
pub use motor::{AxisHit, CharacterMotor, MotorStep};
