//! Collision queries for the motor.
//!
//! This module defines the contract the motor needs from a physics engine
//! and a bundled world of axis-aligned box colliders that fulfils it.
//!
//! # Key Types
//!
//! - [`CollisionQuery`]: The query contract (shape cast + separation)
//! - [`CollisionWorld`]: Box colliders with layer filtering
//! - [`BoxShape`]: The moving box (size + offset from the body)
//! - [`LayerMask`]: Which collider layers take part in a query
//!
//! # Query Model
//!
//! A shape cast sweeps a box from an origin along a direction and reports
//! the nearest blocking collider. A separation query then measures the gap
//! between the box at rest and that collider. The two distances can differ:
//! the cast is swept along a line, the separation is the shortest gap.

mod flags;
mod query;
mod shape;
mod world;

pub use flags::LayerMask;
pub use query::{CastHit, ColliderHandle, CollisionQuery, QueryFilter, Separation};
pub use shape::BoxShape;
pub use world::{Collider, CollisionWorld};
