//! The query contract between the motor and a collision engine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::flags::LayerMask;

/// Opaque handle to a collider inside a [`CollisionQuery`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColliderHandle(pub u32);

/// Which colliders a query may hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryFilter {
    /// Layers the query collides with.
    pub mask: LayerMask,
    /// A collider to skip, usually the moving body's own.
    pub exclude: Option<ColliderHandle>,
}

impl QueryFilter {
    pub fn new(mask: LayerMask) -> Self {
        Self {
            mask,
            exclude: None,
        }
    }

    pub fn excluding(mut self, handle: ColliderHandle) -> Self {
        self.exclude = Some(handle);
        self
    }
}

/// The nearest blocking collider found by a shape cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastHit {
    /// Collider that was hit.
    pub collider: ColliderHandle,
    /// Distance travelled along the cast direction before contact.
    ///
    /// `0.0` when the box already touches or overlaps the collider.
    pub distance: f32,
    /// Surface normal at the contact, pointing away from the collider.
    pub normal: Vec2,
    /// Box centre at the moment of contact.
    pub point: Vec2,
}

/// Rest-pose gap between the moving box and a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    /// Shortest distance between the two shapes. Negative when they overlap.
    pub distance: f32,
    /// Unit vector pointing from the collider towards the box.
    pub normal: Vec2,
}

impl Separation {
    #[inline]
    pub fn is_overlapping(&self) -> bool {
        self.distance < 0.0
    }
}

/// Collision queries the motor needs from a physics engine.
///
/// Boxes are axis-aligned: the cast rotation is fixed at zero.
pub trait CollisionQuery {
    /// Sweep a box of `size` centred at `origin` along `direction` for up to
    /// `max_distance`.
    ///
    /// Only the direction's sign matters, not its length. Returns the
    /// nearest blocking collider, or `None` when the path is clear, the
    /// direction is zero, or `max_distance` is not positive.
    fn shape_cast(
        &self,
        origin: Vec2,
        size: Vec2,
        direction: Vec2,
        max_distance: f32,
        filter: QueryFilter,
    ) -> Option<CastHit>;

    /// Measure the gap between a box of `size` centred at `origin` and the
    /// collider behind `handle`, both at rest.
    ///
    /// Returns `None` if the handle is unknown.
    fn separation(&self, origin: Vec2, size: Vec2, handle: ColliderHandle) -> Option<Separation>;
}

impl<T: CollisionQuery + ?Sized> CollisionQuery for &T {
    fn shape_cast(
        &self,
        origin: Vec2,
        size: Vec2,
        direction: Vec2,
        max_distance: f32,
        filter: QueryFilter,
    ) -> Option<CastHit> {
        (**self).shape_cast(origin, size, direction, max_distance, filter)
    }

    fn separation(&self, origin: Vec2, size: Vec2, handle: ColliderHandle) -> Option<Separation> {
        (**self).separation(origin, size, handle)
    }
}
