//! Collision world containing box colliders.
//!
//! The world stores axis-aligned boxes on collision layers and answers the
//! [`CollisionQuery`] contract against them.

use glam::Vec2;
use parry2d::bounding_volume::{Aabb, BoundingVolume};
use parry2d::math::{Point, Vector};

use super::flags::LayerMask;
use super::query::{CastHit, ColliderHandle, CollisionQuery, QueryFilter, Separation};

/// Tolerance for boxes that only touch along a side parallel to the cast.
const CONTACT_EPSILON: f32 = 1.0e-5;

/// An axis-aligned box collider in the world.
#[derive(Debug, Clone)]
pub struct Collider {
    /// Handle assigned when the collider was added.
    pub handle: ColliderHandle,
    /// Centre position in world space.
    pub center: Vec2,
    /// Half-size in each axis.
    pub half_extents: Vec2,
    /// Layers this collider occupies.
    pub layers: LayerMask,
    aabb: Aabb,
}

impl Collider {
    /// Full width and height.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    #[inline]
    fn matches(&self, filter: QueryFilter) -> bool {
        filter.mask.intersects(self.layers) && filter.exclude != Some(self.handle)
    }
}

/// The collision world containing all box colliders.
///
/// Colliders are static between calls to [`CollisionWorld::set_position`];
/// queries take `&self` and never mutate the world.
#[derive(Debug, Default)]
pub struct CollisionWorld {
    colliders: Vec<Collider>,
    next_id: u32,
}

impl CollisionWorld {
    /// Create an empty collision world.
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
            next_id: 0,
        }
    }

    /// Add an axis-aligned box to the world.
    ///
    /// # Arguments
    ///
    /// * `center` - Centre of the box in world space
    /// * `size` - Full width and height
    /// * `layers` - Layers the box occupies
    pub fn add_box(&mut self, center: Vec2, size: Vec2, layers: LayerMask) -> ColliderHandle {
        let handle = ColliderHandle(self.next_id);
        self.next_id += 1;

        let half_extents = size.abs() * 0.5;

        self.colliders.push(Collider {
            handle,
            center,
            half_extents,
            layers,
            aabb: box_aabb(center, half_extents),
        });

        handle
    }

    /// Remove a collider, returning it if it existed.
    pub fn remove(&mut self, handle: ColliderHandle) -> Option<Collider> {
        let index = self.colliders.iter().position(|c| c.handle == handle)?;
        Some(self.colliders.remove(index))
    }

    /// Move a collider to a new centre. Returns `false` for unknown handles.
    pub fn set_position(&mut self, handle: ColliderHandle, center: Vec2) -> bool {
        match self.colliders.iter_mut().find(|c| c.handle == handle) {
            Some(collider) => {
                collider.center = center;
                collider.aabb = box_aabb(center, collider.half_extents);
                true
            }
            None => false,
        }
    }

    /// Look up a collider by handle.
    pub fn get(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.iter().find(|c| c.handle == handle)
    }

    /// Iterate over all colliders.
    pub fn colliders(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.iter()
    }

    /// Remove all colliders.
    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    /// Get the number of colliders.
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// Find every collider that strictly overlaps a box at rest.
    pub fn overlaps(&self, origin: Vec2, size: Vec2, filter: QueryFilter) -> Vec<ColliderHandle> {
        let test_aabb = box_aabb(origin, size.abs() * 0.5);

        self.colliders
            .iter()
            .filter(|c| c.matches(filter))
            .filter(|c| {
                // Boxes that merely touch intersect in a degenerate region
                test_aabb.intersects(&c.aabb)
                    && test_aabb
                        .intersection(&c.aabb)
                        .map_or(false, |shared| shared.extents().min() > CONTACT_EPSILON)
            })
            .map(|c| c.handle)
            .collect()
    }
}

impl CollisionQuery for CollisionWorld {
    fn shape_cast(
        &self,
        origin: Vec2,
        size: Vec2,
        direction: Vec2,
        max_distance: f32,
        filter: QueryFilter,
    ) -> Option<CastHit> {
        let direction = direction.normalize_or_zero();
        if direction == Vec2::ZERO || !(max_distance > 0.0) {
            return None;
        }

        let half = size.abs() * 0.5;
        let mut closest: Option<CastHit> = None;

        for collider in self.colliders.iter().filter(|c| c.matches(filter)) {
            let Some((distance, normal)) = sweep_box(origin, half, direction, collider) else {
                continue;
            };
            if distance > max_distance {
                continue;
            }

            let is_closer = closest.as_ref().map_or(true, |hit| distance < hit.distance);
            if is_closer {
                closest = Some(CastHit {
                    collider: collider.handle,
                    distance,
                    normal,
                    point: origin + direction * distance,
                });
            }
        }

        closest
    }

    fn separation(&self, origin: Vec2, size: Vec2, handle: ColliderHandle) -> Option<Separation> {
        let collider = self.get(handle)?;
        let half = size.abs() * 0.5;

        Some(Separation {
            distance: box_gap(origin, half, collider),
            normal: separating_axis(origin, half, collider),
        })
    }
}

// ============================================================================
// Private helpers
// ============================================================================

fn box_aabb(center: Vec2, half_extents: Vec2) -> Aabb {
    Aabb::from_half_extents(
        Point::new(center.x, center.y),
        Vector::new(half_extents.x, half_extents.y),
    )
}

/// Sweep a box against a collider using the slab test on their Minkowski sum.
///
/// Returns the travel distance to first contact (clamped to zero when the
/// boxes already touch or overlap ahead) and the collider's surface normal.
fn sweep_box(
    origin: Vec2,
    half: Vec2,
    direction: Vec2,
    collider: &Collider,
) -> Option<(f32, Vec2)> {
    let expanded = half + collider.half_extents;
    let relative = origin - collider.center;

    let mut entry = f32::NEG_INFINITY;
    let mut exit = f32::INFINITY;
    let mut entry_normal = -direction;

    for axis in 0..2 {
        let dir = direction[axis];
        let rel = relative[axis];
        let ext = expanded[axis];

        if dir == 0.0 {
            // Parallel to this slab: must already be strictly inside it
            if rel.abs() >= ext - CONTACT_EPSILON {
                return None;
            }
            continue;
        }

        let t1 = (-ext - rel) / dir;
        let t2 = (ext - rel) / dir;
        let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };

        if near > entry {
            entry = near;
            let mut normal = Vec2::ZERO;
            normal[axis] = -dir.signum();
            entry_normal = normal;
        }
        exit = exit.min(far);
    }

    // Behind us, or only grazing a corner
    if exit <= 0.0 || entry >= exit {
        return None;
    }

    if entry < 0.0 {
        // Started overlapping: blocked immediately
        return Some((0.0, -direction));
    }

    Some((entry, entry_normal))
}

/// Signed rest-pose gap between two axis-aligned boxes.
///
/// Positive is the Euclidean gap between the closest faces or corners,
/// negative is the shallowest penetration depth.
fn box_gap(origin: Vec2, half: Vec2, collider: &Collider) -> f32 {
    let gap = (origin - collider.center).abs() - (half + collider.half_extents);

    if gap.x <= 0.0 && gap.y <= 0.0 {
        gap.x.max(gap.y)
    } else {
        gap.max(Vec2::ZERO).length()
    }
}

/// Axis of largest gap between a box and a collider, pointing at the box.
fn separating_axis(origin: Vec2, half: Vec2, collider: &Collider) -> Vec2 {
    let delta = origin - collider.center;
    let gap = delta.abs() - (half + collider.half_extents);

    if gap.x >= gap.y {
        Vec2::new(if delta.x < 0.0 { -1.0 } else { 1.0 }, 0.0)
    } else {
        Vec2::new(0.0, if delta.y < 0.0 { -1.0 } else { 1.0 })
    }
}

// ============================================================================
// Tests
// ============================================================================
