//! The axis-separated character motor.
//!
//! Each call turns a `(direction, speed)` pair into a displacement that
//! never pushes the body's box into a blocking collider. The X and Y
//! components are cast and clamped independently, which gives a "slide"
//! along walls for free.
//!
//! Corners are not resolved jointly: a body moving diagonally into an inside
//! corner clamps each axis against its own wall, and a body grazing an
//! outside corner can still receive a diagonal step that clips it. This is
//! accepted behaviour for grid-like scenes.

use glam::Vec2;

use crate::collision::{BoxShape, ColliderHandle, CollisionQuery, LayerMask, QueryFilter};
use crate::error::Result;

use super::body::BodyTransform;
use super::config::MotorConfig;

/// What blocked one axis during a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisHit {
    /// Collider found by the cast.
    pub collider: ColliderHandle,
    /// Swept distance reported by the cast.
    pub cast_distance: f32,
    /// Rest-pose gap to the collider (negative when overlapping).
    pub separation: f32,
}

/// Outcome of a single motor call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotorStep {
    /// Displacement before collision: `normalize(direction) * speed * dt`.
    pub unclamped: Vec2,
    /// Displacement actually applied to the body.
    pub applied: Vec2,
    /// Blocking hit per axis, `[x, y]`.
    pub hits: [Option<AxisHit>; 2],
}

impl MotorStep {
    #[inline]
    pub fn hit_x(&self) -> Option<AxisHit> {
        self.hits[0]
    }

    #[inline]
    pub fn hit_y(&self) -> Option<AxisHit> {
        self.hits[1]
    }

    /// Check if either axis was clamped by a collider.
    #[inline]
    pub fn blocked(&self) -> bool {
        self.hits.iter().any(Option::is_some)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    /// Self-driven movement; updates facing.
    Move,
    /// External force; facing untouched.
    Push,
}

/// Kinematic motor for a box-shaped body.
///
/// # Example
///
/// ```ignore
/// let mut motor = CharacterMotor::new(MotorConfig::default())?;
/// let mut body = Body::new(spawn);
///
/// // Each frame:
/// motor.move_body(&mut body, &world, input_axis, speed, delta_time);
/// ```
#[derive(Debug, Clone)]
pub struct CharacterMotor {
    collision_mask: LayerMask,
    shape: BoxShape,
    last_facing_direction: Vec2,
    ignore: Option<ColliderHandle>,
}

impl CharacterMotor {
    /// Create a motor from its configuration.
    ///
    /// When no shape is configured a unit box is provisioned. A configured
    /// shape with a degenerate size or a non-finite offset is rejected.
    pub fn new(config: MotorConfig) -> Result<Self> {
        let shape = match config.shape {
            Some(shape) => {
                shape.validate()?;
                shape
            }
            None => {
                log::warn!("no box shape configured, provisioning {:?}", BoxShape::UNIT);
                BoxShape::UNIT
            }
        };

        Ok(Self::from_parts(&config, shape))
    }

    /// Create a motor from [`MotorConfig::default`] with a unit box.
    pub fn with_default_config() -> Self {
        Self::from_parts(&MotorConfig::default(), BoxShape::UNIT)
    }

    fn from_parts(config: &MotorConfig, shape: BoxShape) -> Self {
        let mut last_facing_direction = config.initial_facing.normalize_or_zero();
        if last_facing_direction == Vec2::ZERO {
            last_facing_direction = Vec2::X;
        }

        Self {
            collision_mask: config.collision_layer_mask,
            shape,
            last_facing_direction,
            ignore: None,
        }
    }

    /// Skip the body's own collider when it is registered in the world.
    pub fn ignoring(mut self, handle: ColliderHandle) -> Self {
        self.ignore = Some(handle);
        self
    }

    #[inline]
    pub fn shape(&self) -> BoxShape {
        self.shape
    }

    #[inline]
    pub fn collision_mask(&self) -> LayerMask {
        self.collision_mask
    }

    /// Last non-zero movement direction, unit length.
    #[inline]
    pub fn last_facing_direction(&self) -> Vec2 {
        self.last_facing_direction
    }

    /// Override the facing direction.
    ///
    /// The value is normalized; zero or non-finite vectors are ignored and
    /// `false` is returned.
    pub fn set_last_facing_direction(&mut self, direction: Vec2) -> bool {
        let facing = direction.normalize_or_zero();
        if facing == Vec2::ZERO {
            return false;
        }
        self.last_facing_direction = facing;
        true
    }

    /// Move the body in `direction` at `speed` units per second.
    ///
    /// A non-zero `direction` also becomes the new facing direction. The
    /// direction does not need to be normalized. A negative speed moves the
    /// body backwards without flipping its facing.
    pub fn move_body<B, Q>(
        &mut self,
        body: &mut B,
        world: &Q,
        direction: Vec2,
        speed: f32,
        delta_time: f32,
    ) -> MotorStep
    where
        B: BodyTransform + ?Sized,
        Q: CollisionQuery + ?Sized,
    {
        self.step(Intent::Move, body, world, direction, speed, delta_time)
    }

    /// Move the body without changing its facing direction.
    ///
    /// Used for knockback, conveyors and other external forces.
    pub fn push<B, Q>(
        &mut self,
        body: &mut B,
        world: &Q,
        direction: Vec2,
        speed: f32,
        delta_time: f32,
    ) -> MotorStep
    where
        B: BodyTransform + ?Sized,
        Q: CollisionQuery + ?Sized,
    {
        self.step(Intent::Push, body, world, direction, speed, delta_time)
    }

    fn step<B, Q>(
        &mut self,
        intent: Intent,
        body: &mut B,
        world: &Q,
        direction: Vec2,
        speed: f32,
        delta_time: f32,
    ) -> MotorStep
    where
        B: BodyTransform + ?Sized,
        Q: CollisionQuery + ?Sized,
    {
        let normalized = direction.normalize_or_zero();

        if intent == Intent::Move && normalized != Vec2::ZERO {
            self.last_facing_direction = normalized;
        }

        let step = self.resolve(body.position(), world, direction, speed, delta_time);
        body.translate(step.applied);

        log::trace!(
            "{:?}: unclamped={:?} applied={:?}",
            intent,
            step.unclamped,
            step.applied
        );

        step
    }

    /// Clamp the frame's displacement against the world, one axis at a time.
    fn resolve<Q>(
        &self,
        position: Vec2,
        world: &Q,
        direction: Vec2,
        speed: f32,
        delta_time: f32,
    ) -> MotorStep
    where
        Q: CollisionQuery + ?Sized,
    {
        let normalized = direction.normalize_or_zero();
        let distance = speed * delta_time;

        if !distance.is_finite() {
            log::warn!("ignoring non-finite move distance (speed={speed}, dt={delta_time})");
            return MotorStep::default();
        }

        let unclamped = normalized * distance;
        let mut step = MotorStep {
            unclamped,
            applied: unclamped,
            hits: [None, None],
        };

        if unclamped == Vec2::ZERO {
            return step;
        }

        let origin = self.shape.origin(position);
        let filter = QueryFilter {
            mask: self.collision_mask,
            exclude: self.ignore,
        };
        // Negative speed moves against the input, so cast that way too
        let sign = distance.signum();

        for axis in 0..2 {
            if unclamped[axis] == 0.0 {
                continue;
            }

            let mut probe = Vec2::ZERO;
            probe[axis] = direction[axis] * sign;

            let Some(hit) =
                world.shape_cast(origin, self.shape.size, probe, distance.abs(), filter)
            else {
                continue;
            };

            let Some(separation) = world.separation(origin, self.shape.size, hit.collider) else {
                log::warn!("cast hit {:?} but separation query failed", hit.collider);
                continue;
            };

            // Close the gap exactly: never past the obstacle, never backwards
            let gap = separation.distance.max(0.0);
            let limit = unclamped[axis].abs();
            step.applied[axis] = (normalized[axis] * gap * sign).clamp(-limit, limit);
            step.hits[axis] = Some(AxisHit {
                collider: hit.collider,
                cast_distance: hit.distance,
                separation: separation.distance,
            });

            log::debug!(
                "axis {} clamped by {:?}: separation={} applied={}",
                if axis == 0 { "x" } else { "y" },
                hit.collider,
                separation.distance,
                step.applied[axis]
            );
        }

        step
    }
}

impl Default for CharacterMotor {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::collision::{CastHit, CollisionWorld, Separation};
    use crate::error::MotorError;
    use crate::movement::Body;

    const EPS: f32 = 1.0e-4;

    /// Query stub that blocks every cast and records how often it was asked.
    struct ScriptedQuery {
        cast_distance: f32,
        separation: f32,
        casts: Cell<usize>,
        separations: Cell<usize>,
    }

    impl ScriptedQuery {
        fn new(cast_distance: f32, separation: f32) -> Self {
            Self {
                cast_distance,
                separation,
                casts: Cell::new(0),
                separations: Cell::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.casts.get() + self.separations.get()
        }
    }

    impl CollisionQuery for ScriptedQuery {
        fn shape_cast(
            &self,
            origin: Vec2,
            _size: Vec2,
            direction: Vec2,
            _max_distance: f32,
            _filter: QueryFilter,
        ) -> Option<CastHit> {
            self.casts.set(self.casts.get() + 1);
            let direction = direction.normalize_or_zero();
            Some(CastHit {
                collider: ColliderHandle(7),
                distance: self.cast_distance,
                normal: -direction,
                point: origin + direction * self.cast_distance,
            })
        }

        fn separation(&self, _origin: Vec2, _size: Vec2, _handle: ColliderHandle) -> Option<Separation> {
            self.separations.set(self.separations.get() + 1);
            Some(Separation {
                distance: self.separation,
                normal: Vec2::NEG_X,
            })
        }
    }

    fn wall_world(center: Vec2) -> (CollisionWorld, ColliderHandle) {
        let mut world = CollisionWorld::new();
        let wall = world.add_box(center, Vec2::ONE, LayerMask::OBSTACLE);
        (world, wall)
    }

    #[test]
    fn test_new_provisions_unit_box() {
        let motor = CharacterMotor::new(MotorConfig::default()).expect("default config is valid");
        assert_eq!(motor.shape(), BoxShape::UNIT);
        assert_eq!(motor.last_facing_direction(), Vec2::X);
    }

    #[test]
    fn test_new_rejects_degenerate_shape() {
        let config = MotorConfig::with_shape(BoxShape::new(Vec2::new(0.0, 1.0)));
        assert!(matches!(
            CharacterMotor::new(config),
            Err(MotorError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_default_matches_default_config() {
        let motor = CharacterMotor::with_default_config();
        let configured = CharacterMotor::new(MotorConfig::with_shape(BoxShape::UNIT)).expect("valid");

        assert_eq!(motor.collision_mask(), MotorConfig::default().collision_layer_mask);
        assert_eq!(motor.collision_mask(), configured.collision_mask());
        assert_eq!(motor.shape(), configured.shape());
        assert_eq!(motor.last_facing_direction(), configured.last_facing_direction());
    }

    #[test]
    fn test_new_normalizes_initial_facing() {
        let config = MotorConfig {
            initial_facing: Vec2::new(0.0, -3.0),
            ..Default::default()
        };
        let motor = CharacterMotor::new(config).expect("valid");
        assert_eq!(motor.last_facing_direction(), Vec2::NEG_Y);

        let config = MotorConfig {
            initial_facing: Vec2::ZERO,
            ..Default::default()
        };
        let motor = CharacterMotor::new(config).expect("valid");
        assert_eq!(motor.last_facing_direction(), Vec2::X);
    }

    #[test]
    fn test_move_free_space() {
        let world = CollisionWorld::new();
        let mut motor = CharacterMotor::default();
        let mut body = Body::default();

        let step = motor.move_body(&mut body, &world, Vec2::new(3.0, 4.0), 10.0, 0.5);

        assert!((step.applied - Vec2::new(3.0, 4.0)).length() < EPS);
        assert_eq!(step.applied, step.unclamped);
        assert!(!step.blocked());
        assert_eq!(body.position, step.applied);
        assert!((motor.last_facing_direction() - Vec2::new(0.6, 0.8)).length() < EPS);
    }

    #[test]
    fn test_zero_direction_keeps_facing() {
        let world = CollisionWorld::new();
        let mut motor = CharacterMotor::default();
        let mut body = Body::new(Vec2::new(2.0, 2.0));

        motor.move_body(&mut body, &world, Vec2::NEG_Y, 1.0, 1.0);
        let step = motor.move_body(&mut body, &world, Vec2::ZERO, 100.0, 1.0);

        assert_eq!(step.applied, Vec2::ZERO);
        assert!(!step.applied.is_nan());
        assert_eq!(motor.last_facing_direction(), Vec2::NEG_Y);
        assert_eq!(body.position, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_non_finite_input_is_zero() {
        let world = CollisionWorld::new();
        let mut motor = CharacterMotor::default();
        let mut body = Body::default();

        let step = motor.move_body(&mut body, &world, Vec2::new(f32::NAN, 1.0), 1.0, 1.0);
        assert_eq!(step.applied, Vec2::ZERO);
        assert_eq!(motor.last_facing_direction(), Vec2::X);

        let step = motor.move_body(&mut body, &world, Vec2::X, f32::INFINITY, 1.0);
        assert_eq!(step.applied, Vec2::ZERO);
        assert_eq!(body.position, Vec2::ZERO);
    }

    #[test]
    fn test_move_clamped_by_wall() {
        let (world, wall) = wall_world(Vec2::new(1.0, 0.0));
        let mut motor = CharacterMotor::default();
        // Right face at -0.5, wall face at 0.5
        let mut body = Body::new(Vec2::new(-1.0, 0.0));

        let step = motor.move_body(&mut body, &world, Vec2::X, 5.0, 1.0);

        assert!((step.applied.x - 1.0).abs() < EPS);
        assert_eq!(step.applied.y, 0.0);
        let hit = step.hit_x().expect("x blocked");
        assert_eq!(hit.collider, wall);
        assert!((hit.separation - 1.0).abs() < EPS);
        assert!(step.hit_y().is_none());
        assert!(body.position.x.abs() < EPS);
    }

    #[test]
    fn test_clamp_uses_separation_not_cast_distance() {
        let world = ScriptedQuery::new(0.25, 1.5);
        let mut motor = CharacterMotor::default();
        let mut body = Body::default();

        let step = motor.move_body(&mut body, &world, Vec2::X, 10.0, 1.0);

        assert!((step.applied.x - 1.5).abs() < EPS);
        let hit = step.hit_x().expect("x blocked");
        assert_eq!(hit.collider, ColliderHandle(7));
        assert_eq!(hit.cast_distance, 0.25);
        assert_eq!(hit.separation, 1.5);
        assert_eq!(world.casts.get(), 1);
        assert_eq!(world.separations.get(), 1);
    }

    #[test]
    fn test_diagonal_clamp_scales_separation() {
        let world = ScriptedQuery::new(0.0, 2.0);
        let mut motor = CharacterMotor::default();
        let mut body = Body::default();

        let step = motor.move_body(&mut body, &world, Vec2::new(1.0, -1.0), 10.0, 1.0);

        let component = std::f32::consts::FRAC_1_SQRT_2 * 2.0;
        assert!((step.applied - Vec2::new(component, -component)).length() < EPS);
        assert_eq!(world.casts.get(), 2);
        assert_eq!(world.separations.get(), 2);
    }

    #[test]
    fn test_overlapping_separation_stops_axis() {
        let world = ScriptedQuery::new(0.0, -0.3);
        let mut motor = CharacterMotor::default();
        let mut body = Body::new(Vec2::new(1.0, 1.0));

        let step = motor.push(&mut body, &world, Vec2::NEG_X, 4.0, 1.0);

        assert_eq!(step.applied, Vec2::ZERO);
        assert_eq!(body.position, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_zero_displacement_skips_queries() {
        let world = ScriptedQuery::new(0.0, 0.0);
        let mut motor = CharacterMotor::default();
        let mut body = Body::new(Vec2::new(3.0, -1.0));

        motor.move_body(&mut body, &world, Vec2::ZERO, 5.0, 1.0);
        motor.move_body(&mut body, &world, Vec2::X, 0.0, 1.0);
        motor.move_body(&mut body, &world, Vec2::Y, 5.0, 0.0);
        motor.push(&mut body, &world, Vec2::ZERO, 5.0, 1.0);

        assert_eq!(world.calls(), 0);
        assert_eq!(body.position, Vec2::new(3.0, -1.0));
    }

    #[test]
    fn test_touching_wall_blocks_completely() {
        let (world, _) = wall_world(Vec2::new(1.0, 0.0));
        let mut motor = CharacterMotor::default();
        let mut body = Body::default();

        let step = motor.move_body(&mut body, &world, Vec2::X, 5.0, 1.0);

        assert!(step.applied.x.abs() < EPS);
        assert_eq!(step.applied.y, 0.0);
        assert_eq!(motor.last_facing_direction(), Vec2::X);
    }

    #[test]
    fn test_slides_along_wall() {
        let (world, _) = wall_world(Vec2::new(1.0, 0.0));
        let mut motor = CharacterMotor::default();
        let mut body = Body::default();

        let step = motor.move_body(&mut body, &world, Vec2::new(1.0, 1.0), 2.0, 1.0);

        // X stopped by the wall, Y keeps its full share
        assert!(step.applied.x.abs() < EPS);
        assert!((step.applied.y - std::f32::consts::SQRT_2).abs() < EPS);
        assert!(step.hit_y().is_none());
    }

    #[test]
    fn test_push_keeps_facing() {
        let world = CollisionWorld::new();
        let mut motor = CharacterMotor::default();
        let mut body = Body::default();

        motor.move_body(&mut body, &world, Vec2::Y, 1.0, 1.0);
        let step = motor.push(&mut body, &world, Vec2::NEG_X, 3.0, 1.0);

        assert!((step.applied - Vec2::new(-3.0, 0.0)).length() < EPS);
        assert_eq!(motor.last_facing_direction(), Vec2::Y);
    }

    #[test]
    fn test_push_clamped_by_wall() {
        let (world, _) = wall_world(Vec2::new(0.0, -3.0));
        let mut motor = CharacterMotor::default();
        let mut body = Body::default();

        let step = motor.push(&mut body, &world, Vec2::NEG_Y, 10.0, 1.0);

        // Gap between y=-0.5 and y=-2.5
        assert!((step.applied.y + 2.0).abs() < EPS);
        assert_eq!(motor.last_facing_direction(), Vec2::X);
    }

    #[test]
    fn test_negative_speed_reverses() {
        let (world, _) = wall_world(Vec2::new(-3.0, 0.0));
        let mut motor = CharacterMotor::default();
        let mut body = Body::default();

        // Facing +X, moving -X into a wall behind
        let step = motor.move_body(&mut body, &world, Vec2::X, -10.0, 1.0);

        assert!((step.applied.x + 2.0).abs() < EPS);
        assert!(step.hit_x().is_some());
        assert_eq!(motor.last_facing_direction(), Vec2::X);
    }

    #[test]
    fn test_mask_excludes_layers() {
        let mut world = CollisionWorld::new();
        world.add_box(Vec2::new(2.0, 0.0), Vec2::ONE, LayerMask::TRIGGER);
        let mut motor = CharacterMotor::default();
        let mut body = Body::default();

        let step = motor.move_body(&mut body, &world, Vec2::X, 4.0, 1.0);

        assert!((step.applied.x - 4.0).abs() < EPS);
        assert!(!step.blocked());
    }

    #[test]
    fn test_ignores_own_collider() {
        let mut world = CollisionWorld::new();
        let own = world.add_box(Vec2::ZERO, Vec2::ONE, LayerMask::OBSTACLE);
        let mut motor = CharacterMotor::default().ignoring(own);
        let mut body = Body::default();

        let step = motor.move_body(&mut body, &world, Vec2::X, 1.0, 1.0);
        assert!((step.applied.x - 1.0).abs() < EPS);
    }

    #[test]
    fn test_shape_offset_shifts_origin() {
        // Box sits 2 units above the body position
        let (world, _) = wall_world(Vec2::new(3.0, 2.0));
        let config = MotorConfig::with_shape(BoxShape::with_offset(Vec2::ONE, Vec2::new(0.0, 2.0)));
        let mut motor = CharacterMotor::new(config).expect("valid");
        let mut body = Body::default();

        let step = motor.move_body(&mut body, &world, Vec2::X, 5.0, 1.0);
        assert!((step.applied.x - 2.0).abs() < EPS);
    }

    #[test]
    fn test_set_last_facing_direction() {
        let mut motor = CharacterMotor::default();
        assert!(motor.set_last_facing_direction(Vec2::new(0.0, 5.0)));
        assert_eq!(motor.last_facing_direction(), Vec2::Y);
        assert!(!motor.set_last_facing_direction(Vec2::ZERO));
        assert_eq!(motor.last_facing_direction(), Vec2::Y);
    }
}
