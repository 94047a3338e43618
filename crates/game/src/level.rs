//! Level loading and management.

use glam::Vec2;
use motor2d_physics::error::Result;
use motor2d_physics::{CollisionWorld, LayerMask};
use serde::{Deserialize, Serialize};

/// A level: collision geometry plus where the character starts.
#[derive(Debug)]
pub struct Level {
    /// Display name.
    pub name: String,

    /// Collision world for the motor.
    pub collision: CollisionWorld,

    /// Character spawn position.
    pub spawn: Vec2,
}

/// Serializable level layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelDescription {
    pub name: String,
    #[serde(default)]
    pub spawn: Vec2,
    #[serde(default)]
    pub walls: Vec<WallDescription>,
}

/// One box in a [`LevelDescription`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallDescription {
    pub center: Vec2,
    pub size: Vec2,
    #[serde(default = "default_wall_layers")]
    pub layers: LayerMask,
}

fn default_wall_layers() -> LayerMask {
    LayerMask::OBSTACLE
}

impl Level {
    /// Create an empty level with no geometry.
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            collision: CollisionWorld::new(),
            spawn: Vec2::ZERO,
        }
    }

    /// Build a level from its description.
    pub fn from_description(description: &LevelDescription) -> Self {
        let mut collision = CollisionWorld::new();
        for wall in &description.walls {
            collision.add_box(wall.center, wall.size, wall.layers);
        }

        log::debug!(
            "level '{}' loaded with {} colliders",
            description.name,
            collision.collider_count()
        );

        Self {
            name: description.name.clone(),
            collision,
            spawn: description.spawn,
        }
    }

    /// Parse and build a level from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let description: LevelDescription = serde_json::from_str(json)?;
        Ok(Self::from_description(&description))
    }

    /// A 12x12 walled room with a pillar and a trigger pad.
    ///
    /// Wall inner faces sit at ±6 on both axes. The pillar occupies
    /// `[2, 3] x [2, 3]`; the trigger pad `[-4, -2] x [-4, -2]` never blocks.
    pub fn test_room() -> Self {
        let mut collision = CollisionWorld::new();

        // North / south walls
        collision.add_box(Vec2::new(0.0, 6.5), Vec2::new(14.0, 1.0), LayerMask::OBSTACLE);
        collision.add_box(Vec2::new(0.0, -6.5), Vec2::new(14.0, 1.0), LayerMask::OBSTACLE);

        // East / west walls
        collision.add_box(Vec2::new(6.5, 0.0), Vec2::new(1.0, 14.0), LayerMask::OBSTACLE);
        collision.add_box(Vec2::new(-6.5, 0.0), Vec2::new(1.0, 14.0), LayerMask::OBSTACLE);

        // Pillar
        collision.add_box(Vec2::new(2.5, 2.5), Vec2::ONE, LayerMask::OBSTACLE);

        // Trigger pad
        collision.add_box(Vec2::new(-3.0, -3.0), Vec2::new(2.0, 2.0), LayerMask::TRIGGER);

        Self {
            name: "test_room".to_string(),
            collision,
            spawn: Vec2::ZERO,
        }
    }
}
