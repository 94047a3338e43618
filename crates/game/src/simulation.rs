//! Fixed-tick simulation of a single character.

use glam::Vec2;
use motor2d_physics::error::Result;
use motor2d_physics::{Body, CharacterMotor, MotorConfig, MotorStep};
use serde::{Deserialize, Serialize};

use crate::controller::ExampleController;
use crate::input::MovementInput;
use crate::level::Level;

/// Simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulation tick rate (ticks per second).
    pub tick_rate: u32,

    /// Character movement speed (units/second).
    pub speed: f32,

    /// Motor configuration for the character.
    pub motor: MotorConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            speed: 1.0,
            motor: MotorConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Get the time step per tick in seconds.
    pub fn delta_time(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The simulated character: body, motor and input controller.
#[derive(Debug, Clone)]
pub struct Character {
    pub body: Body,
    pub motor: CharacterMotor,
    pub controller: ExampleController,
}

impl Character {
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    #[inline]
    pub fn facing(&self) -> Vec2 {
        self.motor.last_facing_direction()
    }
}

/// An external force waiting to be applied on the next tick.
#[derive(Debug, Clone, Copy)]
struct PendingPush {
    direction: Vec2,
    speed: f32,
}

/// The game loop: one character moving through a level.
#[derive(Debug)]
pub struct Simulation {
    /// Current frame/tick number.
    pub frame: u64,

    /// Simulation configuration.
    pub config: SimulationConfig,

    /// Current level.
    pub level: Level,

    /// The controlled character.
    pub character: Character,

    pending_pushes: Vec<PendingPush>,
}

impl Simulation {
    /// Create a simulation, spawning the character at the level's spawn.
    pub fn new(config: SimulationConfig, level: Level) -> Result<Self> {
        let motor = CharacterMotor::new(config.motor.clone())?;
        Ok(Self::with_motor(config, level, motor))
    }

    /// Create a simulation with default configuration and the test room.
    pub fn test() -> Self {
        Self::with_motor(
            SimulationConfig::default(),
            Level::test_room(),
            CharacterMotor::with_default_config(),
        )
    }

    fn with_motor(config: SimulationConfig, level: Level, motor: CharacterMotor) -> Self {
        let character = Character {
            body: Body::new(level.spawn),
            motor,
            controller: ExampleController::new(config.speed),
        };

        Self {
            frame: 0,
            config,
            level,
            character,
            pending_pushes: Vec::new(),
        }
    }

    /// Queue an external force (knockback, conveyor) for the next tick.
    ///
    /// Pushes move the character without changing where it faces.
    pub fn queue_push(&mut self, direction: Vec2, speed: f32) {
        self.pending_pushes.push(PendingPush { direction, speed });
    }

    /// Number of pushes waiting for the next tick.
    pub fn pending_push_count(&self) -> usize {
        self.pending_pushes.len()
    }

    /// Advance the simulation by one tick.
    ///
    /// Input movement is resolved first, then every queued push in order.
    /// Returns the step produced by the input movement.
    pub fn tick(&mut self, input: &MovementInput) -> MotorStep {
        let delta_time = self.config.delta_time();
        let character = &mut self.character;
        let world = &self.level.collision;

        let step = character.controller.update(
            input,
            &mut character.motor,
            &mut character.body,
            world,
            delta_time,
        );

        for push in self.pending_pushes.drain(..) {
            let pushed = character.motor.push(
                &mut character.body,
                world,
                push.direction,
                push.speed,
                delta_time,
            );
            if pushed.blocked() {
                log::debug!("frame {}: push {:?} blocked", self.frame, push.direction);
            }
        }

        if step.blocked() {
            log::debug!(
                "frame {}: movement blocked at {:?} (applied {:?})",
                self.frame,
                character.body.position,
                step.applied
            );
        }

        self.frame += 1;
        step
    }
}
