//! motor2d Game Glue
//!
//! This crate wires the motor into a tiny game loop:
//!
//! - Digital input turned into a raw movement axis
//! - A controller that forwards that axis to the motor each frame
//! - A level holding the collision world and a spawn point
//! - A fixed-tick simulation advancing a single character
//!
//! ```text
//! ┌─────────┐    ┌────────────┐    ┌───────────────┐    ┌──────────┐
//! │ Input   │───►│ Controller │───►│ CharacterMotor│───►│ Body     │
//! └─────────┘    └────────────┘    └───────┬───────┘    └──────────┘
//!                                          │ casts
//!                                  ┌───────▼───────┐
//!                                  │ CollisionWorld│
//!                                  └───────────────┘
//! ```

pub mod controller;
pub mod input;
pub mod level;
pub mod simulation;

// Re-export main types
pub use controller::ExampleController;
pub use input::MovementInput;
pub use level::{Level, LevelDescription};
pub use simulation::{Character, Simulation, SimulationConfig};

// Re-export physics types for convenience
pub use motor2d_physics::{
    Body, BoxShape, CharacterMotor, CollisionWorld, LayerMask, MotorConfig, MotorStep,
};
