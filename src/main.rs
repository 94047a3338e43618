//! motor2d - headless demo
//!
//! Drives a character around the test room with a scripted input sequence
//! and logs where the motor lets it go.
//!
//! Usage: `motor2d [simulation.json] [level.json]`

use anyhow::Context;
use motor2d_game::{Level, MovementInput, Simulation, SimulationConfig};

/// Scripted input: which keys are held and for how many ticks.
const SCRIPT: &[(MovementInput, u32)] = &[
    (
        MovementInput {
            left: false,
            right: true,
            up: false,
            down: false,
        },
        120,
    ),
    (
        MovementInput {
            left: false,
            right: true,
            up: true,
            down: false,
        },
        240,
    ),
    (MovementInput::NONE, 30),
    (
        MovementInput {
            left: true,
            right: false,
            up: false,
            down: true,
        },
        600,
    ),
];

fn load_simulation() -> anyhow::Result<Simulation> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading simulation config {path}"))?;
            SimulationConfig::from_json_str(&json)
                .with_context(|| format!("parsing simulation config {path}"))?
        }
        None => SimulationConfig {
            speed: 4.0,
            ..Default::default()
        },
    };

    let level = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading level {path}"))?;
            Level::from_json_str(&json).with_context(|| format!("parsing level {path}"))?
        }
        None => Level::test_room(),
    };

    Ok(Simulation::new(config, level)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut simulation = load_simulation()?;
    log::info!(
        "level '{}': {} colliders, spawn {:?}",
        simulation.level.name,
        simulation.level.collision.collider_count(),
        simulation.level.spawn
    );

    run_script(&mut simulation, SCRIPT);

    println!(
        "final position {:?} facing {:?} after {} frames",
        simulation.character.position(),
        simulation.character.facing(),
        simulation.frame
    );

    Ok(())
}

/// Play each phase of a script, knocking the character back between phases.
fn run_script(simulation: &mut Simulation, script: &[(MovementInput, u32)]) {
    for (phase, (input, ticks)) in script.iter().enumerate() {
        let mut blocked_ticks = 0;
        for _ in 0..*ticks {
            if simulation.tick(input).blocked() {
                blocked_ticks += 1;
            }
        }

        log::info!(
            "phase {phase}: axis {:?} for {ticks} ticks -> position {:?}, facing {:?}, blocked {blocked_ticks} ticks",
            input.axis(),
            simulation.character.position(),
            simulation.character.facing(),
        );

        // Only queue when a later phase will tick it
        if phase + 1 < script.len() {
            simulation.queue_push(-simulation.character.facing(), simulation.config.speed);
        }
    }
}
