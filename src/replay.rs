//! Headless replay of an [`InputScript`].
//!
//! Drives a world without a window. Each script frame feeds its input
//! through [`InputEdges`](crate::resources::input::InputEdges), so observers
//! see the same start/change/cancel events a keyboard would produce. Then
//! [`WorldTime`](crate::resources::worldtime::WorldTime) advances by a fixed
//! step and the frame schedule runs.

use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector2;

use crate::character::{CharacterSnapshot, LocomotionError};
use crate::resources::inputscript::InputScript;
use crate::systems::input::submit_input;
use crate::systems::time::update_world_time;

/// Run `script` against `entity`, `dt` seconds per tick.
///
/// Returns the character state after the last tick.
pub fn run_script(
    world: &mut World,
    schedule: &mut Schedule,
    entity: Entity,
    script: &InputScript,
    dt: f32,
) -> Result<CharacterSnapshot, LocomotionError> {
    info!(
        "Replaying {} frames ({} ticks) at dt={}",
        script.frames.len(),
        script.tick_count(),
        dt
    );

    for frame in &script.frames {
        let axis = frame.move_axis.map(|[x, y]| Vector2 { x, y });
        submit_input(world, axis, frame.run);

        for _ in 0..frame.repeat {
            update_world_time(world, dt);
            schedule.run(world);
        }
        debug!("{:?}", CharacterSnapshot::capture(world, entity)?);
    }

    CharacterSnapshot::capture(world, entity)
}
