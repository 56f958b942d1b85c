//! Rotation step.
//!
//! Turns each moving character towards the direction of its walk velocity.
//! Characters with no movement input keep their current facing. Stopped
//! characters are skipped.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::charactercontrols::CharacterControls;
use crate::components::facing::Facing;
use crate::components::locomotionvelocity::LocomotionVelocity;
use crate::components::movementintent::MovementIntent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// Slerp [`Facing`] towards the planar walk direction.
///
/// The interpolation factor is `rotation_speed * delta`, clamped to `[0, 1]`
/// unless the tuning disables clamping. A zero planar direction while
/// movement is pressed has no defined facing and skips the frame.
pub fn rotation_step(
    mut query: Query<(
        &CharacterControls,
        &MovementIntent,
        &LocomotionVelocity,
        &mut Facing,
    )>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    let t = config.locomotion.rotation_factor(time.delta);

    for (controls, intent, velocity, mut facing) in query.iter_mut() {
        if !controls.is_enabled() || !intent.is_movement_pressed {
            continue;
        }
        let Some(target) = Facing::look_rotation(velocity.planar_walk()) else {
            debug!("rotation_step: movement pressed with zero direction, facing unchanged");
            continue;
        };
        facing.slerp_towards(target, t);
    }
}
