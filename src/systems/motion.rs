//! Motion apply.
//!
//! Hands the frame's displacement to the [`CharacterController`], which owns
//! position and ground contact. Whatever the controller does with the request
//! is not reported back.

use bevy_ecs::prelude::*;

use crate::components::charactercontroller::CharacterController;
use crate::components::charactercontrols::CharacterControls;
use crate::components::locomotionvelocity::LocomotionVelocity;
use crate::components::movementintent::MovementIntent;
use crate::resources::worldtime::WorldTime;

/// Move each character by its run or walk velocity times the frame delta.
///
/// The run velocity is chosen whenever the run button is held, even without
/// movement input; its planar part is then zero anyway. Stopped characters
/// do not move.
pub fn motion_apply(
    mut query: Query<(
        &CharacterControls,
        &MovementIntent,
        &LocomotionVelocity,
        &mut CharacterController,
    )>,
    time: Res<WorldTime>,
) {
    for (controls, intent, velocity, mut controller) in query.iter_mut() {
        if !controls.is_enabled() {
            continue;
        }
        let delta = velocity.selected(intent.is_run_pressed) * time.delta;
        controller.move_by(delta);
    }
}
