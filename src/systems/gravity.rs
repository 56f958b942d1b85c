//! Gravity step.
//!
//! Grounded characters get a small constant downward velocity so the mover
//! keeps detecting the floor. Airborne characters accumulate `gravity` into
//! their vertical velocity every frame, with no terminal velocity.

use bevy_ecs::prelude::*;

use crate::components::charactercontroller::CharacterController;
use crate::components::charactercontrols::CharacterControls;
use crate::components::locomotionvelocity::LocomotionVelocity;
use crate::resources::gameconfig::GameConfig;

/// Update the vertical part of the walk and run velocities.
///
/// The airborne increment is applied once per frame, not scaled by the frame
/// delta.
pub fn gravity_step(
    mut query: Query<(&CharacterControls, &CharacterController, &mut LocomotionVelocity)>,
    config: Res<GameConfig>,
) {
    let tuning = config.locomotion;
    for (controls, controller, mut velocity) in query.iter_mut() {
        if !controls.is_enabled() {
            continue;
        }
        if controller.is_grounded() {
            velocity.set_vertical(tuning.ground_gravity);
        } else {
            velocity.add_vertical(tuning.gravity);
        }
    }
}
