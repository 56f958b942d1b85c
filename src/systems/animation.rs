//! Animation step.
//!
//! Mirrors the movement intent into the `isWalking` and `isRunning`
//! parameters of each character's [`Animator`].
//!
//! Writes are edge-triggered: the current parameter value is read first and
//! only a differing value is written, so a held input produces exactly one
//! write on the frame it starts and one on the frame it ends.
//!
//! | Parameter | Desired value |
//! |---|---|
//! | `isWalking` | movement pressed |
//! | `isRunning` | movement pressed and run pressed |
//!
//! Stopped characters keep whatever parameters they had.

use bevy_ecs::prelude::*;

use crate::components::animator::{AnimParam, Animator};
use crate::components::charactercontrols::CharacterControls;
use crate::components::movementintent::MovementIntent;

/// Bring the animator's locomotion parameters in line with the intent.
pub fn animation_step(mut query: Query<(&CharacterControls, &MovementIntent, &mut Animator)>) {
    for (controls, intent, mut animator) in query.iter_mut() {
        if !controls.is_enabled() {
            continue;
        }
        let is_walking = animator.get_bool(AnimParam::IsWalking);
        let is_running = animator.get_bool(AnimParam::IsRunning);

        let want_walking = intent.is_movement_pressed;
        let want_running = intent.is_running();

        if want_walking != is_walking {
            animator.set_bool(AnimParam::IsWalking, want_walking);
        }
        if want_running != is_running {
            animator.set_bool(AnimParam::IsRunning, want_running);
        }
    }
}
