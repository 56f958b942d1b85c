//! Event and observer to switch character controls on and off.
//!
//! Emitting a [`ToggleControlsEvent`] flips [`CharacterControls`] on every
//! character, the same as calling [`crate::character::stop`] or
//! [`crate::character::start`] on each.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::charactercontrols::CharacterControls;
use crate::components::locomotionvelocity::LocomotionVelocity;
use crate::components::movementintent::MovementIntent;
use crate::resources::input::InputEdges;

/// Toggle input subscription on all characters. Carries no data.
#[derive(Event, Debug, Clone, Copy)]
pub struct ToggleControlsEvent {}

pub fn toggle_controls_observer(
    _trigger: On<ToggleControlsEvent>,
    mut query: Query<(
        Entity,
        &mut CharacterControls,
        &mut MovementIntent,
        &mut LocomotionVelocity,
    )>,
    edges: Option<ResMut<InputEdges>>,
) {
    let mut any_enabled = false;
    for (entity, mut controls, mut intent, mut velocity) in query.iter_mut() {
        if controls.is_enabled() {
            controls.disable();
            intent.release();
            velocity.clear_planar();
            info!("Character {:?} controls disabled", entity);
        } else {
            controls.enable();
            any_enabled = true;
            info!("Character {:?} controls enabled", entity);
        }
    }
    if any_enabled && let Some(mut edges) = edges {
        edges.reset();
    }
}
