//! Locomotion input events and their observers.
//!
//! The input layer reports the movement stick and the run button as
//! [`MoveInputEvent`] and [`RunInputEvent`]. The observers here are the only
//! writers of [`MovementIntent`] and of the planar part of
//! [`LocomotionVelocity`]; the per-frame systems in
//! [`crate::systems::locomotion`] only read what they leave behind.
//!
//! Events are broadcast: every character whose [`CharacterControls`] are
//! enabled receives them. Stopping a character releases its input, and it
//! ignores events until started again.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::charactercontrols::CharacterControls;
use crate::components::locomotionvelocity::LocomotionVelocity;
use crate::components::movementintent::MovementIntent;
use crate::resources::gameconfig::{GameConfig, LocomotionTuning};

/// Lifecycle stage of an input action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    /// The action left its resting value (key down, stick moved off center).
    Started,
    /// The value changed while the action was already active.
    Performed,
    /// The action returned to its resting value.
    Canceled,
}

impl InputPhase {
    /// Phase of a 2D axis moving from `previous` to `current`.
    ///
    /// Returns `None` when nothing changed.
    pub fn for_axis(previous: Vector2, current: Vector2) -> Option<Self> {
        let was_active = previous.x != 0.0 || previous.y != 0.0;
        let is_active = current.x != 0.0 || current.y != 0.0;
        match (was_active, is_active) {
            (false, false) => None,
            (false, true) => Some(InputPhase::Started),
            (true, false) => Some(InputPhase::Canceled),
            (true, true) if previous.x == current.x && previous.y == current.y => None,
            (true, true) => Some(InputPhase::Performed),
        }
    }

    /// Phase of a button moving from `previous` to `current`.
    pub fn for_button(previous: bool, current: bool) -> Option<Self> {
        match (previous, current) {
            (false, true) => Some(InputPhase::Started),
            (true, false) => Some(InputPhase::Canceled),
            _ => None,
        }
    }
}

/// Movement vector update from the input layer.
///
/// `axis` is already normalized to `[-1, 1]` per axis. A `Canceled` event
/// carries the resting value, normally zero.
#[derive(Event, Debug, Clone, Copy)]
pub struct MoveInputEvent {
    pub axis: Vector2,
    pub phase: InputPhase,
}

/// Run button update from the input layer.
#[derive(Event, Debug, Clone, Copy)]
pub struct RunInputEvent {
    pub pressed: bool,
    pub phase: InputPhase,
}

/// Observer for movement input: start, change and cancel all apply.
///
/// Stores the axis, recomputes `is_movement_pressed`, and rewrites the planar
/// walk and run velocities.
pub fn observe_move_input(
    trigger: On<MoveInputEvent>,
    config: Option<Res<GameConfig>>,
    mut query: Query<(
        &CharacterControls,
        &mut MovementIntent,
        &mut LocomotionVelocity,
    )>,
) {
    let event = trigger.event();
    let run_multiplier = config
        .map(|c| c.locomotion.run_multiplier)
        .unwrap_or(LocomotionTuning::default().run_multiplier);

    for (controls, mut intent, mut velocity) in query.iter_mut() {
        if !controls.is_enabled() {
            continue;
        }
        intent.set_axis(event.axis);
        velocity.set_planar(event.axis, run_multiplier);
        debug!(
            "move input {:?}: axis=({}, {}) pressed={}",
            event.phase, event.axis.x, event.axis.y, intent.is_movement_pressed
        );
    }
}

/// Observer for the run button: reacts to press and release only.
///
/// A `Performed` run event carries no edge and is ignored.
pub fn observe_run_input(
    trigger: On<RunInputEvent>,
    mut query: Query<(&CharacterControls, &mut MovementIntent)>,
) {
    let event = trigger.event();
    if event.phase == InputPhase::Performed {
        return;
    }

    for (controls, mut intent) in query.iter_mut() {
        if !controls.is_enabled() {
            continue;
        }
        intent.set_run(event.pressed);
        debug!("run input {:?}: pressed={}", event.phase, event.pressed);
    }
}
