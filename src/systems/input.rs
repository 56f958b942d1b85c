//! Input polling.
//!
//! - [`submit_input`] turns polled values into locomotion events through the
//!   [`InputEdges`] resource, so repeated identical values emit nothing.
//! - [`poll_locomotion_input`] reads the keyboard from Raylib using
//!   [`LocomotionBindings`] and submits the result.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::togglecontrols::ToggleControlsEvent;
use crate::resources::input::{InputEdges, LocomotionBindings, digital_axis};

/// Feed one frame of polled input, triggering the resulting events.
///
/// `None` leaves the corresponding input unchanged.
pub fn submit_input(world: &mut World, axis: Option<Vector2>, run: Option<bool>) {
    let (move_event, run_event) = {
        let mut edges = world.get_resource_or_insert_with(InputEdges::default);
        (
            axis.and_then(|a| edges.update_axis(a)),
            run.and_then(|r| edges.update_run(r)),
        )
    };
    if let Some(event) = move_event {
        world.trigger(event);
    }
    if let Some(event) = run_event {
        world.trigger(event);
    }
}

/// Poll Raylib for the locomotion keys and emit input events.
pub fn poll_locomotion_input(world: &mut World, rl: &RaylibHandle) {
    let bindings = world
        .get_resource::<LocomotionBindings>()
        .cloned()
        .unwrap_or_default();

    let any_down = |keys: &[KeyboardKey; 2]| keys.iter().any(|k| rl.is_key_down(*k));
    let axis = digital_axis(
        any_down(&bindings.forward),
        any_down(&bindings.back),
        any_down(&bindings.left),
        any_down(&bindings.right),
    );
    let run = rl.is_key_down(bindings.run);

    if rl.is_key_pressed(bindings.toggle_controls) {
        world.trigger(ToggleControlsEvent {});
    }

    submit_input(world, Some(axis), Some(run));
}
