//! Player movement intent.
//!
//! The [`MovementIntent`] component is the only state written by the input
//! observers in [`crate::events::locomotioninput`]. Every per-frame
//! locomotion system reads it to decide whether the character is walking,
//! running, or standing still.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Raw input state for a controlled character.
///
/// `axis_input` is the last movement vector delivered by the input layer,
/// already normalized to `[-1, 1]` on each axis. `is_movement_pressed` is
/// derived from it on every update, `is_run_pressed` mirrors the run button.
#[derive(Component, Clone, Copy, Debug)]
pub struct MovementIntent {
    /// Last movement vector received (x = strafe, y = forward).
    pub axis_input: Vector2,
    /// True while the movement vector is non-zero.
    pub is_movement_pressed: bool,
    /// True while the run button is held.
    pub is_run_pressed: bool,
}

impl Default for MovementIntent {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementIntent {
    /// Create an idle intent: no axis, nothing pressed.
    pub fn new() -> Self {
        Self {
            axis_input: Vector2 { x: 0.0, y: 0.0 },
            is_movement_pressed: false,
            is_run_pressed: false,
        }
    }

    /// Store a new movement vector and recompute `is_movement_pressed`.
    pub fn set_axis(&mut self, axis: Vector2) {
        self.axis_input = axis;
        self.is_movement_pressed = axis.x != 0.0 || axis.y != 0.0;
    }

    /// Store the current run button state.
    pub fn set_run(&mut self, pressed: bool) {
        self.is_run_pressed = pressed;
    }

    /// Drop all held input, as if every key was released.
    pub fn release(&mut self) {
        self.set_axis(Vector2 { x: 0.0, y: 0.0 });
        self.set_run(false);
    }

    /// True when the character should be moving at run speed.
    pub fn is_running(&self) -> bool {
        self.is_movement_pressed && self.is_run_pressed
    }
}
