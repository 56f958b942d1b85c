//! Locomotion input bindings and edge tracking.
//!
//! [`LocomotionBindings`] maps keyboard keys onto the movement axis and the
//! run button. [`InputEdges`] remembers the last values sent so that polling
//! sources (a keyboard, a replay script) can be turned into the
//! start/change/cancel events the locomotion observers expect.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::locomotioninput::{InputPhase, MoveInputEvent, RunInputEvent};

/// Keyboard layout for locomotion. Each direction has a primary and an
/// alternate key.
#[derive(Resource, Debug, Clone)]
pub struct LocomotionBindings {
    pub forward: [KeyboardKey; 2],
    pub back: [KeyboardKey; 2],
    pub left: [KeyboardKey; 2],
    pub right: [KeyboardKey; 2],
    pub run: KeyboardKey,
    pub toggle_controls: KeyboardKey,
}

impl Default for LocomotionBindings {
    fn default() -> Self {
        Self {
            forward: [KeyboardKey::KEY_W, KeyboardKey::KEY_UP],
            back: [KeyboardKey::KEY_S, KeyboardKey::KEY_DOWN],
            left: [KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT],
            right: [KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT],
            run: KeyboardKey::KEY_LEFT_SHIFT,
            toggle_controls: KeyboardKey::KEY_F1,
        }
    }
}

/// Combine four digital directions into a movement axis.
///
/// Opposite keys cancel. Diagonals are normalized so the axis never exceeds
/// unit length.
pub fn digital_axis(forward: bool, back: bool, left: bool, right: bool) -> Vector2 {
    let x = (right as i32 - left as i32) as f32;
    let y = (forward as i32 - back as i32) as f32;
    if x != 0.0 && y != 0.0 {
        Vector2 {
            x: x * std::f32::consts::FRAC_1_SQRT_2,
            y: y * std::f32::consts::FRAC_1_SQRT_2,
        }
    } else {
        Vector2 { x, y }
    }
}

/// Last movement axis and run state delivered to the observers.
#[derive(Resource, Debug, Clone, Copy)]
pub struct InputEdges {
    pub axis: Vector2,
    pub run: bool,
}

impl Default for InputEdges {
    fn default() -> Self {
        Self {
            axis: Vector2 { x: 0.0, y: 0.0 },
            run: false,
        }
    }
}

impl InputEdges {
    /// Record a new movement axis; returns the event to emit, if any.
    pub fn update_axis(&mut self, axis: Vector2) -> Option<MoveInputEvent> {
        let phase = InputPhase::for_axis(self.axis, axis)?;
        self.axis = axis;
        Some(MoveInputEvent { axis, phase })
    }

    /// Forget what was sent, so held input is reported again as `Started`.
    /// Called whenever controls are re-enabled.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a new run button state; returns the event to emit, if any.
    pub fn update_run(&mut self, pressed: bool) -> Option<RunInputEvent> {
        let phase = InputPhase::for_button(self.run, pressed)?;
        self.run = pressed;
        Some(RunInputEvent { pressed, phase })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = LocomotionBindings::default();
        assert_eq!(bindings.forward[0], KeyboardKey::KEY_W);
        assert_eq!(bindings.back[0], KeyboardKey::KEY_S);
        assert_eq!(bindings.left[0], KeyboardKey::KEY_A);
        assert_eq!(bindings.right[0], KeyboardKey::KEY_D);
        assert_eq!(bindings.right[1], KeyboardKey::KEY_RIGHT);
        assert_eq!(bindings.run, KeyboardKey::KEY_LEFT_SHIFT);
        assert_eq!(bindings.toggle_controls, KeyboardKey::KEY_F1);
    }

    #[test]
    fn test_digital_axis() {
        let a = digital_axis(false, false, false, false);
        assert_eq!((a.x, a.y), (0.0, 0.0));
        let a = digital_axis(true, false, false, false);
        assert_eq!((a.x, a.y), (0.0, 1.0));
        let a = digital_axis(false, false, true, true);
        assert_eq!((a.x, a.y), (0.0, 0.0));
        let a = digital_axis(true, false, false, true);
        assert!((a.x - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert!((a.y - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_edges_emit_only_on_change() {
        let mut edges = InputEdges::default();
        assert!(edges.update_axis(Vector2 { x: 0.0, y: 0.0 }).is_none());

        let e = edges.update_axis(Vector2 { x: 1.0, y: 0.0 }).unwrap();
        assert_eq!(e.phase, InputPhase::Started);
        assert!(edges.update_axis(Vector2 { x: 1.0, y: 0.0 }).is_none());

        let e = edges.update_axis(Vector2 { x: 0.0, y: 1.0 }).unwrap();
        assert_eq!(e.phase, InputPhase::Performed);

        let e = edges.update_axis(Vector2 { x: 0.0, y: 0.0 }).unwrap();
        assert_eq!(e.phase, InputPhase::Canceled);
        assert_eq!((e.axis.x, e.axis.y), (0.0, 0.0));
    }

    #[test]
    fn test_run_edges() {
        let mut edges = InputEdges::default();
        assert!(edges.update_run(false).is_none());
        let e = edges.update_run(true).unwrap();
        assert!(e.pressed);
        assert_eq!(e.phase, InputPhase::Started);
        assert!(edges.update_run(true).is_none());
        let e = edges.update_run(false).unwrap();
        assert!(!e.pressed);
        assert_eq!(e.phase, InputPhase::Canceled);
    }

    #[test]
    fn test_reset_reports_held_input_again() {
        let mut edges = InputEdges::default();
        edges.update_axis(Vector2 { x: 0.0, y: 1.0 });
        edges.update_run(true);
        assert!(edges.update_axis(Vector2 { x: 0.0, y: 1.0 }).is_none());

        edges.reset();
        let e = edges.update_axis(Vector2 { x: 0.0, y: 1.0 }).unwrap();
        assert_eq!(e.phase, InputPhase::Started);
        let e = edges.update_run(true).unwrap();
        assert_eq!(e.phase, InputPhase::Started);
    }
}
