//! Kinematic character mover.
//!
//! [`CharacterController`] owns the character's world position and resolves
//! requested motion against the ground. Locomotion never writes the position
//! directly: it asks the controller to [`move_by`](CharacterController::move_by)
//! once per frame and queries [`is_grounded`](CharacterController::is_grounded)
//! before the next gravity step.
//!
//! The ground is an infinite horizontal plane at `ground_height`. A move that
//! would end below the plane is stopped on it and reports a collision below,
//! which is what keeps a standing character grounded.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Position and ground contact of a walking character.
#[derive(Component, Clone, Copy, Debug)]
pub struct CharacterController {
    /// Feet position in world units.
    pub position: Vector3,
    /// Height of the walkable plane.
    pub ground_height: f32,
    /// Capsule height, used for drawing.
    pub height: f32,
    /// Capsule radius, used for drawing.
    pub radius: f32,
    grounded: bool,
}

impl Default for CharacterController {
    fn default() -> Self {
        Self::new(Vector3::new(0.0, 0.0, 0.0))
    }
}

impl CharacterController {
    /// Create a controller standing at `position` over a plane at height 0.
    ///
    /// The controller starts ungrounded, like a freshly placed body that has
    /// not moved yet; the first downward move settles it.
    pub fn new(position: Vector3) -> Self {
        Self {
            position,
            ground_height: 0.0,
            height: 2.0,
            radius: 0.5,
            grounded: false,
        }
    }

    /// True if the last move ended touching the ground.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Move by `delta`, stopping on the ground plane.
    ///
    /// Returns true when the move collided with the ground.
    pub fn move_by(&mut self, delta: Vector3) -> bool {
        let mut target = self.position + delta;

        let collided_below = target.y <= self.ground_height;
        if collided_below {
            target.y = self.ground_height;
        }

        self.position = target;
        self.grounded = collided_below;
        collided_below
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_starts_ungrounded() {
        let cc = CharacterController::new(Vector3::new(1.0, 0.0, 2.0));
        assert!(!cc.is_grounded());
        assert!(approx_eq(cc.position.x, 1.0));
        assert!(approx_eq(cc.position.z, 2.0));
    }

    #[test]
    fn test_downward_bias_grounds_standing_character() {
        let mut cc = CharacterController::default();
        let hit = cc.move_by(Vector3::new(0.0, -0.05 / 60.0, 0.0));
        assert!(hit);
        assert!(cc.is_grounded());
        assert!(approx_eq(cc.position.y, 0.0));
    }

    #[test]
    fn test_horizontal_move_on_ground() {
        let mut cc = CharacterController::default();
        cc.move_by(Vector3::new(0.5, -0.001, -0.25));
        assert!(cc.is_grounded());
        assert!(approx_eq(cc.position.x, 0.5));
        assert!(approx_eq(cc.position.z, -0.25));
        assert!(approx_eq(cc.position.y, 0.0));
    }

    #[test]
    fn test_airborne_move_is_not_grounded() {
        let mut cc = CharacterController::new(Vector3::new(0.0, 10.0, 0.0));
        let hit = cc.move_by(Vector3::new(0.0, -1.0, 0.0));
        assert!(!hit);
        assert!(!cc.is_grounded());
        assert!(approx_eq(cc.position.y, 9.0));
    }

    #[test]
    fn test_fall_stops_on_ground() {
        let mut cc = CharacterController::new(Vector3::new(0.0, 1.0, 0.0));
        cc.ground_height = 0.5;
        cc.move_by(Vector3::new(0.0, -3.0, 0.0));
        assert!(cc.is_grounded());
        assert!(approx_eq(cc.position.y, 0.5));
    }

    #[test]
    fn test_upward_move_leaves_ground() {
        let mut cc = CharacterController::default();
        cc.move_by(Vector3::new(0.0, -0.01, 0.0));
        assert!(cc.is_grounded());
        cc.move_by(Vector3::new(0.0, 0.5, 0.0));
        assert!(!cc.is_grounded());
    }
}
