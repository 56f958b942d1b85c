//! Walk and run velocities.
//!
//! [`LocomotionVelocity`] keeps two candidate velocities side by side. The
//! planar (x/z) parts are rewritten by the move observer whenever the input
//! axis changes; the vertical (y) part is owned by the gravity step and is
//! kept identical on both.
//!
//! The run velocity is always `run_multiplier` times the walk velocity on
//! each planar axis.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Vector2, Vector3};

/// Candidate velocities in world units per second.
#[derive(Component, Clone, Copy, Debug)]
pub struct LocomotionVelocity {
    /// Velocity used while walking.
    pub walk: Vector3,
    /// Velocity used while the run button is held.
    pub run: Vector3,
}

impl Default for LocomotionVelocity {
    fn default() -> Self {
        Self::new()
    }
}

impl LocomotionVelocity {
    /// Both velocities at rest.
    pub fn new() -> Self {
        Self {
            walk: Vector3::new(0.0, 0.0, 0.0),
            run: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    /// Rewrite the planar components from a 2D input axis.
    ///
    /// The axis `y` maps to world `z`. Vertical components are untouched.
    pub fn set_planar(&mut self, axis: Vector2, run_multiplier: f32) {
        self.walk.x = axis.x;
        self.walk.z = axis.y;
        self.run.x = axis.x * run_multiplier;
        self.run.z = axis.y * run_multiplier;
    }

    /// Zero the planar components of both velocities.
    pub fn clear_planar(&mut self) {
        self.set_planar(Vector2 { x: 0.0, y: 0.0 }, 1.0);
    }

    /// Overwrite the vertical component of both velocities.
    pub fn set_vertical(&mut self, y: f32) {
        self.walk.y = y;
        self.run.y = y;
    }

    /// Accumulate into the vertical component of both velocities.
    pub fn add_vertical(&mut self, dy: f32) {
        self.walk.y += dy;
        self.run.y += dy;
    }

    /// Walk velocity projected onto the ground plane.
    pub fn planar_walk(&self) -> Vector3 {
        Vector3::new(self.walk.x, 0.0, self.walk.z)
    }

    /// Pick the run or walk velocity.
    pub fn selected(&self, run_pressed: bool) -> Vector3 {
        if run_pressed { self.run } else { self.walk }
    }
}
