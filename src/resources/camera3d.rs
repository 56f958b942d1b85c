//! Shared 3D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera3D`]. The camera trails the
//! character at a fixed offset, see [`Camera3DRes::follow`].

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

/// ECS resource that holds the active 3D camera and its follow offset.
#[derive(Resource)]
pub struct Camera3DRes {
    pub camera: Camera3D,
    /// Camera position relative to the followed point.
    pub offset: Vector3,
}

impl Camera3DRes {
    /// Third-person camera behind and above `target`.
    pub fn new(target: Vector3) -> Self {
        let offset = Vector3::new(0.0, 6.0, -10.0);
        Self {
            camera: Camera3D::perspective(
                target + offset,
                target,
                Vector3::new(0.0, 1.0, 0.0),
                45.0,
            ),
            offset,
        }
    }

    /// Look at `target` from the follow offset.
    pub fn follow(&mut self, target: Vector3) {
        self.camera.target = target;
        self.camera.position = target + self.offset;
    }
}
