//! Character orientation.
//!
//! [`Facing`] stores the character's world rotation as a unit quaternion.
//! Characters turn only around the vertical axis, so the helpers here build
//! yaw rotations and interpolate between them along the shortest arc.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Quaternion, Vector3};

/// Below this squared length a look direction is treated as zero.
const MIN_DIRECTION_LENGTH_SQ: f32 = 1e-12;

/// World rotation of a character. The identity rotation faces +Z.
#[derive(Component, Clone, Copy, Debug)]
pub struct Facing {
    pub rotation: Quaternion,
}

impl Default for Facing {
    fn default() -> Self {
        Self::identity()
    }
}

impl Facing {
    /// Face +Z.
    pub fn identity() -> Self {
        Self {
            rotation: Quaternion::identity(),
        }
    }

    /// Face a yaw angle, in radians, measured from +Z towards +X.
    pub fn from_yaw(yaw: f32) -> Self {
        Self {
            rotation: Quaternion::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), yaw),
        }
    }

    /// The rotation that turns +Z onto `direction`, ignoring its vertical part.
    ///
    /// Returns `None` when the planar part of `direction` has zero length,
    /// since no orientation faces a zero vector.
    pub fn look_rotation(direction: Vector3) -> Option<Quaternion> {
        let len_sq = direction.x * direction.x + direction.z * direction.z;
        if len_sq <= MIN_DIRECTION_LENGTH_SQ {
            return None;
        }
        Some(Self::from_yaw(direction.x.atan2(direction.z)).rotation)
    }

    /// Spherically interpolate the current rotation towards `target`.
    ///
    /// `t = 0` keeps the current rotation and `t = 1` lands on the target.
    /// Values outside `[0, 1]` extrapolate along the same arc.
    pub fn slerp_towards(&mut self, target: Quaternion, t: f32) {
        self.rotation = slerp(self.rotation, target, t);
    }

    /// Yaw angle in radians, measured from +Z towards +X.
    pub fn yaw(&self) -> f32 {
        let q = self.rotation;
        (2.0 * (q.w * q.y + q.x * q.z)).atan2(1.0 - 2.0 * (q.y * q.y + q.x * q.x))
    }

    /// Unit vector the character is looking along.
    pub fn forward(&self) -> Vector3 {
        let q = self.rotation;
        // rotate (0, 0, 1) by q
        Vector3::new(
            2.0 * (q.x * q.z + q.w * q.y),
            2.0 * (q.y * q.z - q.w * q.x),
            1.0 - 2.0 * (q.x * q.x + q.y * q.y),
        )
    }
}

/// Shortest-arc spherical interpolation between two unit quaternions.
///
/// raylib's `Quaternion::slerp` follows whichever arc the signs give it, so
/// `to` is flipped onto the same hemisphere as `from` first.
pub fn slerp(from: Quaternion, to: Quaternion, t: f32) -> Quaternion {
    let cos = from.x * to.x + from.y * to.y + from.z * to.z + from.w * to.w;
    let to = if cos < 0.0 {
        Quaternion::new(-to.x, -to.y, -to.z, -to.w)
    } else {
        to
    };
    from.slerp(to, t).normalized()
}
