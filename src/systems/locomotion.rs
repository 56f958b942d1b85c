//! Locomotion frame pipeline.
//!
//! Order per frame: rotation, animation, gravity, then motion apply. The
//! gravity step reads the ground contact left by the previous frame's move.

use bevy_ecs::prelude::*;

use crate::systems::animation::animation_step;
use crate::systems::gravity::gravity_step;
use crate::systems::motion::motion_apply;
use crate::systems::rotation::rotation_step;

/// Add the four locomotion steps to `schedule`, chained in frame order.
pub fn add_locomotion_systems(schedule: &mut Schedule) {
    schedule.add_systems((rotation_step, animation_step, gravity_step, motion_apply).chain());
}

/// A schedule containing only the locomotion steps.
pub fn locomotion_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    add_locomotion_systems(&mut schedule);
    schedule
}
