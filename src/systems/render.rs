//! Rendering for the interactive demo.
//!
//! - [`camera_follow`] keeps the [`Camera3DRes`] on the first character.
//! - [`render_pass`] draws the ground grid and every character inside a 3D
//!   camera scope.
//! - [`render_hud`] draws the text overlay with locomotion state.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animator::{AnimParam, Animator};
use crate::components::charactercontroller::CharacterController;
use crate::components::charactercontrols::CharacterControls;
use crate::components::facing::Facing;
use crate::components::locomotionvelocity::LocomotionVelocity;
use crate::components::movementintent::MovementIntent;
use crate::resources::camera3d::Camera3DRes;

/// Move the camera so it keeps looking at the first character.
pub fn camera_follow(
    query: Query<&CharacterController>,
    camera: Option<ResMut<Camera3DRes>>,
) {
    let Some(mut camera) = camera else {
        return;
    };
    if let Some(controller) = query.iter().next() {
        let target = controller.position + Vector3::new(0.0, controller.height * 0.5, 0.0);
        camera.follow(target);
    }
}

/// Draw the world inside a 3D camera scope.
pub fn render_pass(world: &mut World, d3: &mut RaylibMode3D<RaylibDrawHandle>) {
    d3.draw_grid(40, 1.0);

    let mut q = world.query::<(&CharacterController, &Facing, &Animator)>();
    for (controller, facing, animator) in q.iter(world) {
        let color = if animator.get_bool(AnimParam::IsRunning) {
            Color::ORANGE
        } else if animator.get_bool(AnimParam::IsWalking) {
            Color::SKYBLUE
        } else {
            Color::GRAY
        };

        let width = controller.radius * 2.0;
        let center = controller.position + Vector3::new(0.0, controller.height * 0.5, 0.0);
        d3.draw_cube(center, width, controller.height, width, color);
        d3.draw_cube_wires(center, width, controller.height, width, Color::DARKGRAY);

        // facing line at chest height
        let chest = controller.position + Vector3::new(0.0, controller.height * 0.75, 0.0);
        let tip = chest + facing.forward() * (controller.radius + 0.75);
        d3.draw_line_3D(chest, tip, Color::RED);
        d3.draw_sphere(tip, 0.08, Color::RED);
    }
}

/// Draw the 2D overlay: flags, velocities and controls state.
pub fn render_hud(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut q = world.query::<(
        &CharacterController,
        &MovementIntent,
        &LocomotionVelocity,
        &Animator,
        &CharacterControls,
    )>();

    let mut y = 10;
    for (controller, intent, velocity, animator, controls) in q.iter(world) {
        let lines = [
            format!(
                "pos ({:.2}, {:.2}, {:.2}) grounded={}",
                controller.position.x,
                controller.position.y,
                controller.position.z,
                controller.is_grounded()
            ),
            format!(
                "walk ({:.2}, {:.2}, {:.2}) run ({:.2}, {:.2}, {:.2})",
                velocity.walk.x,
                velocity.walk.y,
                velocity.walk.z,
                velocity.run.x,
                velocity.run.y,
                velocity.run.z
            ),
            format!(
                "moving={} run={} | isWalking={} isRunning={} writes={}",
                intent.is_movement_pressed,
                intent.is_run_pressed,
                animator.get_bool(AnimParam::IsWalking),
                animator.get_bool(AnimParam::IsRunning),
                animator.writes()
            ),
            format!(
                "controls {} (F1)",
                if controls.is_enabled() { "on" } else { "off" }
            ),
        ];
        for line in lines.iter() {
            d.draw_text(line, 10, y, 20, Color::DARKGRAY);
            y += 24;
        }
    }
    d.draw_fps(10, y + 4);
}
