//! Character setup and lifecycle.
//!
//! A locomotion character is an entity carrying all of:
//! - [`CharacterController`] – position and ground contact
//! - [`Animator`] – animation parameters
//! - [`Facing`] – orientation
//! - [`MovementIntent`] and [`LocomotionVelocity`] – input-derived state
//! - [`CharacterControls`] – input subscription switch
//!
//! [`spawn_character`] builds one with controls disabled. [`start`] checks
//! the collaborators and subscribes the character to input; [`stop`]
//! unsubscribes it and releases its held input. Observers for the input
//! events must be registered with [`register_locomotion_observers`] before
//! the first frame.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector3;
use serde::Serialize;
use thiserror::Error;

use crate::components::animator::{AnimParam, Animator};
use crate::components::charactercontroller::CharacterController;
use crate::components::charactercontrols::CharacterControls;
use crate::components::facing::Facing;
use crate::components::locomotionvelocity::LocomotionVelocity;
use crate::components::movementintent::MovementIntent;
use crate::events::locomotioninput::{observe_move_input, observe_run_input};
use crate::events::togglecontrols::toggle_controls_observer;
use crate::resources::input::InputEdges;

/// Failures of character setup and headless runs.
#[derive(Debug, Error)]
pub enum LocomotionError {
    #[error("entity {entity:?} has no {component} component")]
    MissingCollaborator {
        entity: Entity,
        component: &'static str,
    },
    #[error("entity {0:?} does not exist")]
    NoSuchEntity(Entity),
    #[error("input script error: {0}")]
    Script(String),
}

/// Spawn the input observers. Call once per world.
pub fn register_locomotion_observers(world: &mut World) {
    world.spawn(Observer::new(observe_move_input));
    world.spawn(Observer::new(observe_run_input));
    world.spawn(Observer::new(toggle_controls_observer));
    // make sure observers exist before anything triggers input
    world.flush();
}

/// Spawn a character with feet at `position`. Controls start disabled.
pub fn spawn_character(world: &mut World, position: Vector3) -> Entity {
    let entity = world
        .spawn((
            CharacterController::new(position),
            Animator::new(),
            Facing::identity(),
            MovementIntent::new(),
            LocomotionVelocity::new(),
            CharacterControls::default(),
        ))
        .id();
    info!(
        "Spawned character {:?} at ({}, {}, {})",
        entity, position.x, position.y, position.z
    );
    entity
}

fn require<T: Component>(
    entity: &EntityRef,
    component: &'static str,
) -> Result<(), LocomotionError> {
    if entity.contains::<T>() {
        Ok(())
    } else {
        Err(LocomotionError::MissingCollaborator {
            entity: entity.id(),
            component,
        })
    }
}

/// Check that `entity` has every component the locomotion steps depend on.
pub fn validate(world: &World, entity: Entity) -> Result<(), LocomotionError> {
    let entity_ref = world
        .get_entity(entity)
        .map_err(|_| LocomotionError::NoSuchEntity(entity))?;
    require::<CharacterController>(&entity_ref, "CharacterController")?;
    require::<Animator>(&entity_ref, "Animator")?;
    require::<Facing>(&entity_ref, "Facing")?;
    require::<MovementIntent>(&entity_ref, "MovementIntent")?;
    require::<LocomotionVelocity>(&entity_ref, "LocomotionVelocity")?;
    require::<CharacterControls>(&entity_ref, "CharacterControls")?;
    Ok(())
}

/// Validate collaborators and subscribe the character to input.
///
/// The [`InputEdges`] record is reset so keys still held from before the
/// character was stopped arrive again as `Started`.
pub fn start(world: &mut World, entity: Entity) -> Result<(), LocomotionError> {
    validate(world, entity)?;
    if let Some(mut controls) = world.get_mut::<CharacterControls>(entity) {
        controls.enable();
    }
    if let Some(mut edges) = world.get_resource_mut::<InputEdges>() {
        edges.reset();
    }
    info!("Character {:?} controls enabled", entity);
    Ok(())
}

/// Unsubscribe the character from input and release whatever it held.
///
/// Intent and planar velocities drop to zero, and the per-frame steps skip
/// the character until [`start`] is called again.
pub fn stop(world: &mut World, entity: Entity) -> Result<(), LocomotionError> {
    validate(world, entity)?;
    let mut character = world
        .get_entity_mut(entity)
        .map_err(|_| LocomotionError::NoSuchEntity(entity))?;
    if let Some(mut controls) = character.get_mut::<CharacterControls>() {
        controls.disable();
    }
    if let Some(mut intent) = character.get_mut::<MovementIntent>() {
        intent.release();
    }
    if let Some(mut velocity) = character.get_mut::<LocomotionVelocity>() {
        velocity.clear_planar();
    }
    info!("Character {:?} controls disabled", entity);
    Ok(())
}

/// Serializable view of a character, for logs and headless output.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterSnapshot {
    pub position: [f32; 3],
    pub walk_velocity: [f32; 3],
    pub run_velocity: [f32; 3],
    /// Yaw in degrees, measured from +Z towards +X.
    pub yaw_degrees: f32,
    pub grounded: bool,
    pub is_movement_pressed: bool,
    pub is_run_pressed: bool,
    pub is_walking: bool,
    pub is_running: bool,
    pub animator_writes: u32,
    pub controls_enabled: bool,
}

fn arr(v: Vector3) -> [f32; 3] {
    [v.x, v.y, v.z]
}

impl CharacterSnapshot {
    /// Capture the state of `entity`.
    pub fn capture(world: &World, entity: Entity) -> Result<Self, LocomotionError> {
        validate(world, entity)?;
        let missing = |component| LocomotionError::MissingCollaborator { entity, component };

        let controller = world
            .get::<CharacterController>(entity)
            .ok_or_else(|| missing("CharacterController"))?;
        let animator = world
            .get::<Animator>(entity)
            .ok_or_else(|| missing("Animator"))?;
        let facing = world
            .get::<Facing>(entity)
            .ok_or_else(|| missing("Facing"))?;
        let intent = world
            .get::<MovementIntent>(entity)
            .ok_or_else(|| missing("MovementIntent"))?;
        let velocity = world
            .get::<LocomotionVelocity>(entity)
            .ok_or_else(|| missing("LocomotionVelocity"))?;
        let controls = world
            .get::<CharacterControls>(entity)
            .ok_or_else(|| missing("CharacterControls"))?;

        Ok(Self {
            position: arr(controller.position),
            walk_velocity: arr(velocity.walk),
            run_velocity: arr(velocity.run),
            yaw_degrees: facing.yaw().to_degrees(),
            grounded: controller.is_grounded(),
            is_movement_pressed: intent.is_movement_pressed,
            is_run_pressed: intent.is_run_pressed,
            is_walking: animator.get_bool(AnimParam::IsWalking),
            is_running: animator.get_bool(AnimParam::IsRunning),
            animator_writes: animator.writes(),
            controls_enabled: controls.is_enabled(),
        })
    }
}
