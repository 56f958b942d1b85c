//! ECS components for characters.
//!
//! Submodules overview:
//! - [`animator`] – boolean animation graph parameters (`isWalking`, `isRunning`)
//! - [`charactercontroller`] – kinematic mover owning position and ground contact
//! - [`charactercontrols`] – whether the character listens to input
//! - [`facing`] – character orientation as a quaternion
//! - [`locomotionvelocity`] – walk and run velocities
//! - [`movementintent`] – raw movement axis and run button state

pub mod animator;
pub mod charactercontroller;
pub mod charactercontrols;
pub mod facing;
pub mod locomotionvelocity;
pub mod movementintent;
