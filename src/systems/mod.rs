//! Systems.
//!
//! Submodules overview
//! - [`animation`] – edge-triggered `isWalking`/`isRunning` animator writes
//! - [`gravity`] – grounded bias and airborne gravity accumulation
//! - [`input`] – turn polled keyboard or script input into input events
//! - [`locomotion`] – frame ordering of the locomotion steps
//! - [`motion`] – hand the frame displacement to the character controller
//! - [`render`] – camera follow and Raylib drawing for the demo
//! - [`rotation`] – turn characters towards their heading
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod gravity;
pub mod input;
pub mod locomotion;
pub mod motion;
pub mod render;
pub mod rotation;
pub mod time;
