//! Event types and observers.
//!
//! Submodules:
//! - [`locomotioninput`] – move and run input events from the input layer
//! - [`togglecontrols`] – switch character input subscription on/off
pub mod locomotioninput;
pub mod togglecontrols;
