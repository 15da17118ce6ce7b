//! Centralized event definitions
//!
//! User input is translated into `SimulationCommand` events by the
//! controls plugin and handled by the simulation plugin, keeping a clear
//! boundary between input and the systems that act on it.

use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationCommand {
    Pause,
    Resume,
    ResetTrails,
    Quit,
}
