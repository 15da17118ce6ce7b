//! Orrery prelude module
//!
//! Re-exports the most commonly used types across the application to
//! reduce import boilerplate.

// External crate re-exports
pub use bevy::prelude::*;

// Internal re-exports - Config
pub use crate::config::SimulationConfig;

// Internal re-exports - States
pub use crate::states::AppState;

// Internal re-exports - Events
pub use crate::events::SimulationCommand;

// Internal re-exports - Resources
pub use crate::resources::{GravitationalSystem, SimulationTimeStep};

// Internal re-exports - Physics
pub use crate::physics::math::{ASTRONOMICAL_UNIT, GRAVITATIONAL_CONSTANT, Scalar, Vector};
pub use crate::physics::{Body, PhysicsError, SolarSystem};
