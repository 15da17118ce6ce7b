//! Orrery library
//!
//! This provides the core functionality of orrery as a library
//! to enable integration testing.

pub mod config;
pub mod events;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod states;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used items
pub use config::SimulationConfig;
pub use events::SimulationCommand;
pub use physics::{
    Body, PhysicsError, SolarSystem,
    math::{Scalar, Vector},
};
pub use plugins::{
    camera::CameraPlugin, controls::ControlsPlugin, simulation::SimulationPlugin,
    visualization::VisualizationPlugin,
};
pub use states::AppState;
