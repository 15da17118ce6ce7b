pub mod camera;
pub mod controls;
pub mod simulation;
pub mod visualization;

pub use camera::CameraPlugin;
pub use controls::ControlsPlugin;
pub use simulation::SimulationPlugin;
pub use visualization::VisualizationPlugin;
