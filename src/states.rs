use bevy::prelude::*;

/// Pause bookkeeping lives in the driver: while `Paused`, stepping
/// systems are withheld and rendering continues.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Running,
    Paused,
}
