//! Controls plugin - Self-contained plugin pattern
//!
//! Translates keyboard input into `SimulationCommand` events: `P`
//! pauses, `R` resumes, `Space` clears the orbit trails, `Escape`
//! quits. Acting on the commands is the simulation plugin's job.

use crate::prelude::*;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_input_handler);
    }
}

fn keyboard_input_handler(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: EventWriter<SimulationCommand>,
) {
    if keys.just_pressed(KeyCode::KeyP) {
        commands.write(SimulationCommand::Pause);
    }
    if keys.just_pressed(KeyCode::KeyR) {
        commands.write(SimulationCommand::Resume);
    }
    if keys.just_pressed(KeyCode::Space) {
        commands.write(SimulationCommand::ResetTrails);
    }
    if keys.just_pressed(KeyCode::Escape) {
        commands.write(SimulationCommand::Quit);
    }
}
