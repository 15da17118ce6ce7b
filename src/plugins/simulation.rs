//! Simulation plugin - Self-contained plugin pattern
//!
//! Owns the fixed-tick physics loop and the handlers for user commands.
//! Stepping only runs in `AppState::Running`; the rendering systems keep
//! drawing regardless of pause state.

use crate::prelude::*;

pub struct SimulationPlugin {
    config: SimulationConfig,
    system: SolarSystem,
}

impl SimulationPlugin {
    /// Plugin over a pre-validated configuration and system; `main`
    /// rejects an invalid roster before constructing this.
    pub fn new(config: SimulationConfig, system: SolarSystem) -> Self {
        Self { config, system }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());
        app.insert_resource(GravitationalSystem(self.system.clone()));
        app.insert_resource(SimulationTimeStep(self.config.physics.time_step));
        app.insert_resource(Time::<Fixed>::from_hz(self.config.physics.ticks_per_second));

        app.init_state::<AppState>();
        app.add_event::<SimulationCommand>();

        app.add_systems(
            FixedUpdate,
            step_simulation.run_if(in_state(AppState::Running)),
        );
        app.add_systems(
            Update,
            (
                handle_pause_commands,
                handle_reset_trails_command,
                handle_quit_command,
            ),
        );
    }
}

/// Advances the physics system by one tick. A failed tick is fatal: the
/// error is reported and the app shuts down instead of ticking on with
/// undefined numeric state.
fn step_simulation(
    mut system: ResMut<GravitationalSystem>,
    time_step: Res<SimulationTimeStep>,
    mut exit: EventWriter<AppExit>,
) {
    if let Err(error) = system.step(**time_step) {
        error!("simulation halted: {error}");
        exit.write(AppExit::error());
    }
}

fn handle_pause_commands(
    mut commands: EventReader<SimulationCommand>,
    current_state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for command in commands.read() {
        match (command, current_state.get()) {
            (SimulationCommand::Pause, AppState::Running) => {
                next_state.set(AppState::Paused);
                info!("Simulation paused");
            }
            (SimulationCommand::Resume, AppState::Paused) => {
                next_state.set(AppState::Running);
                info!("Simulation resumed");
            }
            _ => {}
        }
    }
}

fn handle_reset_trails_command(
    mut commands: EventReader<SimulationCommand>,
    mut system: ResMut<GravitationalSystem>,
) {
    for command in commands.read() {
        if matches!(command, SimulationCommand::ResetTrails) {
            system.clear_trails();
            info!("Orbit trails cleared");
        }
    }
}

fn handle_quit_command(
    mut commands: EventReader<SimulationCommand>,
    mut exit: EventWriter<AppExit>,
) {
    for command in commands.read() {
        if matches!(command, SimulationCommand::Quit) {
            exit.write_default();
        }
    }
}
