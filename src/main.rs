use bevy::prelude::*;
use orrery::config::SimulationConfig;
use orrery::plugins::{CameraPlugin, ControlsPlugin, SimulationPlugin, VisualizationPlugin};

fn main() -> AppExit {
    let config = SimulationConfig::load_from_user_config();

    // Reject a bad body roster before the first tick ever runs
    let system = match config.build_system() {
        Ok(system) => system,
        Err(error) => {
            eprintln!("invalid simulation configuration: {error}");
            return AppExit::error();
        }
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: format!(
                "Orrery {} ({})",
                env!("CARGO_PKG_VERSION"),
                env!("BUILD_DATE")
            ),
            resolution: (
                config.rendering.window_width,
                config.rendering.window_height,
            )
                .into(),
            ..default()
        }),
        ..default()
    }));

    app.add_plugins((
        SimulationPlugin::new(config, system),
        CameraPlugin,
        VisualizationPlugin,
        ControlsPlugin,
    ));

    app.run()
}
