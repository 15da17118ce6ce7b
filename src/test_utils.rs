//! Shared helpers for plugin tests

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

/// Headless app with just enough plumbing for states and events.
pub fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app
}
