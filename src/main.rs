//! Standalone viewer binary.

use bevy::prelude::*;
use starlace::ViewerPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Starlace".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ViewerPlugin)
        .run();
}
