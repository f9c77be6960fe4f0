//! Optional on-disk settings override.

use bevy::prelude::*;
use bevy_star_field::Settings;

const SETTINGS_PATH: &str = "assets/settings.ron";

/// Load `assets/settings.ron` over the defaults if present. A missing file
/// is not an error; a malformed one logs and keeps the defaults.
pub fn load_settings_override(mut settings: ResMut<Settings>) {
    let Ok(contents) = std::fs::read_to_string(SETTINGS_PATH) else {
        return;
    };
    match ron::from_str::<Settings>(&contents) {
        Ok(loaded) => {
            *settings = loaded;
            info!("loaded settings override from {SETTINGS_PATH}");
        }
        Err(e) => warn!("failed to parse {SETTINGS_PATH}: {e}"),
    }
}
