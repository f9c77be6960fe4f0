//! Built-in settings presets.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::palette::Palette;
use crate::settings::Settings;

/// Named bundle of (speed, bloom strength, palette), applied atomically.
///
/// Applying a preset with a different palette makes the stream sets rebuild
/// on the next frame with the new palette colors in index order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub enum Preset {
    Classic,
    Intense,
    Simple,
    Chaotic,
}

impl Preset {
    pub const ALL: [Self; 4] = [Self::Classic, Self::Intense, Self::Simple, Self::Chaotic];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Intense => "Intense",
            Self::Simple => "Simple",
            Self::Chaotic => "Chaotic",
        }
    }

    /// The preset's `(speed, bloom_strength, palette)` triple.
    ///
    /// Note the classic preset pairs with the intense palette; the classic
    /// palette is only reachable through `Settings` directly.
    pub fn values(&self) -> (f32, f32, Palette) {
        match self {
            Self::Classic => (1.0, 1.0, Palette::Intense),
            Self::Intense => (1.0, 1.5, Palette::Intense),
            Self::Simple => (0.5, 1.0, Palette::Simple),
            Self::Chaotic => (2.5, 2.8, Palette::Chaotic),
        }
    }

    /// Apply the whole bundle to `settings` in one go.
    pub fn apply(&self, settings: &mut Settings) {
        let (speed, bloom_strength, palette) = self.values();
        settings.speed = speed;
        settings.bloom_strength = bloom_strength;
        settings.palette = palette;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::StreamSet;

    #[test]
    fn classic_preset_aliases_intense_palette() {
        // Pins the classic/intense palette pairing: two presets, one palette.
        let mut settings = Settings::default();
        settings.set_palette(Palette::Classic);
        Preset::Classic.apply(&mut settings);
        assert_eq!(settings.palette, Palette::Intense);
        assert_eq!(settings.palette, Preset::Intense.values().2);
        assert_eq!(settings.speed, 1.0);
        assert_eq!(settings.bloom_strength, 1.0);
    }

    #[test]
    fn chaotic_preset_values() {
        let mut settings = Settings::default();
        Preset::Chaotic.apply(&mut settings);
        assert_eq!(settings.speed, 2.5);
        assert_eq!(settings.bloom_strength, 2.8);
        assert_eq!(settings.palette, Palette::Chaotic);
    }

    #[test]
    fn chaotic_preset_recolors_streams_in_index_order() {
        let mut settings = Settings::default();
        let mut rng = fastrand::Rng::with_seed(7);
        let mut set = StreamSet::build_with_rng(&settings, &mut rng);

        Preset::Chaotic.apply(&mut settings);
        set.rebuild(&settings);

        let colors = Palette::Chaotic.colors();
        for (i, stream) in set.streams.iter().enumerate() {
            assert_eq!(stream.base_color, colors[i % 6]);
        }
    }

    #[test]
    fn presets_touch_only_their_triple() {
        let mut settings = Settings::default();
        settings.set_stream_count(12);
        settings.set_max_particles(500);
        Preset::Simple.apply(&mut settings);
        assert_eq!(settings.stream_count, 12);
        assert_eq!(settings.max_particles, 500);
        assert_eq!(settings.speed, 0.5);
    }
}
