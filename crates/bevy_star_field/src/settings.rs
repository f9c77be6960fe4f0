//! Process-wide visualization settings.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::palette::Palette;

/// Mutable configuration read by every component each frame.
///
/// All mutations funnel through the setters below; they clamp to sane ranges
/// but otherwise apply immediately and take effect on the next frame. The
/// stream sets watch `stream_count` and `palette` and rebuild themselves when
/// either changes, discarding all particle history.
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq, Reflect)]
#[reflect(Resource, Default)]
pub struct Settings {
    /// Global speed multiplier for both motion fields.
    pub speed: f32,
    /// Number of streams (sparks / particle buffers / ribbons).
    pub stream_count: usize,
    /// Capacity bound per particle stream, enforced FIFO at emission time.
    pub max_particles: usize,
    /// Bloom strength, passed through to the render collaborator.
    pub bloom_strength: f32,
    /// Base camera distance for the drifting camera path.
    pub camera_distance: f32,
    /// Active stream color palette.
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: 1.0,
            stream_count: 8,
            max_particles: 300,
            bloom_strength: 1.5,
            camera_distance: 15.0,
            palette: Palette::Classic,
        }
    }
}

impl Settings {
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(0.1, 3.0);
    }

    pub fn set_stream_count(&mut self, count: usize) {
        self.stream_count = count.clamp(1, 16);
    }

    pub fn set_max_particles(&mut self, max: usize) {
        self.max_particles = max.clamp(10, 1000);
    }

    pub fn set_bloom_strength(&mut self, strength: f32) {
        self.bloom_strength = strength.clamp(0.0, 3.0);
    }

    pub fn set_camera_distance(&mut self, distance: f32) {
        self.camera_distance = distance.clamp(5.0, 40.0);
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp() {
        let mut settings = Settings::default();
        settings.set_speed(99.0);
        assert_eq!(settings.speed, 3.0);
        settings.set_stream_count(0);
        assert_eq!(settings.stream_count, 1);
        settings.set_max_particles(5);
        assert_eq!(settings.max_particles, 10);
        settings.set_bloom_strength(-1.0);
        assert_eq!(settings.bloom_strength, 0.0);
    }

    #[test]
    fn ron_round_trip() {
        let mut settings = Settings::default();
        settings.set_palette(Palette::Simple);
        settings.set_speed(0.5);
        let text = ron::to_string(&settings).unwrap();
        let back: Settings = ron::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }
}
