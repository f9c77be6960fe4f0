//! # bevy_star_ribbons
//!
//! Noise-driven ribbon paths radiating from the wandering star — the
//! alternative geometry to `bevy_star_field`'s particle streams. Each stream
//! gets one ribbon: a fixed direction on the sphere whose 40-point path is
//! resampled in full every frame from a seeded coherent-noise field.
//!
//! Runs after [`StarFieldSet`] so ribbons anchor to the star position of the
//! same frame. The renderer turns each path into a polyline or tube, with
//! per-vertex colors from [`ribbon::vertex_color`].

pub mod flow_noise;
pub mod ribbon;

pub use flow_noise::{NoiseField, DEFAULT_NOISE_SEED};
pub use ribbon::{Ribbon, RibbonSet, SEGMENT_COUNT};

use bevy::prelude::*;

use bevy_star_field::{Settings, SimClock, StarFieldSet, StreamSet};

/// Label for the ribbon update chain.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarRibbonsSet;

pub struct StarRibbonsPlugin;

impl Plugin for StarRibbonsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RibbonSet>().add_systems(
            Update,
            (sync_ribbons, sample_ribbons)
                .chain()
                .in_set(StarRibbonsSet)
                .after(StarFieldSet),
        );
    }
}

/// Rebuild the ribbon set when the settings no longer match it.
fn sync_ribbons(settings: Res<Settings>, mut set: ResMut<RibbonSet>) {
    if set.ribbons.len() != settings.stream_count || set.palette != settings.palette {
        set.rebuild(&settings);
        info!(
            "rebuilt {} ribbons ({} palette)",
            settings.stream_count,
            settings.palette.label()
        );
    }
}

/// Resample every ribbon path against this frame's star position.
fn sample_ribbons(clock: Res<SimClock>, streams: Res<StreamSet>, mut set: ResMut<RibbonSet>) {
    set.sample_paths(clock.time(), streams.star.pos);
}
