//! # bevy_star_field
//!
//! Deterministic motion-field particle streams orbiting a wandering star.
//!
//! A central "star" follows a closed-form trigonometric field. Each stream
//! owns a spark anchor on a secondary field plus a fixed-capacity particle
//! buffer that spawns at the star, chases the spark, and fades out over three
//! seconds. All motion is a pure function of simulation time, so runs are
//! reproducible frame for frame.
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_star_field::StarFieldPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(StarFieldPlugin)
//!         .run();
//! }
//! ```
//!
//! The renderer reads the parallel `positions`/`colors`/`sizes` arrays off
//! each [`stream::ParticleStream`] after [`StarFieldSet`] has run.

pub mod clock;
pub mod constants;
pub mod field;
pub mod palette;
pub mod presets;
pub mod settings;
pub mod stream;

pub use clock::SimClock;
pub use palette::Palette;
pub use presets::Preset;
pub use settings::Settings;
pub use stream::{ParticleStream, Spark, Star, StreamSet};

use bevy::prelude::*;

/// Label for the star field update chain. External consumers (renderers,
/// the ribbon variant) schedule themselves `.after(StarFieldSet)`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarFieldSet;

/// Registers the simulation resources and the per-frame update chain.
pub struct StarFieldPlugin;

impl Plugin for StarFieldPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Settings>()
            .register_type::<Palette>()
            .register_type::<Preset>()
            .init_resource::<Settings>()
            .init_resource::<SimClock>()
            .init_resource::<StreamSet>()
            .add_systems(
                Update,
                (
                    advance_clock,
                    sync_streams,
                    update_motion,
                    emit_particles,
                    integrate_streams,
                )
                    .chain()
                    .in_set(StarFieldSet),
            );
    }
}

/// Step the fixed-step clock once per frame.
fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}

/// Rebuild the stream set when the settings no longer match it.
/// Rebuilding discards all particle history; the star persists.
fn sync_streams(settings: Res<Settings>, mut set: ResMut<StreamSet>) {
    if set.streams.len() != settings.stream_count || set.palette != settings.palette {
        set.rebuild(&settings);
        info!(
            "rebuilt {} particle streams ({} palette)",
            settings.stream_count,
            settings.palette.label()
        );
    }
}

/// Re-evaluate the star and spark fields at the current simulation time.
fn update_motion(clock: Res<SimClock>, settings: Res<Settings>, mut set: ResMut<StreamSet>) {
    set.update_motion(clock.time(), settings.speed);
}

/// Drain whole 60 Hz ticks and spawn one particle per stream for each.
fn emit_particles(
    mut clock: ResMut<SimClock>,
    settings: Res<Settings>,
    mut set: ResMut<StreamSet>,
) {
    for _ in 0..clock.take_emission_ticks() {
        set.emit_tick(settings.max_particles);
    }
}

/// Advance particle physics and fade; runs every frame, not every tick.
fn integrate_streams(mut set: ResMut<StreamSet>) {
    set.integrate(constants::FIXED_DT);
}
