//! # starlace
//!
//! Viewer glue around [`bevy_star_field`] and [`bevy_star_ribbons`]: scene
//! and camera setup, bloom pass-through, keyboard controls, and gizmo-based
//! drawing of the stream arrays and ribbon paths. All simulation lives in
//! the member crates; this crate only feeds their output to the renderer.
//!
//! ## Controls
//!
//! - `1`-`4`: apply the Classic / Intense / Simple / Chaotic presets
//! - `Tab`: switch between the particle streams and the ribbon scene
//! - `Up`/`Down`: speed, `Left`/`Right`: stream count
//! - `[`/`]`: max particles, `-`/`=`: bloom strength
//! - `PageUp`/`PageDown`: camera distance

pub mod config;

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;
use bevy::render::view::Hdr;

use bevy_star_field::{Preset, Settings, SimClock, StarFieldPlugin, StreamSet};
use bevy_star_ribbons::{ribbon, RibbonSet, StarRibbonsPlugin, StarRibbonsSet, SEGMENT_COUNT};

/// Maps the settings' bloom strength into `Bloom::intensity` units.
const BLOOM_INTENSITY_SCALE: f32 = 0.1;
/// Gizmo radius per unit of particle size.
const PARTICLE_DRAW_SCALE: f32 = 0.05;
/// Lerp factor per frame for the drifting camera.
const CAMERA_DRIFT: f32 = 0.05;

/// Which scene is being drawn. Both cores keep simulating either way.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Streams,
    Ribbons,
}

/// Marker for the glowing sphere that rides the star.
#[derive(Component)]
pub struct GlowSphere;

pub struct ViewerPlugin;

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((StarFieldPlugin, StarRibbonsPlugin))
            .init_resource::<ViewMode>()
            .add_systems(
                Startup,
                (config::load_settings_override, setup_scene).chain(),
            )
            .add_systems(
                Update,
                (
                    keyboard_controls,
                    sync_bloom,
                    drift_camera,
                    pulse_glow,
                    draw_streams,
                    draw_ribbons,
                )
                    .after(StarRibbonsSet),
            );
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<Settings>,
) {
    commands.spawn((
        Camera3d::default(),
        Hdr,
        Tonemapping::TonyMcMapface,
        Bloom {
            intensity: settings.bloom_strength * BLOOM_INTENSITY_SCALE,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, settings.camera_distance).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        GlowSphere,
        Mesh3d(meshes.add(Sphere::new(0.3))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            emissive: LinearRgba::WHITE * 4.0,
            unlit: true,
            ..default()
        })),
        Transform::default(),
    ));
}

fn keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<Settings>,
    mut view: ResMut<ViewMode>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        *view = match *view {
            ViewMode::Streams => ViewMode::Ribbons,
            ViewMode::Ribbons => ViewMode::Streams,
        };
    }

    for (key, preset) in [
        (KeyCode::Digit1, Preset::Classic),
        (KeyCode::Digit2, Preset::Intense),
        (KeyCode::Digit3, Preset::Simple),
        (KeyCode::Digit4, Preset::Chaotic),
    ] {
        if keys.just_pressed(key) {
            preset.apply(&mut settings);
            info!("applied preset {}", preset.label());
        }
    }

    if keys.just_pressed(KeyCode::ArrowUp) {
        let s = settings.speed + 0.1;
        settings.set_speed(s);
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        let s = settings.speed - 0.1;
        settings.set_speed(s);
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        let n = settings.stream_count + 1;
        settings.set_stream_count(n);
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        let n = settings.stream_count.saturating_sub(1);
        settings.set_stream_count(n);
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        let n = settings.max_particles + 50;
        settings.set_max_particles(n);
    }
    if keys.just_pressed(KeyCode::BracketLeft) {
        let n = settings.max_particles.saturating_sub(50);
        settings.set_max_particles(n);
    }
    if keys.just_pressed(KeyCode::Equal) {
        let b = settings.bloom_strength + 0.1;
        settings.set_bloom_strength(b);
    }
    if keys.just_pressed(KeyCode::Minus) {
        let b = settings.bloom_strength - 0.1;
        settings.set_bloom_strength(b);
    }
    if keys.just_pressed(KeyCode::PageUp) {
        let d = settings.camera_distance + 1.0;
        settings.set_camera_distance(d);
    }
    if keys.just_pressed(KeyCode::PageDown) {
        let d = settings.camera_distance - 1.0;
        settings.set_camera_distance(d);
    }
}

/// Push the settings' bloom strength into the camera's bloom pass.
fn sync_bloom(settings: Res<Settings>, mut bloom: Query<&mut Bloom>) {
    if !settings.is_changed() {
        return;
    }
    for mut b in &mut bloom {
        b.intensity = settings.bloom_strength * BLOOM_INTENSITY_SCALE;
    }
}

/// Slow orbiting drift toward a time-varying vantage point, always looking
/// at the origin.
fn drift_camera(
    clock: Res<SimClock>,
    settings: Res<Settings>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let t = clock.time();
    let target = Vec3::new(
        (t * 0.04).sin() * 5.0,
        (t * 0.03).cos() * 4.0,
        settings.camera_distance + (t * 0.04).cos() * 2.0,
    );
    for mut transform in &mut cameras {
        transform.translation = transform.translation.lerp(target, CAMERA_DRIFT);
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}

/// Keep the glow sphere on the star, breathing slightly.
fn pulse_glow(
    clock: Res<SimClock>,
    set: Res<StreamSet>,
    mut glows: Query<&mut Transform, With<GlowSphere>>,
) {
    let pulse = 1.0 + (clock.time() * 3.0).sin() * 0.15;
    for mut transform in &mut glows {
        transform.translation = set.star.pos;
        transform.scale = Vec3::splat(pulse);
    }
}

/// Draw the published particle arrays of every stream.
fn draw_streams(view: Res<ViewMode>, set: Res<StreamSet>, mut gizmos: Gizmos) {
    if *view != ViewMode::Streams {
        return;
    }
    for stream in &set.streams {
        for i in 0..stream.len() {
            gizmos.sphere(
                Isometry3d::from_translation(stream.positions[i]),
                stream.sizes[i] * PARTICLE_DRAW_SCALE,
                stream.colors[i],
            );
        }
    }
}

/// Draw each ribbon path as a polyline with the outward color falloff.
fn draw_ribbons(view: Res<ViewMode>, set: Res<RibbonSet>, mut gizmos: Gizmos) {
    if *view != ViewMode::Ribbons {
        return;
    }
    for r in &set.ribbons {
        gizmos.linestrip_gradient(r.points.iter().enumerate().map(|(i, p)| {
            let u = i as f32 / (SEGMENT_COUNT - 1) as f32;
            (*p, Color::from(ribbon::vertex_color(r.color, u)))
        }));
    }
}
