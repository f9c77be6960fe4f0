//! Star, sparks, and the per-stream particle buffers.
//!
//! The star and sparks are stateless aside from caching: their positions are
//! re-evaluated from the motion fields every frame. Particles are the only
//! integrated state, kept in struct-of-arrays form so the position/color/size
//! sequences double as the renderer-facing parallel arrays.

use bevy::prelude::*;

use crate::constants::{
    ATTRACT_ACCEL, DRAG, LAUNCH_SPEED, MIN_ATTRACT_DIST, OVERBRIGHT, PARTICLE_LIFETIME, SEED_SPAN,
    VELOCITY_FRAME_RATE,
};
use crate::field;
use crate::palette::Palette;
use crate::settings::Settings;

// ---------------------------------------------------------------------------
// Star & sparks
// ---------------------------------------------------------------------------

/// The central moving point every stream orbits.
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec3,
    /// Last frame's position. Kept for velocity derivation downstream.
    pub old_pos: Vec3,
    /// Per-instance phase seed, drawn once in `[0, 10)`.
    pub phase_seed: f32,
    /// Per-instance rotation rate multiplier, drawn once in `[0.4, 0.9)`.
    pub rot_speed: f32,
}

impl Star {
    pub fn new(rng: &mut fastrand::Rng) -> Self {
        Self {
            pos: Vec3::ZERO,
            old_pos: Vec3::ZERO,
            phase_seed: rng.f32() * 10.0,
            rot_speed: 0.4 + rng.f32() * 0.5,
        }
    }

    /// Re-evaluate the star field at time `t`.
    pub fn update(&mut self, t: f32, speed: f32) {
        self.old_pos = self.pos;
        self.pos = field::star_position(t, self.phase_seed, self.rot_speed, speed);
    }
}

/// A stream's anchor point, orbiting the star on the secondary field.
#[derive(Debug, Clone)]
pub struct Spark {
    pub pos: Vec3,
    /// Evenly spaced over the seed domain: `SEED_SPAN * (i + 1) / n`.
    pub phase_seed: f32,
}

impl Spark {
    pub fn new(index: usize, total: usize) -> Self {
        Self {
            pos: Vec3::ZERO,
            phase_seed: SEED_SPAN * (index + 1) as f32 / total as f32,
        }
    }

    /// Re-evaluate the spark field at time `t`, anchored to the star.
    pub fn update(&mut self, t: f32, speed: f32, star_pos: Vec3) {
        self.pos = star_pos + field::spark_offset(t, self.phase_seed, speed);
    }
}

// ---------------------------------------------------------------------------
// Fade law
// ---------------------------------------------------------------------------

/// Remaining life fraction for a particle of the given age, clamped to [0, 1].
pub fn life_factor(age: f32) -> f32 {
    1.0 - (age / PARTICLE_LIFETIME).min(1.0)
}

/// Brightness of a particle of the given age. Exactly 0 from age 3.0 on —
/// but a fully faded particle stays in its buffer until capacity evicts it.
pub fn fade(age: f32) -> f32 {
    life_factor(age).sqrt()
}

// ---------------------------------------------------------------------------
// Per-stream particle buffer
// ---------------------------------------------------------------------------

/// Fixed-capacity particle buffer for one stream, in struct-of-arrays form.
///
/// The parallel `positions`/`colors`/`sizes` arrays are published to the
/// renderer as-is after integration. Entries are ordered by spawn time;
/// eviction is strict FIFO and happens only at emission time when the buffer
/// is at capacity.
#[derive(Debug, Clone)]
pub struct ParticleStream {
    pub base_color: LinearRgba,
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub ages: Vec<f32>,
    pub colors: Vec<LinearRgba>,
    pub sizes: Vec<f32>,
}

impl ParticleStream {
    pub fn new(base_color: LinearRgba, capacity: usize) -> Self {
        Self {
            base_color,
            positions: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            ages: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
            sizes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Spawn one particle at the star, launched toward the spark.
    ///
    /// Evicts the oldest entry first when at capacity, keeping
    /// `len() <= max_particles` an invariant across any emission sequence.
    pub fn emit(&mut self, star_pos: Vec3, spark_pos: Vec3, max_particles: usize) {
        while self.len() >= max_particles.max(1) {
            self.evict_oldest();
        }

        let velocity = (spark_pos - star_pos).normalize_or_zero() * LAUNCH_SPEED;
        self.positions.push(star_pos);
        self.velocities.push(velocity);
        self.ages.push(0.0);
        self.colors.push(self.base_color);
        self.sizes.push(1.0);
    }

    fn evict_oldest(&mut self) {
        self.positions.remove(0);
        self.velocities.remove(0);
        self.ages.remove(0);
        self.colors.remove(0);
        self.sizes.remove(0);
    }

    /// Advance every particle by `dt`: attraction toward the spark's current
    /// position, drag, integration, then the age-based fade of color and size.
    pub fn integrate(&mut self, dt: f32, spark_pos: Vec3) {
        for i in 0..self.len() {
            self.ages[i] += dt;

            let to_spark = spark_pos - self.positions[i];
            let dist = to_spark.length();
            if dist > MIN_ATTRACT_DIST {
                self.velocities[i] += to_spark / dist * ATTRACT_ACCEL * dt;
            }

            self.velocities[i] *= DRAG;
            // Velocity is in per-60fps-frame units; rescale on integration.
            self.positions[i] += self.velocities[i] * dt * VELOCITY_FRAME_RATE;

            let life = life_factor(self.ages[i]);
            let brightness = fade(self.ages[i]) * OVERBRIGHT;
            self.colors[i] = LinearRgba::new(
                self.base_color.red * brightness,
                self.base_color.green * brightness,
                self.base_color.blue * brightness,
                1.0,
            );
            self.sizes[i] = 0.3 + life * 0.7;
        }
    }
}

// ---------------------------------------------------------------------------
// Stream set
// ---------------------------------------------------------------------------

/// The whole variant-A scene state: one star, one spark and one particle
/// buffer per stream.
#[derive(Resource, Debug, Clone)]
pub struct StreamSet {
    pub star: Star,
    pub sparks: Vec<Spark>,
    pub streams: Vec<ParticleStream>,
    /// Palette the current streams were built with.
    pub palette: Palette,
}

impl StreamSet {
    /// Build from settings using the global RNG for the star's one-time draws.
    pub fn build(settings: &Settings) -> Self {
        let mut rng = fastrand::Rng::new();
        Self::build_with_rng(settings, &mut rng)
    }

    /// Build with a caller-supplied RNG, for deterministic tests.
    pub fn build_with_rng(settings: &Settings, rng: &mut fastrand::Rng) -> Self {
        let mut set = Self {
            star: Star::new(rng),
            sparks: Vec::new(),
            streams: Vec::new(),
            palette: settings.palette,
        };
        set.rebuild(settings);
        set
    }

    /// Discard all sparks, streams, and particle history; keep the star.
    /// Called whenever `stream_count` or the palette changes.
    pub fn rebuild(&mut self, settings: &Settings) {
        let n = settings.stream_count.max(1);
        self.sparks = (0..n).map(|i| Spark::new(i, n)).collect();
        self.streams = (0..n)
            .map(|i| ParticleStream::new(settings.palette.color(i), settings.max_particles))
            .collect();
        self.palette = settings.palette;
    }

    /// Re-evaluate the star and every spark at time `t`.
    pub fn update_motion(&mut self, t: f32, speed: f32) {
        self.star.update(t, speed);
        for spark in &mut self.sparks {
            spark.update(t, speed, self.star.pos);
        }
    }

    /// One emission tick: every stream spawns one particle at the star.
    pub fn emit_tick(&mut self, max_particles: usize) {
        for (stream, spark) in self.streams.iter_mut().zip(&self.sparks) {
            stream.emit(self.star.pos, spark.pos, max_particles);
        }
    }

    /// Integrate every stream against its spark's current position.
    pub fn integrate(&mut self, dt: f32) {
        for (stream, spark) in self.streams.iter_mut().zip(&self.sparks) {
            stream.integrate(dt, spark.pos);
        }
    }
}

impl FromWorld for StreamSet {
    fn from_world(world: &mut World) -> Self {
        let settings = world.resource::<Settings>().clone();
        Self::build(&settings)
    }
}
