//! Seeded coherent-noise vector field.
//!
//! Three independently seeded Perlin generators sampled at the same
//! coordinate give a smooth 3D displacement. Deterministic: the same seed
//! and coordinate always produce the same vector, which is what lets the
//! ribbon sampler stay a pure function of `(time, stream)`.

use bevy::prelude::*;
use noise::{NoiseFn, Perlin};

/// Seed used by the plugin's default field.
pub const DEFAULT_NOISE_SEED: u32 = 1979;

/// A 3D coherent-noise vector field.
pub struct NoiseField {
    x: Perlin,
    y: Perlin,
    z: Perlin,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            x: Perlin::new(seed),
            y: Perlin::new(seed.wrapping_add(1)),
            z: Perlin::new(seed.wrapping_add(2)),
        }
    }

    /// Sample the field at `p`. Each component is in roughly [-1, 1].
    pub fn sample(&self, p: Vec3) -> Vec3 {
        let at = [p.x as f64, p.y as f64, p.z as f64];
        Vec3::new(
            self.x.get(at) as f32,
            self.y.get(at) as f32,
            self.z.get(at) as f32,
        )
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_SEED)
    }
}
