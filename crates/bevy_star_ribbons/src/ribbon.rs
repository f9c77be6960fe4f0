//! Ribbon path generation.
//!
//! Each stream owns one ribbon: a fixed base direction on the unit sphere
//! plus a handful of per-instance parameters drawn once at construction.
//! Every frame the full path is resampled from scratch — points have no
//! identity or lifecycle across frames.

use std::f32::consts::PI;

use bevy::prelude::*;

use bevy_star_field::palette::Palette;
use bevy_star_field::settings::Settings;

use crate::flow_noise::NoiseField;

/// Points per ribbon path, resampled every frame.
pub const SEGMENT_COUNT: usize = 40;

/// Radial length of a ribbon in scene units.
pub const RIBBON_REACH: f32 = 5.0;

/// Base direction for ribbon `index` of `total`: the equal-area spiral,
/// which spreads `total` directions evenly over the sphere.
pub fn base_direction(index: usize, total: usize) -> Vec3 {
    let phi = (-1.0 + 2.0 * index as f32 / total as f32).acos();
    let theta = (total as f32 * PI).sqrt() * phi;
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

/// Color for the path vertex at normalized arc position `u`: a power-law
/// falloff from the center, deliberately overbright for bloom pickup.
pub fn vertex_color(base: LinearRgba, u: f32) -> LinearRgba {
    let brightness = (1.0 - u.clamp(0.0, 1.0)).powf(0.4) * 4.0;
    LinearRgba::new(
        base.red * brightness,
        base.green * brightness,
        base.blue * brightness,
        1.0,
    )
}

/// One ribbon stream. Everything except the scratch buffer is fixed for the
/// stream's lifetime.
pub struct Ribbon {
    /// Unit base direction from the equal-area spiral.
    pub direction: Vec3,
    /// Coordinate offset into the noise field, unique per stream.
    pub noise_offset: Vec3,
    pub flow_speed: f32,
    pub rotation_speed: f32,
    /// Multiplier on the coherent-noise bend; neutral at 1.0.
    pub bend: f32,
    pub color: LinearRgba,
    /// Scratch path, exactly [`SEGMENT_COUNT`] points, reused across frames.
    pub points: Vec<Vec3>,
}

impl Ribbon {
    pub fn new(index: usize, total: usize, color: LinearRgba, rng: &mut fastrand::Rng) -> Self {
        Self {
            direction: base_direction(index, total),
            noise_offset: Vec3::new(
                rng.f32() * 100.0,
                rng.f32() * 100.0,
                rng.f32() * 100.0,
            ),
            flow_speed: 0.5 + rng.f32(),
            rotation_speed: 0.3 + rng.f32() * 0.7,
            bend: 0.7 + rng.f32() * 0.6,
            color,
            points: vec![Vec3::ZERO; SEGMENT_COUNT],
        }
    }

    /// Resample the whole path at time `t`, anchored to `center`.
    ///
    /// Every perturbation term scales with the radial distance `d` or a power
    /// of the arc parameter `u`, so point 0 lands on `center` exactly.
    pub fn sample_path(&mut self, t: f32, center: Vec3, noise: &NoiseField) {
        // Slow twist of the base direction about Z.
        let twist = t * self.rotation_speed * 0.5;
        let (ts, tc) = twist.sin_cos();
        let dir = Vec3::new(
            self.direction.x * tc - self.direction.y * ts,
            self.direction.y * tc + self.direction.x * ts,
            self.direction.z,
        );

        let flow_t = t * self.flow_speed;
        let rot_phase = t * self.rotation_speed;

        for (i, point) in self.points.iter_mut().enumerate() {
            let u = i as f32 / (SEGMENT_COUNT - 1) as f32;
            let d = u * RIBBON_REACH;
            let mut p = dir * d;

            // Coherent bend, growing with distance from the center.
            let bend = noise.sample(self.noise_offset + p * 0.3);
            p += bend * (d * 2.5 * self.bend);

            // Sinusoidal wave, phased per axis by the noise offset.
            p.x += (flow_t * 1.5 + self.noise_offset.x).sin() * d * 0.8;
            p.y += (flow_t * 1.2 + self.noise_offset.y).sin() * d * 0.8;
            p.z += (flow_t * 1.8 + self.noise_offset.z).sin() * d * 0.4;

            // Rotational sweep along the arc.
            let sweep = rot_phase + u * PI;
            p.x += sweep.cos() * d * 0.3;
            p.y += sweep.sin() * d * 0.3;

            // Small-scale wobble, strongest at the tip.
            let wobble = noise.sample(self.noise_offset + Vec3::splat(u * 3.0 + flow_t));
            p += wobble * (u * u * 0.8);

            *point = center + p;
        }
    }
}

/// All ribbons for the current settings, plus the injected noise field.
#[derive(Resource)]
pub struct RibbonSet {
    pub ribbons: Vec<Ribbon>,
    pub noise: NoiseField,
    /// Palette the current ribbons were built with.
    pub palette: Palette,
}

impl Default for RibbonSet {
    fn default() -> Self {
        // Built empty; the sync system populates it from settings.
        Self {
            ribbons: Vec::new(),
            noise: NoiseField::default(),
            palette: Palette::default(),
        }
    }
}

impl RibbonSet {
    /// Rebuild all ribbons from settings using the global RNG.
    pub fn rebuild(&mut self, settings: &Settings) {
        let mut rng = fastrand::Rng::new();
        self.rebuild_with_rng(settings, &mut rng);
    }

    /// Rebuild with a caller-supplied RNG, for deterministic tests.
    pub fn rebuild_with_rng(&mut self, settings: &Settings, rng: &mut fastrand::Rng) {
        let n = settings.stream_count.max(1);
        self.ribbons = (0..n)
            .map(|i| Ribbon::new(i, n, settings.palette.color(i), rng))
            .collect();
        self.palette = settings.palette;
    }

    /// Resample every ribbon's path at time `t`, anchored to `center`.
    pub fn sample_paths(&mut self, t: f32, center: Vec3) {
        for ribbon in &mut self.ribbons {
            ribbon.sample_path(t, center, &self.noise);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ribbon(index: usize, total: usize) -> Ribbon {
        let mut rng = fastrand::Rng::with_seed(99);
        Ribbon::new(index, total, LinearRgba::WHITE, &mut rng)
    }

    #[test]
    fn path_has_exactly_segment_count_points() {
        let mut ribbon = test_ribbon(3, 12);
        let noise = NoiseField::new(1);
        ribbon.sample_path(2.5, Vec3::new(1.0, -2.0, 0.5), &noise);
        assert_eq!(ribbon.points.len(), SEGMENT_COUNT);
    }

    #[test]
    fn first_point_equals_center_exactly() {
        let mut ribbon = test_ribbon(0, 8);
        let noise = NoiseField::new(7);
        let center = Vec3::new(3.25, -1.5, 0.75);
        for i in 0..20 {
            ribbon.sample_path(i as f32 * 0.9, center, &noise);
            assert_eq!(ribbon.points[0], center);
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        let noise = NoiseField::new(3);
        let mut a = test_ribbon(2, 10);
        let mut b = test_ribbon(2, 10);
        a.sample_path(4.0, Vec3::ONE, &noise);
        b.sample_path(4.0, Vec3::ONE, &noise);
        assert_eq!(a.points, b.points);
    }

    #[test]
    fn base_directions_are_unit_length() {
        let n = 12;
        for i in 0..n {
            let dir = base_direction(i, n);
            assert!((dir.length() - 1.0).abs() < 1e-5, "index {i}");
        }
    }

    #[test]
    fn base_directions_cover_both_hemispheres() {
        let n = 16;
        let dirs: Vec<Vec3> = (0..n).map(|i| base_direction(i, n)).collect();
        assert!(dirs.iter().any(|d| d.z > 0.5));
        assert!(dirs.iter().any(|d| d.z < -0.5));
    }

    #[test]
    fn vertex_color_fades_outward_and_overbrightens_center() {
        let base = LinearRgba::new(0.5, 0.25, 1.0, 1.0);
        let center = vertex_color(base, 0.0);
        assert_eq!(center.red, 2.0);
        let tip = vertex_color(base, 1.0);
        assert_eq!(tip.red, 0.0);
        let mut prev = center.red;
        for i in 1..=10 {
            let c = vertex_color(base, i as f32 / 10.0);
            assert!(c.red <= prev);
            prev = c.red;
        }
    }

    #[test]
    fn rebuild_matches_stream_count_and_palette() {
        let mut settings = Settings::default();
        settings.set_stream_count(5);
        settings.set_palette(Palette::Intense);

        let mut set = RibbonSet::default();
        let mut rng = fastrand::Rng::with_seed(13);
        set.rebuild_with_rng(&settings, &mut rng);

        assert_eq!(set.ribbons.len(), 5);
        assert_eq!(set.palette, Palette::Intense);
        let colors = Palette::Intense.colors();
        for (i, ribbon) in set.ribbons.iter().enumerate() {
            assert_eq!(ribbon.color, colors[i % 6]);
        }
    }
}
