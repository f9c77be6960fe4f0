//! Closed-form motion fields for the star and its sparks.
//!
//! Both fields are pure functions of `(time, phase_seed, rate params)` — no
//! hidden state, so identical inputs always yield bit-identical positions.
//! Positions are re-evaluated from scratch every frame rather than integrated.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::constants::{
    MAX_ANGLES, SCENE_SCALE, SEED_SPAN, SPARK_FIELD_RANGE, SPARK_FIELD_SPEED, STAR_FIELD_TURNS,
};

/// Position of the star at simulation time `t`.
///
/// `phase_seed` offsets the shared field so distinct instances trace distinct
/// trajectories; `rot_speed` is the star's per-instance rate multiplier and
/// `speed` the global speed setting.
pub fn star_position(t: f32, phase_seed: f32, rot_speed: f32, speed: f32) -> Vec3 {
    let rate = TAU * STAR_FIELD_TURNS / MAX_ANGLES * rot_speed * speed;
    let angle = t * rate;
    let cf = harmonic_radius(angle) + 0.75;
    let phase = TAU * phase_seed / SEED_SPAN;

    let x = 250.0 * cf * (11.0 * (phase + 3.0 * angle)).cos();
    let y = 250.0 * cf * (12.0 * (phase + 4.0 * angle)).sin();
    let z = 250.0 * (23.0 * (phase + 4.0 * angle)).cos();

    precess(x, y, z, angle, phase_seed) * SCENE_SCALE
}

/// Offset of a spark from the star at simulation time `t`.
///
/// The spark field runs at a fixed rate, sits on a larger, slower-varying
/// radius factor (`+2.0` instead of `+0.75`), and drives the z axis at
/// harmonic 12 instead of 4. The asymmetry against the star field is
/// deliberate and load-bearing for the look.
pub fn spark_offset(t: f32, phase_seed: f32, speed: f32) -> Vec3 {
    let rate = TAU * SPARK_FIELD_SPEED / MAX_ANGLES * speed;
    let angle = t * rate;
    let cf = harmonic_radius(angle) + 2.0;
    let phase = TAU * phase_seed / SEED_SPAN;

    let x = SPARK_FIELD_RANGE * 10.0 * cf * (11.0 * (phase + 3.0 * angle)).cos();
    let y = SPARK_FIELD_RANGE * 10.0 * cf * (12.0 * (phase + 4.0 * angle)).sin();
    let z = SPARK_FIELD_RANGE * 10.0 * (23.0 * (phase + 12.0 * angle)).cos();

    precess(x, y, z, angle, phase_seed) * SCENE_SCALE
}

/// Normalized sum of three cosine harmonics (7, 3, 13) of `angle`.
/// Callers add a per-field offset to shift it into a positive range.
fn harmonic_radius(angle: f32) -> f32 {
    ((7.0 * angle).cos() + (3.0 * angle).cos() + (13.0 * angle).cos()) / 6.0
}

/// The tumbling/precessing stage shared by both fields.
///
/// Two successive plane rotations: the first angle rotates x-y, x-z and y-z
/// in sequence (reusing the same sine/cosine for all three, with a +50 z
/// offset after the third), then a second, faster angle rotates x-y once
/// more. Not a single 3D rotation matrix — the stage order is part of the
/// trajectory.
fn precess(x: f32, y: f32, z: f32, angle: f32, phase_seed: f32) -> Vec3 {
    let rot = angle * 0.501 + 5.01 * phase_seed / SEED_SPAN;
    let (sr, cr) = rot.sin_cos();

    let x1 = x * cr - y * sr;
    let y1 = y * cr + x * sr;

    let x2 = x1 * cr - z * sr;
    let z2 = z * cr + x1 * sr;

    let y3 = y1 * cr - z2 * sr;
    let z3 = z2 * cr + y1 * sr + 50.0;

    let rot = angle * 2.501 + 85.01 * phase_seed / SEED_SPAN;
    let (sr, cr) = rot.sin_cos();

    Vec3::new(x2 * cr - y3 * sr, y3 * cr + x2 * sr, z3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_field_is_pure() {
        for i in 0..50 {
            let t = i as f32 * 0.37;
            let a = star_position(t, 4.2, 0.63, 1.0);
            let b = star_position(t, 4.2, 0.63, 1.0);
            assert_eq!(a, b, "t = {t}");
        }
    }

    #[test]
    fn spark_field_is_pure() {
        for i in 0..50 {
            let t = i as f32 * 1.91;
            let a = spark_offset(t, 225.0, 1.5);
            let b = spark_offset(t, 225.0, 1.5);
            assert_eq!(a, b, "t = {t}");
        }
    }

    #[test]
    fn distinct_seeds_diverge() {
        let a = spark_offset(10.0, 225.0, 1.0);
        let b = spark_offset(10.0, 450.0, 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn star_at_zero_time_matches_hand_computation() {
        // angle = 0: cf = 3/6 + 0.75, base point depends only on the phase.
        let phase_seed = 900.0;
        let phase = TAU * phase_seed / SEED_SPAN;
        let cf = 0.5 + 0.75;
        let x = 250.0 * cf * (11.0 * (phase + 0.0)).cos();
        let y = 250.0 * cf * (12.0 * phase).sin();
        let z = 250.0 * (23.0 * phase).cos();
        let expected = precess(x, y, z, 0.0, phase_seed) * SCENE_SCALE;
        assert_eq!(star_position(0.0, phase_seed, 0.7, 1.0), expected);
    }

    #[test]
    fn fields_stay_finite_over_long_spans() {
        for i in 0..1000 {
            let t = i as f32 * 100.0;
            assert!(star_position(t, 7.7, 0.5, 2.5).is_finite());
            assert!(spark_offset(t, 1350.0, 2.5).is_finite());
        }
    }
}
