//! Shared constants for the star field simulation.
//!
//! The angular constants come from the original field tables: they only scale
//! angular rates, so no wraparound handling is needed anywhere.

/// Angular table size the per-second rotation rates are expressed against.
pub const MAX_ANGLES: f32 = 16384.0;

/// Domain of the per-stream phase seeds. Stream `i` of `n` gets
/// `SEED_SPAN * (i + 1) / n`.
pub const SEED_SPAN: f32 = 1800.0;

/// Maps raw field coordinates into scene units.
pub const SCENE_SCALE: f32 = 0.02;

/// Fixed simulation step per rendered frame, regardless of wall clock.
pub const FIXED_DT: f32 = 0.016;

/// Emission tick period. Decoupled from the frame step: at 0.016s per frame
/// the accumulator skips roughly one tick in 25.
pub const EMISSION_PERIOD: f32 = 1.0 / 60.0;

/// Seconds until a particle is fully faded (it stays in the buffer after).
pub const PARTICLE_LIFETIME: f32 = 3.0;

/// Initial speed of a freshly emitted particle, aimed at its spark.
pub const LAUNCH_SPEED: f32 = 0.15;

/// Attraction acceleration toward the spark, per second.
pub const ATTRACT_ACCEL: f32 = 0.02;

/// Below this distance to the spark, attraction is skipped entirely.
pub const MIN_ATTRACT_DIST: f32 = 0.1;

/// Multiplicative velocity drag applied once per frame.
pub const DRAG: f32 = 0.995;

/// Velocities are stored in per-60fps-frame units; integration rescales by
/// this so visual speed stays stable under a varying frame step.
pub const VELOCITY_FRAME_RATE: f32 = 60.0;

/// Color multiplier pushing faded colors past 1.0 for bloom pickup.
pub const OVERBRIGHT: f32 = 1.5;

/// Full revolutions per `MAX_ANGLES` units for the star's angular rate.
pub const STAR_FIELD_TURNS: f32 = 12.0;

/// Fixed angular rate of the spark field (no per-instance multiplier).
pub const SPARK_FIELD_SPEED: f32 = 12.0;

/// Radial extent multiplier of the spark field.
pub const SPARK_FIELD_RANGE: f32 = 1.0;
