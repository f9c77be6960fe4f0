//! Fixed-step simulation clock.

use bevy::prelude::*;

use crate::constants::{EMISSION_PERIOD, FIXED_DT};

/// Monotonic simulation time, advanced by exactly [`FIXED_DT`] per rendered
/// frame. Deliberately not wall-clock-accurate: a slow frame slows the
/// visualization down instead of skipping ahead.
///
/// Emission runs on its own accumulator so the spawn rate stays pinned to
/// 60 Hz regardless of the frame step.
#[derive(Resource, Debug, Default)]
pub struct SimClock {
    /// Simulation time in seconds. Never resets; accumulated in f64 so the
    /// step survives hours of simulated time, cast to f32 at field evaluation.
    pub t: f64,
    emission_accum: f32,
}

impl SimClock {
    /// Step the clock by one frame.
    pub fn advance(&mut self) {
        self.t += f64::from(FIXED_DT);
        self.emission_accum += FIXED_DT;
    }

    /// Simulation time at field-evaluation precision.
    pub fn time(&self) -> f32 {
        self.t as f32
    }

    /// Drain whole emission ticks accumulated since the last call.
    pub fn take_emission_ticks(&mut self) -> u32 {
        let mut ticks = 0;
        while self.emission_accum >= EMISSION_PERIOD {
            self.emission_accum -= EMISSION_PERIOD;
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_is_monotonic() {
        let mut clock = SimClock::default();
        let mut prev = clock.t;
        for _ in 0..500 {
            clock.advance();
            assert!(clock.t > prev);
            prev = clock.t;
        }
    }

    #[test]
    fn emission_rate_tracks_sixty_hz() {
        // 0.016 < 1/60, so single frames usually yield one tick but the
        // accumulator must periodically skip one to stay at 60 Hz overall.
        let mut clock = SimClock::default();
        let mut ticks = 0;
        for _ in 0..1000 {
            clock.advance();
            ticks += clock.take_emission_ticks();
        }
        let expected = (1000.0 * FIXED_DT / EMISSION_PERIOD) as i32;
        assert!((ticks as i32 - expected).abs() <= 1, "got {ticks} ticks");
    }

    #[test]
    fn step_precision_survives_long_runs() {
        // At t ~ 100k seconds an f32 accumulator would round the step away.
        let mut clock = SimClock::default();
        clock.t = 100_000.0;
        let before = clock.t;
        clock.advance();
        assert!((clock.t - before - f64::from(FIXED_DT)).abs() < 1e-9);
    }

    #[test]
    fn ticks_drain_completely() {
        let mut clock = SimClock::default();
        for _ in 0..10 {
            clock.advance();
        }
        assert!(clock.take_emission_ticks() > 0);
        assert_eq!(clock.take_emission_ticks(), 0);
    }
}
