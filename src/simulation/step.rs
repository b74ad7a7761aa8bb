//! One tick of the three-tier feedback loop
//!
//! Each formula reads the previous state. The only exception is the
//! intermediate tier, which tracks the freshly updated upstream level.

use super::constants::{
    EFFECTOR_TRACKING_RATE, FEEDBACK_GAIN, INTERMEDIATE_TRACKING_RATE, LEVEL_MAX, LEVEL_MIN,
    NOISE_AMPLITUDE, SET_POINT,
};
use super::noise::NoiseSource;
use super::state::{HormoneState, Stimulus};

/// Advance the loop by exactly one tick, consuming one noise draw
pub fn step<N: NoiseSource + ?Sized>(
    previous: &HormoneState,
    stimulus: Stimulus,
    noise: &mut N,
) -> HormoneState {
    let draw = bounded_draw(noise.sample());
    let upstream = clamp_level(previous.upstream() + stimulus.bias() + draw);

    let intermediate = clamp_level(
        previous.intermediate() + (upstream - previous.intermediate()) * INTERMEDIATE_TRACKING_RATE,
    );

    let correction = feedback(previous.effector());
    let effector = clamp_level(
        previous.effector() + (intermediate - previous.effector()) * EFFECTOR_TRACKING_RATE + correction,
    );

    HormoneState::from_clamped(upstream, intermediate, effector)
}

/// Negative feedback on the effector, proportional to its distance from the set point
pub fn feedback(effector: f64) -> f64 {
    (SET_POINT - effector) * FEEDBACK_GAIN
}

/// Noise sources are caller-supplied; NaN counts as no noise and anything
/// else is held to the noise amplitude.
fn bounded_draw(draw: f64) -> f64 {
    if draw.is_nan() {
        0.0
    } else {
        draw.clamp(-NOISE_AMPLITUDE, NOISE_AMPLITUDE)
    }
}

fn clamp_level(value: f64) -> f64 {
    value.clamp(LEVEL_MIN, LEVEL_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::noise::FixedNoise;

    fn state(u: f64, i: f64, e: f64) -> HormoneState {
        HormoneState::new(u, i, e).unwrap()
    }

    #[test]
    fn test_midpoint_is_fixed_point_without_noise() {
        let next = step(&HormoneState::INITIAL, Stimulus::Normal, &mut FixedNoise::ZERO);
        assert_eq!(next, HormoneState::INITIAL);
    }

    #[test]
    fn test_cold_pushes_upstream_up() {
        let next = step(&HormoneState::INITIAL, Stimulus::Cold, &mut FixedNoise::ZERO);
        assert_eq!(next.upstream(), 55.0);
        assert_eq!(next.intermediate(), 51.0);
        assert!((next.effector() - 50.15).abs() < 1e-12);
    }

    #[test]
    fn test_hot_pushes_upstream_down() {
        let next = step(&HormoneState::INITIAL, Stimulus::Hot, &mut FixedNoise::ZERO);
        assert_eq!(next.upstream(), 45.0);
        assert_eq!(next.intermediate(), 49.0);
        assert!((next.effector() - 49.85).abs() < 1e-12);
    }

    #[test]
    fn test_intermediate_uses_updated_upstream() {
        // With the previous upstream (10) the intermediate would fall; with
        // the updated one (15.5) it rises.
        let prev = state(10.0, 12.0, 50.0);
        let next = step(&prev, Stimulus::Cold, &mut FixedNoise::MAX);
        assert_eq!(next.upstream(), 15.5);
        assert!((next.intermediate() - 12.7).abs() < 1e-12);
    }

    #[test]
    fn test_effector_uses_previous_effector_for_feedback() {
        let prev = state(50.0, 50.0, 80.0);
        let next = step(&prev, Stimulus::Normal, &mut FixedNoise::ZERO);
        // 80 + (50 - 80) * 0.15 + (50 - 80) * 0.15
        assert!((next.effector() - 71.0).abs() < 1e-12);
    }

    #[test]
    fn test_feedback_matches_two_term_form() {
        for effector in [0.0, 12.5, 45.0, 50.0, 55.0, 73.2, 100.0] {
            let two_term = (50.0 - effector) * 0.1 - (effector - 50.0) * 0.05;
            assert!((feedback(effector) - two_term).abs() < 1e-12);
        }
    }

    #[test]
    fn test_clamps_at_ceiling() {
        let top = state(100.0, 100.0, 100.0);
        let next = step(&top, Stimulus::Cold, &mut FixedNoise::MAX);
        assert_eq!(next.upstream(), 100.0);
        assert_eq!(next.intermediate(), 100.0);
        assert_eq!(next.effector(), 92.5);
    }

    #[test]
    fn test_clamps_at_floor() {
        let bottom = state(0.0, 0.0, 0.0);
        let next = step(&bottom, Stimulus::Hot, &mut FixedNoise::MIN);
        assert_eq!(next.upstream(), 0.0);
        assert_eq!(next.intermediate(), 0.0);
        assert_eq!(next.effector(), 7.5);
    }

    struct ConstantNoise(f64);

    impl NoiseSource for ConstantNoise {
        fn sample(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_nan_draw_counts_as_no_noise() {
        let next = step(&HormoneState::INITIAL, Stimulus::Normal, &mut ConstantNoise(f64::NAN));
        assert_eq!(next, HormoneState::INITIAL);

        let cold = step(&HormoneState::INITIAL, Stimulus::Cold, &mut ConstantNoise(f64::NAN));
        assert_eq!(cold.upstream(), 55.0);
        assert!(cold.levels().iter().all(|v| (0.0..=100.0).contains(v)));
    }

    #[test]
    fn test_oversized_draw_is_held_to_amplitude() {
        let prev = state(50.0, 50.0, 50.0);
        let high = step(&prev, Stimulus::Normal, &mut ConstantNoise(7.0));
        assert_eq!(high, step(&prev, Stimulus::Normal, &mut FixedNoise::MAX));
        assert_eq!(high.upstream(), 50.5);

        let low = step(&prev, Stimulus::Hot, &mut ConstantNoise(f64::NEG_INFINITY));
        assert_eq!(low, step(&prev, Stimulus::Hot, &mut FixedNoise::MIN));
        assert_eq!(low.upstream(), 44.5);
    }

    #[test]
    fn test_consumes_exactly_one_draw() {
        struct Counting(u32);
        impl NoiseSource for Counting {
            fn sample(&mut self) -> f64 {
                self.0 += 1;
                0.0
            }
        }

        let mut counter = Counting(0);
        let mut current = HormoneState::INITIAL;
        for _ in 0..5 {
            current = step(&current, Stimulus::Cold, &mut counter);
        }
        assert_eq!(counter.0, 5);
    }
}
