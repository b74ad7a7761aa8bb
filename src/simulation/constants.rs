//! Model constants - all coefficients of the feedback loop in one place
//!
//! Levels are dimensionless on a 0-100 scale. None of these are configurable.

// Level range
pub const LEVEL_MIN: f64 = 0.0;
pub const LEVEL_MAX: f64 = 100.0;

/// Steady-state midpoint; every level starts here at tick 0
pub const SET_POINT: f64 = 50.0;

// Stimulus bias applied to the upstream regulator each tick
pub const COLD_BIAS: f64 = 5.0;
pub const HOT_BIAS: f64 = -5.0;

/// Half-width of the uniform noise on the upstream regulator
pub const NOISE_AMPLITUDE: f64 = 0.5;

/// Fraction of the upstream/intermediate gap closed per tick
pub const INTERMEDIATE_TRACKING_RATE: f64 = 0.2;

/// Fraction of the intermediate/effector gap closed per tick
pub const EFFECTOR_TRACKING_RATE: f64 = 0.15;

/// Negative feedback gain pulling the effector back to the set point.
/// Sum of a 0.10 restoring term and a 0.05 suppression term.
pub const FEEDBACK_GAIN: f64 = 0.15;

// Report dead-band around the set point (inclusive on both ends)
pub const ELEVATED_THRESHOLD: f64 = 55.0;
pub const DEPRESSED_THRESHOLD: f64 = 45.0;
