//! Simulation engine - the per-tick state transition
//!
//! `step` is pure apart from the injected noise draw. History, pacing and
//! stimulus selection belong to the driver.

pub mod constants;
pub mod noise;
pub mod state;
pub mod step;

pub use noise::{FixedNoise, NoiseSource, RngNoise};
pub use state::{HormoneState, Stimulus};
pub use step::step;
