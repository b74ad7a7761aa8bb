//! Qualitative classification of a tick
//!
//! Converts the stimulus and the effector level into the two categories the
//! report is built from.

use serde::{Deserialize, Serialize};

use crate::simulation::constants::{DEPRESSED_THRESHOLD, ELEVATED_THRESHOLD};
use crate::simulation::{HormoneState, Stimulus};

/// Direction the stimulus drives the axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    /// Cold: upstream and intermediate activity rise, effector output follows
    Rising,
    /// Hot: upstream activity is suppressed, effector output falls
    Falling,
    /// Normal: levels hover around homeostasis
    Steady,
}

impl Trend {
    pub fn from_stimulus(stimulus: Stimulus) -> Self {
        match stimulus {
            Stimulus::Cold => Self::Rising,
            Stimulus::Hot => Self::Falling,
            Stimulus::Normal => Self::Steady,
        }
    }
}

/// What the effector level is doing to the tiers above it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackPhase {
    /// Effector above 55: inhibits upstream and intermediate secretion
    Inhibitory,
    /// Effector below 45: promotes upstream secretion
    Stimulatory,
    /// Effector within 45..=55
    Balanced,
}

impl FeedbackPhase {
    pub fn from_effector(effector: f64) -> Self {
        if effector > ELEVATED_THRESHOLD {
            Self::Inhibitory
        } else if effector < DEPRESSED_THRESHOLD {
            Self::Stimulatory
        } else {
            Self::Balanced
        }
    }
}

/// Both halves of a report, before wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub trend: Trend,
    pub feedback: FeedbackPhase,
}

impl Diagnosis {
    pub fn new(stimulus: Stimulus, state: &HormoneState) -> Self {
        Self {
            trend: Trend::from_stimulus(stimulus),
            feedback: FeedbackPhase::from_effector(state.effector()),
        }
    }
}
