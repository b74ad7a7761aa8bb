//! Hormone levels and the external stimulus

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::{COLD_BIAS, HOT_BIAS, LEVEL_MAX, LEVEL_MIN, SET_POINT};
use crate::core::error::{EngineError, Result};
use crate::core::types::Language;

/// Levels of the three tiers at one tick.
///
/// Every value is within `[0, 100]`. Instances come from [`HormoneState::INITIAL`],
/// from [`super::step`], or from the checked [`HormoneState::new`]; fields are
/// private so nothing can mutate a produced state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HormoneState {
    upstream: f64,
    intermediate: f64,
    effector: f64,
}

impl HormoneState {
    /// Tick-0 state: all levels at the set point
    pub const INITIAL: Self = Self {
        upstream: SET_POINT,
        intermediate: SET_POINT,
        effector: SET_POINT,
    };

    /// Build a state from explicit levels, rejecting anything outside 0..=100
    pub fn new(upstream: f64, intermediate: f64, effector: f64) -> Result<Self> {
        Ok(Self {
            upstream: checked_level("upstream", upstream)?,
            intermediate: checked_level("intermediate", intermediate)?,
            effector: checked_level("effector", effector)?,
        })
    }

    /// Internal constructor for values already clamped by the stepper
    pub(crate) fn from_clamped(upstream: f64, intermediate: f64, effector: f64) -> Self {
        debug_assert!(in_range(upstream) && in_range(intermediate) && in_range(effector));
        Self {
            upstream,
            intermediate,
            effector,
        }
    }

    pub fn upstream(&self) -> f64 {
        self.upstream
    }

    pub fn intermediate(&self) -> f64 {
        self.intermediate
    }

    pub fn effector(&self) -> f64 {
        self.effector
    }

    pub fn levels(&self) -> [f64; 3] {
        [self.upstream, self.intermediate, self.effector]
    }
}

impl Default for HormoneState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for HormoneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "upstream {:.2} | intermediate {:.2} | effector {:.2}",
            self.upstream, self.intermediate, self.effector
        )
    }
}

// Deserialization goes through the checked constructor.
impl<'de> Deserialize<'de> for HormoneState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawLevels {
            upstream: f64,
            intermediate: f64,
            effector: f64,
        }

        let raw = RawLevels::deserialize(deserializer)?;
        Self::new(raw.upstream, raw.intermediate, raw.effector).map_err(serde::de::Error::custom)
    }
}

fn in_range(value: f64) -> bool {
    (LEVEL_MIN..=LEVEL_MAX).contains(&value)
}

fn checked_level(field: &'static str, value: f64) -> Result<f64> {
    if in_range(value) {
        Ok(value)
    } else {
        Err(EngineError::StateOutOfRange { field, value })
    }
}

/// External perturbation applied to the upstream regulator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stimulus {
    #[default]
    #[serde(alias = "正常")]
    Normal,
    #[serde(alias = "寒冷")]
    Cold,
    #[serde(alias = "炎热")]
    Hot,
}

impl Stimulus {
    pub const ALL: [Stimulus; 3] = [Self::Normal, Self::Cold, Self::Hot];

    /// Additive push on the upstream regulator per tick
    pub fn bias(&self) -> f64 {
        match self {
            Self::Normal => 0.0,
            Self::Cold => COLD_BIAS,
            Self::Hot => HOT_BIAS,
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::English, Self::Normal) => "Normal",
            (Language::English, Self::Cold) => "Cold",
            (Language::English, Self::Hot) => "Hot",
            (Language::Chinese, Self::Normal) => "正常",
            (Language::Chinese, Self::Cold) => "寒冷",
            (Language::Chinese, Self::Hot) => "炎热",
        }
    }
}

impl fmt::Display for Stimulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Language::English))
    }
}

impl FromStr for Stimulus {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "normal" | "正常" => Ok(Self::Normal),
            "cold" | "寒冷" => Ok(Self::Cold),
            "hot" | "炎热" => Ok(Self::Hot),
            _ => Err(EngineError::InvalidStimulus(trimmed.to_string())),
        }
    }
}
