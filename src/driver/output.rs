//! Values handed to the display layer

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Language, Tick};
use crate::driver::history::{History, HistoryEntry};
use crate::simulation::{HormoneState, Stimulus};

/// State of the session after a tick or command
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: Tick,
    pub stimulus: Stimulus,
    pub running: bool,
    pub state: HormoneState,
    /// Empty until the first tick after start or reset
    pub report: String,
}

impl Snapshot {
    /// Status panel text, levels at two decimals
    pub fn to_text(&self, language: Language) -> String {
        let labels = match language {
            Language::English => ["Stimulus", "Time", "Upstream", "Intermediate", "Effector"],
            Language::Chinese => ["当前外界刺激", "时间", "下丘脑激素水平", "垂体激素水平", "靶腺激素水平"],
        };
        format!(
            "{}: {} | {}: {}s | {}: {:.2} | {}: {:.2} | {}: {:.2}",
            labels[0],
            self.stimulus.label(language),
            labels[1],
            self.tick,
            labels[2],
            self.state.upstream(),
            labels[3],
            self.state.intermediate(),
            labels[4],
            self.state.effector(),
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Range and mean of one level over a run
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl LevelStats {
    fn from_values(values: impl Iterator<Item = f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;
        for value in values {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            count += 1;
        }
        if count == 0 {
            return Self { min: 0.0, max: 0.0, mean: 0.0 };
        }
        Self {
            min,
            max,
            mean: sum / count as f64,
        }
    }
}

/// Aggregate view of a whole history
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub ticks: Tick,
    pub stimulus: Stimulus,
    pub final_state: HormoneState,
    pub upstream: LevelStats,
    pub intermediate: LevelStats,
    pub effector: LevelStats,
    pub report: String,
    pub history: Vec<HistoryEntry>,
}

impl RunSummary {
    pub fn new(history: &History, stimulus: Stimulus, report: &str) -> Self {
        let latest = history.latest();
        Self {
            ticks: latest.tick,
            stimulus,
            final_state: latest.state,
            upstream: LevelStats::from_values(history.iter().map(|e| e.state.upstream())),
            intermediate: LevelStats::from_values(history.iter().map(|e| e.state.intermediate())),
            effector: LevelStats::from_values(history.iter().map(|e| e.state.effector())),
            report: report.to_string(),
            history: history.entries().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "Simulated {} ticks under {} stimulus\nFinal: {}\nEffector range {:.2}..{:.2} (mean {:.2})",
            self.ticks,
            self.stimulus,
            self.final_state,
            self.effector.min,
            self.effector.max,
            self.effector.mean,
        )
    }
}
