//! Endocrine Loop - three-tier hormone feedback simulation
//!
//! `simulation::step` advances the upstream → intermediate → effector loop by
//! one tick and `report::generate` describes the result. The `driver` module
//! wraps both in a paced, controllable session.

pub mod core;
pub mod driver;
pub mod report;
pub mod simulation;

pub use crate::core::config::EngineConfig;
pub use crate::core::error::{EngineError, Result};
pub use crate::core::types::{Language, Tick};
pub use driver::{Command, DisplaySink, History, HistoryEntry, RunSummary, Session, Snapshot};
pub use report::{generate, ReportGenerator};
pub use simulation::{step, FixedNoise, HormoneState, NoiseSource, RngNoise, Stimulus};
