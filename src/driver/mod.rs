//! Simulation driver
//!
//! Plain composition around the engine: a session holding history and
//! selections, plus a timer loop that feeds it.

pub mod history;
pub mod output;
pub mod scheduler;
pub mod session;

pub use history::{History, HistoryEntry};
pub use output::{LevelStats, RunSummary, Snapshot};
pub use scheduler::{run, Command, DisplaySink};
pub use session::Session;
