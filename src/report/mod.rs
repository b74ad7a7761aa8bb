//! Rule-based diagnostic reports
//!
//! A report is a trend clause chosen by the stimulus followed by a feedback
//! clause chosen by the effector level. It is recomputed every tick.

pub mod diagnosis;
pub mod generator;
pub mod wording;

pub use diagnosis::{Diagnosis, FeedbackPhase, Trend};
pub use generator::{generate, ReportGenerator};
