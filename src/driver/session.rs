//! Driver-side session state
//!
//! Owns everything the engine deliberately does not: history, the current
//! report, the running flag, the selected stimulus and the noise source.

use crate::core::config::EngineConfig;
use crate::driver::history::{History, HistoryEntry};
use crate::driver::output::{RunSummary, Snapshot};
use crate::report::ReportGenerator;
use crate::simulation::{self, NoiseSource, RngNoise, Stimulus};

pub type BoxedNoise = Box<dyn NoiseSource + Send>;

pub struct Session {
    history: History,
    report: String,
    running: bool,
    stimulus: Stimulus,
    generator: ReportGenerator,
    noise: BoxedNoise,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("tick", &self.history.latest().tick)
            .field("running", &self.running)
            .field("stimulus", &self.stimulus)
            .field("language", &self.generator.language())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Session with noise seeded from the config (or OS entropy)
    pub fn new(config: &EngineConfig) -> Self {
        let noise: BoxedNoise = match config.seed {
            Some(seed) => Box::new(RngNoise::seeded(seed)),
            None => Box::new(RngNoise::from_entropy()),
        };
        Self::from_boxed(config, noise)
    }

    pub fn with_noise(config: &EngineConfig, noise: impl NoiseSource + Send + 'static) -> Self {
        Self::from_boxed(config, Box::new(noise))
    }

    fn from_boxed(config: &EngineConfig, noise: BoxedNoise) -> Self {
        Self {
            history: History::new(),
            report: String::new(),
            running: config.start_running,
            stimulus: config.stimulus,
            generator: ReportGenerator::new(config.language),
            noise,
        }
    }

    pub fn stimulus(&self) -> Stimulus {
        self.stimulus
    }

    /// Takes effect on the next tick
    pub fn set_stimulus(&mut self, stimulus: Stimulus) {
        if stimulus != self.stimulus {
            tracing::info!("Stimulus changed: {} -> {}", self.stimulus, stimulus);
        }
        self.stimulus = stimulus;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            tracing::info!("Simulation RUNNING at tick {}", self.history.latest().tick);
        }
        self.running = true;
    }

    pub fn pause(&mut self) {
        if self.running {
            tracing::info!("Simulation PAUSED at tick {}", self.history.latest().tick);
        }
        self.running = false;
    }

    /// Flip the running flag, returning the new value
    pub fn toggle_running(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
        self.running
    }

    /// Back to tick 0 with an empty report; always leaves the session paused
    pub fn reset(&mut self) {
        tracing::info!(
            "Simulation reset after {} ticks",
            self.history.latest().tick
        );
        self.running = false;
        self.history.reset();
        self.report.clear();
    }

    /// Run one tick regardless of the running flag
    pub fn advance(&mut self) -> &HistoryEntry {
        let stimulus = self.stimulus;
        let next = simulation::step(&self.history.latest().state, stimulus, &mut self.noise);
        self.report = self.generator.generate(stimulus, &next);

        let entry = self.history.push(next);
        tracing::debug!(tick = entry.tick, %stimulus, state = %entry.state, "tick");
        entry
    }

    /// Timer callback: ticks only while running
    pub fn on_timer(&mut self) -> Option<&HistoryEntry> {
        if self.running {
            Some(self.advance())
        } else {
            None
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn latest(&self) -> &HistoryEntry {
        self.history.latest()
    }

    pub fn report(&self) -> &str {
        &self.report
    }

    /// Report text for display, falling back to the waiting placeholder
    pub fn display_report(&self) -> &str {
        if self.report.is_empty() {
            self.generator.placeholder()
        } else {
            &self.report
        }
    }

    pub fn generator(&self) -> &ReportGenerator {
        &self.generator
    }

    pub fn snapshot(&self) -> Snapshot {
        let latest = self.history.latest();
        Snapshot {
            tick: latest.tick,
            stimulus: self.stimulus,
            running: self.running,
            state: latest.state,
            report: self.report.clone(),
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary::new(&self.history, self.stimulus, &self.report)
    }
}
